use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use ldl_cli::config::{AppConfig, ConfigOverrides};
use ldl_cli::workflow::{PredictOutcome, run_prediction};
use ldl_client::{RemoteClient, RemoteSettings};
use ldl_core::{OfflineBackend, RawInputs};
use tracing::{Instrument, info_span, warn};

use crate::cli::{PredictArgs, ServiceArgs};

fn load_config(
    service: &ServiceArgs,
    offline: bool,
    output_dir: Option<PathBuf>,
) -> Result<AppConfig> {
    let overrides = ConfigOverrides {
        endpoint: service.endpoint.clone(),
        offline,
        output_dir,
    };
    Ok(AppConfig::load(service.config.as_deref())?.with_overrides(&overrides))
}

pub async fn run_predict(args: &PredictArgs) -> Result<PredictOutcome> {
    let config = load_config(&args.service, args.offline, args.output_dir.clone())?;
    let span = info_span!("predict", endpoint = %config.remote.base_url);
    let raw = RawInputs::new(args.tc.as_str(), args.hdl.as_str(), args.tg.as_str());
    let report_dir = args.report.then_some(config.report.output_dir.as_path());
    let generated_at = Local::now().naive_local();

    let outcome = match RemoteClient::new(&config.remote) {
        Ok(client) => {
            run_prediction(&client, &raw, report_dir, generated_at)
                .instrument(span)
                .await?
        }
        Err(error) => {
            warn!(%error, "remote client unavailable, predicting offline");
            run_prediction(&OfflineBackend, &raw, report_dir, generated_at)
                .instrument(span)
                .await?
        }
    };
    Ok(outcome)
}

pub async fn run_status(args: &ServiceArgs) -> Result<(RemoteSettings, Result<String, String>)> {
    let config = load_config(args, false, None)?;
    let status = if config.remote.enabled {
        match RemoteClient::new(&config.remote) {
            Ok(client) => client.health().await.map_err(|e| e.to_string()),
            Err(error) => Err(error.to_string()),
        }
    } else {
        Err("remote prediction is disabled".to_string())
    };
    Ok((config.remote, status))
}
