//! Report layout.
//!
//! Sections, in order: title, generation date, input values, prediction
//! results, reference ranges, notice. Only the first four depend on input.

use chrono::NaiveDateTime;
use ldl_model::{Category, LipidPanel, PanelField, PredictionResult, UNIT};

use crate::document::{
    Alignment, DocumentBuilder, DocumentProperties, HeadingLevel, ReportDocument, Spacing,
    TextRun,
};

pub const REPORT_TITLE: &str = "LDL-C Prediction Report";
pub const REPORT_CREATOR: &str = "LDL-C Predictor";

const INPUT_HEADING: &str = "Input Blood Test Values";
const RESULTS_HEADING: &str = "Prediction Results";
const RANGES_HEADING: &str = "LDL-C Reference Ranges";
const NOTICE_HEADING: &str = "Important Notice";

const DATE_COLOR: &str = "666666";
const SMALL_TEXT: u32 = 20;
const RESULT_TEXT: u32 = 28;

pub const DISCLAIMER: [&str; 2] = [
    "This report is for informational and educational purposes only. The LDL-C prediction is \
     an estimate based on the Friedewald equation and should not be used as a substitute for \
     professional medical advice, diagnosis, or treatment.",
    "Always consult with a qualified healthcare provider regarding any questions you may have \
     about your cholesterol levels or cardiovascular health.",
];

/// Human-readable timestamp, e.g. `October 19, 2026, 02:30 PM`.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%B %-d, %Y, %I:%M %p").to_string()
}

/// A value followed by the unit, e.g. `200 mg/dL` or `200.5 mg/dL`.
pub fn format_value(value: f64) -> String {
    format!("{value} {UNIT}")
}

/// Build the report document. Pure string interpolation of known values.
pub fn assemble(
    panel: &LipidPanel,
    result: &PredictionResult,
    category: Category,
    generated_at: NaiveDateTime,
) -> ReportDocument {
    let properties = DocumentProperties {
        title: REPORT_TITLE.to_string(),
        creator: REPORT_CREATOR.to_string(),
        created: generated_at,
    };
    let color = category.report_color();

    let mut builder = DocumentBuilder::new(properties)
        .heading(
            HeadingLevel::H1,
            REPORT_TITLE,
            Alignment::Center,
            Spacing::after(400),
        )
        .paragraph(
            vec![
                TextRun::new(format!("Report Generated: {}", format_timestamp(generated_at)))
                    .size(SMALL_TEXT)
                    .color(DATE_COLOR),
            ],
            Alignment::Center,
            Spacing::after(400),
        )
        .heading(
            HeadingLevel::H2,
            INPUT_HEADING,
            Alignment::Default,
            Spacing::around(400, 200),
        );

    for (index, field) in PanelField::ALL.into_iter().enumerate() {
        let after = if index + 1 == PanelField::ALL.len() { 300 } else { 100 };
        builder = builder.labeled(
            format!("{}: ", field.label()),
            TextRun::new(format_value(panel.get(field))),
            Spacing::after(after),
        );
    }

    builder = builder
        .heading(
            HeadingLevel::H2,
            RESULTS_HEADING,
            Alignment::Default,
            Spacing::around(400, 200),
        )
        .labeled(
            "Predicted LDL-C Level: ",
            TextRun::new(format_value(result.value()))
                .bold()
                .size(RESULT_TEXT)
                .color(color),
            Spacing::after(100),
        )
        .labeled(
            "Category: ",
            TextRun::new(category.label()).bold().color(color),
            Spacing::after(300),
        )
        .heading(
            HeadingLevel::H2,
            RANGES_HEADING,
            Alignment::Default,
            Spacing::around(400, 200),
        );

    for band in Category::ALL {
        let after = if band == Category::VeryHigh { 400 } else { 100 };
        builder = builder.labeled(
            band.range_label(),
            TextRun::new(format!(" - {}", band.label())),
            Spacing::after(after),
        );
    }

    builder = builder.heading(
        HeadingLevel::H3,
        NOTICE_HEADING,
        Alignment::Default,
        Spacing::around(600, 200),
    );
    for paragraph in DISCLAIMER {
        builder = builder.paragraph(
            vec![TextRun::new(paragraph).italic().size(SMALL_TEXT)],
            Alignment::Default,
            Spacing::after(100),
        );
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::document::Block;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap()
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(at()), "October 19, 2026, 02:30 PM");
        let morning = NaiveDate::from_ymd_opt(2026, 3, 5)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .unwrap();
        assert_eq!(format_timestamp(morning), "March 5, 2026, 09:05 AM");
    }

    #[test]
    fn test_format_value_uses_shortest_form() {
        assert_eq!(format_value(200.0), "200 mg/dL");
        assert_eq!(format_value(200.5), "200.5 mg/dL");
        assert_eq!(format_value(-12.3), "-12.3 mg/dL");
    }

    #[test]
    fn test_result_runs_use_category_color() {
        let panel = LipidPanel::new(260.0, 40.0, 100.0).unwrap();
        let doc = assemble(
            &panel,
            &PredictionResult::Remote(200.0),
            Category::VeryHigh,
            at(),
        );
        let colored: Vec<_> = doc
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph { runs, .. } => Some(runs),
                Block::Heading { .. } => None,
            })
            .flatten()
            .filter(|run| run.color.as_deref() == Some("dc2626"))
            .map(|run| run.text.as_str())
            .collect();
        assert_eq!(colored, vec!["200 mg/dL", "Very High"]);
    }

    #[test]
    fn test_reference_rows_do_not_depend_on_result() {
        let panel = LipidPanel::new(150.0, 60.0, 50.0).unwrap();
        let low = assemble(&panel, &PredictionResult::Fallback(80.0), Category::Optimal, at());
        let high = assemble(&panel, &PredictionResult::Fallback(250.0), Category::VeryHigh, at());
        let tail = |doc: &ReportDocument| doc.blocks[doc.blocks.len() - 9..].to_vec();
        assert_eq!(tail(&low), tail(&high));
    }
}
