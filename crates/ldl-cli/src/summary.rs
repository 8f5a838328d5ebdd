use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ldl_cli::workflow::{PredictOutcome, ReportOutcome};
use ldl_client::RemoteSettings;
use ldl_model::{Category, PanelField, ValidationError};
use ldl_report::format_value;

pub fn print_prediction(outcome: &PredictOutcome) {
    println!("{}", prediction_table(outcome));
    match &outcome.report {
        Some(ReportOutcome::Saved { path }) => println!("Report: {}", path.display()),
        Some(ReportOutcome::Failed { message }) => eprintln!("error: {message}"),
        None => {}
    }
}

pub fn print_json(outcome: &PredictOutcome) {
    match serde_json::to_string_pretty(outcome) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("error: failed to serialize result: {error}"),
    }
}

pub fn print_validation_errors(error: &ValidationError) {
    eprintln!("Invalid input:");
    for field_error in error.errors() {
        eprintln!("- {}: {}", field_error.field, field_error.user_message());
    }
}

pub fn print_ranges() {
    println!("{}", ranges_table());
}

pub fn print_status(settings: &RemoteSettings, status: &Result<String, String>) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Service"), header_cell("Value")]);
    table.add_row(vec![Cell::new("Endpoint"), Cell::new(settings.predict_url())]);
    let enabled = if settings.enabled {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("no")
    };
    table.add_row(vec![Cell::new("Enabled"), enabled]);
    let status_cell = match status {
        Ok(message) => Cell::new(message).fg(Color::Green),
        Err(message) => Cell::new(message)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    };
    table.add_row(vec![Cell::new("Status"), status_cell]);
    println!("{table}");
}

fn prediction_table(outcome: &PredictOutcome) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Measurement"), header_cell("Value")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for field in PanelField::ALL {
        table.add_row(vec![
            Cell::new(field.label()),
            Cell::new(format_value(outcome.inputs.get(field))),
        ]);
    }
    let color = category_color(outcome.category);
    table.add_row(vec![
        Cell::new("Predicted LDL-C").add_attribute(Attribute::Bold),
        Cell::new(format_value(outcome.ldl_c))
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new(outcome.category_label)
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

fn ranges_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Range"),
        header_cell("Category"),
        header_cell("Colour"),
    ]);
    for category in Category::ALL {
        let color = category_color(category);
        table.add_row(vec![
            Cell::new(category.range_label()).add_attribute(Attribute::Bold),
            Cell::new(category.label()).fg(color),
            dim_cell(category.color_token()),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Terminal colour closest to the category's colour token.
fn category_color(category: Category) -> Color {
    match category {
        Category::Optimal => Color::DarkGreen,
        Category::NearOptimal => Color::Green,
        Category::BorderlineHigh => Color::DarkYellow,
        Category::High => Color::Red,
        Category::VeryHigh => Color::DarkRed,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use ldl_model::{LipidPanel, PredictionSource};

    use super::*;

    fn outcome(source: PredictionSource) -> PredictOutcome {
        PredictOutcome {
            inputs: LipidPanel::new(200.0, 50.0, 150.0).unwrap(),
            ldl_c: 120.0,
            source,
            category: Category::NearOptimal,
            category_label: Category::NearOptimal.label(),
            report: None,
        }
    }

    #[test]
    fn test_prediction_table_contents() {
        let mut table = prediction_table(&outcome(PredictionSource::Fallback));
        table.force_no_tty();
        let text = table.to_string();
        for expected in [
            "TC (Total Cholesterol)",
            "200 mg/dL",
            "50 mg/dL",
            "150 mg/dL",
            "120 mg/dL",
            "Near Optimal",
        ] {
            assert!(text.contains(expected), "missing {expected:?} in\n{text}");
        }
    }

    #[test]
    fn test_fallback_is_not_shown() {
        let mut remote = prediction_table(&outcome(PredictionSource::Remote));
        let mut fallback = prediction_table(&outcome(PredictionSource::Fallback));
        remote.force_no_tty();
        fallback.force_no_tty();
        assert_eq!(remote.to_string(), fallback.to_string());
    }

    #[test]
    fn test_ranges_table_lists_every_band() {
        let mut table = ranges_table();
        table.force_no_tty();
        let text = table.to_string();
        for category in Category::ALL {
            assert!(text.contains(category.range_label()));
            assert!(text.contains(category.color_token()));
        }
    }
}
