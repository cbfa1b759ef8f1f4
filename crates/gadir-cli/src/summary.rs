use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gadir_model::Label;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("{}", summary_table(result));

    let unmapped = &result.dataset.diagnostics.unmapped_groups;
    if !unmapped.is_empty() {
        let values: Vec<&str> = unmapped.iter().map(String::as_str).collect();
        eprintln!("Unmapped Group values: {}", values.join(", "));
    }
}

/// Stage-by-stage row counts.
pub fn summary_table(result: &RunResult) -> Table {
    let diagnostics = &result.dataset.diagnostics;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Input rows"), Cell::new(diagnostics.input_rows)]);
    table.add_row(vec![
        Cell::new("Dropped: non-human HOST"),
        dropped_cell(diagnostics.dropped_host),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: non-human Organism"),
        dropped_cell(diagnostics.dropped_organism),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: unclear Group"),
        dropped_cell(diagnostics.dropped_unclear),
    ]);
    table.add_row(vec![
        Cell::new("Missing Run"),
        count_cell(diagnostics.missing_run, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Missing label"),
        count_cell(diagnostics.missing_label, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new(format!("label = {}", Label::FoodAllergy)),
        Cell::new(result.dataset.count_label(Label::FoodAllergy)),
    ]);
    table.add_row(vec![
        Cell::new(format!("label = {}", Label::Control)),
        Cell::new(result.dataset.count_label(Label::Control)),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(diagnostics.output_rows).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dropped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
