use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shelter_cli::pipeline::PipelineResult;
use shelter_model::Category;
use shelter_store::schema::{ANIMALS, SHELTER};

pub fn print_summary(result: &PipelineResult) {
    println!("Input: {}", result.input.display());
    match &result.database {
        Some(path) => println!("Database: {}", path.display()),
        None => println!("Database: - (dry run)"),
    }
    println!("Records: {}", result.normalize.records);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Loaded"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);

    let mut rows: Vec<(&str, usize)> = Category::ALL
        .iter()
        .map(|category| {
            let count = result
                .normalize
                .dictionaries
                .get(category)
                .copied()
                .unwrap_or_default();
            (category.table_name(), count)
        })
        .collect();
    rows.push((ANIMALS, result.normalize.animals));
    rows.push((SHELTER, result.normalize.shelter));

    let mut total = 0usize;
    for (name, count) in rows {
        total += count;
        let loaded = result
            .load
            .as_ref()
            .and_then(|summary| summary.rows_for(name));
        table.add_row(vec![table_cell(name), Cell::new(count), loaded_cell(loaded)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    if result.normalize.conflicting_animals > 0 {
        eprintln!(
            "warning: {} rows shared an animal id with different attributes; the first row was kept",
            result.normalize.conflicting_animals
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn table_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn loaded_cell(count: Option<usize>) -> Cell {
    match count {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
