use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::info_span;

use shelter_cli::config::{Overrides, load_config, resolve};
use shelter_cli::pipeline::{PipelineResult, run_pipeline, write_report};
use shelter_model::AnimalDedupe;
use shelter_store::TABLES;

use crate::cli::{DedupeArg, LoadArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_tables() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Columns"),
        header_cell("References"),
    ]);
    apply_table_style(&mut table);
    for def in &TABLES {
        let columns = def
            .columns
            .iter()
            .map(|column| format!("{} {}", column.name, column.sql_type))
            .collect::<Vec<_>>()
            .join("\n");
        let references = if def.foreign_keys.is_empty() {
            "-".to_string()
        } else {
            def.foreign_keys
                .iter()
                .map(|fk| fk.trim_start_matches("FOREIGN KEY "))
                .collect::<Vec<_>>()
                .join("\n")
        };
        table.add_row(vec![Cell::new(def.name), Cell::new(columns), Cell::new(references)]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_load(args: &LoadArgs) -> Result<PipelineResult> {
    let file = load_config(args.config.as_deref(), Path::new(".")).context("config")?;
    let request = resolve(
        file,
        Overrides {
            input: args.input.clone(),
            database: args.database.clone(),
            animal_dedupe: args.dedupe_animals.map(|arg| match arg {
                DedupeArg::ById => AnimalDedupe::ById,
                DedupeArg::ByValue => AnimalDedupe::ByValue,
            }),
            no_escape_names: args.no_escape_names,
            replace: args.replace,
            dry_run: args.dry_run,
        },
    );
    let span = info_span!("run", input = %request.input.display(), dry_run = request.dry_run);
    let _guard = span.enter();
    let result = run_pipeline(&request)?;
    if let Some(path) = &args.report {
        write_report(&result, path)?;
    }
    Ok(result)
}
