use crate::args::ExportFormat;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::ExportResultViewModel;
use anyhow::Result;
use samplegrid_types::{Record, Schema};
use std::path::Path;

pub fn handle(ctx: &ExecutionContext, output: &Path, format: ExportFormat) -> Result<()> {
    let grid = ctx.open_grid()?;
    let records: Vec<&Record> = grid.records().iter().collect();
    let columns = export_columns(grid.schema(), &records);

    match format {
        ExportFormat::Csv => write_csv(output, &columns, &records)?,
        ExportFormat::Json => write_json(output, grid.records())?,
    }
    tracing::info!(path = %output.display(), count = records.len(), "exported records");

    let view_model = presenters::present_export_result(ExportResultViewModel {
        path: output.to_path_buf(),
        format: format.as_str().to_string(),
        record_count: records.len(),
        columns,
    });
    ctx.render(view_model)
}

/// Schema keys in registry order, then unknown keys in order of first appearance
pub fn export_columns(schema: &Schema, records: &[&Record]) -> Vec<String> {
    let mut columns: Vec<String> = schema.fields().iter().map(|f| f.key.clone()).collect();

    for record in records {
        for (key, _) in record.entries() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.to_string());
            }
        }
    }

    columns
}

fn write_csv(path: &Path, columns: &[String], records: &[&Record]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(columns)?;
    for record in records {
        wtr.write_record(columns.iter().map(|key| record.get(key).unwrap_or("")))?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, records: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    std::fs::write(path, content + "\n")?;
    Ok(())
}
