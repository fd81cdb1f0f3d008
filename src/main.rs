// ==========================================
// Parts Inventory - CLI entry point
// ==========================================
// Usage:
//   parts-inventory import <sheet.csv|sheet.xlsx> [--db <path>]
//   parts-inventory export [--db <path>]
// ==========================================

use parts_inventory::api::{ExportApi, ImportApi};
use parts_inventory::logging;
use std::path::PathBuf;
use std::process::ExitCode;

fn default_db_path() -> String {
    let mut dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push("parts-inventory");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(error = %e, "could not create data directory, using cwd");
        return "parts-inventory.db".to_string();
    }
    dir.push("parts-inventory.db");
    dir.display().to_string()
}

fn usage() -> ExitCode {
    eprintln!("usage: parts-inventory import <file> [--db <path>]");
    eprintln!("       parts-inventory export [--db <path>]");
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", parts_inventory::APP_NAME, parts_inventory::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut positional = Vec::new();
    let mut db_path: Option<String> = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--db" {
            match iter.next() {
                Some(path) => db_path = Some(path),
                None => return usage(),
            }
        } else {
            positional.push(arg);
        }
    }

    let db_path = db_path.unwrap_or_else(default_db_path);
    tracing::info!(db = %db_path, "using database");

    match positional.first().map(String::as_str) {
        Some("import") => {
            let Some(file) = positional.get(1) else {
                return usage();
            };
            match ImportApi::new(&db_path).import_counts(file).await {
                Ok(report) => {
                    println!(
                        "imported {}: {} rows, {} new, {} updated, {} errors ({} ms)",
                        file,
                        report.total_rows,
                        report.new_count,
                        report.updated_count,
                        report.error_count,
                        report.elapsed_ms,
                    );
                    for err in &report.error_preview {
                        println!("  {err}");
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("import failed: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Some("export") => match ExportApi::new(&db_path).export_changed_report().await {
            Ok(report) => {
                print!("{}", report.csv);
                eprintln!(
                    "exported {} entries, {} changed (snapshot {})",
                    report.total_entries, report.changed_entries, report.snapshot_id
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("export failed: {e}");
                ExitCode::FAILURE
            }
        },
        _ => usage(),
    }
}
