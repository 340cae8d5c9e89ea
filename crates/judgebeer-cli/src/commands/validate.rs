//! The `judgebeer validate` command.

use std::path::PathBuf;

use anyhow::Result;

use judgebeer_core::sheet::{load_sheet_directory, parse_sheet, validate_sheet};

pub fn execute(sheet_path: PathBuf) -> Result<()> {
    let sheets = if sheet_path.is_dir() {
        load_sheet_directory(&sheet_path)?
    } else {
        vec![parse_sheet(&sheet_path)?]
    };

    let mut total_warnings = 0;

    for sheet in &sheets {
        let name = if sheet.beer.name.is_empty() {
            "(unnamed)"
        } else {
            sheet.beer.name.as_str()
        };
        println!("Sheet: {} ({name})", sheet.source.display());

        let warnings = validate_sheet(sheet);
        for w in &warnings {
            let prefix = w
                .field
                .as_ref()
                .map(|f| format!("  [{f}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All sheets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
