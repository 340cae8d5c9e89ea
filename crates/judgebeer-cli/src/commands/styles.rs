//! The `judgebeer styles` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use judgebeer_core::model::BeerStyle;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Style"]);
    for (i, style) in BeerStyle::ALL.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(style.name())]);
    }
    println!("{table}");
    Ok(())
}
