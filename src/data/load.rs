use std::fs;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::MenuItem;

/// Load menu records from a data-source export, dispatching on extension.
///
/// JSON files hold an array of records; CSV files carry one record per row
/// with empty cells as missing nutrients.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_menu_json(path),
        Some("csv") => load_menu_csv(path),
        _ => Err(PlannerError::InvalidInput(format!(
            "unsupported menu file format: {}",
            path.display()
        ))),
    }
}

fn load_menu_json(path: &Path) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_menu_csv(path: &Path) -> Result<Vec<MenuItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
