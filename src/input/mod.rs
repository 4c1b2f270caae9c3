//! Company list input
//!
//! Reads companies from a CSV file with a header row. The name and website
//! columns are located by header (case-insensitive, surrounding whitespace
//! ignored); every other column is ignored. Row order is kept because it is
//! the rank tie-break.

use crate::config::InputConfig;
use crate::model::Company;
use crate::{Result, ScoutError};
use std::io::Read;
use std::path::Path;

/// Reads companies from a CSV file
pub fn read_companies(path: &Path, config: &InputConfig) -> Result<Vec<Company>> {
    let file = std::fs::File::open(path)?;
    let companies = parse_companies(file, config)?;
    tracing::info!("Loaded {} companies from {}", companies.len(), path.display());
    Ok(companies)
}

/// Parses companies from any CSV source
///
/// A row whose website cell is missing or blank becomes a company without a
/// website. Rows that are entirely empty are skipped.
pub fn parse_companies<R: Read>(reader: R, config: &InputConfig) -> Result<Vec<Company>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let name_idx = column_index(&headers, &config.name_column)?;
    let website_idx = column_index(&headers, &config.website_column)?;

    let mut companies = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let name = record.get(name_idx).unwrap_or_default();
        let website = record
            .get(website_idx)
            .filter(|w| !w.is_empty())
            .map(|w| w.to_string());

        companies.push(Company::new(name, website));
    }

    Ok(companies)
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    let wanted = column.trim().to_lowercase();
    headers
        .iter()
        .position(|h| h.trim().to_lowercase() == wanted)
        .ok_or_else(|| ScoutError::Input(format!("missing column {:?}", column)))
}
