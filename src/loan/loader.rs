//! Load loans from CSV

use super::LoanParameters;
use crate::error::GapResult;
use csv::Reader;
use std::path::Path;

/// Raw CSV row, one loan per line
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "label", default)]
    label: String,
    #[serde(rename = "carValue")]
    car_value: f64,
    #[serde(rename = "modelYear")]
    model_year: i32,
    #[serde(rename = "amountFinanced")]
    amount_financed: f64,
    #[serde(rename = "apr")]
    apr: f64,
    #[serde(rename = "loanTermMonths")]
    loan_term_months: u32,
}

impl CsvRow {
    fn into_loan(self) -> LoanParameters {
        LoanParameters::new(
            self.label,
            self.car_value,
            self.model_year,
            self.amount_financed,
            self.apr,
            self.loan_term_months,
        )
    }
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> GapResult<Vec<LoanParameters>> {
    let mut reader = Reader::from_path(path)?;
    read_rows(&mut reader)
}

/// Load loans from any reader (e.g., string buffer, stdin)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> GapResult<Vec<LoanParameters>> {
    let mut csv_reader = Reader::from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: std::io::Read>(reader: &mut Reader<R>) -> GapResult<Vec<LoanParameters>> {
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.into_loan());
    }

    log::debug!("Loaded {} loans", loans.len());
    Ok(loans)
}
