//! Loan data structures, CSV loading, and sample scenarios

mod data;
pub mod loader;
pub mod scenarios;

pub use data::{LoanParameters, DEFAULT_REFERENCE_NEW_YEAR};
pub use loader::{load_loans, load_loans_from_reader};
pub use scenarios::sample_loans;
