use crate::domain::{BankError, BankResult, Transaction};
use std::path::Path;

pub struct CsvExporter;

impl CsvExporter {
    /// Writes every transaction, oldest first, with a header row.
    pub fn export_transactions(transactions: &[Transaction], path: &Path) -> BankResult<usize> {
        let mut writer = csv::Writer::from_path(path).map_err(|e| BankError::Export(e.to_string()))?;
        for tx in transactions {
            writer.serialize(tx).map_err(|e| BankError::Export(e.to_string()))?;
        }
        writer.flush().map_err(|e| BankError::Export(e.to_string()))?;
        Ok(transactions.len())
    }
}
