//! Import error types
//!
//! Every failure of the statistics import is a validation error shown to the
//! user as-is, so the messages are in the dashboard's language.

use thiserror::Error;

/// Errors that can occur while importing a statistics CSV
#[derive(Error, Debug)]
pub enum ImportError {
    /// Selected file is not a CSV
    #[error("Per favore, seleziona un file CSV.")]
    NotCsv,

    /// No data lines after the header
    #[error("Il file CSV è vuoto o contiene solo l'intestazione.")]
    Empty,

    /// A required column is absent from the header
    #[error("L'intestazione del CSV non è corretta. Manca la colonna: {0}")]
    MissingColumn(&'static str),

    /// Every data line was discarded
    #[error("Nessun dato valido trovato nel file CSV.")]
    NoValidRows,

    /// The file could not be read
    #[error("Errore nella lettura del file.")]
    Read(#[source] std::io::Error),

    /// The file was read but its content is not text
    #[error("Impossibile leggere il file.")]
    Unreadable,

    /// The CSV reader failed mid-stream
    #[error("Errore nella lettura del file.")]
    Csv(#[from] csv::Error),
}

impl ImportError {
    /// Message for the alert shown after a failed import
    pub fn alert_message(&self) -> String {
        match self {
            // File-level failures, shown without the import prefix
            ImportError::NotCsv | ImportError::Read(_) | ImportError::Unreadable => self.to_string(),
            _ => format!("Errore nell'importazione: {}", self),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Read(err)
    }
}

/// Result type alias for import operations
pub type ImportResult<T> = Result<T, ImportError>;
