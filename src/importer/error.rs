// ==========================================
// Traffic KPI Core - Importer Error Types
// ==========================================
// thiserror derive macro; one enum for the whole
// ingestion pipeline
// ==========================================

use thiserror::Error;

/// Ingestion pipeline error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv/.xlsx/.xls)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("failed to parse CSV: {0}")]
    CsvParseError(String),

    #[error("failed to parse spreadsheet: {0}")]
    ExcelParseError(String),

    // ===== Structural errors =====
    #[error("file is empty or contains no valid data rows after filtering")]
    EmptyFile,

    // ===== Aggregated validation failure (parse_full boundary) =====
    #[error("{message}")]
    Validation { message: String },

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result type alias
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ImportError = io_err.into();
        assert!(matches!(err, ImportError::FileReadError(_)));
    }

    #[test]
    fn test_validation_error_displays_message() {
        let err = ImportError::Validation {
            message: "Row 2: field 'date' is required".to_string(),
        };
        assert_eq!(err.to_string(), "Row 2: field 'date' is required");
    }
}
