use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    HttpRequestError(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    CsvExportError(#[from] csv::Error),

    #[error("XLSX export failed: {0}")]
    XlsxExportError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Other error: {0}")]
    Other(String),
}
