use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read antibiotic table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed antibiotic table: {0}")]
    Csv(#[from] csv::Error),
}
