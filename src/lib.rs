// Public API exports
pub mod assistant;
pub mod catalog;
pub mod config;
pub mod protocol;
pub mod source;

// Re-export main types for convenience
pub use protocol::{ProtocolIndex, ProtocolIndexBuilder, Section, SectionParser, lookup};

pub use source::{ExtractError, PageSource, PdfSource, TextSource, source_for_path};

pub use catalog::{Antibiotic, AntibioticCatalog, CatalogError};

pub use assistant::{Assistant, Reply};

pub use config::{Config, ConfigError};
