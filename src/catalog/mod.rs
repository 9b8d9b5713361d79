//! Antibiotic reference table
//!
//! A CSV file with one antibiotic per row and three columns, in order:
//! name, family and clinical use. The first row is a header and is skipped
//! whatever its labels are.

mod error;

#[cfg(test)]
mod tests;

pub use error::CatalogError;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// One row of the antibiotic table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Antibiotic {
    pub name: String,
    pub family: String,
    #[serde(rename = "use")]
    pub usage: String,
}

impl fmt::Display for Antibiotic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "O Antibiotico: {}, Pertence a Familia dos: {}, E é usado para: {}",
            self.name, self.family, self.usage
        )
    }
}

/// Immutable antibiotic table keyed by lowercased name
#[derive(Debug, Clone, Default)]
pub struct AntibioticCatalog {
    entries: Vec<Antibiotic>,
    by_name: HashMap<String, usize>,
}

impl AntibioticCatalog {
    /// Load the table from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the table from any CSV reader
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let field = |i: usize| record.get(i).unwrap_or_default().to_string();

            let name = field(0);
            if name.is_empty() {
                continue;
            }
            entries.push(Antibiotic {
                name,
                family: field(1),
                usage: field(2),
            });
        }

        tracing::debug!("Loaded {} antibiotics", entries.len());
        Ok(Self::from_entries(entries))
    }

    /// Build a catalog from rows; the first row wins on duplicate names
    pub fn from_entries(entries: Vec<Antibiotic>) -> Self {
        let mut by_name = HashMap::new();
        for (at, entry) in entries.iter().enumerate() {
            by_name.entry(entry.name.to_lowercase()).or_insert(at);
        }
        Self { entries, by_name }
    }

    /// Find an antibiotic by exact name, ignoring case and outer whitespace
    pub fn find(&self, name: &str) -> Option<&Antibiotic> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&at| &self.entries[at])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Antibiotic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
