use crate::catalog::Antibiotic;
use crate::protocol::Section;
use std::fmt;

pub const NOT_FOUND_MESSAGE: &str =
    "Antibiotico não encontrado. Por favor, verifique o nome e tente novamente.";

pub const EMPTY_MESSAGE: &str = "Digite o nome de um antibiotico ou de uma doença.";

/// Answer to a single user message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<'a> {
    /// Nothing was typed
    Empty,
    /// Exact antibiotic match from the catalog
    Antibiotic(&'a Antibiotic),
    /// Protocol section whose heading mentions the query
    Protocol(&'a Section),
    NotFound,
}

impl Reply<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, Reply::Antibiotic(_) | Reply::Protocol(_))
    }
}

impl fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Empty => f.write_str(EMPTY_MESSAGE),
            Reply::Antibiotic(antibiotic) => write!(f, "{}", antibiotic),
            Reply::Protocol(section) => write!(f, "{}", section),
            Reply::NotFound => f.write_str(NOT_FOUND_MESSAGE),
        }
    }
}
