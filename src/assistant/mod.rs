mod reply;


pub use reply::{EMPTY_MESSAGE, NOT_FOUND_MESSAGE, Reply};

use crate::catalog::AntibioticCatalog;
use crate::protocol::ProtocolIndex;
use std::io::{BufRead, Write};

/// Default assistant name shown in the transcript
pub const DEFAULT_NAME: &str = "Catrina";

/// Transcript prefix for user lines
pub const USER_PREFIX: &str = "Você";

/// Words that end an interactive session
const QUIT_WORDS: [&str; 3] = ["sair", "exit", "quit"];

/// Answers chat messages from an antibiotic table and a protocol index
///
/// Both lookups are built before the assistant and never change afterwards.
pub struct Assistant {
    name: String,
    catalog: AntibioticCatalog,
    protocol: ProtocolIndex,
}

impl Assistant {
    pub fn new(catalog: AntibioticCatalog, protocol: ProtocolIndex) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            catalog,
            protocol,
        }
    }

    /// Set the name the assistant introduces itself with
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catalog(&self) -> &AntibioticCatalog {
        &self.catalog
    }

    pub fn protocol(&self) -> &ProtocolIndex {
        &self.protocol
    }

    pub fn greeting(&self) -> String {
        format!(
            "Olá! Eu sou a {}, sua assistente virtual. Como posso te ajudar hoje?",
            self.name
        )
    }

    /// Answer one message
    ///
    /// The antibiotic table is consulted first (exact name), then the
    /// protocol headings (substring).
    pub fn respond(&self, message: &str) -> Reply<'_> {
        let message = message.trim();
        if message.is_empty() {
            return Reply::Empty;
        }

        if let Some(antibiotic) = self.catalog.find(message) {
            return Reply::Antibiotic(antibiotic);
        }
        if let Some(section) = self.protocol.lookup(message) {
            return Reply::Protocol(section);
        }

        tracing::debug!("No answer for {:?}", message);
        Reply::NotFound
    }

    /// Run a line-oriented chat session until EOF or a quit word
    ///
    /// Blank lines are ignored, like an empty submit in a chat window.
    pub fn run_session(&self, input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
        writeln!(output, "{}: {}", self.name, self.greeting())?;

        for line in input.lines() {
            let line = line?;
            let message = line.trim();
            if message.is_empty() {
                continue;
            }
            if QUIT_WORDS.contains(&message.to_lowercase().as_str()) {
                break;
            }

            writeln!(output, "{}: {}", USER_PREFIX, message)?;
            writeln!(output, "{}: {}", self.name, self.respond(message))?;
        }

        output.flush()
    }
}
