use serde::{Deserialize, Serialize};
use std::fmt;

/// A titled section of the protocol document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Numbered heading, e.g. "3. TRATAMENTO"
    pub heading: String,
    /// Body text accumulated under the heading
    pub body: String,
}

impl Section {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }

    /// Append a body fragment, separating it from any existing text
    pub(crate) fn append_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if !self.body.is_empty() {
            self.body.push(super::FRAGMENT_SEPARATOR);
        }
        self.body.push_str(fragment);
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.heading, self.body)
    }
}
