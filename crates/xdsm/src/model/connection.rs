//! Data connections between systems.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Label;

/// A directed, labeled data dependency between two systems.
///
/// The connection occupies the off-diagonal matrix cell at the source
/// system's row and the target system's column, so its endpoints must be
/// distinct. The `stacked` flag mirrors [`System::with_stacked`] for data
/// that exists once per repeated instance.
///
/// [`System::with_stacked`]: crate::model::System::with_stacked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    from: String,
    to: String,
    label: Label,
    stacked: bool,
}

impl Connection {
    /// Create a new connection from a source system to a target system.
    pub fn new(from: impl Into<String>, to: impl Into<String>, label: impl Into<Label>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: label.into(),
            stacked: false,
        }
    }

    /// Set whether the connection label is drawn with a repeated-instance
    /// shadow.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Get the source system id.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Get the target system id.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Borrow the connection label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Returns true if the label is drawn with a repeated-instance shadow.
    pub fn stacked(&self) -> bool {
        self.stacked
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
