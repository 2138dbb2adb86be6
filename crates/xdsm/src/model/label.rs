//! Typeset label text for systems, connections, and border annotations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One or more lines of LaTeX math text displayed inside a diagram node.
///
/// Each line is typeset in math mode by the export backend; multi-line
/// labels are stacked vertically. Lines are stored verbatim, so callers
/// write plain LaTeX such as `r"C_{D_0}, k"` or `r"\text{Drag} "`.
///
/// # Examples
///
/// ```
/// use xdsm::model::Label;
///
/// let one_line = Label::from(r"(W/S)_\text{stall}");
/// assert_eq!(one_line.lines().len(), 1);
///
/// let two_lines = Label::from([r"\text{Drag}", r"\text{Polar}"]);
/// assert_eq!(two_lines.lines().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label(Vec<String>);

impl Label {
    /// Create a label from a list of LaTeX math lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    /// Borrow the label's lines.
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Returns true if the label has no lines.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Label {
    fn from(line: &str) -> Self {
        Self(vec![line.to_string()])
    }
}

impl From<String> for Label {
    fn from(line: String) -> Self {
        Self(vec![line])
    }
}

impl From<Vec<String>> for Label {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

impl<const N: usize> From<[&str; N]> for Label {
    fn from(lines: [&str; N]) -> Self {
        Self(lines.iter().map(|line| line.to_string()).collect())
    }
}

impl From<&[&str]> for Label {
    fn from(lines: &[&str]) -> Self {
        Self(lines.iter().map(|line| line.to_string()).collect())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_single_line() {
        let label = Label::from(r"W_\mathrm{TO}");
        assert_eq!(label.lines(), [r"W_\mathrm{TO}"]);
    }

    #[test]
    fn test_from_array() {
        let label = Label::from([r"\text{Takeoff Weight}", r"\text{Estimation}"]);
        assert_eq!(label.lines().len(), 2);
        assert_eq!(label.lines()[1], r"\text{Estimation}");
    }

    #[test]
    fn test_display_joins_lines() {
        let label = Label::from(["a", "b"]);
        assert_eq!(label.to_string(), "a b");
    }
}
