//! System (diagram node) definitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::Label;

/// The role a system plays in the workflow, selecting its node style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemKind {
    /// A design optimizer driving the workflow
    Optimizer,
    /// A converger / multidisciplinary analysis loop
    Solver,
    /// An explicit analysis function
    Function,
    /// An implicit function solved for its residual
    ImplicitFunction,
}

impl FromStr for SystemKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "optimizer" => Ok(Self::Optimizer),
            "solver" => Ok(Self::Solver),
            "function" => Ok(Self::Function),
            "implicit_function" => Ok(Self::ImplicitFunction),
            _ => Err("Unsupported system kind"),
        }
    }
}

impl From<SystemKind> for &'static str {
    fn from(val: SystemKind) -> Self {
        match val {
            SystemKind::Optimizer => "optimizer",
            SystemKind::Solver => "solver",
            SystemKind::Function => "function",
            SystemKind::ImplicitFunction => "implicit_function",
        }
    }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A named box on the diagram diagonal.
///
/// Systems are declared in the order they should appear along the matrix
/// diagonal. The `stacked` flag renders the box with a repeated-instance
/// shadow (a vectorized set of components); `faded` renders it as an
/// inactive placeholder, which the derived sub-figures use to highlight a
/// subset of an otherwise identical diagram.
///
/// # Examples
///
/// ```
/// use xdsm::model::{System, SystemKind};
///
/// let climb = System::new(
///     "climb",
///     SystemKind::ImplicitFunction,
///     [r"\text{Climb}", r"\text{Constraints}"],
/// )
/// .with_stacked(true);
///
/// assert_eq!(climb.id(), "climb");
/// assert!(climb.stacked());
/// assert!(!climb.faded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    id: String,
    kind: SystemKind,
    label: Label,
    stacked: bool,
    faded: bool,
}

impl System {
    /// Create a new system with an id, kind, and display label.
    pub fn new(id: impl Into<String>, kind: SystemKind, label: impl Into<Label>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            stacked: false,
            faded: false,
        }
    }

    /// Set whether the box is drawn with a repeated-instance shadow.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Set whether the box is drawn as an inactive placeholder.
    pub fn with_faded(mut self, faded: bool) -> Self {
        self.faded = faded;
        self
    }

    /// Get the system identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the system kind.
    pub fn kind(&self) -> SystemKind {
        self.kind
    }

    /// Borrow the display label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Returns true if the box is drawn with a repeated-instance shadow.
    pub fn stacked(&self) -> bool {
        self.stacked
    }

    /// Returns true if the box is drawn as an inactive placeholder.
    pub fn faded(&self) -> bool {
        self.faded
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let system = System::new("opt", SystemKind::Optimizer, r"\text{Optimization}");
        assert_eq!(system.id(), "opt");
        assert_eq!(system.kind(), SystemKind::Optimizer);
        assert!(!system.stacked());
        assert!(!system.faded());
    }

    #[test]
    fn test_with_flags() {
        let system = System::new("others", SystemKind::ImplicitFunction, r"\text{Other}")
            .with_stacked(true)
            .with_faded(true);
        assert!(system.stacked());
        assert!(system.faded());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "implicit_function".parse::<SystemKind>(),
            Ok(SystemKind::ImplicitFunction)
        );
        assert!("unknown".parse::<SystemKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trip() {
        for kind in [
            SystemKind::Optimizer,
            SystemKind::Solver,
            SystemKind::Function,
            SystemKind::ImplicitFunction,
        ] {
            assert_eq!(kind.to_string().parse::<SystemKind>(), Ok(kind));
        }
    }
}
