//! Execution-order overlay.

use serde::{Deserialize, Serialize};

/// The ordered execution path drawn atop the data-dependency matrix.
///
/// Entries name systems in execution order. Repeating an earlier entry at
/// the end closes the loop, which is how iterative workflows such as a
/// weight build-up express their convergence cycle. The export backend
/// draws one process arrow between each consecutive pair, so a process with
/// fewer than two entries renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process(Vec<String>);

impl Process {
    /// Create a process from system ids in execution order.
    pub fn new(steps: Vec<String>) -> Self {
        Self(steps)
    }

    /// Borrow the ordered system ids.
    pub fn steps(&self) -> &[String] {
        &self.0
    }

    /// Iterate over consecutive (from, to) pairs along the path.
    pub fn arrows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl<const N: usize> From<[&str; N]> for Process {
    fn from(steps: [&str; N]) -> Self {
        Self(steps.iter().map(|step| step.to_string()).collect())
    }
}

impl From<&[&str]> for Process {
    fn from(steps: &[&str]) -> Self {
        Self(steps.iter().map(|step| step.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_pairs_consecutive_steps() {
        let process = Process::from(["mission_segment", "fuel", "takeoff", "empty", "takeoff"]);
        let arrows: Vec<_> = process.arrows().collect();
        assert_eq!(
            arrows,
            [
                ("mission_segment", "fuel"),
                ("fuel", "takeoff"),
                ("takeoff", "empty"),
                ("empty", "takeoff"),
            ]
        );
    }

    #[test]
    fn test_single_step_has_no_arrows() {
        let process = Process::from(["opt"]);
        assert_eq!(process.arrows().count(), 0);
    }
}
