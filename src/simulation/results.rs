// src/simulation/results.rs
use std::collections::BTreeMap;
use std::fmt;

/// Measurement counts from sampling a circuit's state.
/// Keys are zero-padded binary outcome labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    counts: BTreeMap<String, usize>,
    shots: usize,
}

impl RunResult {
    /// Creates an empty result for `shots` samples. (Internal visibility)
    pub(crate) fn new(shots: usize) -> Self {
        Self { counts: BTreeMap::new(), shots }
    }

    pub(crate) fn record(&mut self, label: String) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    /// How often `label` was observed; `0` if never.
    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Observed outcomes in ascending label order.
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    /// The most frequently observed outcome, lowest label on ties.
    pub fn most_frequent(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (label, count) in &self.counts {
            if best.is_none_or(|(_, c)| *count > c) {
                best = Some((label.as_str(), *count));
            }
        }
        best.map(|(label, _)| label)
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Results ({} shots):", self.shots)?;
        if self.counts.is_empty() {
            writeln!(f, "  No outcomes recorded.")?;
        } else {
            for (label, count) in &self.counts {
                writeln!(f, "    |{}>: {}", label, count)?;
            }
        }
        Ok(())
    }
}
