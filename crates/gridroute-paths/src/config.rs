/// Tunables shared by the search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Deepest limit iterative deepening will try (inclusive).
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 20 }
    }
}
