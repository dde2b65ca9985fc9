#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// What a failed chunk does to the rest of the dispatch.
pub enum FailurePolicy {
    #[default]
    /// First failure aborts the dispatch; in-flight calls are dropped and nothing is
    /// returned but the error.
    AbortOnFirst,
    /// Every chunk runs to completion; failed indices are reported alongside the
    /// successful results.
    CollectPartial,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AbortOnFirst => "abort",
            Self::CollectPartial => "partial",
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" | "abort-on-first" => Ok(Self::AbortOnFirst),
            "partial" | "collect-partial" => Ok(Self::CollectPartial),
            _ => Err(format!("Unknown failure policy: {}", s)),
        }
    }
}
