use std::fmt;

/// Deployment mode recognized by the data-source selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Development deployments serve fixture data.
    Development,
    /// Production deployments serve live data.
    Production,
}

impl Mode {
    /// All recognized modes in activation-table order.
    pub const ALL: [Mode; 2] = [Mode::Development, Mode::Production];

    /// Configuration value that activates this mode.
    pub fn value(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }

    /// Parse a mode from its configuration value.
    ///
    /// Matching is exact. Unrecognized values yield `None` and leave the
    /// process without a data-source binding.
    pub fn from_value(value: &str) -> Option<Mode> {
        match value {
            "development" => Some(Mode::Development),
            "production" => Some(Mode::Production),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
