use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Deployment switch between the two wrappers.
///
/// Nothing in this crate reads it; host code parses it from its own
/// configuration and chooses [`ProtectLayer`](crate::ProtectLayer) or
/// [`ProtectLogOnlyLayer`](crate::ProtectLogOnlyLayer) accordingly.
///
/// Rollouts usually start in [`Enforcement::LogOnly`] and move to
/// [`Enforcement::Enforce`] once the logs are clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enforcement {
    #[default]
    Enforce,
    LogOnly,
}

impl Enforcement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Enforcement::Enforce => "enforce",
            Enforcement::LogOnly => "log-only",
        }
    }

    pub fn is_enforcing(&self) -> bool {
        matches!(self, Enforcement::Enforce)
    }
}

impl fmt::Display for Enforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Enforcement {
    type Err = EnforcementError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("enforce") {
            Ok(Enforcement::Enforce)
        } else if trimmed.eq_ignore_ascii_case("log-only") {
            Ok(Enforcement::LogOnly)
        } else {
            Err(EnforcementError::UnknownMode(value.to_string()))
        }
    }
}

/// Errors produced while reading an [`Enforcement`] setting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnforcementError {
    #[error("unknown enforcement mode '{0}', expected 'enforce' or 'log-only'")]
    UnknownMode(String),
}

#[cfg(test)]
#[path = "enforcement_test.rs"]
mod enforcement_test;
