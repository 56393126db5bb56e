use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VersionError {
    #[error("unknown questionnaire version: {0}")]
    Unknown(String),
}

/// Questionnaire mode chosen by the user. The flow starts in `Basic`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Version {
    #[default]
    Basic,
    Advanced,
}

impl Version {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Básico",
            Self::Advanced => "Avançado",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Advanced => f.write_str("advanced"),
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "basico" | "básico" => Ok(Self::Basic),
            "advanced" | "avancado" | "avançado" => Ok(Self::Advanced),
            _ => Err(VersionError::Unknown(s.to_string())),
        }
    }
}
