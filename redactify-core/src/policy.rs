//! Redaction policy type

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Transformation modes applied to detected PII
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Policy {
    /// Keep the value, wrapped in a typed marker
    #[default]
    Annotate,
    /// Remove the value entirely
    Redact,
    /// Replace the value with a synthetic one
    Synthetic,
    /// Replace the value with a generic placeholder
    Placeholder,
}

impl Policy {
    /// All supported policies, in display order
    pub const ALL: [Policy; 4] = [
        Policy::Annotate,
        Policy::Redact,
        Policy::Synthetic,
        Policy::Placeholder,
    ];

    /// Lowercase policy name as the engine expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Annotate => "annotate",
            Policy::Redact => "redact",
            Policy::Synthetic => "synthetic",
            Policy::Placeholder => "placeholder",
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Case-insensitive; the engine only understands lowercase names
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "annotate" => Ok(Policy::Annotate),
            "redact" => Ok(Policy::Redact),
            "synthetic" => Ok(Policy::Synthetic),
            "placeholder" => Ok(Policy::Placeholder),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Annotate".parse::<Policy>().unwrap(), Policy::Annotate);
        assert_eq!("REDACT".parse::<Policy>().unwrap(), Policy::Redact);
        assert_eq!("synthetic".parse::<Policy>().unwrap(), Policy::Synthetic);
        assert_eq!("PlaceHolder".parse::<Policy>().unwrap(), Policy::Placeholder);
    }

    #[test]
    fn as_str_is_lowercase() {
        for policy in Policy::ALL {
            assert_eq!(policy.as_str(), policy.as_str().to_lowercase());
        }
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(matches!(
            "anonymize".parse::<Policy>(),
            Err(Error::InvalidPolicy(_))
        ));
    }
}
