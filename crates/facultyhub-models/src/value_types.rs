//! Strongly-typed value types with validation for domain primitives.
//!
//! # Example
//!
//! ```ignore
//! use facultyhub_models::value_types::NationalId;
//!
//! let id: NationalId = "30101011234567".parse().unwrap();
//! assert_eq!(id.as_str(), "30101011234567");
//! assert!("123".parse::<NationalId>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a national id.
pub const NATIONAL_ID_LEN: usize = 14;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    /// The national id is not exactly 14 ASCII digits.
    InvalidNationalId(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNationalId(msg) => write!(f, "Invalid national id: {}", msg),
        }
    }
}

/// A validated national id: exactly 14 ASCII digits.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NationalId(String);

impl NationalId {
    pub fn new(id: impl Into<String>) -> Result<Self, ValueTypeError> {
        let id = id.into();
        let id = id.trim().to_string();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<(), ValueTypeError> {
        if id.len() != NATIONAL_ID_LEN {
            return Err(ValueTypeError::InvalidNationalId(format!(
                "expected {} digits, got {}",
                NATIONAL_ID_LEN,
                id.chars().count()
            )));
        }

        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValueTypeError::InvalidNationalId(format!(
                "'{}' contains non-digit characters",
                id
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NationalId({})", self.0)
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NationalId {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NationalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for NationalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
