use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported naming cases.
///
/// Values come straight from `gqlforge.json` (`convertCaseFile`, `convertCaseEntity`,
/// `convertCaseProperty`) and from CLI flags, so an unknown spelling is rejected at
/// parse time instead of silently falling back to some default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum NameCase {
    /// `userAccount`
    Camel,
    /// `user-account`
    Param,
    /// `UserAccount`
    Pascal,
    /// `user_account`
    Snake,
    /// Identifier is left untouched.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case style '{0}' (expected one of: camel, param, pascal, snake, none)")]
pub struct UnknownNameCase(pub String);

impl NameCase {
    pub const ALL: [NameCase; 5] = [
        NameCase::Camel,
        NameCase::Param,
        NameCase::Pascal,
        NameCase::Snake,
        NameCase::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NameCase::Camel => "camel",
            NameCase::Param => "param",
            NameCase::Pascal => "pascal",
            NameCase::Snake => "snake",
            NameCase::None => "none",
        }
    }
}

impl FromStr for NameCase {
    type Err = UnknownNameCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameCase::ALL
            .into_iter()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| UnknownNameCase(s.to_string()))
    }
}

impl fmt::Display for NameCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
