//! ID types for teams and players.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short team identifier (e.g. `BOS`) shared by team and player records.
///
/// Players are linked to their team only through this code, so equality is
/// exact: no case folding, no trimming.
///
/// # Examples
///
/// ```rust
/// use nba_rosters::TeamCode;
///
/// let code = TeamCode::new("BOS");
/// assert_eq!(code.as_str(), "BOS");
/// assert_eq!(code.to_string(), "BOS");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCode(pub String);

impl TeamCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
