//! Season labels and their model encoding

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Travel season. Closed set: the form offers exactly these four labels,
/// so no "unknown season" case exists downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// All seasons, in form display order
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    /// Integer encoding used by the trained model
    pub fn code(self) -> u8 {
        match self {
            Season::Winter => 0,
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Autumn => 3,
        }
    }

    /// Display label, matching the form choice text
    pub fn label(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Winter" => Ok(Season::Winter),
            "Spring" => Ok(Season::Spring),
            "Summer" => Ok(Season::Summer),
            "Autumn" => Ok(Season::Autumn),
            other => Err(Error::InvalidInput(format!("Unknown season: {}", other))),
        }
    }
}
