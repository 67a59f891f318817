use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cascade priority tier of a property.
///
/// The rank order must match the order in `CSSPropertyPriority.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Animation,
    High,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Priority::Animation => 0,
            Priority::High => 1,
            Priority::Low => 2,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Animation" => Ok(Priority::Animation),
            "High" => Ok(Priority::High),
            "Low" => Ok(Priority::Low),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Animation => write!(f, "Animation"),
            Priority::High => write!(f, "High"),
            Priority::Low => write!(f, "Low"),
        }
    }
}
