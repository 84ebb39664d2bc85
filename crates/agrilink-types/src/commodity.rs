use serde::{Deserialize, Serialize};
use std::fmt;

/// Agricultural product name (e.g. "Rice")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commodity(String);

impl Commodity {
    pub fn new(name: impl Into<String>) -> Self {
        Commodity(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Commodity {
    fn from(s: String) -> Self {
        Commodity(s)
    }
}

impl From<&str> for Commodity {
    fn from(s: &str) -> Self {
        Commodity(s.to_string())
    }
}
