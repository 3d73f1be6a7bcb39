use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker character of a journal entry.  `!` flags an entry that still needs
/// review; anything else is routine.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Flag {
    Okay,
    Warning,
    Other(String),
}

impl Flag {
    pub fn is_warning(&self) -> bool {
        *self == Flag::Warning
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::Okay
    }
}

impl From<&str> for Flag {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<String> for Flag {
    fn from(s: String) -> Self {
        match &*s {
            "*" | "txn" => Flag::Okay,
            "!" => Flag::Warning,
            _ => Flag::Other(s),
        }
    }
}

impl From<Flag> for String {
    fn from(flag: Flag) -> Self {
        flag.to_string()
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Okay => write!(f, "*"),
            Flag::Warning => write!(f, "!"),
            Flag::Other(s) => write!(f, "{}", s),
        }
    }
}
