use serde::{Deserialize, Serialize};
use std::fmt;

/// A capability the user asked the project to have.
///
/// The set is closed, but anything else is kept verbatim in `Other` so it can
/// be echoed back into the requirements list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NeedTag {
    UserAuth,
    Database,
    Realtime,
    Files,
    Ai,
    Payments,
    Email,
    Analytics,
    Search,
    Other(String),
}

impl NeedTag {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "user_auth" => Self::UserAuth,
            "database" => Self::Database,
            "realtime" => Self::Realtime,
            "files" => Self::Files,
            "ai" => Self::Ai,
            "payments" => Self::Payments,
            "email" => Self::Email,
            "analytics" => Self::Analytics,
            "search" => Self::Search,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::UserAuth => "user_auth",
            Self::Database => "database",
            Self::Realtime => "realtime",
            Self::Files => "files",
            Self::Ai => "ai",
            Self::Payments => "payments",
            Self::Email => "email",
            Self::Analytics => "analytics",
            Self::Search => "search",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for NeedTag {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<NeedTag> for String {
    fn from(tag: NeedTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for NeedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
