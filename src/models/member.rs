//! Weblog membership models.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a user holds on a weblog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeblogRole {
    Owner,
    Post,
    EditDraft,
    /// Sent in a bulk update to drop the member from the weblog
    #[serde(rename = "NOBLOGNEEDED")]
    NoBlogNeeded,
}

impl WeblogRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeblogRole::Owner => "OWNER",
            WeblogRole::Post => "POST",
            WeblogRole::EditDraft => "EDIT_DRAFT",
            WeblogRole::NoBlogNeeded => "NOBLOGNEEDED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "OWNER" => Some(WeblogRole::Owner),
            "POST" => Some(WeblogRole::Post),
            "EDIT_DRAFT" => Some(WeblogRole::EditDraft),
            "NOBLOGNEEDED" => Some(WeblogRole::NoBlogNeeded),
            _ => None,
        }
    }
}

impl fmt::Display for WeblogRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current membership of a weblog: user id to role.
pub type RoleMap = BTreeMap<String, WeblogRole>;

/// Users who may be added to a weblog: user id to display label.
///
/// Ordered, so the first entry is a stable default selection.
pub type PotentialMembers = BTreeMap<String, String>;
