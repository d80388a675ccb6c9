//! Entity roles and the link/sitemap parameters attached to them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a page in the site's link graph.
///
/// - `Hub` - airport and airline pages
/// - `Leaf` - route pages
/// - `Editorial` - blog pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityRole {
    Hub,
    Leaf,
    Editorial,
}

impl EntityRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hub => "hub",
            Self::Leaf => "leaf",
            Self::Editorial => "editorial",
        }
    }
}

impl fmt::Display for EntityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for EntityRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hub" => Ok(Self::Hub),
            "leaf" => Ok(Self::Leaf),
            "editorial" => Ok(Self::Editorial),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Static sitemap and link parameters for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub role: EntityRole,
    /// Sitemap priority on a 0-100 scale.
    pub priority: u8,
    pub max_internal_links: usize,
    pub max_external_links: usize,
}

/// Which related-link categories a role renders and how many per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkingStrategy {
    pub include_routes: bool,
    pub include_airports: bool,
    pub include_airlines: bool,
    pub include_blogs: bool,
    pub max_per_category: usize,
}

impl LinkingStrategy {
    /// Strategy that links nothing; used for unrecognised roles.
    pub fn disabled() -> Self {
        Self {
            include_routes: false,
            include_airports: false,
            include_airlines: false,
            include_blogs: false,
            max_per_category: 0,
        }
    }
}
