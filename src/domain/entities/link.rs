//! Related-link candidates and the formatted links handed to the page layer.

use serde::{Deserialize, Serialize};

use super::airport::AirportRecord;
use super::flight::AirlineRecord;
use super::route::RouteCandidate;

/// Outbound internal link category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    Routes,
    Airports,
    Airlines,
    Blogs,
}

/// Whether a category can currently produce candidates at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Available,
    /// No candidate source exists yet. An empty result for such a category
    /// says nothing about whether matching entities exist.
    NotImplemented,
}

impl LinkCategory {
    /// Order used when enforcing the total link budget.
    pub const ALL: [LinkCategory; 4] = [
        LinkCategory::Routes,
        LinkCategory::Airports,
        LinkCategory::Airlines,
        LinkCategory::Blogs,
    ];

    pub fn capability(&self) -> Capability {
        match self {
            Self::Blogs => Capability::NotImplemented,
            _ => Capability::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Routes => "routes",
            Self::Airports => "airports",
            Self::Airlines => "airlines",
            Self::Blogs => "blogs",
        }
    }
}

/// A blog post that could be linked from another page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
}

/// A candidate entity tagged with its own indexing decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate<T> {
    #[serde(flatten)]
    pub entity: T,
    pub should_index: bool,
}

impl<T> Candidate<T> {
    pub fn new(entity: T, should_index: bool) -> Self {
        Self {
            entity,
            should_index,
        }
    }
}

/// Raw candidates grouped by category, before filtering and capping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedCandidates {
    pub routes: Vec<Candidate<RouteCandidate>>,
    pub airports: Vec<Candidate<AirportRecord>>,
    pub airlines: Vec<Candidate<AirlineRecord>>,
    pub blogs: Vec<Candidate<BlogPost>>,
}

/// A link ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLink {
    pub entity_id: String,
    pub href: String,
    pub anchor: String,
}

/// Filtered, capped and anchor-varied related links for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelatedLinks {
    pub routes: Vec<FormattedLink>,
    pub airports: Vec<FormattedLink>,
    pub airlines: Vec<FormattedLink>,
    pub blogs: Vec<FormattedLink>,
    /// Categories that were requested but could not be sourced.
    pub unavailable: Vec<LinkCategory>,
}

impl RelatedLinks {
    pub fn category(&self, category: LinkCategory) -> &[FormattedLink] {
        match category {
            LinkCategory::Routes => &self.routes,
            LinkCategory::Airports => &self.airports,
            LinkCategory::Airlines => &self.airlines,
            LinkCategory::Blogs => &self.blogs,
        }
    }

    pub(crate) fn category_mut(&mut self, category: LinkCategory) -> &mut Vec<FormattedLink> {
        match category {
            LinkCategory::Routes => &mut self.routes,
            LinkCategory::Airports => &mut self.airports,
            LinkCategory::Airlines => &mut self.airlines,
            LinkCategory::Blogs => &mut self.blogs,
        }
    }

    /// Number of links across all categories.
    pub fn total(&self) -> usize {
        LinkCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }
}
