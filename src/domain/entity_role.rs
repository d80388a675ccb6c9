//! Role classification of page types and the link/sitemap math derived
//! from it.

use crate::domain::entities::{EntityRole, LinkingStrategy, RoleInfo};

/// Leaf pages gain at most this much sitemap priority from quality.
const MAX_LEAF_QUALITY_BOOST: f64 = 0.2;
/// Minimum quality score for a leaf page to be listed in the sitemap.
const MIN_LEAF_SITEMAP_SCORE: u32 = 3;

const HUB: RoleInfo = RoleInfo {
    role: EntityRole::Hub,
    priority: 100,
    max_internal_links: 15,
    max_external_links: 5,
};

const LEAF: RoleInfo = RoleInfo {
    role: EntityRole::Leaf,
    priority: 50,
    max_internal_links: 8,
    max_external_links: 2,
};

const EDITORIAL: RoleInfo = RoleInfo {
    role: EntityRole::Editorial,
    priority: 75,
    max_internal_links: 10,
    max_external_links: 3,
};

/// Maps a page type to its role. Unknown page types are leaves.
pub fn get_entity_role(page_type: &str) -> EntityRole {
    match page_type {
        "airport" | "airline" => EntityRole::Hub,
        "route" => EntityRole::Leaf,
        "blog" => EntityRole::Editorial,
        _ => EntityRole::Leaf,
    }
}

/// Static parameters for a role.
pub fn role_info(role: EntityRole) -> RoleInfo {
    match role {
        EntityRole::Hub => HUB,
        EntityRole::Leaf => LEAF,
        EntityRole::Editorial => EDITORIAL,
    }
}

/// Static parameters for the role of a page type.
pub fn get_role_info(page_type: &str) -> RoleInfo {
    role_info(get_entity_role(page_type))
}

/// Sitemap priority in `0.0..=1.0`.
///
/// Only leaves are boosted by quality, by `score / 10` capped at 0.2.
pub fn get_sitemap_priority(role: EntityRole, quality_score: u32) -> f64 {
    let base = f64::from(role_info(role).priority) / 100.0;

    match role {
        EntityRole::Leaf => {
            let boost = (f64::from(quality_score) / 10.0).min(MAX_LEAF_QUALITY_BOOST);
            (base + boost).min(1.0)
        }
        EntityRole::Hub | EntityRole::Editorial => base,
    }
}

/// Whether a page belongs in the sitemap.
pub fn should_include_in_sitemap(role: EntityRole, should_index: bool, quality_score: u32) -> bool {
    if !should_index {
        return false;
    }

    match role {
        EntityRole::Hub | EntityRole::Editorial => true,
        EntityRole::Leaf => quality_score >= MIN_LEAF_SITEMAP_SCORE,
    }
}

/// Related-link categories and per-category cap for a role.
pub fn get_linking_strategy(role: EntityRole) -> LinkingStrategy {
    match role {
        EntityRole::Hub => LinkingStrategy {
            include_routes: true,
            include_airports: true,
            include_airlines: true,
            include_blogs: true,
            max_per_category: 6,
        },
        EntityRole::Leaf => LinkingStrategy {
            include_routes: false,
            include_airports: true,
            include_airlines: true,
            include_blogs: true,
            max_per_category: 4,
        },
        EntityRole::Editorial => LinkingStrategy {
            include_routes: true,
            include_airports: true,
            include_airlines: true,
            include_blogs: true,
            max_per_category: 3,
        },
    }
}

/// Strategy for a role given by name; unknown names link nothing.
pub fn get_linking_strategy_by_name(role: &str) -> LinkingStrategy {
    role.parse::<EntityRole>()
        .map(get_linking_strategy)
        .unwrap_or_else(|_| LinkingStrategy::disabled())
}
