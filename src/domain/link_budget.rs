//! Related-link budgets and anchor-text variation.
//!
//! Every page type has a per-category link limit and a total budget. Links
//! are selected from indexable candidates only, formatted with rotating
//! anchor templates so that a hub's many outbound links do not all share
//! the same phrasing, and finally truncated to the page's total budget.

use crate::domain::entities::{
    AirlineRecord, AirportRecord, BlogPost, Candidate, Capability, FormattedLink, LinkCategory,
    RelatedCandidates, RelatedLinks, RouteCandidate, route_page_url,
};
use crate::domain::entity_role::{get_entity_role, get_linking_strategy, role_info};

/// Per-category and total link limits for a page type.
///
/// A `None` category is not linked from that page type at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkLimits {
    pub routes: Option<usize>,
    pub airports: Option<usize>,
    pub airlines: Option<usize>,
    pub blogs: Option<usize>,
    pub max_total: usize,
}

impl LinkLimits {
    pub fn for_category(&self, category: LinkCategory) -> Option<usize> {
        match category {
            LinkCategory::Routes => self.routes,
            LinkCategory::Airports => self.airports,
            LinkCategory::Airlines => self.airlines,
            LinkCategory::Blogs => self.blogs,
        }
    }
}

/// Link limits table keyed by page type.
pub const LINK_LIMITS: [(&str, LinkLimits); 4] = [
    (
        "airport",
        LinkLimits {
            routes: Some(6),
            airports: None,
            airlines: Some(6),
            blogs: Some(3),
            max_total: 20,
        },
    ),
    (
        "route",
        LinkLimits {
            routes: None,
            airports: Some(2),
            airlines: Some(4),
            blogs: Some(1),
            max_total: 8,
        },
    ),
    (
        "airline",
        LinkLimits {
            routes: Some(8),
            airports: Some(5),
            airlines: None,
            blogs: Some(3),
            max_total: 15,
        },
    ),
    (
        "blog",
        LinkLimits {
            routes: Some(3),
            airports: Some(3),
            airlines: Some(3),
            blogs: Some(3),
            max_total: 12,
        },
    ),
];

/// Looks up the limits of a page type.
pub fn link_limits(page_type: &str) -> Option<LinkLimits> {
    LINK_LIMITS
        .iter()
        .find(|(name, _)| *name == page_type)
        .map(|(_, limits)| *limits)
}

/// Keeps indexable candidates only, preserving order, up to `limit`.
pub fn select_indexable<T>(candidates: Vec<Candidate<T>>, limit: usize) -> Vec<Candidate<T>> {
    candidates
        .into_iter()
        .filter(|c| c.should_index)
        .take(limit)
        .collect()
}

type Template<T> = fn(&T) -> String;

fn route_to(r: &RouteCandidate) -> String {
    format!("{} to {}", r.origin_iata, r.destination_iata)
}

fn route_dash(r: &RouteCandidate) -> String {
    format!("{}-{}", r.origin_iata, r.destination_iata)
}

fn route_arrow(r: &RouteCandidate) -> String {
    format!("{} → {}", r.origin_iata, r.destination_iata)
}

fn route_to_city(r: &RouteCandidate) -> String {
    match r.destination_city.as_deref() {
        Some(city) if !city.is_empty() => {
            format!("{} to {} ({})", r.origin_iata, r.destination_iata, city)
        }
        _ => route_to(r),
    }
}

fn route_flights_from(r: &RouteCandidate) -> String {
    format!("Flights from {} to {}", r.origin_iata, r.destination_iata)
}

const ROUTE_ANCHORS: [Template<RouteCandidate>; 5] = [
    route_to,
    route_dash,
    route_arrow,
    route_to_city,
    route_flights_from,
];

fn city_of(a: &AirportRecord) -> Option<&str> {
    a.city.as_deref().filter(|c| !c.is_empty())
}

fn airport_name_code(a: &AirportRecord) -> String {
    format!("{} ({})", a.name, a.iata)
}

fn airport_city_airport(a: &AirportRecord) -> String {
    match city_of(a) {
        Some(city) => format!("{city} airport"),
        None => format!("{} airport", a.iata),
    }
}

fn airport_flights_from(a: &AirportRecord) -> String {
    match city_of(a) {
        Some(city) => format!("Flights from {city}"),
        None => format!("Flights from {}", a.iata),
    }
}

fn airport_name_city(a: &AirportRecord) -> String {
    match city_of(a) {
        Some(city) => format!("{}, {}", a.name, city),
        None => a.name.clone(),
    }
}

const AIRPORT_ANCHORS: [Template<AirportRecord>; 4] = [
    airport_name_code,
    airport_city_airport,
    airport_flights_from,
    airport_name_city,
];

fn code_of(a: &AirlineRecord) -> Option<&str> {
    Some(a.code.as_str()).filter(|c| !c.is_empty())
}

fn airline_name(a: &AirlineRecord) -> String {
    a.name.clone()
}

fn airline_name_code(a: &AirlineRecord) -> String {
    match code_of(a) {
        Some(code) => format!("{} ({})", a.name, code),
        None => format!("{} flights", a.name),
    }
}

fn airline_fly_with(a: &AirlineRecord) -> String {
    format!("Fly with {}", a.name)
}

fn airline_code_flights(a: &AirlineRecord) -> String {
    match code_of(a) {
        Some(code) => format!("{code} flights"),
        None => format!("{} airline", a.name),
    }
}

const AIRLINE_ANCHORS: [Template<AirlineRecord>; 4] = [
    airline_name,
    airline_name_code,
    airline_fly_with,
    airline_code_flights,
];

fn rotate<T>(templates: &[Template<T>], entity: &T, index: usize) -> String {
    templates[index % templates.len()](entity)
}

/// Anchor text for the `index`-th route link on a page.
pub fn format_route_anchor(route: &RouteCandidate, index: usize) -> String {
    rotate(&ROUTE_ANCHORS, route, index)
}

/// Anchor text for the `index`-th airport link on a page.
pub fn format_airport_anchor(airport: &AirportRecord, index: usize) -> String {
    rotate(&AIRPORT_ANCHORS, airport, index)
}

/// Anchor text for the `index`-th airline link on a page.
pub fn format_airline_anchor(airline: &AirlineRecord, index: usize) -> String {
    rotate(&AIRLINE_ANCHORS, airline, index)
}

fn route_link(route: &RouteCandidate, index: usize) -> FormattedLink {
    FormattedLink {
        entity_id: format!("{}-{}", route.origin_iata, route.destination_iata),
        href: route_page_url(&route.origin_iata, &route.destination_iata),
        anchor: format_route_anchor(route, index),
    }
}

fn airport_link(airport: &AirportRecord, index: usize) -> FormattedLink {
    FormattedLink {
        entity_id: airport.iata.clone(),
        href: airport.page_url(),
        anchor: format_airport_anchor(airport, index),
    }
}

fn airline_link(airline: &AirlineRecord, index: usize) -> FormattedLink {
    FormattedLink {
        entity_id: airline.code.clone(),
        href: format!("/airlines/{}", airline.code.to_ascii_lowercase()),
        anchor: format_airline_anchor(airline, index),
    }
}

fn blog_link(post: &BlogPost, _index: usize) -> FormattedLink {
    FormattedLink {
        entity_id: post.slug.clone(),
        href: format!("/blog/{}", post.slug),
        anchor: post.title.clone(),
    }
}

fn format_category<T>(
    candidates: &[Candidate<T>],
    cap: usize,
    format: fn(&T, usize) -> FormattedLink,
) -> Vec<FormattedLink> {
    candidates
        .iter()
        .filter(|c| c.should_index)
        .take(cap)
        .enumerate()
        .map(|(index, c)| format(&c.entity, index))
        .collect()
}

/// Effective per-category caps and total budget for a page type.
///
/// A category is linked only if the page's role includes it. The cap comes
/// from [`LINK_LIMITS`] when the page type has an entry there, otherwise
/// from the role's `max_per_category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkBudget {
    pub routes: usize,
    pub airports: usize,
    pub airlines: usize,
    pub blogs: usize,
    pub max_total: usize,
}

impl LinkBudget {
    pub fn for_page_type(page_type: &str) -> Self {
        let role = get_entity_role(page_type);
        let strategy = get_linking_strategy(role);
        let limits = link_limits(page_type);

        let cap = |category: LinkCategory, included: bool| -> usize {
            if !included {
                return 0;
            }
            match limits {
                Some(limits) => limits.for_category(category).unwrap_or(0),
                None => strategy.max_per_category,
            }
        };

        Self {
            routes: cap(LinkCategory::Routes, strategy.include_routes),
            airports: cap(LinkCategory::Airports, strategy.include_airports),
            airlines: cap(LinkCategory::Airlines, strategy.include_airlines),
            blogs: cap(LinkCategory::Blogs, strategy.include_blogs),
            max_total: limits
                .map(|l| l.max_total)
                .unwrap_or_else(|| role_info(role).max_internal_links),
        }
    }

    pub fn for_category(&self, category: LinkCategory) -> usize {
        match category {
            LinkCategory::Routes => self.routes,
            LinkCategory::Airports => self.airports,
            LinkCategory::Airlines => self.airlines,
            LinkCategory::Blogs => self.blogs,
        }
    }
}

/// Filters, caps and formats related links for a page, then enforces the
/// page type's total link budget.
pub fn build_related_links(page_type: &str, candidates: &RelatedCandidates) -> RelatedLinks {
    let budget = LinkBudget::for_page_type(page_type);
    let mut links = RelatedLinks::default();

    for category in LinkCategory::ALL {
        let cap = budget.for_category(category);
        if cap == 0 {
            continue;
        }
        if category.capability() == Capability::NotImplemented {
            links.unavailable.push(category);
            continue;
        }

        *links.category_mut(category) = match category {
            LinkCategory::Routes => format_category(&candidates.routes, cap, route_link),
            LinkCategory::Airports => format_category(&candidates.airports, cap, airport_link),
            LinkCategory::Airlines => format_category(&candidates.airlines, cap, airline_link),
            LinkCategory::Blogs => format_category(&candidates.blogs, cap, blog_link),
        };
    }

    enforce_max_total(&mut links, budget.max_total);
    links
}

/// Truncates links to `max_total`, keeping categories in
/// routes, airports, airlines, blogs order.
pub fn enforce_max_total(links: &mut RelatedLinks, max_total: usize) {
    let mut remaining = max_total;
    for category in LinkCategory::ALL {
        let category_links = links.category_mut(category);
        category_links.truncate(remaining);
        remaining -= category_links.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(dest: &str, indexable: bool) -> Candidate<RouteCandidate> {
        Candidate::new(RouteCandidate::new("DEL", dest, indexable), indexable)
    }

    fn airport(iata: &str) -> Candidate<AirportRecord> {
        let mut record = AirportRecord::new(iata, format!("{iata} International"));
        record.city = Some(format!("{iata} City"));
        Candidate::new(record, true)
    }

    fn airline(code: &str) -> Candidate<AirlineRecord> {
        Candidate::new(AirlineRecord::new(code, format!("{code} Air")), true)
    }

    #[test]
    fn test_route_anchor_cycles_through_five_templates() {
        let r = RouteCandidate::new("DEL", "BOM", true).with_destination_city("Mumbai");
        let expected = [
            "DEL to BOM",
            "DEL-BOM",
            "DEL → BOM",
            "DEL to BOM (Mumbai)",
            "Flights from DEL to BOM",
        ];

        for i in 0..10 {
            assert_eq!(format_route_anchor(&r, i), expected[i % 5]);
        }
    }

    #[test]
    fn test_route_anchor_without_city() {
        let r = RouteCandidate::new("DEL", "GOI", true);
        assert_eq!(format_route_anchor(&r, 3), "DEL to GOI");
    }

    #[test]
    fn test_airport_anchor_variants() {
        let mut a = AirportRecord::new("BOM", "Chhatrapati Shivaji Maharaj");
        a.city = Some("Mumbai".to_string());

        assert_eq!(format_airport_anchor(&a, 0), "Chhatrapati Shivaji Maharaj (BOM)");
        assert_eq!(format_airport_anchor(&a, 1), "Mumbai airport");
        assert_eq!(format_airport_anchor(&a, 2), "Flights from Mumbai");
        assert_eq!(format_airport_anchor(&a, 3), "Chhatrapati Shivaji Maharaj, Mumbai");
        assert_eq!(format_airport_anchor(&a, 4), format_airport_anchor(&a, 0));

        a.city = None;
        assert_eq!(format_airport_anchor(&a, 1), "BOM airport");
        assert_eq!(format_airport_anchor(&a, 2), "Flights from BOM");
        assert_eq!(format_airport_anchor(&a, 3), "Chhatrapati Shivaji Maharaj");
    }

    #[test]
    fn test_airline_anchor_variants() {
        let a = AirlineRecord::new("6E", "IndiGo");
        assert_eq!(format_airline_anchor(&a, 0), "IndiGo");
        assert_eq!(format_airline_anchor(&a, 1), "IndiGo (6E)");
        assert_eq!(format_airline_anchor(&a, 2), "Fly with IndiGo");
        assert_eq!(format_airline_anchor(&a, 3), "6E flights");

        let no_code = AirlineRecord::new("", "Star Air");
        assert_eq!(format_airline_anchor(&no_code, 1), "Star Air flights");
        assert_eq!(format_airline_anchor(&no_code, 3), "Star Air airline");
    }

    #[test]
    fn test_select_indexable() {
        let candidates = vec![
            route("BOM", true),
            route("GOI", false),
            route("BLR", true),
            route("MAA", true),
        ];

        let selected = select_indexable(candidates, 2);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|c| c.should_index));
        assert_eq!(selected[1].entity.destination_iata, "BLR");
    }

    #[test]
    fn test_budget_for_page_types() {
        let airport = LinkBudget::for_page_type("airport");
        assert_eq!(
            (airport.routes, airport.airports, airport.airlines, airport.blogs, airport.max_total),
            (6, 0, 6, 3, 20)
        );

        let route = LinkBudget::for_page_type("route");
        assert_eq!(
            (route.routes, route.airports, route.airlines, route.blogs, route.max_total),
            (0, 2, 4, 1, 8)
        );

        let airline = LinkBudget::for_page_type("airline");
        assert_eq!((airline.routes, airline.airports, airline.max_total), (8, 5, 15));

        // no limits entry: role strategy applies
        let airline_route = LinkBudget::for_page_type("airline-route");
        assert_eq!(
            (airline_route.routes, airline_route.airports, airline_route.max_total),
            (0, 4, 8)
        );
    }

    #[test]
    fn test_build_related_links_filters_and_caps() {
        let candidates = RelatedCandidates {
            routes: (0..10)
                .map(|i| route(&format!("X{i:02}"), i % 3 != 0))
                .collect(),
            airports: vec![airport("BOM")],
            airlines: (0..8).map(|i| airline(&format!("A{i}"))).collect(),
            blogs: vec![],
        };

        let links = build_related_links("airport", &candidates);

        assert_eq!(links.routes.len(), 6);
        assert!(links.routes.iter().all(|l| l.entity_id != "DEL-X00"));
        assert!(links.airports.is_empty());
        assert_eq!(links.airlines.len(), 6);
        assert_eq!(links.unavailable, vec![LinkCategory::Blogs]);

        assert_eq!(links.routes[0].anchor, "DEL to X01");
        assert_eq!(links.routes[1].anchor, "DEL-X02");
        assert_eq!(links.routes[0].href, "/flights/del-x01");
        assert_eq!(links.airlines[0].href, "/airlines/a0");
    }

    #[test]
    fn test_build_related_links_enforces_max_total() {
        let candidates = RelatedCandidates {
            routes: (0..20).map(|i| route(&format!("R{i:02}"), true)).collect(),
            airports: (0..20).map(|i| airport(&format!("P{i:02}"))).collect(),
            airlines: (0..20).map(|i| airline(&format!("L{i}"))).collect(),
            blogs: vec![],
        };

        for (page_type, limits) in LINK_LIMITS {
            let links = build_related_links(page_type, &candidates);
            assert!(
                links.total() <= limits.max_total,
                "{page_type}: {} > {}",
                links.total(),
                limits.max_total
            );
        }

        // airline pages: 8 routes + 5 airports would exceed 15 only with
        // blogs, which are unavailable, so all 13 fit
        let airline_links = build_related_links("airline", &candidates);
        assert_eq!(airline_links.routes.len(), 8);
        assert_eq!(airline_links.airports.len(), 5);
        assert_eq!(airline_links.total(), 13);

        for page_type in ["airline-route", "airline-airport", "unknown"] {
            let links = build_related_links(page_type, &candidates);
            assert!(links.total() <= 8, "{page_type}");
        }
    }

    #[test]
    fn test_enforce_max_total_keeps_earlier_categories() {
        let link = |id: &str| FormattedLink {
            entity_id: id.to_string(),
            href: format!("/x/{id}"),
            anchor: id.to_string(),
        };
        let mut links = RelatedLinks {
            routes: (0..5).map(|i| link(&format!("r{i}"))).collect(),
            airports: (0..5).map(|i| link(&format!("p{i}"))).collect(),
            airlines: (0..5).map(|i| link(&format!("l{i}"))).collect(),
            blogs: (0..5).map(|i| link(&format!("b{i}"))).collect(),
            unavailable: vec![],
        };

        enforce_max_total(&mut links, 12);

        assert_eq!(links.total(), 12);
        assert_eq!(links.routes.len(), 5);
        assert_eq!(links.airports.len(), 5);
        assert_eq!(links.airlines.len(), 2);
        assert!(links.blogs.is_empty());
        assert_eq!(links.airlines[1].entity_id, "l1");
    }

    #[test]
    fn test_blog_page_links_three_per_category() {
        let candidates = RelatedCandidates {
            routes: (0..20).map(|i| route(&format!("R{i:02}"), true)).collect(),
            airports: (0..20).map(|i| airport(&format!("P{i:02}"))).collect(),
            airlines: (0..20).map(|i| airline(&format!("L{i}"))).collect(),
            blogs: vec![],
        };

        // blog pages: 3 per category, total 12, so nothing is cut
        let blog = build_related_links("blog", &candidates);
        assert_eq!(blog.routes.len(), 3);
        assert_eq!(blog.airports.len(), 3);
        assert_eq!(blog.airlines.len(), 3);
        assert_eq!(blog.unavailable, vec![LinkCategory::Blogs]);
    }
}
