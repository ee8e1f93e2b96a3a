//! Concierge recommendation matcher: a case-insensitive keyword substring
//! filter over the catalog, shuffled for variety and capped. This is a
//! stand-in for ranked search, not a ranking engine.

use rand::seq::SliceRandom;
use serde::Serialize;

use crate::domain::catalog_item::{Product, WellnessService};

/// Result cap, so the recommendation grid is never saturated.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// A matched catalog entry tagged with its origin kind. The kind only picks
/// the rendering path downstream.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecommendationItem {
    Service(WellnessService),
    Product(Product),
}

impl RecommendationItem {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Service(_) => "service",
            Self::Product(_) => "product",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Service(service) => &service.name,
            Self::Product(product) => &product.name,
        }
    }
}

fn keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

fn matches_any(keywords: &[String], name: &str, description: &str, category: &str) -> bool {
    let haystack = format!(
        "{} {} {}",
        name.to_lowercase(),
        description.to_lowercase(),
        category.to_lowercase()
    );
    keywords.iter().any(|keyword| haystack.contains(keyword.as_str()))
}

/// Matches free-text preferences against both catalogs.
///
/// Entries survive when any keyword is a literal substring of the entry's
/// combined name, description, and category ("spa" matches inside
/// "espacio"). Survivors are shuffled uniformly at random and truncated to
/// [`MAX_RECOMMENDATIONS`], so identical inputs may return different
/// orderings across calls. Total: an empty or unmatched query yields an
/// empty list, never an error.
pub fn recommend(
    query: &str,
    services: &[WellnessService],
    products: &[Product],
) -> Vec<RecommendationItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let keywords = keywords(query);
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut matched: Vec<RecommendationItem> = services
        .iter()
        .filter(|service| {
            matches_any(&keywords, &service.name, &service.description, &service.category)
        })
        .cloned()
        .map(RecommendationItem::Service)
        .collect();

    matched.extend(
        products
            .iter()
            .filter(|product| {
                matches_any(&keywords, &product.name, &product.description, &product.category)
            })
            .cloned()
            .map(RecommendationItem::Product),
    );

    matched.shuffle(&mut rand::thread_rng());
    matched.truncate(MAX_RECOMMENDATIONS);
    matched
}
