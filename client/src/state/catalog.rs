//! Catalog view state and the pure selections pages render from it.
//!
//! DESIGN
//! ======
//! Pages never inspect "is the list empty?" to decide whether data is still
//! arriving. Post-mount loads carry an explicit `CatalogLoad`, and detail
//! lookups return a tagged `Detail` so "still loading" and "no such toy" are
//! distinct states.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::catalog::CatalogError;
use crate::net::types::CatalogItem;

/// Number of entries on the popular-toys page.
pub const POPULAR_LIMIT: usize = 8;
/// Number of related toys shown under a detail view.
pub const RELATED_LIMIT: usize = 3;

/// Post-mount catalog load state. Failures settle as `Ready` with no items.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogLoad {
    #[default]
    Loading,
    Ready(Vec<CatalogItem>),
}

impl CatalogLoad {
    /// Settle a finished fetch. Any failure is logged and yields an empty catalog.
    pub fn from_result(result: Result<Vec<CatalogItem>, CatalogError>) -> Self {
        let items = result.unwrap_or_else(|e| {
            log::error!("catalog fetch failed: {e}");
            Vec::new()
        });
        Self::Ready(items)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded items, or an empty slice while loading.
    pub fn items(&self) -> &[CatalogItem] {
        match self {
            Self::Loading => &[],
            Self::Ready(items) => items,
        }
    }
}

/// Outcome of looking up one toy for the detail view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Detail<'a> {
    Loading,
    Found(&'a CatalogItem),
    NotFound,
}

/// True when a route parameter names the given numeric id.
///
/// The parameter is compared numerically, so `"7"`, `" 7 "`, `"07"` and
/// `"7.0"` all match id 7. Blank or non-numeric parameters never match.
/// Only decimal notation is accepted; `"0x7"` and other radix forms do not match.
#[allow(clippy::cast_precision_loss)]
pub fn id_matches(toy_id: u64, requested: &str) -> bool {
    let requested = requested.trim();
    if requested.is_empty() {
        return false;
    }
    if let Ok(int) = requested.parse::<u64>() {
        return int == toy_id;
    }
    requested
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite() && value == toy_id as f64)
}

/// Select the record a detail route asks for.
///
/// `None` for the catalog means it has not arrived yet. When several records
/// share an id the first one in catalog order wins.
pub fn resolve_detail<'a>(catalog: Option<&'a [CatalogItem]>, requested: &str) -> Detail<'a> {
    let Some(items) = catalog else {
        return Detail::Loading;
    };
    items
        .iter()
        .find(|item| id_matches(item.toy_id, requested))
        .map_or(Detail::NotFound, Detail::Found)
}

/// Up to `limit` other toys from the same sub-category, in catalog order.
pub fn related_items<'a>(catalog: &'a [CatalogItem], current: &CatalogItem, limit: usize) -> Vec<&'a CatalogItem> {
    catalog
        .iter()
        .filter(|item| item.toy_id != current.toy_id && item.sub_category == current.sub_category)
        .take(limit)
        .collect()
}

/// The `limit` best-rated toys, highest first. Equal ratings keep catalog order.
pub fn popular_toys(catalog: &[CatalogItem], limit: usize) -> Vec<&CatalogItem> {
    let mut ranked: Vec<&CatalogItem> = catalog.iter().collect();
    ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    ranked.truncate(limit);
    ranked
}

/// Summary numbers shown above the popular-toys ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    /// Mean rating; `None` for an empty catalog.
    pub average_rating: Option<f64>,
    /// Count of distinct sub-categories.
    pub categories: usize,
}

impl CatalogStats {
    pub fn from_items(items: &[CatalogItem]) -> Self {
        let total = items.len();
        #[allow(clippy::cast_precision_loss)]
        let average_rating = (total > 0).then(|| items.iter().map(|item| item.rating).sum::<f64>() / total as f64);
        let categories = items
            .iter()
            .map(|item| item.sub_category.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();
        Self { total, average_rating, categories }
    }

    /// Average rating with one decimal, or `"-"` when there is nothing to average.
    pub fn average_label(&self) -> String {
        self.average_rating.map_or_else(|| "-".to_owned(), |avg| format!("{avg:.1}"))
    }
}

/// Number of filled stars (0 to 5) for a rating.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn filled_stars(rating: f64) -> usize {
    if !rating.is_finite() {
        return 0;
    }
    rating.floor().clamp(0.0, 5.0) as usize
}
