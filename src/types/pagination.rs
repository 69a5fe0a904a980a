use std::collections::HashMap;

/// Page size used by every question listing endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination struct that is getting extracted from query params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// 1-indexed page over the ordered question list.
    pub page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination { page: 1 }
    }
}

/// Extract the `page` parameter from the `/questions` path query.
/// A missing, non-numeric or zero value falls back to page 1; a bad page is
/// never an error.
/// # Example query
/// GET requests to this route can have a pagination attached so we just
/// return the questions we need:
/// `/questions?page=2`
pub fn extract_pagination(params: &HashMap<String, String>) -> Pagination {
    let page = params
        .get("page")
        .and_then(|page| page.parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1);

    Pagination { page }
}

/// Return the contiguous window of `items` for the given 1-indexed page.
/// A page past the end yields an empty slice, not an error.
pub fn paginate<T>(items: &[T], page: u32, per_page: usize) -> &[T] {
    let start = (page.saturating_sub(1) as usize).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}
