//! Cursor pagination.
//!
//! Deel list endpoints hand out an opaque cursor with every page. A
//! [`Paginator`] walks that chain either one step, returning the page and its
//! continuation cursor, or exhaustively, returning every item. Exhaustive
//! walks are bounded by [`MAX_PAGES`] and are all-or-nothing: an error on any
//! page discards everything fetched so far.

use std::future::Future;

use deel_api_model::{Paginated, Pagination};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Upper bound on the number of pages fetched by one aggregating walk.
pub const MAX_PAGES: usize = 100;

/// One fetched page, independent of the resource it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `None` on the last page. Never `Some("")`.
    pub next_cursor: Option<String>,
    /// Server-reported total across all pages. `None` or `Some(0)` when
    /// unknown.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(
        items: Vec<T>,
        next_cursor: Option<String>,
        total: Option<u64>,
    ) -> Self {
        Self {
            items,
            next_cursor: non_empty(next_cursor),
            total,
        }
    }
}

impl<T> From<Paginated<T>> for Page<T> {
    fn from(value: Paginated<T>) -> Self {
        let next_cursor = value.page.next_cursor().map(ToOwned::to_owned);
        Page {
            items: value.data,
            next_cursor,
            total: value.page.total_rows,
        }
    }
}

/// The outcome of [`Paginator::aggregate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregated<T> {
    pub items: Vec<T>,
    /// Last non-zero total reported by any fetched page, 0 if none did.
    pub total: u64,
    /// Whether pages remain after the one returned. Always false when
    /// aggregating.
    pub has_more: bool,
    /// Cursor of the next page when `has_more` is set.
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "Pagination safety limit reached: stopped after fetching {max_pages} \
     pages. Use --limit and --cursor to paginate manually instead of --all."
)]
pub struct SafetyLimitExceeded {
    pub max_pages: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    max_pages: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            max_pages: MAX_PAGES,
        }
    }
}

impl Paginator {
    #[cfg(test)]
    pub(crate) fn with_max_pages(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Fetches one page (`aggregate_all == false`) or every page reachable
    /// from `start_cursor` (`aggregate_all == true`).
    ///
    /// `fetch_page` receives the cursor to fetch (`None` for the first page)
    /// and `page_size`, which is passed through untouched. Pages are fetched
    /// strictly one after the other. Any error from `fetch_page` is returned
    /// as is; running into the page limit while a cursor remains fails with
    /// [`SafetyLimitExceeded`]. In both cases no items are returned.
    pub async fn aggregate<T, E, F, Fut>(
        &self,
        mut fetch_page: F,
        aggregate_all: bool,
        start_cursor: Option<String>,
        page_size: u32,
    ) -> Result<Aggregated<T>, E>
    where
        F: FnMut(Option<String>, u32) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>>,
        E: From<SafetyLimitExceeded>,
    {
        let mut cursor = non_empty(start_cursor);
        let mut items = Vec::new();
        let mut total = 0;
        let mut pages_fetched = 0;

        loop {
            let Page {
                items: page_items,
                next_cursor,
                total: page_total,
            } = fetch_page(cursor.take(), page_size).await?;
            pages_fetched += 1;
            let next_cursor = non_empty(next_cursor);
            debug!(
                page = pages_fetched,
                items = page_items.len(),
                has_next = next_cursor.is_some(),
                "Fetched page"
            );

            if !aggregate_all {
                return Ok(Aggregated {
                    items: page_items,
                    total: page_total.unwrap_or_default(),
                    has_more: next_cursor.is_some(),
                    next_cursor,
                });
            }

            items.extend(page_items);
            if let Some(page_total) = page_total.filter(|t| *t > 0) {
                total = page_total;
            }

            match next_cursor {
                | None => {
                    return Ok(Aggregated {
                        items,
                        total,
                        has_more: false,
                        next_cursor: None,
                    });
                }
                | Some(_) if pages_fetched >= self.max_pages => {
                    warn!(
                        max_pages = self.max_pages,
                        "Pagination safety limit reached, discarding {} items",
                        items.len()
                    );
                    return Err(SafetyLimitExceeded {
                        max_pages: self.max_pages,
                    }
                    .into());
                }
                | next => cursor = next,
            }
        }
    }
}

/// Appends the pagination query pairs of a list request to `url`.
pub(crate) fn append_pagination(url: &mut Url, pagination: &Pagination) {
    if let Some(ref cursor) = pagination.cursor {
        url.query_pairs_mut().append_pair("after_cursor", cursor);
    }
    if let Some(limit) = pagination.limit {
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
    }
}

fn non_empty(cursor: Option<String>) -> Option<String> {
    cursor.filter(|c| !c.is_empty())
}
