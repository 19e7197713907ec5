//! Page selection and the pagination metadata returned with every listing.

use actor_store::PageRequest;
use serde::{Deserialize, Serialize};

use super::product::Product;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Requested 1-based page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Store window: `skip = (page - 1) * limit`, `take = limit`.
    pub fn window(&self) -> PageRequest {
        PageRequest::for_page(self.page, self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub limit: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    /// Metadata for `params` over `total` matching records.
    ///
    /// The requested page is reported as-is, even past the last page.
    pub fn new(total: usize, params: PageParams) -> Self {
        let total_pages = if params.limit == 0 {
            0
        } else {
            total.div_ceil(params.limit)
        };
        Self {
            total,
            total_pages,
            current_page: params.page,
            limit: params.limit,
            has_next_page: params.page < total_pages,
            has_previous_page: params.page > 1,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub pagination: Pagination,
}
