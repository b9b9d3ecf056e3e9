use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Rows per page on every dashboard table.
pub const DEFAULT_PAGE_SIZE: u32 = 8;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

pub(crate) fn default_page() -> u32 {
    1
}

pub(crate) fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(format!("page_size must be between 1 and {}", MAX_PAGE_SIZE));
        }
        Ok(())
    }

    /// Slices one page out of an already filtered and ordered list.
    ///
    /// A page past the end is clamped to the last page, so the response always
    /// reports a page that exists (page 1 of 0 for an empty list).
    pub fn paginate<T>(&self, items: Vec<T>) -> PaginatedResponse<T> {
        let page_size = self.page_size.max(1);
        let total_items = items.len() as u64;
        let total_pages = total_pages(total_items, page_size);
        let page = self.page.clamp(1, total_pages.max(1));

        let offset = ((page - 1) * page_size) as usize;
        let data = items
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();

        PaginatedResponse::new(data, page, page_size, total_items)
    }
}

fn total_pages(total_items: u64, page_size: u32) -> u32 {
    total_items.div_ceil(page_size as u64) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            page,
            page_size,
            total_items,
            total_pages: total_pages(total_items, page_size),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginationMeta::new(1, 8, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(1, 8, 8).total_pages, 1);
        assert_eq!(PaginationMeta::new(1, 8, 9).total_pages, 2);
    }

    #[test]
    fn test_pages_cover_every_item_exactly_once() {
        let items: Vec<u32> = (0..21).collect();
        let first = PaginationParams::new(1, 8).paginate(items.clone());
        let total_pages = first.pagination.total_pages;
        assert_eq!(total_pages, 3);

        let mut joined = Vec::new();
        for page in 1..=total_pages {
            joined.extend(PaginationParams::new(page, 8).paginate(items.clone()).data);
        }
        assert_eq!(joined, items);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let items: Vec<u32> = (0..10).collect();
        let response = PaginationParams::new(7, 8).paginate(items);
        assert_eq!(response.pagination.page, 2);
        assert_eq!(response.data, vec![8, 9]);
    }

    #[test]
    fn test_empty_list_yields_empty_first_page() {
        let response = PaginationParams::default().paginate(Vec::<u32>::new());
        assert_eq!(response.pagination.page, 1);
        assert_eq!(response.pagination.total_pages, 0);
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(PaginationParams::new(0, 8).validate().is_err());
        assert!(PaginationParams::new(1, 0).validate().is_err());
        assert!(PaginationParams::new(1, 101).validate().is_err());
        assert!(PaginationParams::new(3, 100).validate().is_ok());
    }
}
