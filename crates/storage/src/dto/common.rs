use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    50
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > 100 {
            return Err("page_size must be between 1 and 100".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Window a fully materialized sequence into the requested page.
    pub fn paginate(items: Vec<T>, params: &PaginationParams) -> Self {
        let total_items = items.len() as i64;
        let data: Vec<T> = items
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect();

        Self {
            data,
            pagination: PaginationMeta::new(params.page, params.page_size, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: u32, page_size: u32) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn paginate_windows_the_middle_page() {
        let page = PaginatedResponse::paginate((1..=10).collect(), &params(2, 3));

        assert_eq!(page.data, vec![4, 5, 6]);
        assert_eq!(page.pagination.total_items, 10);
        assert_eq!(page.pagination.total_pages, 4);
    }

    #[test]
    fn paginate_truncates_the_last_page() {
        let page = PaginatedResponse::paginate((1..=10).collect(), &params(4, 3));

        assert_eq!(page.data, vec![10]);
        assert_eq!(page.pagination.total_pages, 4);
    }

    #[test]
    fn paginate_past_the_end_is_empty() {
        let page = PaginatedResponse::paginate((1..=4).collect::<Vec<i32>>(), &params(3, 4));

        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_items, 4);
    }

    #[test]
    fn paginate_empty_sequence() {
        let page = PaginatedResponse::paginate(Vec::<i32>::new(), &params(1, 50));

        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_items, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn params_validate_bounds() {
        assert!(params(1, 50).validate().is_ok());
        assert!(params(0, 50).validate().is_err());
        assert!(params(1, 0).validate().is_err());
        assert!(params(1, 101).validate().is_err());
    }
}
