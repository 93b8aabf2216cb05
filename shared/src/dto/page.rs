use serde::{Deserialize, Serialize};

/// One slot in the rendered pagination strip: a page number or a gap ("...").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageMark {
    Page(u32),
    Gap(String),
}

impl PageMark {
    pub fn gap() -> Self {
        PageMark::Gap("...".to_string())
    }
}

/// Paginated list envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    /// Pagination strip for the UI, numbers interleaved with gaps.
    pub marks: Vec<PageMark>,
}

/// Common query parameters for list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListQuery {
    /// Free-text search term, matched case-insensitively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Status filter; interpretation depends on the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Category name filter (projects only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListQuery {
    /// Requested page, clamped to at least 1.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Requested page size, bounded to 1..=100 with a default of 10.
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(10).clamp(1, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_and_floor() {
        assert_eq!(ListQuery::default().page(), 1);

        let zero = ListQuery {
            page: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.page(), 1);
    }

    #[test]
    fn test_per_page_bounds() {
        assert_eq!(ListQuery::default().per_page(), 10);

        let zero = ListQuery {
            per_page: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.per_page(), 1);

        let oversized = ListQuery {
            per_page: Some(500),
            ..Default::default()
        };
        assert_eq!(oversized.per_page(), 100);

        let in_range = ListQuery {
            per_page: Some(25),
            ..Default::default()
        };
        assert_eq!(in_range.per_page(), 25);
    }
}
