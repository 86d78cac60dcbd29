pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// A 1-indexed window over the root feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Builds a window from raw query values. Missing, non-numeric and
    /// non-positive values fall back to the defaults.
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let page_size = parse_positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE);
        Self::new(page, page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1).saturating_mul(i64::from(self.page_size))
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        let size = i64::from(self.page_size);
        if total <= 0 {
            return 0;
        }
        (total + size - 1) / size
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent_or_garbage() {
        assert_eq!(Pagination::from_query(None, None), Pagination::default());
        assert_eq!(
            Pagination::from_query(Some("abc"), Some("")),
            Pagination::new(1, 10)
        );
        assert_eq!(
            Pagination::from_query(Some("0"), Some("-5")),
            Pagination::new(1, 10)
        );
    }

    #[test]
    fn page_size_is_clamped() {
        let p = Pagination::from_query(Some("3"), Some("5000"));
        assert_eq!(p.page, 3);
        assert_eq!(p.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 1).offset(), 1);
        assert_eq!(Pagination::new(4, 25).offset(), 75);
        assert_eq!(Pagination::new(u32::MAX, 100).offset(), (u32::MAX as i64 - 1) * 100);
    }

    #[test]
    fn total_pages_rounds_up() {
        let p = Pagination::new(1, 10);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
        assert_eq!(Pagination::new(1, 1).total_pages(2), 2);
    }
}
