use crate::support::errors::{DomainError, DomainResult, FieldError};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;

/// A validated page request: `page >= 1`, `per_page` in `1..=MAX_PER_PAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    /// Build a request, reporting every out-of-range field at once.
    pub fn new(page: i64, per_page: i64) -> DomainResult<Self> {
        let mut errors = Vec::new();
        if page < 1 {
            errors.push(FieldError::not_ge("page", 1));
        }
        if per_page < 1 {
            errors.push(FieldError::not_ge("per_page", 1));
        } else if per_page as u64 > MAX_PER_PAGE {
            errors.push(FieldError::not_le("per_page", MAX_PER_PAGE));
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(Self {
            page: page as u64,
            per_page: per_page as u64,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of items preceding this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// `ceil(total_items / per_page)`, zero for an empty set.
pub fn total_pages(total_items: u64, per_page: u64) -> u64 {
    total_items.div_ceil(per_page.max(1))
}

/// Link to another page of the same listing, e.g. `/movies/?page=2&per_page=10`.
pub fn page_link(base_path: &str, page: u64, per_page: u64) -> String {
    format!("{}?page={}&per_page={}", base_path, page, per_page)
}

/// One page of a listing, with totals and navigation links.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub prev_link: Option<String>,
    pub next_link: Option<String>,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64, base_path: &str) -> Self {
        let page = request.page();
        let per_page = request.per_page();
        let total_pages = total_pages(total_items, per_page);

        let prev_link = (page > 1).then(|| page_link(base_path, page - 1, per_page));
        let next_link = (page < total_pages).then(|| page_link(base_path, page + 1, per_page));

        Self {
            items,
            page,
            total_pages,
            total_items,
            prev_link,
            next_link,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            prev_link: self.prev_link,
            next_link: self.next_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(250, 100), 3);
        assert_eq!(total_pages(7, 1), 7);
    }

    #[test]
    fn total_pages_matches_ceil_for_all_page_sizes() {
        for total in [0u64, 1, 9, 99, 100, 101, 1234] {
            for per_page in 1..=MAX_PER_PAGE {
                let expected = (total as f64 / per_page as f64).ceil() as u64;
                assert_eq!(total_pages(total, per_page), expected, "{total}/{per_page}");
            }
        }
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 10).unwrap().offset(), 20);
        assert_eq!(PageRequest::new(2, 100).unwrap().offset(), 100);
    }

    #[test]
    fn request_rejects_page_below_one() {
        let err = PageRequest::new(0, 10).unwrap_err();
        let DomainError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors, vec![FieldError::not_ge("page", 1)]);
    }

    #[test]
    fn request_reports_both_fields() {
        let DomainError::Validation(errors) = PageRequest::new(-3, 101).unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors,
            vec![
                FieldError::not_ge("page", 1),
                FieldError::not_le("per_page", 100)
            ]
        );
    }

    #[test]
    fn request_rejects_zero_per_page() {
        let DomainError::Validation(errors) = PageRequest::new(1, 0).unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(errors, vec![FieldError::not_ge("per_page", 1)]);
    }

    #[test]
    fn request_accepts_bounds() {
        assert!(PageRequest::new(1, 1).is_ok());
        assert!(PageRequest::new(1, 100).is_ok());
        assert_eq!(PageRequest::default(), PageRequest::new(1, 10).unwrap());
    }

    #[test]
    fn first_page_has_only_next_link() {
        let req = PageRequest::new(1, 10).unwrap();
        let page = PageResult::new(vec![(); 10], req, 25, "/movies/");
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.prev_link, None);
        assert_eq!(page.next_link.as_deref(), Some("/movies/?page=2&per_page=10"));
    }

    #[test]
    fn middle_page_has_both_links() {
        let req = PageRequest::new(2, 10).unwrap();
        let page = PageResult::new(vec![(); 10], req, 25, "/movies/");
        assert_eq!(page.prev_link.as_deref(), Some("/movies/?page=1&per_page=10"));
        assert_eq!(page.next_link.as_deref(), Some("/movies/?page=3&per_page=10"));
    }

    #[test]
    fn last_page_has_only_prev_link() {
        let req = PageRequest::new(3, 10).unwrap();
        let page = PageResult::new(vec![(); 5], req, 25, "/movies/");
        assert_eq!(page.prev_link.as_deref(), Some("/movies/?page=2&per_page=10"));
        assert_eq!(page.next_link, None);
    }

    #[test]
    fn single_page_has_no_links() {
        let req = PageRequest::new(1, 100).unwrap();
        let page = PageResult::new(vec![(); 3], req, 3, "/movies/");
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.prev_link, None);
        assert_eq!(page.next_link, None);
    }

    #[test]
    fn map_keeps_metadata() {
        let req = PageRequest::new(2, 2).unwrap();
        let page = PageResult::new(vec![3, 4], req, 5, "/movies/").map(|n| n * 10);
        assert_eq!(page.items, vec![30, 40]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 5);
        assert!(page.prev_link.is_some());
        assert!(page.next_link.is_some());
    }
}
