use crate::config::DEFAULT_PAGE_SIZE;

/// A validated page request: both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    /// Zero values fall back to page 1 and `DEFAULT_PAGE_SIZE`.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self::with_default_size(page, page_size, DEFAULT_PAGE_SIZE)
    }

    fn with_default_size(page: usize, page_size: usize, default_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: if page_size == 0 {
                default_size.max(1)
            } else {
                page_size
            },
        }
    }

    /// Builds a request from raw query-string values.
    ///
    /// Anything missing, non-numeric or below 1 is replaced by the default.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>, default_size: usize) -> Self {
        let parse = |raw: Option<&str>| {
            raw.and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0)
        };
        Self::with_default_size(parse(page), parse(page_size), default_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub pages: usize,
    pub page_size: usize,
}

/// Cuts one page out of `items`. A page past the end is empty, not an error.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> PageSlice<T> {
    let total = items.len();
    let start = request.offset().min(total);
    let end = start.saturating_add(request.page_size).min(total);

    PageSlice {
        items: items[start..end].to_vec(),
        total,
        page: request.page,
        pages: total.div_ceil(request.page_size),
        page_size: request.page_size,
    }
}
