//! Offset-based paging for `FindMany` requests.

/// A window over an ordered result set: skip `skip` records, then return at most `take`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: usize,
    pub take: usize,
}

impl PageRequest {
    pub fn new(skip: usize, take: usize) -> Self {
        Self { skip, take }
    }

    /// Window for a 1-based page number. Page 0 is treated as page 1.
    pub fn for_page(page: usize, limit: usize) -> Self {
        Self {
            skip: page.saturating_sub(1).saturating_mul(limit),
            take: limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_page_computes_skip() {
        assert_eq!(PageRequest::for_page(1, 10), PageRequest::new(0, 10));
        assert_eq!(PageRequest::for_page(3, 6), PageRequest::new(12, 6));
    }

    #[test]
    fn test_for_page_zero_is_first_page() {
        assert_eq!(PageRequest::for_page(0, 10).skip, 0);
    }

    #[test]
    fn test_for_page_saturates_instead_of_overflowing() {
        let page = PageRequest::for_page(usize::MAX, usize::MAX);
        assert_eq!(page.skip, usize::MAX);
    }
}
