//! Pagination and stopping options.

/// Largest page size GitHub accepts for repository listings.
pub const MAX_PER_PAGE: u8 = 100;

/// Default cap on the number of repositories collected.
pub const DEFAULT_MAX_REPOSITORIES: usize = 1000;

/// How discovery pages through an owner's repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryOptions {
    per_page: u8,
    start_page: u32,
    max_repositories: usize,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            per_page: MAX_PER_PAGE,
            start_page: 1,
            max_repositories: DEFAULT_MAX_REPOSITORIES,
        }
    }
}

impl DiscoveryOptions {
    /// Creates options from raw inputs.
    ///
    /// `per_page` is clamped to `1..=100` and `start_page` to at least 1.
    /// A `max_repositories` of 0 means unlimited.
    #[must_use]
    pub fn new(per_page: u32, start_page: u32, max_repositories: usize) -> Self {
        Self {
            per_page: clamp_per_page(per_page),
            start_page: start_page.max(1),
            max_repositories,
        }
    }

    /// Page size sent with every request.
    #[must_use]
    pub fn per_page(&self) -> u8 {
        self.per_page
    }

    /// First page requested in organization mode.
    #[must_use]
    pub fn start_page(&self) -> u32 {
        self.start_page
    }

    /// Maximum repositories to collect, `None` if unlimited.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        (self.max_repositories > 0).then_some(self.max_repositories)
    }
}

fn clamp_per_page(per_page: u32) -> u8 {
    // Lossless: the value is clamped into u8 range first.
    per_page.clamp(1, u32::from(MAX_PER_PAGE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_size_into_range() {
        assert_eq!(DiscoveryOptions::new(0, 1, 0).per_page(), 1);
        assert_eq!(DiscoveryOptions::new(1, 1, 0).per_page(), 1);
        assert_eq!(DiscoveryOptions::new(100, 1, 0).per_page(), 100);
        assert_eq!(DiscoveryOptions::new(250, 1, 0).per_page(), 100);
        assert_eq!(DiscoveryOptions::new(u32::MAX, 1, 0).per_page(), 100);
    }

    #[test]
    fn start_page_is_at_least_one() {
        assert_eq!(DiscoveryOptions::new(100, 0, 0).start_page(), 1);
        assert_eq!(DiscoveryOptions::new(100, 4, 0).start_page(), 4);
    }

    #[test]
    fn zero_max_means_unlimited() {
        assert_eq!(DiscoveryOptions::new(100, 1, 0).limit(), None);
        assert_eq!(DiscoveryOptions::new(100, 1, 30).limit(), Some(30));
    }

    #[test]
    fn defaults_match_action_inputs() {
        let options = DiscoveryOptions::default();
        assert_eq!(options.per_page(), 100);
        assert_eq!(options.start_page(), 1);
        assert_eq!(options.limit(), Some(1000));
    }
}
