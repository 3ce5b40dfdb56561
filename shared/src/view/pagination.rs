//! Accumulates a page-numbered API into one flat row list.

use log::debug;
use url::{ParseError, Url};

use super::latest::{LatestRequest, Ticket};
use crate::dto::page::Page;
use crate::error::FetchError;

/// Page size assumed when the first page comes back empty.
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Resolves root-relative `next` links; only the query string is read from them.
const RELATIVE_BASE: &str = "http://localhost/";

/// Extracts the `page` number from a `next` link.
///
/// Accepts absolute `http(s)` links and root-relative paths. Anything else,
/// or a link without a positive numeric `page`, means there is no next page.
pub fn next_page_number(next: Option<&str>) -> Option<u32> {
    let link = next?.trim();
    let url = match Url::parse(link) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) if link.starts_with('/') => {
            let base = Url::parse(RELATIVE_BASE).ok()?;
            Url::options().base_url(Some(&base)).parse(link).ok()?
        }
        Err(_) => return None,
    };
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let (_, page) = url.query_pairs().find(|(key, _)| key == "page")?;
    page.parse::<u32>().ok().filter(|page| *page > 0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageStats {
    pub total_count: u64,
    pub total_pages: u64,
    pub loaded_count: u64,
}

/// Pages already fetched, in fetch order.
#[derive(Debug, Clone)]
pub struct PageAccumulator<T> {
    pages: Vec<Page<T>>,
}

impl<T> PageAccumulator<T> {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    pub fn push(&mut self, page: Page<T>) {
        self.pages.push(page);
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().flat_map(|page| page.results.iter())
    }

    pub fn loaded_count(&self) -> usize {
        self.pages.iter().map(|page| page.results.len()).sum()
    }

    /// Totals come from the first page; the page size is inferred from its length.
    pub fn stats(&self) -> PageStats {
        let Some(first) = self.pages.first() else {
            return PageStats::default();
        };

        let total_count = first.count.unwrap_or(0);
        let page_size = match first.results.len() as u64 {
            0 => DEFAULT_PAGE_SIZE,
            n => n,
        };
        let total_pages = if total_count > 0 {
            total_count.div_ceil(page_size)
        } else {
            0
        };

        PageStats {
            total_count,
            total_pages,
            loaded_count: self.loaded_count() as u64,
        }
    }

    pub fn next_page(&self) -> Option<u32> {
        self.pages
            .last()
            .and_then(|page| next_page_number(page.next.as_deref()))
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }
}

impl<T: Clone> PageAccumulator<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.rows().cloned().collect()
    }
}

impl<T> Default for PageAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One page fetch the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: Ticket,
    pub key: String,
    pub page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

/// Paginated query state for the current filter key.
///
/// `start` begins a fresh accumulation at page 1 and makes every earlier
/// request stale, so pages from a previous filter combination are never mixed
/// into the new one.
#[derive(Debug)]
pub struct PagedQuery<T> {
    key: Option<String>,
    latest: LatestRequest,
    pages: PageAccumulator<T>,
    in_flight: Option<Ticket>,
    error: Option<FetchError>,
}

impl<T> PagedQuery<T> {
    pub fn new() -> Self {
        Self {
            key: None,
            latest: LatestRequest::new(),
            pages: PageAccumulator::new(),
            in_flight: None,
            error: None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn start(&mut self, key: impl Into<String>) -> PageRequest {
        let key = key.into();
        debug!("Starting paged query for {}", key);
        self.pages.clear();
        self.error = None;
        self.key = Some(key.clone());
        let ticket = self.latest.issue();
        self.in_flight = Some(ticket);
        PageRequest { ticket, key, page: 1 }
    }

    /// Like [`start`](Self::start), but first takes pages from `cached`.
    ///
    /// Page 1 and every following page `cached` still holds are applied at
    /// once, while page numbers keep increasing. Returns the page 1 request
    /// only when page 1 is not cached.
    pub fn restore<F>(&mut self, key: impl Into<String>, mut cached: F) -> Option<PageRequest>
    where
        F: FnMut(u32) -> Option<Page<T>>,
    {
        let request = self.start(key);
        let Some(first) = cached(1) else {
            return Some(request);
        };
        self.resolve(&request, Ok(first));

        let mut last = 1;
        while let Some(number) = self.pages.next_page().filter(|n| *n > last) {
            let Some(page) = cached(number) else { break };
            self.pages.push(page);
            last = number;
        }
        debug!(
            "Restored {} cached rows for {}",
            self.pages.loaded_count(),
            request.key
        );
        None
    }

    /// Request for the following page, if there is one and nothing is in flight.
    pub fn fetch_next_page(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        let key = self.key.clone()?;
        let page = self.pages.next_page()?;
        self.error = None;
        let ticket = self.latest.issue();
        self.in_flight = Some(ticket);
        Some(PageRequest { ticket, key, page })
    }

    /// Applies a fetched page (or failure) unless a newer request superseded it.
    ///
    /// A failure keeps the pages already loaded.
    pub fn resolve(
        &mut self,
        request: &PageRequest,
        result: Result<Page<T>, FetchError>,
    ) -> Resolution {
        if !self.latest.is_current(request.ticket) {
            debug!(
                "Dropping stale page {} for {} (generation {})",
                request.page,
                request.key,
                request.ticket.generation()
            );
            return Resolution::Stale;
        }

        self.in_flight = None;
        match result {
            Ok(page) => self.pages.push(page),
            Err(err) => {
                debug!("Page {} for {} failed: {}", request.page, request.key, err);
                self.error = Some(err);
            }
        }
        Resolution::Applied
    }

    /// Drops interest in the outstanding request, e.g. when the view unmounts.
    /// Loaded pages stay.
    pub fn cancel(&mut self) {
        self.latest.cancel();
        self.in_flight = None;
    }

    pub fn stats(&self) -> PageStats {
        self.pages.stats()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// First page still outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some() && self.pages.is_empty()
    }

    pub fn is_fetching_next_page(&self) -> bool {
        self.in_flight.is_some() && !self.pages.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        self.pages.has_next_page()
    }
}

impl<T: Clone> PagedQuery<T> {
    pub fn rows(&self) -> Vec<T> {
        self.pages.to_vec()
    }
}

impl<T> Default for PagedQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn page(
        results: &[&'static str],
        count: Option<u64>,
        next: Option<&str>,
    ) -> Page<&'static str> {
        Page {
            count,
            next: next.map(str::to_string),
            previous: None,
            results: results.to_vec(),
        }
    }

    #[rstest]
    #[case(Some("http://api.test/nfl/player/stats/gamelogs?page=2&position=QB"), Some(2))]
    #[case(Some("https://api.test/x?position=QB&page=17#frag"), Some(17))]
    #[case(Some("/nfl/player/stats/gamelogs?page=3"), Some(3))]
    #[case(Some("http://api.test/x?position=QB"), None)]
    #[case(Some("http://api.test/x?page=abc"), None)]
    #[case(Some("http://api.test/x?page=0"), None)]
    #[case(Some("nfl/x?page=2"), None)]
    #[case(Some("ftp://api.test/x?page=2"), None)]
    #[case(Some("http:/api.test/x?page=2"), Some(2))]
    #[case(Some("//api.test/x?page=4"), Some(4))]
    #[case(Some("/x?page=5&page=6"), Some(5))]
    #[case(Some("mailto:stats@api.test?page=2"), None)]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn next_links(#[case] link: Option<&str>, #[case] expected: Option<u32>) {
        assert_eq!(next_page_number(link), expected);
    }

    #[test]
    fn accumulates_pages_in_fetch_order() {
        let mut acc = PageAccumulator::new();
        acc.push(page(&["a", "b"], Some(10), Some("http://api.test/g?page=2")));
        assert!(acc.has_next_page());
        acc.push(page(&["c", "d"], None, None));

        assert_eq!(acc.to_vec(), vec!["a", "b", "c", "d"]);
        assert_eq!(
            acc.stats(),
            PageStats {
                total_count: 10,
                total_pages: 5,
                loaded_count: 4,
            }
        );
        assert!(!acc.has_next_page());
    }

    #[test]
    fn empty_first_page_uses_default_page_size() {
        let mut acc: PageAccumulator<&str> = PageAccumulator::new();
        acc.push(page(&[], Some(120), None));
        assert_eq!(acc.stats().total_pages, 3);
        assert_eq!(acc.stats().loaded_count, 0);
    }

    #[test]
    fn no_pages_means_zero_stats() {
        let acc: PageAccumulator<&str> = PageAccumulator::new();
        assert_eq!(acc.stats(), PageStats::default());
        assert!(!acc.has_next_page());
    }

    #[test]
    fn zero_count_means_zero_pages() {
        let mut acc = PageAccumulator::new();
        acc.push(page(&["a"], Some(0), None));
        assert_eq!(acc.stats().total_pages, 0);
    }

    #[test]
    fn paged_query_loads_then_continues() {
        let mut query = PagedQuery::new();
        let first = query.start("position=QB");
        assert_eq!(first.page, 1);
        assert!(query.is_loading());
        assert_eq!(query.fetch_next_page(), None);

        let resolution = query.resolve(&first, Ok(page(&["a", "b"], Some(4), Some("/g?page=2"))));
        assert_eq!(resolution, Resolution::Applied);
        assert!(!query.is_loading());
        assert!(query.has_next_page());

        let second = query.fetch_next_page().unwrap();
        assert_eq!(second.page, 2);
        assert!(query.is_fetching_next_page());
        query.resolve(&second, Ok(page(&["c", "d"], Some(4), None)));

        assert_eq!(query.rows(), vec!["a", "b", "c", "d"]);
        assert!(!query.has_next_page());
        assert_eq!(query.fetch_next_page(), None);
    }

    #[test]
    fn filter_change_discards_previous_pages() {
        let mut query = PagedQuery::new();
        let first = query.start("opponent=ARI");
        query.resolve(&first, Ok(page(&["a1", "a2"], Some(4), Some("/g?page=2"))));
        let next = query.fetch_next_page().unwrap();

        let fresh = query.start("opponent=KC");
        assert!(query.rows().is_empty());

        // The ARI page 2 resolves late and must not leak into the KC rows.
        assert_eq!(query.resolve(&next, Ok(page(&["a3"], Some(4), None))), Resolution::Stale);
        assert!(query.is_loading());

        query.resolve(&fresh, Ok(page(&["k1"], Some(1), None)));
        assert_eq!(query.rows(), vec!["k1"]);
        assert_eq!(query.key(), Some("opponent=KC"));
    }

    #[test]
    fn stale_first_page_cannot_overwrite_newer_rows() {
        let mut query = PagedQuery::new();
        let a = query.start("A");
        let b = query.start("B");
        query.resolve(&b, Ok(page(&["b"], Some(1), None)));
        assert_eq!(query.resolve(&a, Ok(page(&["a"], Some(1), None))), Resolution::Stale);
        assert_eq!(query.rows(), vec!["b"]);
    }

    #[test]
    fn cancelled_request_resolves_as_stale() {
        let mut query = PagedQuery::new();
        let first = query.start("k");
        query.cancel();
        assert!(!query.is_loading());
        assert_eq!(query.resolve(&first, Ok(page(&["a"], Some(1), None))), Resolution::Stale);
        assert!(query.rows().is_empty());
    }

    #[test]
    fn failed_page_keeps_loaded_rows() {
        let mut query = PagedQuery::new();
        let first = query.start("k");
        query.resolve(&first, Ok(page(&["a", "b"], Some(6), Some("/g?page=2"))));
        let second = query.fetch_next_page().unwrap();
        query.resolve(&second, Err(FetchError::Network("offline".into())));

        assert_eq!(query.rows(), vec!["a", "b"]);
        assert!(matches!(query.error(), Some(FetchError::Network(_))));
        assert!(!query.is_fetching_next_page());

        // Retrying the next page clears the error.
        let retry = query.fetch_next_page().unwrap();
        assert_eq!(retry.page, 2);
        assert!(query.error().is_none());
    }

    #[test]
    fn restore_applies_every_cached_page() {
        let mut query = PagedQuery::new();
        let request = query.restore("position=QB", |n| match n {
            1 => Some(page(&["a", "b"], Some(5), Some("/g?page=2"))),
            2 => Some(page(&["c", "d"], Some(5), Some("/g?page=3"))),
            _ => None,
        });

        assert_eq!(request, None);
        assert_eq!(query.rows(), vec!["a", "b", "c", "d"]);
        assert!(!query.is_loading());
        assert_eq!(query.fetch_next_page().map(|r| r.page), Some(3));
    }

    #[test]
    fn restore_stops_at_a_link_back() {
        let mut query = PagedQuery::new();
        query.restore("k", |n| match n {
            1 => Some(page(&["a"], Some(3), Some("/g?page=2"))),
            _ => Some(page(&["b"], Some(3), Some("/g?page=1"))),
        });
        assert_eq!(query.rows(), vec!["a", "b"]);
    }

    #[test]
    fn restore_without_first_page_fetches_it() {
        let mut query: PagedQuery<&str> = PagedQuery::new();
        let request = query.restore("position=QB", |_| None).unwrap();
        assert_eq!(request.page, 1);
        assert!(query.is_loading());
        assert_eq!(query.resolve(&request, Ok(page(&["a"], Some(1), None))), Resolution::Applied);
        assert_eq!(query.rows(), vec!["a"]);
    }

    #[test]
    fn restore_makes_pending_pages_stale() {
        let mut query = PagedQuery::new();
        let old = query.start("opponent=ARI");
        query.restore("opponent=KC", |_| Some(page(&["k1"], Some(1), None)));

        assert_eq!(query.resolve(&old, Ok(page(&["a1"], Some(1), None))), Resolution::Stale);
        assert_eq!(query.rows(), vec!["k1"]);
    }
}
