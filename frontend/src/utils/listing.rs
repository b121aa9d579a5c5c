//! In-memory search and pagination behind every list screen.
//!
//! The full collection is kept alongside the filtered view so a new query or a
//! re-fetch never loses records. Matching is a case-insensitive substring test
//! of the query against the fields each entity exposes. The query is used as
//! typed unless the entity trims it through [`Searchable::normalize_query`].

pub const DEFAULT_PAGE_SIZE: usize = 8;

pub trait Searchable {
    /// Extra structured filter (e.g. leave status). `()` when the screen has none.
    type Filter: Clone + Default + PartialEq + std::fmt::Debug;

    fn search_fields(&self) -> Vec<&str>;

    fn passes(&self, _filter: &Self::Filter) -> bool {
        true
    }

    fn normalize_query(query: &str) -> &str {
        query
    }
}

pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    let query = T::normalize_query(query);
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T: Searchable> {
    items: Vec<T>,
    filtered: Vec<T>,
    query: String,
    filter: T::Filter,
    page: usize,
    page_size: usize,
}

impl<T: Searchable + Clone> Default for Listing<T> {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl<T: Searchable + Clone> Listing<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut listing = Self::default();
        listing.set_items(items);
        listing
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            filter: T::Filter::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    fn apply(&mut self) {
        let query = self.query.as_str();
        let filter = &self.filter;
        self.filtered = self
            .items
            .iter()
            .filter(|item| item.passes(filter) && matches_query(*item, query))
            .cloned()
            .collect();
    }

    /// Replaces the collection (initial load or re-fetch). Query and filter
    /// survive; the page is clamped to the new page count.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.apply();
        self.page = self.page.clamp(1, self.page_count());
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.apply();
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: T::Filter) {
        self.filter = filter;
        self.apply();
        self.page = 1;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> &T::Filter {
        &self.filter
    }

    pub fn filtered_items(&self) -> &[T] {
        &self.filtered
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    /// Zero-based `[start, end)` of the current window within the filtered list.
    pub fn page_bounds(&self) -> (usize, usize) {
        let start = ((self.page - 1) * self.page_size).min(self.filtered.len());
        let end = (start + self.page_size).min(self.filtered.len());
        (start, end)
    }

    pub fn current_items(&self) -> Vec<T> {
        let (start, end) = self.page_bounds();
        self.filtered[start..end].to_vec()
    }

    /// Current page paired with 1-based serial numbers across the filtered list.
    pub fn numbered_rows(&self) -> Vec<(usize, T)> {
        let (start, _) = self.page_bounds();
        self.current_items()
            .into_iter()
            .enumerate()
            .map(|(index, item)| (start + index + 1, item))
            .collect()
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn next(&mut self) {
        self.go_to(self.page + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.page.saturating_sub(1));
    }

    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.page_count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// First, last and current ±1 as links; current ±2 collapse to an ellipsis.
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    (1..=total)
        .filter_map(|page| {
            if page == 1 || page == total || page.abs_diff(current) <= 1 {
                Some(PageLink::Page(page))
            } else if page.abs_diff(current) == 2 {
                Some(PageLink::Ellipsis)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Dept {
        name: String,
        description: String,
    }

    impl Searchable for Dept {
        type Filter = ();

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.description.as_str()]
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        title: String,
        open: bool,
    }

    impl Searchable for Ticket {
        type Filter = Option<bool>;

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str()]
        }

        fn passes(&self, filter: &Option<bool>) -> bool {
            filter.map(|open| open == self.open).unwrap_or(true)
        }
    }

    fn departments(n: usize) -> Vec<Dept> {
        (1..=n)
            .map(|i| Dept {
                name: format!("Dept {}", i),
                description: format!("Team number {}", i),
            })
            .collect()
    }

    #[test]
    fn nine_items_split_into_eight_and_one() {
        let mut listing = Listing::new(departments(9));
        assert_eq!(listing.page_count(), 2);
        assert_eq!(listing.current_items().len(), 8);
        listing.next();
        assert_eq!(listing.page(), 2);
        assert_eq!(listing.current_items().len(), 1);
        assert_eq!(listing.current_items()[0].name, "Dept 9");
    }

    #[test]
    fn serials_follow_the_filtered_position() {
        let mut listing = Listing::new(departments(10));
        listing.next();
        let rows = listing.numbered_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].0, rows[0].1.name.as_str()), (9, "Dept 9"));

        listing.search("dept 10");
        let rows = listing.numbered_rows();
        assert_eq!((rows[0].0, rows[0].1.name.as_str()), (1, "Dept 10"));
    }

    #[test]
    fn search_is_case_insensitive_and_resets_page() {
        let mut items = departments(8);
        items.push(Dept {
            name: "IT".into(),
            description: "Infrastructure".into(),
        });
        let mut listing = Listing::new(items);
        listing.go_to(2);

        listing.search("it");
        assert_eq!(listing.page(), 1);
        assert_eq!(listing.filtered_count(), 1);
        assert_eq!(listing.current_items()[0].name, "IT");

        listing.search("TEAM NUMBER");
        assert_eq!(listing.filtered_count(), 8);
    }

    #[test]
    fn query_is_not_trimmed() {
        let mut listing = Listing::new(departments(3));
        listing.search(" Dept");
        assert_eq!(listing.filtered_count(), 0);
    }

    #[test]
    fn filtered_set_is_exact_subset() {
        let items = departments(20);
        let mut listing = Listing::new(items.clone());
        listing.search("1");
        let expected: Vec<Dept> = items
            .into_iter()
            .filter(|d| d.name.contains('1') || d.description.contains('1'))
            .collect();
        assert_eq!(listing.filtered_items(), expected.as_slice());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut listing = Listing::new(departments(17));
        listing.prev();
        assert_eq!(listing.page(), 1);
        assert!(listing.is_first_page());
        listing.go_to(99);
        assert_eq!(listing.page(), 3);
        assert!(listing.is_last_page());
        listing.next();
        assert_eq!(listing.page(), 3);
        listing.go_to(0);
        assert_eq!(listing.page(), 1);
    }

    #[test]
    fn empty_listing_has_one_empty_page() {
        let listing: Listing<Dept> = Listing::default();
        assert_eq!(listing.page_count(), 1);
        assert!(listing.current_items().is_empty());
        assert_eq!(listing.page_bounds(), (0, 0));
    }

    #[test]
    fn windows_never_exceed_page_size() {
        for n in [0, 1, 7, 8, 9, 16, 23] {
            let mut listing = Listing::new(departments(n));
            for page in 1..=listing.page_count() {
                listing.go_to(page);
                assert!(listing.current_items().len() <= DEFAULT_PAGE_SIZE);
            }
        }
    }

    #[test]
    fn refetch_keeps_query_and_clamps_page() {
        let mut listing = Listing::new(departments(17));
        listing.search("Dept");
        listing.go_to(3);
        listing.set_items(departments(16));
        assert_eq!(listing.query(), "Dept");
        assert_eq!(listing.page(), 2);
    }

    #[test]
    fn structured_filter_combines_with_query() {
        let tickets = vec![
            Ticket { title: "Printer".into(), open: true },
            Ticket { title: "Printer ink".into(), open: false },
            Ticket { title: "Laptop".into(), open: true },
        ];
        let mut listing = Listing::new(tickets);
        listing.set_filter(Some(true));
        assert_eq!(listing.filtered_count(), 2);
        listing.search("print");
        assert_eq!(listing.filtered_count(), 1);
        listing.set_filter(None);
        assert_eq!(listing.filtered_count(), 2);
        assert_eq!(listing.total_count(), 3);
    }

    #[test]
    fn page_links_collapse_distant_pages() {
        use PageLink::*;
        assert_eq!(page_links(1, 1), vec![Page(1)]);
        assert_eq!(page_links(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_links(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_links(1, 6),
            vec![Page(1), Page(2), Ellipsis, Page(6)]
        );
    }
}
