//! Paginated Collection View
//!
//! The one piece of logic every list view shares: a windowed view over a
//! filterable in-memory collection. The filter predicate, the paginator,
//! and the navigation plan are pure functions; `CollectionView` owns the
//! (term, page) pair for a single table and applies the reset and clamp
//! rules when either changes.

/// Extracts a searchable field from an item as text.
///
/// `None` means the field is absent on this record; it matches nothing
/// but never fails.
pub type FieldAccessor<T> = fn(&T) -> Option<String>;

/// Case-insensitive substring match across the configured fields.
/// An empty term matches every item.
pub fn matches<T>(item: &T, term: &str, fields: &[FieldAccessor<T>]) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    fields
        .iter()
        .any(|field| field(item).unwrap_or_default().to_lowercase().contains(&term))
}

/// The slice of the collection visible on one page, plus the bookkeeping
/// the table footer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<T> {
    pub page_items: Vec<T>,
    /// Zero-based index of the first item on this page.
    pub start_index: usize,
    /// Exclusive end of the window. May exceed `total_items` on the last
    /// page; display code takes the min.
    pub end_index: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// The page actually shown, after clamping the requested one.
    pub current_page: usize,
}

impl<T> PageWindow<T> {
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }
}

/// `PageWindow` without the items, for handing to display components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// Slices one page out of `items`. `page_size` must be positive.
///
/// An out-of-range `page` (0, or beyond the last page) is clamped, never
/// an error: an empty collection still has one page.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> PageWindow<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let current_page = page.clamp(1, total_pages);
    let start_index = (current_page - 1) * page_size;
    let end_index = start_index + page_size;
    PageWindow {
        page_items: items[start_index..end_index.min(total_items)].to_vec(),
        start_index,
        end_index,
        total_pages,
        total_items,
        current_page,
    }
}

/// One entry in the page-navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Prev { enabled: bool },
    Page { number: usize, current: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// Display plan for the navigation control.
///
/// Page 1 and the last page are always visible, as is a one-page
/// neighborhood around the current page; each longer run of hidden pages
/// collapses into a single ellipsis. A single-page collection gets an
/// empty plan and the control is not rendered at all.
pub fn nav_plan(current_page: usize, total_pages: usize) -> Vec<NavEntry> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let mut plan = vec![NavEntry::Prev { enabled: current_page > 1 }];
    for page in 1..=total_pages {
        let show = page == 1 || page == total_pages || page.abs_diff(current_page) <= 1;
        let ellipsis = (page + 2 == current_page && current_page > 3)
            || (page == current_page + 2 && current_page + 2 < total_pages);
        if ellipsis {
            plan.push(NavEntry::Ellipsis);
        } else if show {
            plan.push(NavEntry::Page { number: page, current: page == current_page });
        }
    }
    plan.push(NavEntry::Next { enabled: current_page < total_pages });
    plan
}

/// Filter + pagination state for a single table.
///
/// Every table instance owns exactly one of these; nothing is shared
/// across views, and dropping the view drops the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionView {
    term: String,
    page: usize,
    page_size: usize,
}

impl CollectionView {
    pub fn new(page_size: usize) -> Self {
        Self { term: String::new(), page: 1, page_size }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Changing the search term always jumps back to the first page.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.page = 1;
    }

    /// Requested pages outside the collection's extent are clamped.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Re-clamp after the backing collection was replaced by a refetch.
    ///
    /// A delete can shrink the collection under the current page; without
    /// this the user is left staring at an empty page.
    pub fn collection_replaced(&mut self, total_items: usize) {
        let total_pages = total_items.div_ceil(self.page_size).max(1);
        if self.page > total_pages {
            self.page = total_pages;
        }
    }

    /// `collection_replaced` with the filtered count computed in place.
    pub fn sync<T>(&mut self, items: &[T], fields: &[FieldAccessor<T>]) {
        let total = items.iter().filter(|item| matches(*item, &self.term, fields)).count();
        self.collection_replaced(total);
    }

    /// Filter then slice: the window the table renders this turn.
    pub fn window<T: Clone>(&self, items: &[T], fields: &[FieldAccessor<T>]) -> PageWindow<T> {
        let filtered: Vec<T> = items
            .iter()
            .filter(|item| matches(*item, &self.term, fields))
            .cloned()
            .collect();
        paginate(&filtered, self.page_size, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        email: Option<String>,
    }

    const ROW_FIELDS: &[FieldAccessor<Row>] =
        &[|r| Some(r.name.clone()), |r| r.email.clone()];

    fn seq(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn page_never_exceeds_page_size() {
        for len in [0, 1, 19, 20, 21, 45] {
            let items = seq(len);
            for page in 0..5 {
                assert!(paginate(&items, 20, page).page_items.len() <= 20);
            }
        }
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let window = paginate::<usize>(&[], 10, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.current_page, 1);
        assert!(window.page_items.is_empty());
        assert_eq!(window.start_index, 0);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let items = seq(45);
        assert_eq!(paginate(&items, 10, 0).current_page, 1);
        let window = paginate(&items, 10, 999);
        assert_eq!(window.current_page, 5);
        assert_eq!(window.page_items, seq(45)[40..].to_vec());
    }

    #[test]
    fn paginate_is_deterministic() {
        let items = seq(33);
        assert_eq!(paginate(&items, 10, 2), paginate(&items, 10, 2));
    }

    #[test]
    fn last_page_end_index_may_exceed_total() {
        let window = paginate(&seq(45), 20, 3);
        assert_eq!(window.start_index, 40);
        assert_eq!(window.end_index, 60);
        assert_eq!(window.total_items, 45);
        assert_eq!(window.page_items.len(), 5);
    }

    #[test]
    fn empty_term_matches_everything() {
        let with_email = Row { name: "Nguyen Van A".into(), email: Some("a@x.vn".into()) };
        let without = Row { name: "Tran B".into(), email: None };
        assert!(matches(&with_email, "", ROW_FIELDS));
        assert!(matches(&without, "", ROW_FIELDS));
    }

    #[test]
    fn match_is_case_insensitive() {
        let row = Row { name: "Nguyen Van A".into(), email: None };
        assert!(matches(&row, "nguyen", ROW_FIELDS));
        assert!(matches(&row, "NGUYEN", ROW_FIELDS));
        assert!(!matches(&row, "pham", ROW_FIELDS));
    }

    #[test]
    fn missing_field_matches_nothing_without_panicking() {
        let row = Row { name: "Nguyen".into(), email: None };
        assert!(!matches(&row, "gmail", ROW_FIELDS));
    }

    #[test]
    fn nav_plan_collapses_gaps_with_single_ellipses() {
        let plan = nav_plan(5, 10);
        assert_eq!(
            plan,
            vec![
                NavEntry::Prev { enabled: true },
                NavEntry::Page { number: 1, current: false },
                NavEntry::Ellipsis,
                NavEntry::Page { number: 4, current: false },
                NavEntry::Page { number: 5, current: true },
                NavEntry::Page { number: 6, current: false },
                NavEntry::Ellipsis,
                NavEntry::Page { number: 10, current: false },
                NavEntry::Next { enabled: true },
            ]
        );
    }

    #[test]
    fn nav_plan_shows_all_pages_when_few() {
        let plan = nav_plan(1, 3);
        assert_eq!(
            plan,
            vec![
                NavEntry::Prev { enabled: false },
                NavEntry::Page { number: 1, current: true },
                NavEntry::Page { number: 2, current: false },
                NavEntry::Page { number: 3, current: false },
                NavEntry::Next { enabled: true },
            ]
        );
    }

    #[test]
    fn nav_plan_empty_for_single_page() {
        assert!(nav_plan(1, 1).is_empty());
        assert!(nav_plan(1, 0).is_empty());
    }

    #[test]
    fn nav_plan_never_emits_adjacent_ellipses() {
        for total in 1..=30 {
            for current in 1..=total {
                let plan = nav_plan(current, total);
                for pair in plan.windows(2) {
                    assert!(
                        !(pair[0] == NavEntry::Ellipsis && pair[1] == NavEntry::Ellipsis),
                        "double ellipsis at current={current} total={total}"
                    );
                }
            }
        }
    }

    #[test]
    fn nav_plan_disables_ends() {
        let plan = nav_plan(4, 4);
        assert_eq!(plan.first(), Some(&NavEntry::Prev { enabled: true }));
        assert_eq!(plan.last(), Some(&NavEntry::Next { enabled: false }));
    }

    #[test]
    fn term_change_resets_page() {
        let mut view = CollectionView::new(20);
        view.set_page(3, 5);
        assert_eq!(view.page(), 3);
        view.set_term("x");
        assert_eq!(view.page(), 1);
        assert_eq!(view.term(), "x");
    }

    #[test]
    fn set_page_clamps() {
        let mut view = CollectionView::new(20);
        view.set_page(0, 3);
        assert_eq!(view.page(), 1);
        view.set_page(99, 3);
        assert_eq!(view.page(), 3);
        view.set_page(2, 0);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn shrink_after_delete_clamps_to_last_page() {
        // 45 items at 20/page puts the user on page 3; a delete-driven
        // refetch down to 25 items leaves only 2 pages.
        let mut view = CollectionView::new(20);
        view.set_page(3, 3);
        view.collection_replaced(25);
        assert_eq!(view.page(), 2);
        // growing again never moves the page
        view.collection_replaced(100);
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn sync_counts_only_matching_items() {
        let mut items: Vec<Row> = (0..45)
            .map(|i| Row { name: format!("Resident {i}"), email: None })
            .collect();
        let mut view = CollectionView::new(20);
        view.set_page(3, 3);
        items.truncate(25);
        view.sync(&items, ROW_FIELDS);
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn window_filters_then_pages() {
        let items: Vec<Row> = (0..30)
            .map(|i| Row {
                name: if i % 2 == 0 { format!("Nguyen {i}") } else { format!("Tran {i}") },
                email: None,
            })
            .collect();
        let mut view = CollectionView::new(10);
        view.set_term("nguyen");
        let window = view.window(&items, ROW_FIELDS);
        assert_eq!(window.total_items, 15);
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.page_items.len(), 10);
        assert!(window.page_items.iter().all(|r| r.name.starts_with("Nguyen")));
    }
}
