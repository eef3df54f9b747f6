//! Pure helpers shared by the admin list pages
//!
//! Search, pagination, and selection all operate on the already-fetched
//! dataset. Pagination in particular is computed from the real filtered list
//! length; nothing here is hardcoded.

use std::collections::HashSet;
use std::ops::Range;

/// Case-insensitive substring filter over caller-chosen fields. An empty or
/// whitespace term matches everything.
pub fn filter_by_term<'a, T, F>(items: &'a [T], term: &str, fields: F) -> Vec<&'a T>
where
    F: for<'b> Fn(&'b T) -> Vec<&'b str>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            fields(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Pagination state derived from the actual dataset size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    per_page: usize,
    current_page: usize,
}

impl Pagination {
    /// Create pagination over `total_items` rows, `per_page` per page,
    /// starting on page 1. A zero `per_page` is treated as 1.
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            total_items,
            per_page: per_page.max(1),
            current_page: 1,
        }
    }

    /// Number of pages; an empty dataset still renders one (empty) page
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Move to a page, clamped into `1..=page_count()`
    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page.clamp(1, self.page_count());
        self
    }

    pub fn next(self) -> Self {
        let page = self.current_page + 1;
        self.with_page(page)
    }

    pub fn prev(self) -> Self {
        let page = self.current_page.saturating_sub(1).max(1);
        self.with_page(page)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Index range of the current page, for slicing the filtered list
    pub fn range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.per_page;
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    /// All page numbers, for rendering the pager controls
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.page_count()).collect()
    }

    /// Human label like "Showing 11-20 of 42 results"
    pub fn label(&self) -> String {
        if self.total_items == 0 {
            return "Showing 0 results".to_string();
        }
        let range = self.range();
        format!(
            "Showing {}-{} of {} results",
            range.start + 1,
            range.end,
            self.total_items
        )
    }
}

/// Checkbox selection over row ids
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn select_all<I: IntoIterator<Item = String>>(&mut self, ids: I) {
        self.ids.extend(ids);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids, for feeding `delete_many`
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_case_insensitive_over_chosen_fields() {
        let rows = vec![
            ("Ada", "ada@example.com"),
            ("Grace", "grace@example.com"),
            ("adam", "adam@other.org"),
        ];

        let hits = filter_by_term(&rows, "ADA", |row| vec![row.0, row.1]);
        assert_eq!(hits.len(), 2);

        let hits = filter_by_term(&rows, "other.org", |row| vec![row.0, row.1]);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn empty_term_matches_everything() {
        let rows = vec![("a", "b"), ("c", "d")];
        assert_eq!(filter_by_term(&rows, "   ", |row| vec![row.0]).len(), 2);
    }

    #[test]
    fn page_count_reflects_dataset_size() {
        assert_eq!(Pagination::new(0, 10).page_count(), 1);
        assert_eq!(Pagination::new(10, 10).page_count(), 1);
        assert_eq!(Pagination::new(11, 10).page_count(), 2);
        assert_eq!(Pagination::new(42, 10).page_count(), 5);
    }

    #[test]
    fn range_and_label_track_the_current_page() {
        let page = Pagination::new(42, 10).with_page(2);
        assert_eq!(page.range(), 10..20);
        assert_eq!(page.label(), "Showing 11-20 of 42 results");

        let last = Pagination::new(42, 10).with_page(5);
        assert_eq!(last.range(), 40..42);
        assert_eq!(last.label(), "Showing 41-42 of 42 results");
        assert!(!last.has_next());
        assert!(last.has_prev());
    }

    #[test]
    fn out_of_bounds_pages_are_clamped() {
        let page = Pagination::new(15, 10).with_page(99);
        assert_eq!(page.current_page(), 2);
        assert_eq!(Pagination::new(15, 10).with_page(0).current_page(), 1);
    }

    #[test]
    fn empty_dataset_renders_one_empty_page() {
        let page = Pagination::new(0, 10);
        assert_eq!(page.range(), 0..0);
        assert_eq!(page.label(), "Showing 0 results");
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn selection_toggles_and_clears() {
        let mut selection = Selection::new();
        selection.toggle("a");
        selection.toggle("b");
        assert_eq!(selection.len(), 2);
        assert!(selection.is_selected("a"));

        selection.toggle("a");
        assert!(!selection.is_selected("a"));

        selection.select_all(["x".to_string(), "y".to_string()]);
        assert_eq!(selection.len(), 3);

        selection.clear();
        assert!(selection.is_empty());
    }
}
