//! Derives what the board shows from the indexes and the category filters.
//!
//! Everything here is a pure function of its inputs: nothing is sorted, removed
//! or mutated in the underlying buckets.

use super::filter::{CategoryFilters, FilterEntry};
use super::index::TodoIndex;
use super::store::StoreError;
use super::todo::Todo;

/// One category as it should be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView<'a> {
    pub category: &'a str,
    pub expanded: bool,
    pub show_completed: bool,
    /// Todos passing the filter, in insertion order.
    pub todos: Vec<&'a Todo>,
    /// Completed todos hidden by the filter.
    pub hidden: usize,
}

impl CategoryView<'_> {
    pub fn total(&self) -> usize {
        self.todos.len() + self.hidden
    }
}

/// Todos of `category`, without completed ones unless the category shows them.
pub fn visible_todos<'a>(
    index: &'a TodoIndex,
    filters: &CategoryFilters,
    category: &str,
) -> Result<Vec<&'a Todo>, StoreError> {
    let show_completed = filters.show_completed(category)?;
    Ok(filter_bucket(index, category, show_completed))
}

/// Views for every known category in sorted order.
pub fn board<'a>(index: &'a TodoIndex, filters: &CategoryFilters) -> Vec<CategoryView<'a>> {
    index
        .categories()
        .map(|category| {
            // Every indexed category has an entry; the default only covers a
            // filter set built separately from this index.
            let entry = filters.get(category).unwrap_or_default();
            category_view(index, category, entry)
        })
        .collect()
}

fn category_view<'a>(index: &'a TodoIndex, category: &'a str, entry: FilterEntry) -> CategoryView<'a> {
    let todos = filter_bucket(index, category, entry.show_completed);
    let hidden = index.bucket_len(category) - todos.len();
    CategoryView {
        category,
        expanded: entry.expanded,
        show_completed: entry.show_completed,
        todos,
        hidden,
    }
}

fn filter_bucket<'a>(index: &'a TodoIndex, category: &str, show_completed: bool) -> Vec<&'a Todo> {
    index
        .bucket(category)
        .filter(|todo| show_completed || !todo.is_done())
        .collect()
}
