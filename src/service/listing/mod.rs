use crate::models::RepoItem;

/// Ordered, in-memory search results in API response order.
///
/// Only the fetch orchestrator appends to it; everything else reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCollection {
    items: Vec<RepoItem>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, item: RepoItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RepoItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepoItem> {
        self.items.iter()
    }
}

impl Extend<RepoItem> for ItemCollection {
    fn extend<T: IntoIterator<Item = RepoItem>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

/// Display content for one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowContent {
    pub primary: String,
    pub secondary: String,
}

/// What a table host asks of its data: a row count and per-row content.
///
/// Both calls are pure reads and may be made any number of times, in any
/// order. `cell_for` panics on an out-of-bounds index.
pub trait ListDataSource {
    fn count(&self) -> usize;
    fn cell_for(&self, index: usize) -> RowContent;
}

/// Data source over a borrowed [`ItemCollection`].
#[derive(Debug, Clone, Copy)]
pub struct RepoListProvider<'a> {
    items: &'a ItemCollection,
}

impl<'a> RepoListProvider<'a> {
    pub fn new(items: &'a ItemCollection) -> Self {
        Self { items }
    }
}

impl ListDataSource for RepoListProvider<'_> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn cell_for(&self, index: usize) -> RowContent {
        let item = &self.items.items[index];
        RowContent {
            primary: item.name.clone().unwrap_or_default(),
            secondary: item.summary.clone().unwrap_or_default(),
        }
    }
}
