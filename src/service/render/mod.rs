//! Terminal table host.
//!
//! A minimal stand-in for a platform list widget: it keeps a viewport over a
//! [`ListDataSource`], recycles row cells that scroll out of view through a
//! [`CellPool`], and renders the visible rows as text lines. Data sources see
//! only `count`/`cell_for` and never learn whether a cell was new or reused.

use std::collections::HashMap;
use std::ops::Range;

use tracing::debug;

use crate::service::listing::{ListDataSource, RowContent};

pub mod pool;

pub use pool::{CellPool, TableCell};

/// Reuse identifier for the single row style the list uses.
pub const SUBTITLE_CELL: &str = "subtitle";

const EMPTY_PLACEHOLDER: &str = "(no repositories)";

pub struct TableView {
    viewport_rows: usize,
    offset: usize,
    row_count: usize,
    visible: HashMap<usize, TableCell>,
    pool: CellPool,
}

impl TableView {
    pub fn new(viewport_rows: usize) -> Self {
        Self {
            viewport_rows: viewport_rows.max(1),
            offset: 0,
            row_count: 0,
            visible: HashMap::new(),
            pool: CellPool::default(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn pool(&self) -> &CellPool {
        &self.pool
    }

    /// Rows currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.viewport_rows).min(self.row_count);
        self.offset.min(end)..end
    }

    /// Re-query the data source and repopulate every visible row.
    pub fn reload_data(&mut self, source: &dyn ListDataSource) {
        self.row_count = source.count();
        self.offset = self.clamped_offset(self.offset);

        for (_, cell) in self.visible.drain() {
            self.pool.recycle(cell);
        }
        for index in self.visible_range() {
            let cell = self.configure_cell(source, index);
            self.visible.insert(index, cell);
        }
        debug!(
            "Reloaded table: {} rows, showing {:?}",
            self.row_count,
            self.visible_range()
        );
    }

    /// Scroll so `offset` is the first visible row. Rows leaving the viewport
    /// go back to the pool; rows entering it are dequeued and populated.
    pub fn scroll_to(&mut self, offset: usize, source: &dyn ListDataSource) {
        self.offset = self.clamped_offset(offset);
        let range = self.visible_range();

        let leaving: Vec<usize> = self
            .visible
            .keys()
            .copied()
            .filter(|index| !range.contains(index))
            .collect();
        for index in leaving {
            if let Some(cell) = self.visible.remove(&index) {
                self.pool.recycle(cell);
            }
        }

        for index in range {
            if !self.visible.contains_key(&index) {
                let cell = self.configure_cell(source, index);
                self.visible.insert(index, cell);
            }
        }
    }

    /// Text lines for the visible rows: primary text, then the indented
    /// secondary text.
    pub fn render(&self) -> Vec<String> {
        if self.row_count == 0 {
            return vec![EMPTY_PLACEHOLDER.to_string()];
        }

        let mut lines = Vec::new();
        for index in self.visible_range() {
            if let Some(cell) = self.visible.get(&index) {
                lines.push(cell.text_label.clone());
                lines.push(format!("    {}", cell.detail_text_label));
            }
        }
        lines
    }

    fn configure_cell(&mut self, source: &dyn ListDataSource, index: usize) -> TableCell {
        let mut cell = self.pool.dequeue(SUBTITLE_CELL);
        let RowContent { primary, secondary } = source.cell_for(index);
        cell.text_label = primary;
        cell.detail_text_label = secondary;
        cell
    }

    fn clamped_offset(&self, offset: usize) -> usize {
        offset.min(self.row_count.saturating_sub(self.viewport_rows))
    }
}
