use tracing::info;

use crate::service::listing::{ItemCollection, RepoListProvider};
use crate::service::render::TableView;
use crate::service::search::{FetchOrchestrator, FetchReport, PayloadSource};

/// Owns the search results and the table showing them.
///
/// `activate` draws the empty table, waits for the fetch and then tells the
/// table to re-query its data, so the first frame never depends on the fetch
/// having finished.
pub struct RepoListController<S> {
    orchestrator: FetchOrchestrator<S>,
    items: ItemCollection,
    table: TableView,
    activated: bool,
}

impl<S: PayloadSource> RepoListController<S> {
    pub fn new(source: S, viewport_rows: usize) -> Self {
        Self {
            orchestrator: FetchOrchestrator::new(source),
            items: ItemCollection::new(),
            table: TableView::new(viewport_rows),
            activated: false,
        }
    }

    /// Run the one-time fetch. Returns `None` if already activated.
    pub async fn activate(&mut self) -> Option<FetchReport> {
        if self.activated {
            return None;
        }
        self.activated = true;

        self.table.reload_data(&RepoListProvider::new(&self.items));

        let report = self.orchestrator.run(&mut self.items).await;
        info!(
            "Fetch finished at {} with {:?}; reloading {} rows",
            report.finished_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.outcome,
            self.items.len()
        );

        self.table.reload_data(&RepoListProvider::new(&self.items));
        Some(report)
    }

    pub fn scroll_to(&mut self, offset: usize) {
        self.table
            .scroll_to(offset, &RepoListProvider::new(&self.items));
    }

    pub fn frame(&self) -> Vec<String> {
        self.table.render()
    }

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }
}
