use async_trait::async_trait;

use swift_search::models::RepoItem;
use swift_search::service::controller::RepoListController;
use swift_search::service::listing::{ItemCollection, ListDataSource, RepoListProvider, RowContent};
use swift_search::service::search::{FetchOrchestrator, FetchOutcome, PayloadSource};

/// Serves a canned body, or nothing to simulate a network failure.
struct CannedSource(Option<String>);

impl CannedSource {
    fn body(body: &str) -> Self {
        Self(Some(body.to_string()))
    }

    fn offline() -> Self {
        Self(None)
    }
}

#[async_trait]
impl PayloadSource for CannedSource {
    async fn fetch(&self) -> Option<Vec<u8>> {
        self.0.as_ref().map(|body| body.as_bytes().to_vec())
    }
}

async fn populate(source: CannedSource) -> (ItemCollection, FetchOutcome) {
    let mut items = ItemCollection::new();
    let report = FetchOrchestrator::new(source).run(&mut items).await;
    (items, report.outcome)
}

#[tokio::test]
async fn single_result_populates_one_row() {
    let (items, outcome) = populate(CannedSource::body(
        r#"{"items":[{"name":"learn-swift","description":"Learn Swift interactively","html_url":"https://github.com/x/learn-swift"}]}"#,
    ))
    .await;

    assert_eq!(outcome, FetchOutcome::Populated);
    let provider = RepoListProvider::new(&items);
    assert_eq!(provider.count(), 1);
    assert_eq!(
        provider.cell_for(0),
        RowContent {
            primary: "learn-swift".to_string(),
            secondary: "Learn Swift interactively".to_string(),
        }
    );
    assert_eq!(
        items.get(0).and_then(|i| i.link.as_deref()),
        Some("https://github.com/x/learn-swift")
    );
}

#[tokio::test]
async fn empty_items_array_leaves_zero_rows() {
    let (items, outcome) = populate(CannedSource::body(r#"{"items":[]}"#)).await;
    assert_eq!(outcome, FetchOutcome::Populated);
    assert_eq!(RepoListProvider::new(&items).count(), 0);
}

#[tokio::test]
async fn html_error_page_is_ignored() {
    let (items, outcome) = populate(CannedSource::body(
        "<!DOCTYPE html><html><body><h1>Service Unavailable</h1></body></html>",
    ))
    .await;
    assert_eq!(outcome, FetchOutcome::Malformed);
    assert_eq!(RepoListProvider::new(&items).count(), 0);
}

#[tokio::test]
async fn payload_without_items_is_ignored() {
    let (items, outcome) = populate(CannedSource::body(
        r#"{"message":"API rate limit exceeded","documentation_url":"https://docs.github.com"}"#,
    ))
    .await;
    assert_eq!(outcome, FetchOutcome::Malformed);
    assert!(items.is_empty());
}

#[tokio::test]
async fn network_failure_is_ignored() {
    let (items, outcome) = populate(CannedSource::offline()).await;
    assert_eq!(outcome, FetchOutcome::Unavailable);
    assert_eq!(RepoListProvider::new(&items).count(), 0);
}

#[tokio::test]
async fn n_elements_grow_collection_by_n_in_order() {
    let body = r#"{"total_count":4,"items":[
        {"name":"swift-algorithm-club","description":"Algorithms and data structures"},
        {"name":"learn-swift","description":null},
        {"name":"learn-swift","html_url":"https://github.com/y/learn-swift"},
        {"description":"nameless"}
    ]}"#;
    let (items, _) = populate(CannedSource::body(body)).await;

    let provider = RepoListProvider::new(&items);
    assert_eq!(provider.count(), 4);
    let rows: Vec<RowContent> = (0..provider.count()).map(|i| provider.cell_for(i)).collect();
    assert_eq!(rows[0].primary, "swift-algorithm-club");
    assert_eq!(rows[1].primary, "learn-swift");
    assert_eq!(rows[1].secondary, "");
    assert_eq!(rows[2].primary, "learn-swift");
    assert_eq!(rows[3].primary, "");
    assert_eq!(rows[3].secondary, "nameless");
    assert_eq!(
        items.iter().cloned().collect::<Vec<RepoItem>>()[2].link.as_deref(),
        Some("https://github.com/y/learn-swift")
    );
}

#[tokio::test]
async fn controller_reloads_after_fetch_and_reuses_cells_on_scroll() {
    let items: Vec<String> = (0..6)
        .map(|i| format!(r#"{{"name":"repo-{i}","description":"about {i}"}}"#))
        .collect();
    let body = format!(r#"{{"items":[{}]}}"#, items.join(","));

    let mut controller = RepoListController::new(CannedSource::body(&body), 2);
    assert_eq!(controller.frame(), vec!["(no repositories)"]);

    let report = controller.activate().await.expect("first activation runs the fetch");
    assert_eq!(report.appended, 6);
    assert_eq!(
        controller.frame(),
        vec!["repo-0", "    about 0", "repo-1", "    about 1"]
    );

    controller.scroll_to(4);
    assert_eq!(
        controller.frame(),
        vec!["repo-4", "    about 4", "repo-5", "    about 5"]
    );
    assert_eq!(controller.table().pool().constructed(), 2);
    assert_eq!(controller.table().pool().reused(), 2);
}

#[tokio::test]
async fn controller_stays_empty_when_offline() {
    let mut controller = RepoListController::new(CannedSource::offline(), 3);
    let report = controller.activate().await.expect("first activation runs the fetch");

    assert_eq!(report.outcome, FetchOutcome::Unavailable);
    assert!(controller.items().is_empty());
    assert_eq!(controller.frame(), vec!["(no repositories)"]);
}
