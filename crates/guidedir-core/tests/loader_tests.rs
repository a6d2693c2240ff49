//! Loader integration tests
//!
//! Drive the full load -> directory -> surface pipeline against in-memory
//! and on-disk guide sources.

use guidedir_core::render::NO_MATCHING_GUIDES;
use guidedir_core::{
    FileSource, GuideDirectory, GuideError, GuideRecord, GuideResult, GuideSource, Loader,
    LoadError, MemorySurface, PageOrigin, SourceResponse,
};
use tempfile::TempDir;

// ============================================================================
// Test Sources
// ============================================================================

/// Always answers with the same response
struct StaticSource(SourceResponse);

impl GuideSource for StaticSource {
    async fn fetch(&self) -> GuideResult<SourceResponse> {
        Ok(self.0.clone())
    }
}

/// Fails before any response arrives
struct UnreachableSource;

impl GuideSource for UnreachableSource {
    async fn fetch(&self) -> GuideResult<SourceResponse> {
        Err(GuideError::Request("Failed to fetch".to_string()))
    }
}

fn loader(body: &str) -> Loader<StaticSource> {
    Loader::new(StaticSource(SourceResponse::ok(body)))
}

// ============================================================================
// Parsing Through the Loader
// ============================================================================

#[tokio::test]
async fn test_load_two_records_in_order() {
    let records = loader("a;Name A;x;y\n  \nb;Name B;x;y").load().await.unwrap();

    assert_eq!(
        records,
        vec![GuideRecord::new("a", "Name A"), GuideRecord::new("b", "Name B")]
    );
}

#[tokio::test]
async fn test_malformed_line_does_not_abort_load() {
    let parsed = loader("onlytwo;fields\ngood;Good Guide;x;y\n")
        .load_parsed()
        .await
        .unwrap();

    assert_eq!(parsed.records, vec![GuideRecord::new("good", "Good Guide")]);
    assert_eq!(parsed.warnings.len(), 1);
    assert_eq!(parsed.warnings[0].line, "onlytwo;fields");
}

#[tokio::test]
async fn test_empty_body_loads_nothing() {
    let records = loader("\n\n   \n").load().await.unwrap();
    assert!(records.is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_404_names_status_and_renders_nothing() {
    let loader = Loader::new(StaticSource(SourceResponse::status(404)));
    let result = loader.load().await;

    let err = result.clone().unwrap_err();
    assert!(err.message.contains("404"));

    let mut directory = GuideDirectory::new(PageOrigin::Served);
    let mut surface = MemorySurface::new();
    directory.finish_load(result, &mut surface);

    assert!(surface.entries.is_empty());
    assert_eq!(
        surface.visible_status().as_deref(),
        Some("Error loading guides: HTTP error! status: 404 - Could not load guides.txt")
    );
}

#[tokio::test]
async fn test_transport_failure_is_load_error() {
    let err = Loader::new(UnreachableSource).load().await.unwrap_err();
    assert_eq!(err, LoadError::new("Request failed: Failed to fetch"));
}

#[tokio::test]
async fn test_transport_failure_on_file_page_adds_hint() {
    let result = Loader::new(UnreachableSource).load().await;

    let mut directory = GuideDirectory::new(PageOrigin::from_protocol("file:"));
    let mut surface = MemorySurface::new();
    directory.finish_load(result, &mut surface);

    let status = surface.visible_status().unwrap();
    assert!(status.starts_with("Error loading guides: Request failed"));
    assert!(status.contains("CORS"));
}

// ============================================================================
// Full Pipeline
// ============================================================================

#[tokio::test]
async fn test_load_then_search() {
    let body = "alpha;Alpha;-;-\nbeta;beta;-;-\nalphabet;ALPHAbet;-;-\n";
    let mut directory = GuideDirectory::default();
    let mut surface = MemorySurface::new();

    directory.finish_load(loader(body).load().await, &mut surface);
    assert_eq!(surface.entries.len(), 3);

    directory.search("ALPHA", &mut surface);
    let hrefs: Vec<_> = surface.entries.iter().map(|e| e.href.as_str()).collect();
    assert_eq!(hrefs, vec!["./alpha/", "./alphabet/"]);

    directory.search("gamma", &mut surface);
    assert_eq!(surface.visible_status().as_deref(), Some(NO_MATCHING_GUIDES));
}

#[tokio::test]
async fn test_file_source_pipeline() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("guides.txt");
    std::fs::write(&path, "rust;Rust Setup;r;r\nbad line\n").unwrap();

    let parsed = Loader::new(FileSource::new(&path)).load_parsed().await.unwrap();
    assert_eq!(parsed.records, vec![GuideRecord::new("rust", "Rust Setup")]);
    assert_eq!(parsed.warnings[0].line_number, 2);
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let temp = TempDir::new().unwrap();
    let err = Loader::new(FileSource::new(temp.path().join("guides.txt")))
        .load()
        .await
        .unwrap_err();
    assert!(err.message.contains("status: 404"));
}
