use tempfile::TempDir;
use tempo_core::{Tracker, TrackerBuilder};

/// Helper function to create a test tracker backed by a temp directory.
pub fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_path = temp_dir.path().join("test.json");
    let tracker = TrackerBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
