use docview::error::AppError;
use docview::models::{DocumentMeta, load_manifest};
use docview::utils::{format_date, format_file_size};
use std::fs;
use std::path::PathBuf;

fn get_test_manifest_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("docview_test");
    if !path.exists() {
        fs::create_dir_all(&path).unwrap();
    }
    path.push(format!("manifest_{}.json", uuid::Uuid::new_v4()));
    path
}

#[test]
fn test_manifest_round_trip() {
    let path = get_test_manifest_path();

    let docs = vec![
        DocumentMeta {
            id: "doc-1".into(),
            name: "quarterly-report-2023-final.pdf".into(),
            size_bytes: 1536,
            uploaded_at: "2023-01-05T09:07:00".into(),
        },
        DocumentMeta {
            id: "doc-2".into(),
            name: "notes.txt".into(),
            size_bytes: 0,
            uploaded_at: "2023-02-01".into(),
        },
    ];
    fs::write(&path, serde_json::to_string_pretty(&docs).unwrap()).unwrap();

    let loaded = load_manifest(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, "doc-1");
    assert_eq!(loaded[1].size_bytes, 0);

    // The cells the list view renders from these records
    assert_eq!(format_file_size(loaded[0].size_bytes), "2 KB");
    assert_eq!(format_date(&loaded[0].uploaded_at).unwrap(), "Jan 5, 2023 9:07");
    assert_eq!(format_file_size(loaded[1].size_bytes), "0 bytes");

    fs::remove_file(&path).ok();
}

#[test]
fn test_missing_manifest() {
    let mut path = std::env::temp_dir();
    path.push(format!("docview_missing_{}.json", uuid::Uuid::new_v4()));

    assert!(matches!(
        load_manifest(&path),
        Err(AppError::ManifestNotFound(_))
    ));
}

#[test]
fn test_malformed_manifest() {
    let path = get_test_manifest_path();
    fs::write(&path, "{ not json ]").unwrap();

    assert!(matches!(
        load_manifest(&path),
        Err(AppError::Serialization(_))
    ));

    fs::remove_file(&path).ok();
}
