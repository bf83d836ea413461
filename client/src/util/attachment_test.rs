use super::*;

#[test]
fn format_size_picks_unit() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
}

#[test]
fn format_size_boundaries() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(1023), "1023 B");
    assert_eq!(format_size(1024), "1.0 KB");
}

#[test]
fn accepted_extensions_cover_documents_and_images() {
    for ext in [".pdf", ".docx", ".png", ".jpg"] {
        assert!(ACCEPTED_EXTENSIONS.split(',').any(|e| e == ext), "missing {ext}");
    }
}

#[test]
fn blob_size_converts_js_numbers() {
    assert_eq!(blob_size(0.0), 0);
    assert_eq!(blob_size(5_242_881.0), 5_242_881);
    assert_eq!(blob_size(4_294_967_296.0), 4_294_967_296);
}

#[test]
fn blob_size_rejects_nonsense() {
    assert_eq!(blob_size(-1.0), 0);
    assert_eq!(blob_size(f64::NAN), 0);
    assert_eq!(blob_size(f64::INFINITY), 0);
}
