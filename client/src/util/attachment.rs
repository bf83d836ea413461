//! File picker glue for the contact form attachment.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.txt,.png,.jpg,.jpeg";

/// Human-readable size for the chosen-file label.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Byte count from `Blob.size`, which arrives as a JS number.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blob_size(size: f64) -> u64 {
    if size.is_finite() && size > 0.0 { size as u64 } else { 0 }
}

/// Read the picked file into memory.
///
/// # Errors
///
/// Returns an error string if the browser fails to produce the file contents.
#[cfg(feature = "hydrate")]
pub async fn read_file(file: web_sys::File) -> Result<crate::state::contact::Attachment, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(crate::state::contact::Attachment::new(file.name(), file.type_(), bytes))
}
