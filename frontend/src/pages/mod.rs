pub mod dashboard;
pub mod data_source_detail;
pub mod not_found;
pub mod table_detail;

/// Sets the browser tab title. No-op outside a browser context.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(title);
    }
}
