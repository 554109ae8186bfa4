//! Browser download bridge.
//!
//! Hands an [`ExportPayload`] to the platform's download mechanism. On the
//! web this is the Blob-and-anchor dance; on desktop the payload is written
//! to the temp directory and the path logged, which keeps the same flow
//! testable outside a browser.

use dcase_core::error::ExportError;
use dcase_core::export::ExportPayload;

#[cfg(target_arch = "wasm32")]
pub fn deliver(payload: &ExportPayload) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    fn js_err(context: &str, value: wasm_bindgen::JsValue) -> ExportError {
        ExportError::DownloadFailed(format!("{context}: {value:?}"))
    }

    let window = web_sys::window()
        .ok_or_else(|| ExportError::DownloadFailed("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::DownloadFailed("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::DownloadFailed("no document body".to_string()))?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&payload.text()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(payload.mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| js_err("blob", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| js_err("object url", e))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_err("anchor", e))?
        .dyn_into()
        .map_err(|e| js_err("anchor cast", e.into()))?;
    anchor.set_href(&url);
    anchor.set_download(&payload.filename);
    body.append_child(&anchor).map_err(|e| js_err("append", e))?;
    anchor.click();
    body.remove_child(&anchor).map_err(|e| js_err("remove", e))?;
    web_sys::Url::revoke_object_url(&url).map_err(|e| js_err("revoke", e))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn deliver(payload: &ExportPayload) -> Result<(), ExportError> {
    use dioxus::logger::tracing::info;

    let path = std::env::temp_dir().join(&payload.filename);
    std::fs::write(&path, &payload.bytes)
        .map_err(|e| ExportError::DownloadFailed(e.to_string()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn desktop_delivery_writes_the_payload() {
        let payload = ExportPayload {
            filename: "dcase-download-test.csv".to_string(),
            mime: "text/csv;charset=utf-8;",
            bytes: b"name,value\na,1".to_vec(),
        };
        deliver(&payload).unwrap();
        let written =
            std::fs::read(std::env::temp_dir().join("dcase-download-test.csv")).unwrap();
        assert_eq!(written, payload.bytes);
    }
}
