use strata_core::level::LevelTable;
use strata_layout::{svg, LayoutConfig};
use wasm_bindgen::JsCast;

/// Serialize the current chart and hand it to the browser as a download.
pub fn download_svg(table: &LevelTable, config: &LayoutConfig) {
    let doc = svg::render_document(table, config);
    save_via_blob_url(doc.as_bytes(), "strata-chart.svg", "image/svg+xml");
    log::info!("Chart exported as SVG");
}

/// Save using a Blob URL + <a download> element. Works everywhere.
fn save_via_blob_url(data: &[u8], filename: &str, mime: &str) {
    let array = js_sys::Uint8Array::from(data);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .expect("blob creation failed");

    let url = web_sys::Url::create_object_url_with_blob(&blob).expect("create_object_url failed");

    let document = web_sys::window()
        .expect("no window")
        .document()
        .expect("no document");
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .expect("create_element failed")
        .dyn_into()
        .expect("not an anchor");
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();

    let body = document.body().expect("no body");
    body.append_child(&anchor).ok();
    anchor.click();
    body.remove_child(&anchor).ok();

    web_sys::Url::revoke_object_url(&url).ok();
}
