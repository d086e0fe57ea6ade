//! Browser-side tracking collaborators: a real clock and a sink that
//! hands entries to the embedding page.

use strata_track::{ProgressEntry, ProgressSink, TimeSource};
use wasm_bindgen::JsValue;

/// ISO timestamps from the browser clock.
pub struct BrowserClock;

impl TimeSource for BrowserClock {
    fn now_iso(&self) -> String {
        js_sys::Date::new_0().to_iso_string().into()
    }
}

/// Dispatches each entry as a `strata-progress` CustomEvent on the
/// document, with the JSON entry as its detail. The embedding page opts
/// in by listening; delivery is best-effort and never fails the caller.
pub struct PageEventSink;

impl ProgressSink for PageEventSink {
    fn track(&self, entry: &ProgressEntry) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let init = web_sys::CustomEventInit::new();
        init.set_detail(&JsValue::from_str(&entry.to_json()));

        match web_sys::CustomEvent::new_with_event_init_dict("strata-progress", &init) {
            Ok(event) => {
                let _ = document.dispatch_event(&event);
            }
            Err(e) => log::warn!("progress event dropped: {e:?}"),
        }
    }
}
