//! Image Commands
//!
//! Reads a user-chosen file into an embeddable `data:` URL.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, ProgressEvent};

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Read `file` as a base64 data URL. Resolves once the reader fires `load`.
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(js_error)?;

    let done = Promise::new(&mut |resolve, reject| {
        let on_load = Closure::once_into_js(move |_: ProgressEvent| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let on_error = Closure::once_into_js(move |_: ProgressEvent| {
            let _ = reject.call0(&JsValue::NULL);
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(js_error)?;
    JsFuture::from(done)
        .await
        .map_err(|_| format!("failed to read {}", file.name()))?;

    reader
        .result()
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| format!("{} did not produce a data URL", file.name()))
}
