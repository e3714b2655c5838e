//! Browser File Helpers
//!
//! Reading a picked file as text and offering text as a download.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use intermobil::ImportError;

/// Read a file as text and pass the outcome to `on_done`.
///
/// `on_done` runs once: from the reader's `loadend` callback, or directly
/// when the read cannot start. The callback is freed after it fires.
pub fn read_text_file(
    file: &web_sys::File,
    on_done: impl FnOnce(Result<String, ImportError>) + 'static,
) {
    let file_reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(_) => {
            on_done(Err(ImportError::Read(std::io::Error::other("FileReader unavailable"))));
            return;
        }
    };

    if file_reader.read_as_text(file).is_err() {
        web_sys::console::error_1(&"FileReader refused the file".into());
        on_done(Err(ImportError::Read(std::io::Error::other("read_as_text failed"))));
        return;
    }

    // `loadend` fires exactly once, after either `load` or `error`
    let onloadend = {
        let file_reader = file_reader.clone();
        Closure::once_into_js(move |_: web_sys::Event| {
            if let Some(error) = file_reader.error() {
                let detail = error.message();
                web_sys::console::error_1(&format!("Failed to read file: {}", detail).into());
                on_done(Err(ImportError::Read(std::io::Error::other(detail))));
                return;
            }

            match file_reader.result().ok().and_then(|r| r.as_string()) {
                Some(text) => on_done(Ok(text)),
                None => on_done(Err(ImportError::Unreadable)),
            }
        })
    };
    file_reader.set_onloadend(Some(onloadend.unchecked_ref()));
}

/// Offer `content` as a file download
pub fn download_text(filename: &str, content: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&content.into()),
        &options,
    )
    .map_err(|_| "failed to create blob")?;

    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "failed to create URL")?;

    let anchor = document
        .create_element("a")
        .map_err(|_| "failed to create link")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "failed to create link")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_read_text_file_calls_back_once() {
        let content = "Data,Nome Tour,UV,Durata sessione media\n2023-10-20,Casa Campione A,45,185s";
        let file = web_sys::File::new_with_str_sequence(&js_sys::Array::of1(&content.into()), "stats.csv")
            .unwrap();
        let calls = Rc::new(Cell::new(0));

        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let calls = calls.clone();
            read_text_file(&file, move |result| {
                calls.set(calls.get() + 1);
                let text = result.map_err(|e| e.to_string()).unwrap();
                let _ = resolve.call1(&JsValue::NULL, &JsValue::from_str(&text));
            });
        });

        let text = JsFuture::from(promise).await.unwrap();
        assert_eq!(text.as_string().as_deref(), Some(content));
        assert_eq!(calls.get(), 1);
    }
}
