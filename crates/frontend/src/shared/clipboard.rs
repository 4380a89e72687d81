//! Clipboard helper for the Web Clipboard API.

use leptos::task::spawn_local;

/// Copy text to the clipboard and report the outcome.
///
/// `on_done` receives `true` when the browser accepted the write.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let copied = match web_sys::window() {
            Some(window) => {
                let clipboard = window.navigator().clipboard();
                wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                    .await
                    .is_ok()
            }
            None => false,
        };
        on_done(copied);
    });
}
