//! Web Share API with a clipboard fallback.

use wasm_bindgen::{prelude::*, JsCast};

/// How [`share_page`] handed the link over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet was opened.
    Shared,
    /// The page URL was written to the clipboard.
    Copied,
    Unavailable,
}

fn navigator_member(name: &str) -> Option<(JsValue, JsValue)> {
    let nav = js_sys::Reflect::get(&js_sys::global(), &"navigator".into()).ok()?;
    if nav.is_undefined() || nav.is_null() {
        return None;
    }
    let member = js_sys::Reflect::get(&nav, &name.into()).ok()?;
    if member.is_undefined() || member.is_null() {
        return None;
    }
    Some((nav, member))
}

fn current_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Shares the current page, or copies its URL when `navigator.share` is
/// missing. The returned promise is not awaited.
pub fn share_page(title: &str, text: &str) -> ShareOutcome {
    let Some(url) = current_url() else {
        return ShareOutcome::Unavailable;
    };

    if let Some((nav, share)) = navigator_member("share") {
        let data = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&data, &"title".into(), &title.into());
        let _ = js_sys::Reflect::set(&data, &"text".into(), &text.into());
        let _ = js_sys::Reflect::set(&data, &"url".into(), &url.as_str().into());
        if let Ok(share) = share.dyn_into::<js_sys::Function>() {
            if share.call1(&nav, &data).is_ok() {
                return ShareOutcome::Shared;
            }
        }
    }

    let Some((_, clipboard)) = navigator_member("clipboard") else {
        return ShareOutcome::Unavailable;
    };
    let write_text = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .ok()
        .and_then(|func| func.dyn_into::<js_sys::Function>().ok());
    match write_text {
        Some(write_text) if write_text.call1(&clipboard, &url.into()).is_ok() => {
            ShareOutcome::Copied
        },
        _ => ShareOutcome::Unavailable,
    }
}
