//! The few places the site touches browser APIs directly. Outside the
//! `hydrate` build these are no-ops so the server can compile the views
//! that reference them.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::JsFuture;

#[cfg(feature = "hydrate")]
use crate::content::{LoadError, RawResponse};
use crate::locale::Locale;

#[cfg(feature = "hydrate")]
pub async fn fetch_document(url: String) -> Result<RawResponse, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(js_error)?
        .dyn_into::<web_sys::Response>()
        .map_err(js_error)?;
    let status = response.status();
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();
    Ok(RawResponse { status, body })
}

#[cfg(feature = "hydrate")]
fn js_error(value: JsValue) -> LoadError {
    LoadError::Network(format!("{value:?}"))
}

pub fn navigator_language() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.navigator().language())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mirrors the active locale onto `<html lang dir>`.
pub fn apply_document_locale(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("lang", locale.code());
            let _ = el.set_attribute("dir", locale.dir());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = locale;
}

pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            // the returned promise is dropped, a failed copy is not reported
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = text;
}

/// Follows a link the way a click would: web links in a new tab, `mailto:`
/// and `tel:` in place so the OS hands them to the right app.
pub fn open_link(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if href.starts_with("http") {
                let _ = window.open_with_url_and_target(href, "_blank");
            } else {
                let _ = window.location().set_href(href);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = href;
}

pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
