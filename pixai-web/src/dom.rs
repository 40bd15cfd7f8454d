//! Browser side effects that have no Dioxus equivalent.

use pixai_core::generation::{DownloadRequest, SharePayload};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, ShareData, Window};

use crate::error::BrowserError;

fn window() -> Result<Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

pub fn scroll_to_section(id: &str) -> Result<(), BrowserError> {
    let document = window()?.document().ok_or(BrowserError::NoWindow)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| BrowserError::MissingElement(id.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Clicks a throwaway `<a download>` pointing at the image.
pub fn start_download(request: &DownloadRequest) -> Result<(), BrowserError> {
    let document = window()?.document().ok_or(BrowserError::NoWindow)?;
    let body = document.body().ok_or(BrowserError::NoBody)?;

    let link: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| BrowserError::Js("created element is not an anchor".into()))?;
    link.set_href(&request.url);
    link.set_download(&request.filename);

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

pub fn page_url() -> Result<String, BrowserError> {
    Ok(window()?.location().href()?)
}

pub fn reload() -> Result<(), BrowserError> {
    window()?.location().reload()?;
    Ok(())
}

pub fn can_share() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("share")).unwrap_or(false))
        .unwrap_or(false)
}

pub async fn share(payload: &SharePayload) -> Result<(), BrowserError> {
    let data = ShareData::new();
    data.set_title(&payload.title);
    data.set_text(&payload.text);
    data.set_url(&payload.url);

    let promise = window()?.navigator().share_with_data(&data);
    JsFuture::from(promise).await?;
    Ok(())
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), BrowserError> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}
