use gloo::utils::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

pub fn alert(msg: &str) {
    window().alert_with_message(msg).ok();
}

pub fn input_value(e: InputEvent) -> String {
    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn change_value(e: Event) -> String {
    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: InputEvent) -> String {
    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
    input.value()
}

pub fn focus(id: &str) {
    let el = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = el {
        el.focus().ok();
    }
}

/// Offers `text` to the user as a file download.
pub fn download_text(filename: &str, mime: &str, text: &str) {
    if let Err(e) = try_download(filename, mime, text) {
        gloo::console::error!("download failed", e);
    }
}

fn try_download(filename: &str, mime: &str, text: &str) -> Result<(), JsValue> {
    let doc = window()
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let a = doc.create_element("a")?;
    a.set_attribute("download", filename)?;

    // data URL
    let encoded = js_sys::encode_uri_component(text);
    let href = format!("data:{mime};charset=utf-8,{}", encoded);
    a.set_attribute("href", &href)?;

    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&a)?;
    let a_el: web_sys::HtmlElement = a.dyn_into().map_err(JsValue::from)?;
    a_el.click();
    a_el.remove();
    Ok(())
}
