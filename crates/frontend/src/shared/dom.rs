//! Helpers for reading form fields from the live document.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Current value of the `<input>` with the given id.
///
/// The page contract promises these fields exist: a missing document,
/// a missing element, or an element of another kind is an explicit
/// error naming the id, never a silent default.
pub fn input_value_by_id(id: &str) -> Result<String, String> {
    let document = web_sys::window()
        .ok_or_else(|| "no window object available".to_string())?
        .document()
        .ok_or_else(|| "no document available".to_string())?;

    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| format!("input element `{}` not found in document", id))?;

    let input: HtmlInputElement = element
        .dyn_into()
        .map_err(|_| format!("element `{}` is not an <input>", id))?;

    Ok(input.value())
}
