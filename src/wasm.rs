//! Browser bindings
//!
//! Thin `wasm-bindgen` wrappers for a page hosting the customizer. Characters
//! cross the boundary as JSON strings so the host can keep them in its own
//! reactive state.

use crate::{Character, CustomizerConfig, FieldUpdate, QueryParams, ShareLink, TraitVector};
use wasm_bindgen::prelude::*;

fn console_warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_json(character: &str) -> Result<Character, JsValue> {
    serde_json::from_str(character).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Seed for nine trait values given in seed order
#[wasm_bindgen(js_name = encodeSeed)]
pub fn encode_seed(values: &[u8]) -> Result<String, JsValue> {
    let values: [u8; crate::SEED_LEN] = values
        .try_into()
        .map_err(|_| JsValue::from_str("expected nine trait values"))?;
    Ok(crate::encode(&TraitVector::from_values(values)))
}

/// Starting character for `location.search`, as JSON
#[wasm_bindgen(js_name = decodeQuery)]
pub fn decode_query(search: &str) -> Result<String, JsValue> {
    let decoded = Character::from_query(&QueryParams::parse(search), &CustomizerConfig::default());
    if !decoded.outcome.is_applied() {
        console_warn(&format!("rpg-me: seed not applied ({:?})", decoded.outcome));
    }
    to_json(&decoded.character)
}

/// Apply one form edit to a JSON character, returning the new JSON character
#[wasm_bindgen(js_name = applyInput)]
pub fn apply_input(character: &str, field: &str, value: &str) -> Result<String, JsValue> {
    let config = CustomizerConfig::default();
    let update = FieldUpdate::from_input(field, value, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&from_json(character)?.apply(update))
}

/// Share link for a JSON character, pointing at `path`
#[wasm_bindgen(js_name = shareLink)]
pub fn share_link(path: &str, character: &str) -> Result<String, JsValue> {
    Ok(ShareLink::build(path, &from_json(character)?))
}

/// `[name, value, name, value, ...]` for the character element
#[wasm_bindgen(js_name = renderAttributes)]
pub fn render_attributes(character: &str) -> Result<js_sys::Array, JsValue> {
    let out = js_sys::Array::new();
    for (name, value) in from_json(character)?.render_attributes() {
        out.push(&JsValue::from_str(name));
        out.push(&JsValue::from_str(&value));
    }
    Ok(out)
}
