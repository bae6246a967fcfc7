//! Page glue: puts wave backgrounds on `#wave1` / `#wave2`
//! and a random tint on the root element once the page has loaded.

use alloc::{format, string::String};

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::embedding::{background_image, pick_tint, tint_hex, TINT_VARIABLE};
use crate::geometry::DEFAULT_BOUNDS;
use crate::wave::{generate, WaveError::*, WaveParams, WaveResult, WaveVariant};

fn js_error(error: crate::WaveError) -> JsValue {
    JsValue::from_str(&format!("{:?}", error))
}

fn html_element(document: &Document, id: &str) -> WaveResult<HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or(MissingElement)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| Dom)
}

pub fn create_wave(target: &HtmlElement, variant: WaveVariant) -> WaveResult<()> {
    let path = generate(&DEFAULT_BOUNDS, &WaveParams::preset(variant));
    let value = background_image(&DEFAULT_BOUNDS, &path);
    target.style().set_property("background-image", &value).map_err(|_| Dom)
}

pub fn set_tint(document: &Document) -> WaveResult<()> {
    let root = document
        .document_element()
        .ok_or(MissingElement)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| Dom)?;

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let tint = tint_hex(pick_tint(&mut Pcg32::seed_from_u64(seed)));
    log::debug!("tint: {}", tint);

    root.style().set_property(TINT_VARIABLE, &tint).map_err(|_| Dom)
}

pub fn decorate_page() -> WaveResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MissingElement)?;

    create_wave(&html_element(&document, "wave1")?, WaveVariant::Sine)?;
    create_wave(&html_element(&document, "wave2")?, WaveVariant::Triangular)?;
    set_tint(&document)
}

#[wasm_bindgen(js_name = makeWave)]
pub fn make_wave_js(amplitude: f64, tightness: Option<f64>, heights: &[f64]) -> Result<String, JsValue> {
    let params = WaveParams::from_slice(amplitude, tightness, heights).map_err(js_error)?;
    Ok(generate(&DEFAULT_BOUNDS, &params))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error(MissingElement))?;

    let on_load = Closure::<dyn FnMut()>::new(|| {
        if let Err(e) = decorate_page() {
            log::warn!("could not decorate page: {:?}", e);
        }
    });
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();

    Ok(())
}
