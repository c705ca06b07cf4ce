use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::{AnalyticsSink, SinkError};

/// Forwards events to the page's global `gtag` function.
///
/// The tag itself is configured by the hosting page; this sink only looks it
/// up at call time, so a page without analytics simply reports
/// [`SinkError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct GtagSink {
    _priv: (),
}

impl GtagSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn gtag() -> Result<Function, SinkError> {
        let window = web_sys::window().ok_or_else(|| SinkError::Unavailable("no window".into()))?;
        let gtag = Reflect::get(&window, &JsValue::from_str("gtag"))
            .map_err(|e| SinkError::Unavailable(describe(&e)))?;
        gtag.dyn_into::<Function>()
            .map_err(|_| SinkError::Unavailable("window.gtag is not a function".into()))
    }
}

impl AnalyticsSink for GtagSink {
    fn log_event(&self, name: &str, params: &[(&str, &str)]) -> Result<(), SinkError> {
        let gtag = Self::gtag()?;

        let payload = Object::new();
        for (key, value) in params {
            Reflect::set(&payload, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|e| SinkError::Rejected(describe(&e)))?;
        }

        gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(name),
            &payload,
        )
        .map(drop)
        .map_err(|e| SinkError::Rejected(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
