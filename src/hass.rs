//! Host API Bridge
//!
//! The card reaches its backend through the host object handed to
//! `setHass`. `HassApi` is the seam: browser builds call the host's
//! `callApi` directly, native tests substitute a recording fake.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

#[async_trait(?Send)]
pub trait HassApi {
    /// Issue one API call against the host. Failures come back as
    /// strings; callers log and swallow them.
    async fn call_api(&self, method: &str, route: &str, payload: Value) -> Result<Value, String>;
}

/// Live host object. The handle swaps in a fresh value on every
/// `setHass`; calls already in flight keep the one they captured.
#[derive(Clone)]
pub struct JsHass {
    hass: Rc<RefCell<JsValue>>,
}

impl JsHass {
    pub fn new() -> Self {
        Self {
            hass: Rc::new(RefCell::new(JsValue::UNDEFINED)),
        }
    }

    pub fn replace(&self, hass: JsValue) {
        *self.hass.borrow_mut() = hass;
    }

    pub fn current(&self) -> JsValue {
        self.hass.borrow().clone()
    }
}

impl Default for JsHass {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl HassApi for JsHass {
    async fn call_api(&self, method: &str, route: &str, payload: Value) -> Result<Value, String> {
        let hass = self.current();
        let call_api = js_sys::Reflect::get(&hass, &JsValue::from_str("callApi"))
            .map_err(|err| format!("host object has no callApi: {err:?}"))?;
        let call_api: js_sys::Function = call_api
            .dyn_into()
            .map_err(|_| "host callApi is not a function".to_string())?;

        // Maps must become plain objects, the host JSON-encodes them.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let payload = payload
            .serialize(&serializer)
            .map_err(|err| format!("payload serialization failed: {err}"))?;

        let promise = call_api
            .call3(
                &hass,
                &JsValue::from_str(method),
                &JsValue::from_str(route),
                &payload,
            )
            .map_err(|err| format!("callApi threw: {err:?}"))?;
        let promise: js_sys::Promise = promise
            .dyn_into()
            .map_err(|_| "callApi did not return a promise".to_string())?;
        let response = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|err| format!("callApi rejected: {err:?}"))?;
        serde_wasm_bindgen::from_value(response)
            .map_err(|err| format!("response deserialization failed: {err}"))
    }
}
