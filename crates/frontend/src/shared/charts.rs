//! Chart.js instances created from JSON configs.
//!
//! Chart.js is loaded by `index.html` as the global `Chart`. Instances live in a
//! keyed [`ChartRegistry`] so a chart is destroyed before its canvas is reused.

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};

/// Something that must be released before it is replaced
pub trait Disposable {
    fn dispose(&self);
}

/// Live Chart.js instance
pub struct ChartHandle(JsValue);

impl Disposable for ChartHandle {
    fn dispose(&self) {
        let destroy = Reflect::get(&self.0, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(destroy) = destroy {
            let _ = destroy.call0(&self.0);
        }
    }
}

pub struct ChartRegistry<H: Disposable> {
    items: HashMap<&'static str, H>,
}

impl<H: Disposable> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<H: Disposable> ChartRegistry<H> {
    /// Store `handle` under `key`, disposing whatever was there
    pub fn replace(&mut self, key: &'static str, handle: H) {
        if let Some(old) = self.items.insert(key, handle) {
            old.dispose();
        }
    }

    /// Dispose the chart under `key` so its canvas can be reused
    pub fn release(&mut self, key: &'static str) {
        if let Some(old) = self.items.remove(key) {
            old.dispose();
        }
    }

    pub fn clear(&mut self) {
        for (_, handle) in self.items.drain() {
            handle.dispose();
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `new Chart(canvas, config)` on the canvas with id `canvas_id`
pub fn render_chart(canvas_id: &str, config: &serde_json::Value) -> Result<ChartHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{} not found", canvas_id)))?;

    let constructor = Reflect::get(&window, &JsValue::from_str("Chart"))?;
    if !constructor.is_function() {
        return Err(JsValue::from_str("Chart.js is not loaded"));
    }
    let constructor: Function = constructor.dyn_into()?;

    let config_value = config
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let args = Array::new();
    args.push(&canvas);
    args.push(&config_value);
    let chart = Reflect::construct(&constructor, &args)?;
    Ok(ChartHandle(chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Fake(Rc<Cell<u32>>);

    impl Disposable for Fake {
        fn dispose(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_replace_disposes_previous() {
        let disposed = Rc::new(Cell::new(0));
        let mut registry = ChartRegistry::default();

        registry.replace("daily", Fake(disposed.clone()));
        assert_eq!(disposed.get(), 0);

        registry.replace("daily", Fake(disposed.clone()));
        assert_eq!(disposed.get(), 1);
        assert_eq!(registry.len(), 1);

        registry.replace("channel", Fake(disposed.clone()));
        registry.clear();
        assert_eq!(disposed.get(), 3);
        assert!(registry.is_empty());
    }
}
