use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Закрывает выпадающее меню при нажатии мыши вне его корневого элемента
pub fn close_on_outside_click(root: NodeRef<Div>, is_open: RwSignal<bool>) {
    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        if !is_open.try_get_untracked().unwrap_or(false) {
            return;
        }
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = root
            .get_untracked()
            .map(|el| el.contains(target.as_ref()))
            .unwrap_or(false);
        if !inside {
            is_open.set(false);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    }
    closure.forget(); // Keep the closure alive
}
