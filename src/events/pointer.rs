use super::Shared;
use crate::constants::{LOGO_BURST_OFFSET, LOGO_ID, MATRIX_TOGGLE_ID, SPAWN_LINK_SELECTOR};
use crate::dom;
use glam::DVec2;
use particle_core::Command;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

pub fn wire_pointer(shared: Shared) {
    let Some(window) = web::window() else {
        return;
    };

    // The canvas is fixed to the viewport, so client coordinates are canvas coordinates.
    let s = shared.clone();
    listen(&window, "mousemove", move |ev| {
        let p = client_pos(&ev);
        s.sim.borrow_mut().pointer_moved(p.x, p.y);
    });
    let s = shared.clone();
    listen(&window, "mousedown", move |_| s.sim.borrow_mut().pointer_pressed());
    let s = shared.clone();
    listen(&window, "mouseup", move |_| s.sim.borrow_mut().pointer_released());
    if let Some(root) = shared.document.document_element() {
        let s = shared.clone();
        listen(&root, "mouseleave", move |_| s.sim.borrow_mut().pointer_left());
    }

    let s = shared.clone();
    dom::add_click_listener(&shared.document, LOGO_ID, move |el, _| {
        let rect = el.get_bounding_client_rect();
        let origin = DVec2::new(rect.left(), rect.top()) + DVec2::splat(LOGO_BURST_OFFSET);
        s.sim.borrow_mut().spawn_burst(origin);
    });

    let s = shared.clone();
    dom::add_click_listener(&shared.document, MATRIX_TOGGLE_ID, move |_, _| {
        s.dispatch(Command::ToggleMatrix);
    });

    if let Ok(links) = shared.document.query_selector_all(SPAWN_LINK_SELECTOR) {
        for i in 0..links.length() {
            let Some(link) = links.item(i) else {
                continue;
            };
            let s = shared.clone();
            listen(&link, "click", move |ev| {
                s.sim.borrow_mut().spawn_burst(client_pos(&ev));
            });
        }
    }
}
