use super::Shared;
use crate::constants::PARTY_SEQUENCE;
use crate::input::{command_for_keydown, command_for_keyup, SequenceDetector};
use particle_core::Command;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(
    ev: &web::KeyboardEvent,
    shared: &Shared,
    party_seq: &RefCell<SequenceDetector>,
) {
    let key = ev.key();
    let code = ev.code();
    if let Some(cmd) = command_for_keydown(&key, &code) {
        if matches!(cmd, Command::SetTimeWarp(_)) {
            ev.prevent_default();
        }
        shared.dispatch(cmd);
    }
    if party_seq.borrow_mut().feed(&key) {
        shared.dispatch(Command::ToggleParty);
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, shared: &Shared) {
    if let Some(cmd) = command_for_keyup(&ev.key(), &ev.code()) {
        shared.dispatch(cmd);
    }
}

pub fn wire_keyboard(shared: Shared) {
    let Some(window) = web::window() else {
        return;
    };
    let party_seq = RefCell::new(SequenceDetector::new(&PARTY_SEQUENCE));

    let down_shared = shared.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &down_shared, &party_seq);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &shared);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();
}
