pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer;

use crate::overlay;
use crate::status::StatusLine;
use particle_core::{Command, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// State shared between DOM handlers and the frame loop. Everything runs on
/// the page's single thread; handlers write, the next frame reads.
#[derive(Clone)]
pub struct Shared {
    pub sim: Rc<RefCell<Simulation>>,
    pub status: Rc<RefCell<StatusLine>>,
    pub document: web::Document,
}

impl Shared {
    pub fn dispatch(&self, cmd: Command) {
        let (status, flags) = {
            let mut sim = self.sim.borrow_mut();
            (sim.apply(cmd), sim.flags())
        };
        if let Some(s) = status {
            self.status.borrow_mut().set(s.text());
        }
        overlay::sync_modes(&self.document, &flags, status);
    }
}
