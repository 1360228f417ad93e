use crate::constants::{DEBUG_OVERLAY_ID, MATRIX_CLASS, PARTY_CLASS, STATUS_ID};
use crate::dom;
use crate::status::{overlay_lines, DebugStats};
use particle_core::{ModeFlags, Status};
use web_sys as web;

#[inline]
pub fn set_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(DEBUG_OVERLAY_ID) {
        let style = if visible { "" } else { "display:none" };
        let _ = el.set_attribute("style", style);
    }
}

pub fn render(document: &web::Document, stats: &DebugStats) {
    dom::set_text(document, DEBUG_OVERLAY_ID, &overlay_lines(stats).join("\n"));
}

#[inline]
pub fn write_status(document: &web::Document, text: &str) {
    dom::set_text(document, STATUS_ID, text);
}

/// Reflect the current modes into page chrome after a command.
pub fn sync_modes(document: &web::Document, flags: &ModeFlags, status: Option<Status>) {
    dom::set_body_class(document, MATRIX_CLASS, flags.matrix);
    dom::set_body_class(document, PARTY_CLASS, flags.party);
    set_visible(document, flags.debug_overlay);
    if let Some(s) = status {
        write_status(document, s.text());
    }
}
