// Page wiring and status-line tuning constants

// DOM element ids
pub const CANVAS_ID: &str = "particle-canvas";
pub const LOGO_ID: &str = "logo";
pub const MATRIX_TOGGLE_ID: &str = "runtime-toggle";
pub const STATUS_ID: &str = "status-line";
pub const DEBUG_OVERLAY_ID: &str = "debug-overlay";

// Links carrying this attribute spawn a burst where they are clicked
pub const SPAWN_LINK_SELECTOR: &str = "a[data-spawn]";

// Body classes mirroring visual modes for page styling
pub const MATRIX_CLASS: &str = "matrix";
pub const PARTY_CLASS: &str = "party";

// Logo burst origin, relative to the logo's top-left corner (px)
pub const LOGO_BURST_OFFSET: f64 = 32.0;

// Status line
pub const STATUS_INITIAL: &str = "> system_ready";
pub const HINT_PERIOD_MS: u64 = 4000;
pub const HINTS: [&str; 4] = [
    "> press 'g' for gravity",
    "> press 't' for trails",
    "> hold 'space' to rewind",
    "> try: ↑ ↑ ↓ ↓ ← → ← → b a",
];
// A status containing any of these stays up instead of yielding to hints
pub const STICKY_MARKERS: [&str; 5] = ["ON", "OFF", "!", "ACTIVE", "frozen"];

// Party-mode key sequence, compared against `KeyboardEvent.key`
pub const PARTY_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];
