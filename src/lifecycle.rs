// Page lifecycle policy for the animation loop.
// Pure so it can be exercised on the host.

/// A `pagehide` or `pageshow` event, with `PageTransitionEvent.persisted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    Hide { persisted: bool },
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopAction {
    /// The page is being discarded.
    Stop,
    /// The page is entering the back/forward cache and may come back.
    Pause,
    /// The page came back from the back/forward cache.
    Resume,
}

/// A first `pageshow` on a fresh load needs nothing; the loop is already up.
pub fn loop_action(transition: PageTransition) -> Option<LoopAction> {
    match transition {
        PageTransition::Hide { persisted: false } => Some(LoopAction::Stop),
        PageTransition::Hide { persisted: true } => Some(LoopAction::Pause),
        PageTransition::Show { persisted: true } => Some(LoopAction::Resume),
        PageTransition::Show { persisted: false } => None,
    }
}
