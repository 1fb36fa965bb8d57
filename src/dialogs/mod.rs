pub mod action;
pub mod kind;
pub mod transition;

pub use action::{DialogAction, DialogEvent, DismissReason};
pub use kind::DialogKind;
pub use transition::{DialogPhase, DialogTransition, SLIDE_DURATION};

/// The one dialog allowed on screen, with its slide state.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDialog {
    pub kind: DialogKind,
    pub transition: DialogTransition,
}

impl ActiveDialog {
    pub fn phase(&self) -> DialogPhase {
        self.transition.phase()
    }
}
