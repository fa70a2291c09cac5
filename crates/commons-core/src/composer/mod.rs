//! The response input form.
//!
//! # Module Structure
//!
//! - `capture`: per-type capture drafts and the pure `compose` step
//! - `machine`: `ResponseComposer`, the form's open/close/error state machine

mod capture;
mod machine;

pub use capture::{Capture, MULTI_CHOICE_PREFIX, SINGLE_CHOICE_SEPARATOR};
pub use machine::{ComposerPhase, ResponseComposer};
