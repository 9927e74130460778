//! Generation and post-processing.
//!
//! Backends produce drafts; post-processors shift register and localize
//! idioms on top of them.

pub mod backend;
pub mod localize;
pub mod register_shift;

pub use backend::{BackendOutput, DynBackend, GlossaryBackend, PlaceholderBackend, TranslationBackend};
pub use localize::CulturalLocalizer;
pub use register_shift::RegisterAdapter;
