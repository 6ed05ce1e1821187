//! # surface
//!
//! Editing-surface abstraction and Tab key dispatch.
//!
//! This crate connects live text controls to the `indent_core` engine:
//! - [`EditableSurface`]: the capability set a host widget exposes (text,
//!   selection, scroll offset)
//! - [`MemorySurface`]: an in-memory surface for hosts without a widget and
//!   for tests
//! - [`NormalizedSurface`]: presents CRLF/CR text as LF-only
//! - [`KeyDispatcher`]: the per-surface enabled set and the
//!   read-compute-write cycle run for each Tab press
//!
//! ## Integration
//!
//! Hosts implement [`EditableSurface`] for their widget, translate native
//! key events to [`KeyEvent`], and suppress the native default action
//! whenever [`KeyDispatcher::handle_key`] returns [`KeyOutcome::Handled`].

mod dispatcher;
mod id;
mod key;
mod memory;
mod normalized;
mod traits;

pub use dispatcher::KeyDispatcher;
pub use id::SurfaceId;
pub use key::{Key, KeyEvent, KeyOutcome, KeyPhase, Modifiers};
pub use memory::MemorySurface;
pub use normalized::NormalizedSurface;
pub use traits::{EditableSurface, SurfaceKind};
