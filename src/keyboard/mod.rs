//! Keyboard binding and dispatch system
//!
//! This module maps raw key events to editing-command handlers:
//! - Normalizes heterogeneous binding specs into canonical [`Binding`]s
//! - Stores `(Binding, Handler)` pairs per key code, in registration order
//! - Matches events against tri-state modifier constraints
//! - Ships the stock editing handlers (delete, enter, format toggle, tab)
//!
//! # Architecture
//!
//! ```text
//! KeyEvent → Keyboard::dispatch() → matching handlers → Document mutations
//! ```
//!
//! Dispatch is synchronous and runs to completion; the caller suppresses the
//! event's default action iff `dispatch` returns `true`.

mod binding;
mod dispatch;
mod handlers;
mod registry;
mod types;

pub use binding::{Binding, BindingSpec, KeySpec};
pub use dispatch::Keyboard;
pub use handlers::{on_delete, on_enter, on_format, on_tab};
pub use registry::{BindingRegistry, Handler};
pub use types::{keys, KeyEvent, Platform, TriState};
