//! `textcap` - Text-input capability for editing widgets
//!
//! A uniform surface through which platform input methods, on-screen
//! keyboards, and accessibility layers can query and manipulate the caret,
//! selection, and visible text geometry of any text-editing widget.
//!
//! The core of the crate is the [`TextInputTarget`] trait. Widgets implement
//! it; consumers hold a `&mut dyn TextInputTarget` and drive composition,
//! caret placement, and selection through the trait alone. All indices count
//! Unicode codepoints and all geometry is in the widget's local coordinate
//! space.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow CharRange, RectList etc
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::missing_errors_doc)] // No fallible public API
#![allow(clippy::missing_panics_doc)] // Conformance checks panic on purpose
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::must_use_candidate)] // Annotated where it matters
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod composer;
pub mod conformance;
pub mod event;
pub mod geometry;
pub mod range;
pub mod target;
pub mod testing;

// Re-export core types at crate root
pub use composer::Composer;
pub use event::{LogLevel, emit_log, set_log_callback};
pub use geometry::{Point, Rect, RectList};
pub use range::CharRange;
pub use target::{TextInputTarget, VirtualKeyboardType};
pub use testing::GridTarget;
