//! Form field primitives.
//!
//! The base select-field machinery that policy-carrying fields compose:
//! ordered option storage and a plain dropdown widget behind the
//! [`OptionField`] seam.

mod dropdown;
mod options;

pub use dropdown::{DropdownField, OptionField};
pub use options::{OptionEntry, OptionSet};
