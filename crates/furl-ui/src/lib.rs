#![allow(non_snake_case)]
//! Collapsible container widget.

pub mod collapsible;

pub use collapsible::{Align, Collapsible, CollapsibleProps, CollapsibleState};
