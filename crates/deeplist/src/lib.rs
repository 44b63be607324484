//! DeepList: a hierarchical list control for terminal UIs.
//!
//! A DeepList is a list of selectable rows, each of which may own a nested
//! sub-list that can be expanded or collapsed. The current selection is an
//! index path through the tree, re-resolved on every access, so structural
//! edits never leave a dangling reference behind.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`DeepList`] - The control: tree, selection, viewport and event handling
//! - [`ListConfig`] - Behavioural flags and styles owned by one control
//! - [`TermBuf`] - An in-memory [`Canvas`] to draw into
//!
//! # Module Organization
//!
//! - [`tree`] - Entries, sub-lists and the item tree
//! - [`path`] - Index paths, normalization and resolution
//! - [`navigator`] - Selection movement over index paths
//! - [`viewport`] - Scroll state and the keep-visible policy
//! - [`render`] - Row planning and painting

#![warn(missing_docs)]

pub mod backend;
pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod geom;
pub mod list;
pub mod navigator;
pub mod path;
pub mod render;
pub mod style;
pub mod text;
pub mod tree;
pub mod viewport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use canvas::{Canvas, TermBuf};
pub use config::ListConfig;
pub use list::{DeepList, ListEvent, Selection};
pub use path::IndexPath;
pub use tree::{Entry, ItemTree, SubList};
