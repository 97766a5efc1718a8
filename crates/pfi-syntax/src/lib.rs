//! Syntax tree for the polyfill injector.
//!
//! This crate provides the tree the injection pass walks and rewrites:
//! - Arena storage (`NodeArena`) addressed by `NodeIndex`
//! - The `Node` enum and its per-variant data, with `Node::Other` carrying
//!   any remaining kind by name and children
//! - Child enumeration in source order (`for_each_child`, `get_children`)
//! - `SyntaxTree`, a source file root plus reconstruction with a new
//!   statement list
//! - A JavaScript `Printer` for inspecting transform output
//!
//! Parsing is not part of this crate. Hosts build trees through the
//! `NodeArena::add_*` methods or convert from their own AST.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod node;
pub use node::*;

mod node_access;

mod node_arena;
pub use node_arena::NodeArena;

pub mod tree;
pub use tree::SyntaxTree;

pub mod printer;
pub use printer::{Printer, print_tree};

#[cfg(test)]
#[path = "../tests/tests.rs"]
mod tests;
#[cfg(test)]
#[path = "../tests/printer_tests.rs"]
mod printer_tests;
