//! Type model for the polyfill injector.
//!
//! - `TypeId` / `TypeKey`: interned structural types
//! - `TypeFlags` / `SymbolFlags`: capability bit sets (`bitflags`)
//! - `TypeOracle`: the questions the injection pass asks a host checker
//! - `TypeTable` / `NodeTypes` / `TypedFile`: an in-memory oracle
//! - `RecursionGuard`: visited-set guard for inheritance walks

pub mod flags;
pub use flags::{SymbolFlags, TypeFlags};

pub mod types;
pub use types::{
    DeclId, Declaration, FileId, IntrinsicKind, LiteralValue, OrderedFloat, SourceFileInfo,
    Symbol, SymbolId, TypeId, TypeKey, TypeList,
};

pub mod oracle;
pub use oracle::TypeOracle;

pub mod table;
pub use table::{NodeTypes, TypeTable, TypedFile};

pub mod recursion;
pub use recursion::{RecursionGuard, RecursionProfile, RecursionResult};

#[cfg(test)]
#[path = "../tests/table_tests.rs"]
mod table_tests;
#[cfg(test)]
#[path = "../tests/recursion_tests.rs"]
mod recursion_tests;
