//! The type-resolution interface a host provides to the injection pass.
//!
//! The pass never builds or mutates types; it only asks these questions. A
//! compiler front end implements [`TypeOracle`] over its own checker, and
//! [`TypedFile`](crate::TypedFile) implements it over an in-memory
//! [`TypeTable`](crate::TypeTable).

use crate::flags::{SymbolFlags, TypeFlags};
use crate::types::{DeclId, Symbol, SymbolId, TypeId, TypeKey};
use pfi_syntax::NodeIndex;

pub trait TypeOracle {
    /// Static type of an expression node, `None` when the host has no type
    /// for it.
    fn type_of(&self, node: NodeIndex) -> Option<TypeId>;

    /// Structure of a type.
    fn lookup(&self, ty: TypeId) -> Option<&TypeKey>;

    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    /// Whether a declaration comes from the platform's built-in ambient
    /// declarations.
    fn is_standard_library_declaration(&self, decl: DeclId) -> bool;

    /// Direct supertypes of a class or interface type; empty otherwise.
    fn base_types_of(&self, ty: TypeId) -> Vec<TypeId>;

    // =========================================================================
    // Derived queries
    // =========================================================================

    fn type_flags(&self, ty: TypeId) -> TypeFlags {
        self.lookup(ty).map_or(TypeFlags::empty(), TypeKey::flags)
    }

    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId> {
        self.lookup(ty).and_then(TypeKey::symbol)
    }

    fn symbol_flags(&self, id: SymbolId) -> SymbolFlags {
        self.symbol(id).map_or(SymbolFlags::empty(), |sym| sym.flags)
    }
}
