//! Capability classification of types.
//!
//! Given a type and the categories registered for a member name, decide
//! which categories the type belongs to. `String`, `Number` and `Function`
//! are decided by flags; every other category name is nominal and matches
//! a standard library type of that name, directly or through inheritance.
//!
//! Unions and intersections are classified member by member and the results
//! merged, so `string | string[]` is both `String` and `Array`. Treating an
//! intersection like a union over-approximates: `Foo & Bar` qualifies for
//! any category either side qualifies for.

use indexmap::IndexSet;
use pfi_types::{
    RecursionGuard, RecursionProfile, SymbolFlags, TypeFlags, TypeId, TypeKey, TypeOracle,
};
use tracing::trace;

/// How a category name is matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category<'a> {
    /// String primitives, literals, template literals and string mappings.
    String,
    /// Number primitives, literals and enums.
    Number,
    /// Types whose symbol is a function or method.
    Function,
    /// A standard library class or interface with this exact name.
    Nominal(&'a str),
}

impl<'a> Category<'a> {
    pub fn parse(name: &'a str) -> Self {
        match name {
            "String" => Category::String,
            "Number" => Category::Number,
            "Function" => Category::Function,
            _ => Category::Nominal(name),
        }
    }
}

/// Return the subset of `categories` that `ty` satisfies.
///
/// For a single type the result follows candidate order; for unions it
/// follows member order, then candidate order within each member. Types the
/// oracle does not know match nothing. The exact `any` type matches every
/// candidate.
pub fn classify<'c>(
    oracle: &dyn TypeOracle,
    ty: TypeId,
    categories: &[&'c str],
) -> IndexSet<&'c str> {
    let mut matched = IndexSet::with_capacity(categories.len());
    let mut guard = RecursionGuard::with_profile(RecursionProfile::BaseTypeWalk);
    classify_into(oracle, ty, categories, &mut matched, &mut guard);
    matched
}

fn classify_into<'c>(
    oracle: &dyn TypeOracle,
    ty: TypeId,
    categories: &[&'c str],
    matched: &mut IndexSet<&'c str>,
    members_seen: &mut RecursionGuard<TypeId>,
) {
    if matched.len() == categories.len() {
        return;
    }
    let Some(key) = oracle.lookup(ty) else {
        return;
    };

    if let Some(members) = key.constituents() {
        if !members_seen.enter(ty).is_entered() {
            return;
        }
        for &member in members {
            classify_into(oracle, member, categories, matched, members_seen);
        }
        members_seen.leave();
        return;
    }

    let flags = key.flags();
    if flags == TypeFlags::ANY {
        matched.extend(categories.iter().copied());
        return;
    }

    for &name in categories {
        if matched.contains(name) {
            continue;
        }
        let hit = match Category::parse(name) {
            Category::String => flags.intersects(TypeFlags::STRING_LIKE),
            Category::Number => flags.intersects(TypeFlags::NUMBER_LIKE),
            Category::Function => is_function_like(oracle, key),
            Category::Nominal(type_name) => is_global_type(oracle, ty, type_name),
        };
        if hit {
            matched.insert(name);
        }
    }
}

fn is_function_like(oracle: &dyn TypeOracle, key: &TypeKey) -> bool {
    key.symbol().is_some_and(|symbol| {
        oracle
            .symbol_flags(symbol)
            .intersects(SymbolFlags::FUNCTION_OR_METHOD)
    })
}

/// Whether `ty` is the standard library type `type_name`, or a class or
/// interface that inherits from it.
///
/// A symbol declared in user code under a library name (a local
/// `class Promise`) does not match unless it also has a library
/// declaration; an augmented global interface keeps its library
/// declaration and still does.
pub fn is_global_type(oracle: &dyn TypeOracle, ty: TypeId, type_name: &str) -> bool {
    let mut guard = RecursionGuard::with_profile(RecursionProfile::BaseTypeWalk);
    let found = nominal_match(oracle, ty, type_name, &mut guard);
    if !found && guard.is_exceeded() {
        trace!(
            ty = ty.0,
            type_name,
            visited = guard.visited_count(),
            "base type walk hit its depth limit"
        );
    }
    found
}

fn nominal_match(
    oracle: &dyn TypeOracle,
    ty: TypeId,
    type_name: &str,
    guard: &mut RecursionGuard<TypeId>,
) -> bool {
    if !guard.enter(ty).is_entered() {
        return false;
    }
    let found = nominal_match_inner(oracle, ty, type_name, guard);
    guard.leave();
    found
}

fn nominal_match_inner(
    oracle: &dyn TypeOracle,
    ty: TypeId,
    type_name: &str,
    guard: &mut RecursionGuard<TypeId>,
) -> bool {
    // Union and intersection base types distribute.
    if let Some(members) = oracle.lookup(ty).and_then(TypeKey::constituents) {
        return members
            .iter()
            .any(|&member| nominal_match(oracle, member, type_name, guard));
    }

    let Some(symbol) = oracle.type_symbol(ty).and_then(|id| oracle.symbol(id)) else {
        return false;
    };

    if symbol.name == type_name
        && symbol
            .declarations
            .iter()
            .any(|&decl| oracle.is_standard_library_declaration(decl))
    {
        return true;
    }

    if !symbol.flags.intersects(SymbolFlags::CLASS_OR_INTERFACE) {
        return false;
    }

    oracle
        .base_types_of(ty)
        .into_iter()
        .any(|base| nominal_match(oracle, base, type_name, guard))
}
