//! In-memory type universe.
//!
//! `TypeTable` interns types and owns the symbol, declaration and source file
//! tables of one program. Per-file expression types live in [`NodeTypes`];
//! pairing the two as a [`TypedFile`] yields a [`TypeOracle`] for one tree.
//! The table is immutable once built, so many files can be analysed against
//! it concurrently.

use crate::flags::SymbolFlags;
use crate::oracle::TypeOracle;
use crate::types::*;
use pfi_syntax::NodeIndex;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct TypeTable {
    types: Vec<TypeKey>,
    interned: FxHashMap<TypeKey, TypeId>,
    symbols: Vec<Symbol>,
    declarations: Vec<Declaration>,
    files: Vec<SourceFileInfo>,
    /// Instantiation-specific supertypes (`Foo<string>` extends `Bar<string>`).
    type_bases: FxHashMap<TypeId, Vec<TypeId>>,
    /// Declared heritage, used for any reference to the symbol without its
    /// own entry in `type_bases`.
    symbol_bases: FxHashMap<SymbolId, Vec<TypeId>>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    pub fn new() -> Self {
        let mut table = TypeTable {
            types: Vec::new(),
            interned: FxHashMap::default(),
            symbols: Vec::new(),
            declarations: Vec::new(),
            files: Vec::new(),
            type_bases: FxHashMap::default(),
            symbol_bases: FxHashMap::default(),
        };

        // Order must match the TypeId constants.
        for kind in [
            IntrinsicKind::Any,
            IntrinsicKind::Unknown,
            IntrinsicKind::Never,
            IntrinsicKind::Void,
            IntrinsicKind::Undefined,
            IntrinsicKind::Null,
            IntrinsicKind::Boolean,
            IntrinsicKind::Number,
            IntrinsicKind::String,
            IntrinsicKind::BigInt,
            IntrinsicKind::Symbol,
        ] {
            table.intern(TypeKey::Intrinsic(kind));
        }
        table.intern(TypeKey::Error);
        debug_assert_eq!(table.types.len() as u32, TypeId::FIRST_USER);

        table
    }

    /// Intern a type key, returning the existing id for structurally equal keys.
    pub fn intern(&mut self, key: TypeKey) -> TypeId {
        if let Some(&id) = self.interned.get(&key) {
            return id;
        }
        let id = TypeId(self.types.len() as u32);
        self.types.push(key.clone());
        self.interned.insert(key, id);
        id
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // =========================================================================
    // Type constructors
    // =========================================================================

    pub fn literal_string(&mut self, value: impl Into<String>) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::String(value.into())))
    }

    pub fn literal_number(&mut self, value: f64) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::Number(OrderedFloat(value))))
    }

    pub fn literal_boolean(&mut self, value: bool) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::Boolean(value)))
    }

    pub fn template_literal(&mut self, text: impl Into<String>) -> TypeId {
        self.intern(TypeKey::TemplateLiteral(text.into()))
    }

    pub fn string_mapping(&mut self, type_arg: TypeId) -> TypeId {
        self.intern(TypeKey::StringMapping(type_arg))
    }

    pub fn enum_type(&mut self, symbol: SymbolId) -> TypeId {
        self.intern(TypeKey::Enum(symbol))
    }

    /// Reference to a named object type, e.g. `Array<string>`.
    pub fn reference(&mut self, symbol: SymbolId, type_args: &[TypeId]) -> TypeId {
        self.intern(TypeKey::Object {
            symbol: Some(symbol),
            type_args: type_args.iter().copied().collect(),
        })
    }

    /// Object type without a declaring symbol.
    pub fn anonymous_object(&mut self) -> TypeId {
        self.intern(TypeKey::Object {
            symbol: None,
            type_args: SmallVec::new(),
        })
    }

    /// Union with nested unions flattened and duplicates removed, first
    /// occurrence order kept. A single member is returned as is; no members
    /// yields `never`.
    pub fn union(&mut self, members: &[TypeId]) -> TypeId {
        let flat = self.flatten(members, |key| matches!(key, TypeKey::Union(_)));
        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => self.intern(TypeKey::Union(flat)),
        }
    }

    /// Intersection, normalised like [`union`](Self::union); no members
    /// yields `unknown`.
    pub fn intersection(&mut self, members: &[TypeId]) -> TypeId {
        let flat = self.flatten(members, |key| matches!(key, TypeKey::Intersection(_)));
        match flat.len() {
            0 => TypeId::UNKNOWN,
            1 => flat[0],
            _ => self.intern(TypeKey::Intersection(flat)),
        }
    }

    fn flatten(&self, members: &[TypeId], same_kind: impl Fn(&TypeKey) -> bool) -> TypeList {
        let mut flat = TypeList::new();
        for &member in members {
            match self.types.get(member.0 as usize) {
                Some(key) if same_kind(key) => {
                    for &inner in key.constituents().unwrap_or(&[]) {
                        if !flat.contains(&inner) {
                            flat.push(inner);
                        }
                    }
                }
                _ => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }
        flat
    }

    // =========================================================================
    // Files, symbols, declarations
    // =========================================================================

    pub fn add_file(&mut self, file_name: impl Into<String>, is_default_library: bool) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(SourceFileInfo {
            file_name: file_name.into(),
            is_default_library,
        });
        id
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFileInfo> {
        self.files.get(id.0 as usize)
    }

    pub fn add_symbol(&mut self, name: impl Into<String>, flags: SymbolFlags) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol {
            name: name.into(),
            flags,
            declarations: SmallVec::new(),
        });
        id
    }

    /// Record a declaration of `symbol` in `file`. Declaring the same symbol
    /// in several files merges them, as interface augmentation does.
    pub fn add_declaration(&mut self, symbol: SymbolId, file: FileId) -> DeclId {
        let id = DeclId(self.declarations.len() as u32);
        self.declarations.push(Declaration { symbol, file });
        if let Some(sym) = self.symbols.get_mut(symbol.0 as usize) {
            sym.declarations.push(id);
        }
        id
    }

    /// Symbol plus one declaration in `file`.
    pub fn declare(&mut self, name: impl Into<String>, flags: SymbolFlags, file: FileId) -> SymbolId {
        let symbol = self.add_symbol(name, flags);
        self.add_declaration(symbol, file);
        symbol
    }

    pub fn declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.declarations.get(id.0 as usize)
    }

    // =========================================================================
    // Heritage
    // =========================================================================

    /// Supertypes of one specific type (usually a generic instantiation).
    pub fn set_base_types(&mut self, ty: TypeId, bases: Vec<TypeId>) {
        self.type_bases.insert(ty, bases);
    }

    /// Declared supertypes of a class or interface symbol.
    pub fn set_symbol_base_types(&mut self, symbol: SymbolId, bases: Vec<TypeId>) {
        self.symbol_bases.insert(symbol, bases);
    }

    /// Pair this table with the expression types of one file.
    pub fn with_node_types<'a>(&'a self, node_types: &'a NodeTypes) -> TypedFile<'a> {
        TypedFile {
            table: self,
            node_types,
        }
    }

    fn lookup_key(&self, ty: TypeId) -> Option<&TypeKey> {
        self.types.get(ty.0 as usize)
    }

    fn symbol_entry(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0 as usize)
    }

    fn bases_of(&self, ty: TypeId) -> Vec<TypeId> {
        if let Some(bases) = self.type_bases.get(&ty) {
            return bases.clone();
        }
        let Some(symbol) = self.lookup_key(ty).and_then(TypeKey::symbol) else {
            return Vec::new();
        };
        let is_class_or_interface = self
            .symbol_entry(symbol)
            .is_some_and(|sym| sym.flags.intersects(SymbolFlags::CLASS_OR_INTERFACE));
        if !is_class_or_interface {
            return Vec::new();
        }
        self.symbol_bases.get(&symbol).cloned().unwrap_or_default()
    }
}

/// Expression types of one syntax tree, keyed by node.
#[derive(Clone, Debug, Default)]
pub struct NodeTypes {
    types: FxHashMap<NodeIndex, TypeId>,
}

impl NodeTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, node: NodeIndex, ty: TypeId) {
        self.types.insert(node, ty);
    }

    pub fn get(&self, node: NodeIndex) -> Option<TypeId> {
        self.types.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// A [`TypeOracle`] over a shared [`TypeTable`] and one file's [`NodeTypes`].
#[derive(Clone, Copy, Debug)]
pub struct TypedFile<'a> {
    table: &'a TypeTable,
    node_types: &'a NodeTypes,
}

impl<'a> TypedFile<'a> {
    pub fn table(&self) -> &'a TypeTable {
        self.table
    }
}

impl TypeOracle for TypedFile<'_> {
    fn type_of(&self, node: NodeIndex) -> Option<TypeId> {
        self.node_types.get(node)
    }

    fn lookup(&self, ty: TypeId) -> Option<&TypeKey> {
        self.table.lookup_key(ty)
    }

    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.table.symbol_entry(id)
    }

    fn is_standard_library_declaration(&self, decl: DeclId) -> bool {
        self.table
            .declaration(decl)
            .and_then(|d| self.table.file(d.file))
            .is_some_and(|file| file.is_default_library)
    }

    fn base_types_of(&self, ty: TypeId) -> Vec<TypeId> {
        self.table.bases_of(ty)
    }
}
