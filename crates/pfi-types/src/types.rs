//! Type identities and structural type keys.

use crate::flags::{SymbolFlags, TypeFlags};
use smallvec::SmallVec;

/// Interned type handle. Equal ids mean the same type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const ANY: TypeId = TypeId(0);
    pub const UNKNOWN: TypeId = TypeId(1);
    pub const NEVER: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const UNDEFINED: TypeId = TypeId(4);
    pub const NULL: TypeId = TypeId(5);
    pub const BOOLEAN: TypeId = TypeId(6);
    pub const NUMBER: TypeId = TypeId(7);
    pub const STRING: TypeId = TypeId(8);
    pub const BIGINT: TypeId = TypeId(9);
    pub const SYMBOL: TypeId = TypeId(10);
    /// Type of an expression the checker could not resolve.
    pub const ERROR: TypeId = TypeId(11);

    /// Number of pre-interned intrinsic ids.
    pub const FIRST_USER: u32 = 12;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeclId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    BigInt,
    Symbol,
}

/// `f64` wrapper with bitwise equality so literal types can be interned.
#[derive(Clone, Copy, Debug)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for OrderedFloat {}

impl std::hash::Hash for OrderedFloat {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(String),
    Number(OrderedFloat),
    Boolean(bool),
    BigInt(String),
}

pub type TypeList = SmallVec<[TypeId; 4]>;

/// Structural description of a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Intrinsic(IntrinsicKind),
    Literal(LiteralValue),
    /// `` `prefix${string}` `` and friends, kept as their printed form.
    TemplateLiteral(String),
    /// `Uppercase<T>`, `Lowercase<T>`, ...
    StringMapping(TypeId),
    /// Enum type, identified by its declaring symbol.
    Enum(SymbolId),
    Union(TypeList),
    Intersection(TypeList),
    /// Object type: interfaces, classes, arrays, function types, literals.
    /// `symbol` is `None` for anonymous object types without a declaration.
    Object {
        symbol: Option<SymbolId>,
        type_args: TypeList,
    },
    Error,
}

impl TypeKey {
    pub fn flags(&self) -> TypeFlags {
        match self {
            TypeKey::Intrinsic(kind) => match kind {
                IntrinsicKind::Any => TypeFlags::ANY,
                IntrinsicKind::Unknown => TypeFlags::UNKNOWN,
                IntrinsicKind::Never => TypeFlags::NEVER,
                IntrinsicKind::Void => TypeFlags::VOID,
                IntrinsicKind::Undefined => TypeFlags::UNDEFINED,
                IntrinsicKind::Null => TypeFlags::NULL,
                IntrinsicKind::Boolean => TypeFlags::BOOLEAN,
                IntrinsicKind::Number => TypeFlags::NUMBER,
                IntrinsicKind::String => TypeFlags::STRING,
                IntrinsicKind::BigInt => TypeFlags::BIG_INT,
                IntrinsicKind::Symbol => TypeFlags::ES_SYMBOL,
            },
            TypeKey::Literal(LiteralValue::String(_)) => TypeFlags::STRING_LITERAL,
            TypeKey::Literal(LiteralValue::Number(_)) => TypeFlags::NUMBER_LITERAL,
            TypeKey::Literal(LiteralValue::Boolean(_)) => TypeFlags::BOOLEAN_LITERAL,
            TypeKey::Literal(LiteralValue::BigInt(_)) => TypeFlags::BIG_INT_LITERAL,
            TypeKey::TemplateLiteral(_) => TypeFlags::TEMPLATE_LITERAL,
            TypeKey::StringMapping(_) => TypeFlags::STRING_MAPPING,
            TypeKey::Enum(_) => TypeFlags::ENUM,
            TypeKey::Union(_) => TypeFlags::UNION,
            TypeKey::Intersection(_) => TypeFlags::INTERSECTION,
            TypeKey::Object { .. } => TypeFlags::OBJECT,
            // Error types carry no capability flags; they never match.
            TypeKey::Error => TypeFlags::empty(),
        }
    }

    /// Members of a union or intersection.
    pub fn constituents(&self) -> Option<&[TypeId]> {
        match self {
            TypeKey::Union(members) | TypeKey::Intersection(members) => Some(members),
            _ => None,
        }
    }

    /// Declaring symbol of a nominal type.
    pub fn symbol(&self) -> Option<SymbolId> {
        match self {
            TypeKey::Object { symbol, .. } => *symbol,
            TypeKey::Enum(symbol) => Some(*symbol),
            _ => None,
        }
    }
}

/// A named entity with one or more declarations (merged across files).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub flags: SymbolFlags,
    pub declarations: SmallVec<[DeclId; 1]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub symbol: SymbolId,
    pub file: FileId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFileInfo {
    pub file_name: String,
    /// One of the compiler's default library files (`lib.*.d.ts`).
    pub is_default_library: bool,
}
