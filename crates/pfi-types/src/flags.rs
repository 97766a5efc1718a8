//! Type and symbol flag sets.
//!
//! Bit positions follow the TypeScript checker so flag masks read the same in
//! both code bases; only the bits the classifier distinguishes are declared.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const ENUM = 1 << 5;
        const BIG_INT = 1 << 6;
        const STRING_LITERAL = 1 << 7;
        const NUMBER_LITERAL = 1 << 8;
        const BOOLEAN_LITERAL = 1 << 9;
        const ENUM_LITERAL = 1 << 10;
        const BIG_INT_LITERAL = 1 << 11;
        const ES_SYMBOL = 1 << 12;
        const VOID = 1 << 14;
        const UNDEFINED = 1 << 15;
        const NULL = 1 << 16;
        const NEVER = 1 << 17;
        const OBJECT = 1 << 19;
        const UNION = 1 << 20;
        const INTERSECTION = 1 << 21;
        const TEMPLATE_LITERAL = 1 << 27;
        const STRING_MAPPING = 1 << 28;

        const STRING_LIKE = Self::STRING.bits()
            | Self::STRING_LITERAL.bits()
            | Self::TEMPLATE_LITERAL.bits()
            | Self::STRING_MAPPING.bits();
        const NUMBER_LIKE = Self::NUMBER.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::ENUM.bits();
        const UNION_OR_INTERSECTION = Self::UNION.bits() | Self::INTERSECTION.bits();
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u32 {
        const FUNCTION_SCOPED_VARIABLE = 1 << 0;
        const BLOCK_SCOPED_VARIABLE = 1 << 1;
        const PROPERTY = 1 << 2;
        const FUNCTION = 1 << 4;
        const CLASS = 1 << 5;
        const INTERFACE = 1 << 6;
        const CONST_ENUM = 1 << 7;
        const REGULAR_ENUM = 1 << 8;
        const TYPE_LITERAL = 1 << 11;
        const OBJECT_LITERAL = 1 << 12;
        const METHOD = 1 << 13;
        const TYPE_ALIAS = 1 << 19;

        const VARIABLE = Self::FUNCTION_SCOPED_VARIABLE.bits()
            | Self::BLOCK_SCOPED_VARIABLE.bits();
        const ENUM = Self::CONST_ENUM.bits() | Self::REGULAR_ENUM.bits();
        const FUNCTION_OR_METHOD = Self::FUNCTION.bits() | Self::METHOD.bits();
        const CLASS_OR_INTERFACE = Self::CLASS.bits() | Self::INTERFACE.bits();
    }
}
