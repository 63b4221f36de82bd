//! # Parameter Schema
//!
//! The immutable, ordered table of parameter descriptors for a device build.
//!
//! A schema is authored once, at compile time, as a `&'static` slice of
//! [`ParamDescriptor`]. Index is positional and stable: wire codes and the
//! field order of persisted documents depend on it never changing for a
//! given build.
//!
//! ## Size Invariant
//!
//! `size` equals the native in-memory width for every fixed-width type (the
//! constructors hard-code it). For `Str`/`Pswd`, `size` is the buffer
//! capacity INCLUDING the NUL terminator, so usable text is `size - 1`
//! bytes. Name uniqueness is an authoring responsibility and is not enforced
//! at runtime; [`ParamSchema::find`] returns the first match.

// =============================================================================
// PARAMETER TYPES
// =============================================================================

/// Parameter type tag.
///
/// The declaration order is the wire ordinal; [`ParamType::code`] must stay
/// stable for compatibility with deployed management UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamType {
    /// Boolean flag (1 byte).
    Bool,
    /// 8-bit signed integer.
    I8,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit signed integer.
    I16,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit signed integer.
    I32,
    /// 32-bit unsigned integer.
    U32,
    /// 32-bit floating point.
    Float,
    /// Single character (1 byte, ASCII).
    Char,
    /// NUL-terminated text buffer.
    Str,
    /// NUL-terminated text buffer, masked in management UIs.
    Pswd,
}

impl ParamType {
    /// Wire code used by the complex projection, indexed by type ordinal.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bool => "B",
            Self::I8 => "I1",
            Self::U8 => "U1",
            Self::I16 => "I2",
            Self::U16 => "U2",
            Self::I32 => "I4",
            Self::U32 => "U4",
            Self::Float => "F",
            Self::Char => "C",
            Self::Str => "S",
            Self::Pswd => "P",
        }
    }

    /// Native storage width for fixed-width types; `None` for text types,
    /// whose capacity is chosen per descriptor.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Bool | Self::I8 | Self::U8 | Self::Char => Some(1),
            Self::I16 | Self::U16 => Some(2),
            Self::I32 | Self::U32 | Self::Float => Some(4),
            Self::Str | Self::Pswd => None,
        }
    }

    /// Whether values of this type are NUL-terminated text buffers.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Str | Self::Pswd)
    }
}

// =============================================================================
// DEFAULT VALUES
// =============================================================================

/// Default value payload, tagged to match the descriptor's [`ParamType`].
///
/// Text defaults are optional: `Str(None)` defaults to the empty string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    Float(f32),
    /// Single ASCII byte.
    Char(u8),
    /// Shared by `Str` and `Pswd` descriptors.
    Str(Option<&'static str>),
}

// =============================================================================
// PARAMETER DESCRIPTOR
// =============================================================================

/// One named, typed, configurable parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Type tag.
    pub param_type: ParamType,
    /// Unique (case-insensitive) document key.
    pub name: &'static str,
    /// Human-readable description for management UIs.
    pub descr: Option<&'static str>,
    /// Byte capacity of the backing storage slot.
    pub size: usize,
    /// Value applied by `clear()` and for keys absent from a document.
    pub default: ParamDefault,
}

impl ParamDescriptor {
    /// Boolean parameter.
    #[must_use]
    pub const fn boolean(name: &'static str, descr: Option<&'static str>, default: bool) -> Self {
        Self {
            param_type: ParamType::Bool,
            name,
            descr,
            size: 1,
            default: ParamDefault::Bool(default),
        }
    }

    /// 8-bit signed integer parameter.
    #[must_use]
    pub const fn int8(name: &'static str, descr: Option<&'static str>, default: i8) -> Self {
        Self {
            param_type: ParamType::I8,
            name,
            descr,
            size: 1,
            default: ParamDefault::I8(default),
        }
    }

    /// 8-bit unsigned integer parameter.
    #[must_use]
    pub const fn uint8(name: &'static str, descr: Option<&'static str>, default: u8) -> Self {
        Self {
            param_type: ParamType::U8,
            name,
            descr,
            size: 1,
            default: ParamDefault::U8(default),
        }
    }

    /// 16-bit signed integer parameter.
    #[must_use]
    pub const fn int16(name: &'static str, descr: Option<&'static str>, default: i16) -> Self {
        Self {
            param_type: ParamType::I16,
            name,
            descr,
            size: 2,
            default: ParamDefault::I16(default),
        }
    }

    /// 16-bit unsigned integer parameter.
    #[must_use]
    pub const fn uint16(name: &'static str, descr: Option<&'static str>, default: u16) -> Self {
        Self {
            param_type: ParamType::U16,
            name,
            descr,
            size: 2,
            default: ParamDefault::U16(default),
        }
    }

    /// 32-bit signed integer parameter.
    #[must_use]
    pub const fn int32(name: &'static str, descr: Option<&'static str>, default: i32) -> Self {
        Self {
            param_type: ParamType::I32,
            name,
            descr,
            size: 4,
            default: ParamDefault::I32(default),
        }
    }

    /// 32-bit unsigned integer parameter.
    #[must_use]
    pub const fn uint32(name: &'static str, descr: Option<&'static str>, default: u32) -> Self {
        Self {
            param_type: ParamType::U32,
            name,
            descr,
            size: 4,
            default: ParamDefault::U32(default),
        }
    }

    /// 32-bit floating point parameter.
    #[must_use]
    pub const fn float(name: &'static str, descr: Option<&'static str>, default: f32) -> Self {
        Self {
            param_type: ParamType::Float,
            name,
            descr,
            size: 4,
            default: ParamDefault::Float(default),
        }
    }

    /// Single-character parameter (ASCII byte).
    #[must_use]
    pub const fn character(name: &'static str, descr: Option<&'static str>, default: u8) -> Self {
        Self {
            param_type: ParamType::Char,
            name,
            descr,
            size: 1,
            default: ParamDefault::Char(default),
        }
    }

    /// Text parameter. `size` is the buffer capacity including the NUL
    /// terminator; usable text is `size - 1` bytes.
    #[must_use]
    pub const fn text(
        name: &'static str,
        descr: Option<&'static str>,
        size: usize,
        default: Option<&'static str>,
    ) -> Self {
        Self {
            param_type: ParamType::Str,
            name,
            descr,
            size,
            default: ParamDefault::Str(default),
        }
    }

    /// Secret text parameter: stored and round-tripped exactly like
    /// [`ParamDescriptor::text`], but flagged for masked display.
    #[must_use]
    pub const fn secret(
        name: &'static str,
        descr: Option<&'static str>,
        size: usize,
        default: Option<&'static str>,
    ) -> Self {
        Self {
            param_type: ParamType::Pswd,
            name,
            descr,
            size,
            default: ParamDefault::Str(default),
        }
    }
}

// =============================================================================
// SCHEMA
// =============================================================================

/// Immutable, ordered parameter table for one device build.
#[derive(Debug, Clone, Copy)]
pub struct ParamSchema {
    params: &'static [ParamDescriptor],
}

impl ParamSchema {
    /// Wrap an authored descriptor table.
    #[must_use]
    pub const fn new(params: &'static [ParamDescriptor]) -> Self {
        Self { params }
    }

    /// Number of parameters.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.params.len()
    }

    /// Descriptor at `index`; `None` for out-of-range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static ParamDescriptor> {
        self.params.get(index)
    }

    /// Type tag at `index`.
    #[must_use]
    pub fn param_type(&self, index: usize) -> Option<ParamType> {
        self.get(index).map(|p| p.param_type)
    }

    /// Document key at `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.get(index).map(|p| p.name)
    }

    /// Description at `index`, if the descriptor carries one.
    #[must_use]
    pub fn descr(&self, index: usize) -> Option<&'static str> {
        self.get(index).and_then(|p| p.descr)
    }

    /// Storage capacity in bytes at `index`.
    #[must_use]
    pub fn size(&self, index: usize) -> Option<usize> {
        self.get(index).map(|p| p.size)
    }

    /// Case-insensitive exact name lookup. Returns the first match; names
    /// must be unique by authoring contract.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.params
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &[ParamDescriptor] = &[
        ParamDescriptor::text("host", Some("Host name"), 16, Some("example.org")),
        ParamDescriptor::int8("offset", None, -3),
        ParamDescriptor::boolean("enabled", None, true),
    ];

    const SCHEMA: ParamSchema = ParamSchema::new(PARAMS);

    #[test]
    fn wire_codes_are_stable() {
        let expected = [
            (ParamType::Bool, "B"),
            (ParamType::I8, "I1"),
            (ParamType::U8, "U1"),
            (ParamType::I16, "I2"),
            (ParamType::U16, "U2"),
            (ParamType::I32, "I4"),
            (ParamType::U32, "U4"),
            (ParamType::Float, "F"),
            (ParamType::Char, "C"),
            (ParamType::Str, "S"),
            (ParamType::Pswd, "P"),
        ];
        for (ty, code) in expected {
            assert_eq!(ty.code(), code);
        }
    }

    #[test]
    fn fixed_constructors_use_native_widths() {
        assert_eq!(ParamDescriptor::boolean("b", None, false).size, 1);
        assert_eq!(ParamDescriptor::int8("a", None, 0).size, 1);
        assert_eq!(ParamDescriptor::uint16("c", None, 0).size, 2);
        assert_eq!(ParamDescriptor::int32("d", None, 0).size, 4);
        assert_eq!(ParamDescriptor::float("e", None, 0.0).size, 4);
        assert_eq!(ParamDescriptor::character("f", None, b'x').size, 1);
    }

    #[test]
    fn lookup_by_index() {
        assert_eq!(SCHEMA.count(), 3);
        assert_eq!(SCHEMA.name(0), Some("host"));
        assert_eq!(SCHEMA.param_type(1), Some(ParamType::I8));
        assert_eq!(SCHEMA.size(0), Some(16));
        assert_eq!(SCHEMA.descr(0), Some("Host name"));
        assert_eq!(SCHEMA.descr(1), None);
    }

    #[test]
    fn out_of_range_returns_none() {
        assert_eq!(SCHEMA.get(3), None);
        assert_eq!(SCHEMA.name(3), None);
        assert_eq!(SCHEMA.param_type(99), None);
        assert_eq!(SCHEMA.size(99), None);
    }

    #[test]
    fn find_is_case_insensitive_exact() {
        assert_eq!(SCHEMA.find("host"), Some(0));
        assert_eq!(SCHEMA.find("HOST"), Some(0));
        assert_eq!(SCHEMA.find("Enabled"), Some(2));
        assert_eq!(SCHEMA.find("hos"), None);
        assert_eq!(SCHEMA.find("hostname"), None);
        assert_eq!(SCHEMA.find(""), None);
    }
}
