//! Hardcoded scalar type mappings
//!
//! The static knowledge of how the source type system's scalar types map onto
//! JSON schema types and format refinements. User-registered overrides (see
//! [`super::overrides`]) are consulted before this table.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::schema::{ApiFormat, ApiType, PrimitiveSchema};

/// Canonical name of the string scalar; the only legal map key type
pub(crate) const STRING_TYPE: &str = "core::String";

/// How one scalar type renders as a primitive schema
#[derive(Debug, Clone, Copy)]
pub(crate) struct PrimitiveMapping {
    pub api_type: ApiType,
    pub format: Option<ApiFormat>,
}

impl PrimitiveMapping {
    const fn plain(api_type: ApiType) -> Self {
        Self {
            api_type,
            format: None,
        }
    }

    const fn formatted(api_type: ApiType, format: ApiFormat) -> Self {
        Self {
            api_type,
            format: Some(format),
        }
    }

    pub(crate) fn to_schema(self) -> PrimitiveSchema {
        let mut schema = PrimitiveSchema::new(self.api_type);
        schema.format = self.format;
        schema
    }
}

/// Built-in scalar mappings, keyed by canonical type name
pub(crate) static BUILTIN_PRIMITIVES: LazyLock<HashMap<&'static str, PrimitiveMapping>> =
    LazyLock::new(|| {
        HashMap::from([
            (STRING_TYPE, PrimitiveMapping::plain(ApiType::String)),
            ("core::Char", PrimitiveMapping::plain(ApiType::String)),
            ("core::Boolean", PrimitiveMapping::plain(ApiType::Boolean)),
            (
                "core::Byte",
                PrimitiveMapping::formatted(ApiType::Integer, ApiFormat::Int32),
            ),
            (
                "core::Short",
                PrimitiveMapping::formatted(ApiType::Integer, ApiFormat::Int32),
            ),
            (
                "core::Int",
                PrimitiveMapping::formatted(ApiType::Integer, ApiFormat::Int32),
            ),
            (
                "core::Long",
                PrimitiveMapping::formatted(ApiType::Integer, ApiFormat::Int64),
            ),
            (
                "core::UInt",
                PrimitiveMapping::formatted(ApiType::Integer, ApiFormat::Int64),
            ),
            (
                "core::ULong",
                PrimitiveMapping::formatted(ApiType::Integer, ApiFormat::Int64),
            ),
            (
                "core::Float",
                PrimitiveMapping::formatted(ApiType::Number, ApiFormat::Float),
            ),
            (
                "core::Double",
                PrimitiveMapping::formatted(ApiType::Number, ApiFormat::Double),
            ),
            ("math::BigDecimal", PrimitiveMapping::plain(ApiType::Number)),
            (
                "math::BigInteger",
                PrimitiveMapping::formatted(ApiType::Integer, ApiFormat::Int64),
            ),
            (
                "time::LocalDate",
                PrimitiveMapping::formatted(ApiType::String, ApiFormat::Date),
            ),
            (
                "time::LocalDateTime",
                PrimitiveMapping::formatted(ApiType::String, ApiFormat::DateTime),
            ),
            (
                "time::Instant",
                PrimitiveMapping::formatted(ApiType::String, ApiFormat::DateTime),
            ),
            (
                "util::Uuid",
                PrimitiveMapping::formatted(ApiType::String, ApiFormat::Uuid),
            ),
            (
                "net::Uri",
                PrimitiveMapping::formatted(ApiType::String, ApiFormat::Uri),
            ),
            (
                "net::Email",
                PrimitiveMapping::formatted(ApiType::String, ApiFormat::Email),
            ),
        ])
    });

/// How one primitive-array type renders
///
/// Most primitive arrays render as an array of a scalar element; byte arrays
/// collapse to a single base64 string schema instead.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PrimitiveArrayMapping {
    pub element: PrimitiveMapping,
    /// Render the whole array as the element schema (byte-array case)
    pub scalar: bool,
}

impl PrimitiveArrayMapping {
    const fn of(element: PrimitiveMapping) -> Self {
        Self {
            element,
            scalar: false,
        }
    }
}

/// Built-in primitive-array mappings, keyed by canonical type name
pub(crate) static PRIMITIVE_ARRAYS: LazyLock<HashMap<&'static str, PrimitiveArrayMapping>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                "collections::IntArray",
                PrimitiveArrayMapping::of(PrimitiveMapping::formatted(
                    ApiType::Integer,
                    ApiFormat::Int32,
                )),
            ),
            (
                "collections::ShortArray",
                PrimitiveArrayMapping::of(PrimitiveMapping::formatted(
                    ApiType::Integer,
                    ApiFormat::Int32,
                )),
            ),
            (
                "collections::LongArray",
                PrimitiveArrayMapping::of(PrimitiveMapping::formatted(
                    ApiType::Integer,
                    ApiFormat::Int64,
                )),
            ),
            (
                "collections::FloatArray",
                PrimitiveArrayMapping::of(PrimitiveMapping::formatted(
                    ApiType::Number,
                    ApiFormat::Float,
                )),
            ),
            (
                "collections::DoubleArray",
                PrimitiveArrayMapping::of(PrimitiveMapping::formatted(
                    ApiType::Number,
                    ApiFormat::Double,
                )),
            ),
            (
                "collections::BooleanArray",
                PrimitiveArrayMapping::of(PrimitiveMapping::plain(ApiType::Boolean)),
            ),
            (
                "collections::CharArray",
                PrimitiveArrayMapping::of(PrimitiveMapping::plain(ApiType::String)),
            ),
            (
                "collections::ByteArray",
                PrimitiveArrayMapping {
                    element: PrimitiveMapping::formatted(ApiType::String, ApiFormat::Byte),
                    scalar: true,
                },
            ),
        ])
    });
