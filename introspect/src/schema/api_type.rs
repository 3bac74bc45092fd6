//! OpenAPI type and format names for schema generation
//!
//! This module provides the standardized JSON schema type names and string
//! format refinements emitted into primitive schemas.

use serde::Serialize;
use serde_json::Value;
use strum::AsRefStr;
use strum::Display;
use strum::EnumString;

/// JSON schema type names emitted as the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApiType {
    /// Object schemas
    Object,
    /// Array schemas
    Array,
    /// String schemas
    String,
    /// Arbitrary-precision numeric schemas
    Number,
    /// Integer schemas
    Integer,
    /// Boolean schemas
    Boolean,
}

impl From<ApiType> for Value {
    fn from(api_type: ApiType) -> Self {
        Self::String(api_type.as_ref().to_string())
    }
}

/// Format refinements emitted as the `format` field, spelled the way OpenAPI
/// spells them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApiFormat {
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// Single-precision floating point
    Float,
    /// Double-precision floating point
    Double,
    /// RFC 3339 full-date string
    Date,
    /// RFC 3339 date-time string
    #[strum(serialize = "date-time")]
    #[serde(rename = "date-time")]
    DateTime,
    /// UUID string
    Uuid,
    /// Base64-encoded bytes
    Byte,
    /// Raw binary content
    Binary,
    /// Email address string
    Email,
    /// URI string
    Uri,
}

impl From<ApiFormat> for Value {
    fn from(format: ApiFormat) -> Self {
        Self::String(format.as_ref().to_string())
    }
}
