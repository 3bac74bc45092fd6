//! Schema document field names
//!
//! This enum provides type-safe field names for the JSON shape the IR
//! serializes into, avoiding hardcoded strings when building schema objects.

use strum::AsRefStr;
use strum::Display;

/// Field names used when rendering the schema IR to its JSON shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum SchemaField {
    /// The additionalProperties field for map value schemas
    AdditionalProperties,
    /// The contentEncoding field
    ContentEncoding,
    /// The contentMediaType field
    ContentMediaType,
    /// The default field
    Default,
    /// The description field
    Description,
    /// The enum field listing constant values
    Enum,
    /// The examples field
    Examples,
    /// The exclusiveMaximum field
    ExclusiveMaximum,
    /// The exclusiveMinimum field
    ExclusiveMinimum,
    /// The format field
    Format,
    /// The items field for array types
    Items,
    /// The maximum field
    Maximum,
    /// The maxItems field
    MaxItems,
    /// The maxLength field
    MaxLength,
    /// The minimum field
    Minimum,
    /// The minItems field
    MinItems,
    /// The minLength field
    MinLength,
    /// The multipleOf field
    MultipleOf,
    /// The nullable field
    Nullable,
    /// The pattern field
    Pattern,
    /// The properties field for object types
    Properties,
    /// The $ref field for by-name references
    #[strum(serialize = "$ref")]
    Ref,
    /// The required field for object types
    Required,
    /// The type field
    Type,
    /// The uniqueItems field
    UniqueItems,
}
