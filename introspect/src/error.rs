//! Error types for the introspection engine
//!
//! Only structural contract violations surface as errors; classification and
//! metadata-resolution problems degrade to fallback schemas instead (see the
//! resolver modules). A structural violation aborts the whole traversal
//! session because it indicates a defect in the caller's type declarations,
//! not a recoverable shape issue.

use thiserror::Error;

use crate::descriptor::TypeName;

/// Result type for the `typescribe` library
pub type Result<T> = core::result::Result<T, error_stack::Report<Error>>;

/// Internal error types for detailed error categorization
#[derive(Debug, Error)]
pub enum Error {
    /// A map type was declared with a key type that does not serialize as a
    /// string. OpenAPI object schemas only permit string keys.
    #[error("map type `{map_type}` has non-string key type `{key_type}`")]
    NonStringMapKey {
        /// The offending map type
        map_type: TypeName,
        /// The declared key type
        key_type: TypeName,
    },

    /// A generic type was supplied a different number of type arguments than
    /// its declaration carries parameters.
    #[error(
        "type `{type_name}` declares {declared} type parameter(s) but was supplied {supplied} argument(s)"
    )]
    TypeArgumentMismatch {
        /// The generic type being instantiated
        type_name: TypeName,
        /// Number of declared type parameters
        declared: usize,
        /// Number of supplied type arguments
        supplied: usize,
    },

    /// A collection or array type was used without an element type argument.
    #[error("collection type `{type_name}` is missing its element type argument")]
    MissingTypeArgument {
        /// The collection type missing its element
        type_name: TypeName,
    },
}
