mod error;
pub use error::Error;

pub mod model;
pub use model::ModelType;

pub mod record;
pub use record::{FieldKind, FieldValue, Member, Record};

pub mod schema;
pub use schema::{MetadataCache, RecordColumnFactory};

pub mod value;
pub use value::Value;

#[cfg(test)]
pub(crate) mod test_support;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
