pub mod cache;
pub use cache::MetadataCache;

pub mod column;
pub use column::{ColumnDescriptor, ColumnType, PropertyHandles, SqlRow};

pub mod factory;
pub use factory::{ColumnFactory, InstanceFactory, RecordColumnFactory};

pub mod mapping;

pub mod registry;
pub use registry::{FieldMeta, FieldRegistry};
