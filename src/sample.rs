//! The tabular data model: values, records, schemas, and datasets.

// Provides the value/kind/label primitives.
pub(crate) mod value;
// Provides the record struct.
pub(crate) mod record_struct;
// Provides the schema and dataset structs.
pub(crate) mod dataset_struct;


pub use value::{FeatureKind, Label, Value};
pub use record_struct::Record;
pub use dataset_struct::{Dataset, FeatureSpec, Schema};
