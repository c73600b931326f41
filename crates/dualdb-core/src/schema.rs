mod constraint;
pub use constraint::enforce;

mod field;
pub use field::{Affinity, FieldDescriptor};

mod model;
pub use model::{LegacyNames, ModelSchema};

mod resolve;
pub use resolve::{resolve, Resolved};
