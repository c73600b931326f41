mod compare_op;
pub use compare_op::CompareOp;

mod condition;
pub use condition::Condition;

mod filter;
pub use filter::{Comparison, Filter, Operand};

mod lexer;

mod object_id;
pub use object_id::ObjectId;

mod projection;
pub use projection::Projection;

mod record;
pub use record::Record;

mod value;
pub use value::Value;
