//! Records the task reads: its own options and context, plus the node and
//! OBM entities owned by the datastore.

pub mod context;
pub mod node;
pub mod obm;
pub mod options;

pub use context::TaskContext;
pub use node::Node;
pub use obm::{Obm, ObmConfig};
pub use options::ConfigureBiosOptions;
