//! The flow graph: typed nodes, typed edges and the document holding them.

pub mod change;
pub mod document;
pub mod edge;
pub mod node;

pub use change::*;
pub use document::*;
pub use edge::*;
pub use node::*;
