//! Course-dependency lines: the registry and the per-plan resolver.

pub mod registry;
pub mod resolver;

pub use registry::{Line, LineId, LineKind, LineRegistry};
pub use resolver::{resolve_all, resolve_plan};
