//! Transform registry and start-up sequencing for the weld generator.
//!
//! `weld_text` supplies the transforms; this crate binds them to the
//! symbolic names the template engine dispatches on (`escape`,
//! `upper`, `lower`, `title`, `typecode`) and sequences one-time
//! process start-up: registry construction followed by symbol-table,
//! type-system and typemap-table bring-up.

pub mod registry;
pub mod startup;

pub use registry::{Transform, TransformRegistry};
pub use startup::{init, registry as global_registry, Subsystems};
