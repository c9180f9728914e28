//! One-time generator start-up.
//!
//! Builds the process-wide [`TransformRegistry`] and brings up the
//! collaborating subsystems in a fixed order. The registry is written
//! exactly once, before any concurrent reader exists, so later lookups
//! need no synchronization.

use std::sync::{Arc, OnceLock};

use weld_text::TypeRenderer;

use crate::TransformRegistry;

/// Opaque bring-up hooks for the generator's collaborating subsystems.
///
/// Each hook takes no arguments and returns nothing this crate
/// inspects; internal behavior is the subsystem's own concern.
pub trait Subsystems {
    fn init_symbol_table(&self);
    fn init_type_system(&self);
    fn init_typemap_table(&self);
}

static REGISTRY: OnceLock<TransformRegistry> = OnceLock::new();

/// Initialize the generator core.
///
/// On the first call this registers the five named transforms (the
/// `typecode` entry capturing `renderer`) and then runs the subsystem
/// hooks in a fixed order: symbol table, type system, typemap table.
/// Later calls are no-ops that return the existing registry; the hooks
/// never run twice.
pub fn init(
    renderer: Arc<dyn TypeRenderer>,
    subsystems: &dyn Subsystems,
) -> &'static TransformRegistry {
    REGISTRY.get_or_init(|| {
        tracing::debug!("registering string transforms");
        let registry = TransformRegistry::with_renderer(renderer);

        tracing::debug!("initializing symbol table");
        subsystems.init_symbol_table();
        tracing::debug!("initializing type system");
        subsystems.init_type_system();
        tracing::debug!("initializing typemap table");
        subsystems.init_typemap_table();

        registry
    })
}

/// The process-wide registry, or `None` before [`init`] has run.
pub fn registry() -> Option<&'static TransformRegistry> {
    REGISTRY.get()
}
