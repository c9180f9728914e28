//! Named transform registry.
//!
//! Binds short symbolic names to string transforms so the template
//! engine can invoke them by name during expansion. The mapping is
//! fixed at construction and never mutated afterward, which keeps a
//! shared registry safe for concurrent lookups without locking.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use weld_text::{escape, lower, substitute_typecodes, title, upper, TypeRenderer};

/// A registered string transform, as the template engine applies it.
pub type Transform = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Read-only mapping from symbolic names to transforms.
///
/// The five bindings are fixed: `escape`, `upper`, `lower`, `title`
/// and `typecode`. Lookup by an unknown name returns `None`; deciding
/// what that means (error, identity, ...) is the template engine's
/// concern, not this crate's.
pub struct TransformRegistry {
    transforms: FxHashMap<&'static str, Transform>,
}

impl TransformRegistry {
    /// Build the registry. The `typecode` entry captures `renderer`,
    /// the canonical type-string formatter.
    pub fn with_renderer(renderer: Arc<dyn TypeRenderer>) -> Self {
        let mut transforms: FxHashMap<&'static str, Transform> = FxHashMap::default();
        transforms.insert("escape", Box::new(escape));
        transforms.insert("upper", Box::new(upper));
        transforms.insert("lower", Box::new(lower));
        transforms.insert("title", Box::new(title));
        transforms.insert(
            "typecode",
            Box::new(move |s: &str| substitute_typecodes(s, renderer.as_ref())),
        );
        Self { transforms }
    }

    /// Look up a transform by name.
    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.transforms.get(name)
    }

    /// Apply the named transform to `input`, or `None` for an unknown
    /// name.
    pub fn apply(&self, name: &str, input: &str) -> Option<String> {
        self.transforms.get(name).map(|transform| transform(input))
    }

    /// Returns `true` if a transform is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// All registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.transforms.keys().copied()
    }
}

impl std::fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("TransformRegistry")
            .field("names", &names)
            .finish_non_exhaustive()
    }
}
