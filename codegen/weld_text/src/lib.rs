//! Text-transform primitives for generated-source emission.
//!
//! Small, stateless string rewrites a code generator applies to
//! identifiers and literals before emitting them: escaping, case
//! folding, typecode-placeholder substitution, identifier mangling,
//! and qualified-name splitting. Each transform owns nothing beyond
//! its own input and output, so all of them are safe to call
//! concurrently on disjoint inputs.
//!
//! This crate is standalone (no `weld_*` dependencies) so external
//! tools can use the transforms without pulling in the rest of the
//! generator. Name-based dispatch lives one layer up in
//! `weld_registry`.

pub mod case;
pub mod escape;
pub mod mangle;
pub mod scopename;
pub mod stream;
pub mod typecode;

pub use case::{lower, title, upper};
pub use escape::{escape, unescape};
pub use mangle::mangle;
pub use scopename::{split_base, split_prefix, ScopeNameError, SCOPENAME_MAX};
pub use stream::{TextReader, TextSink};
pub use typecode::{substitute_typecodes, TypeRenderer};
