//! Text serializers, one per output grammar.
//!
//! Every emitter returns the complete artifact as a `String` so nothing is
//! written out before the whole sprite has been serialized.

// Modules --------------------------------------------------------------------
pub mod case;
pub mod mem;
pub mod rom;
