//! Tracing hooks shared by the expansion and shaping crates.
//!
//! Downstream crates call `emit` unconditionally; it compiles to a no-op unless the
//! `tracing` feature is enabled. Subscribers are the embedding binary's business.

#[cfg(feature = "tracing")]
pub fn emit(event: &str, key_values: &[(&str, String)]) {
    let span = tracing::span!(tracing::Level::TRACE, "recast", %event);
    let _entered = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%k, %v, "field");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit(_event: &str, _key_values: &[(&str, String)]) { /* no-op */
}
