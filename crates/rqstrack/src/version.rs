//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line used in log output, e.g. `rqstrack 0.1.0`.
#[must_use]
pub fn full_version() -> String {
    format!("rqstrack {}", version())
}
