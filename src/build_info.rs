//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string, e.g. `flappy 2026-10-17 (a1b2c3d)`.
pub fn version_line(program: &str) -> String {
    format!("{} {} ({})", program, BUILD_DATE, BUILD_COMMIT)
}
