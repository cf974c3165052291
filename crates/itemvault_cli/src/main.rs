//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `itemvault_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("itemvault_core ping={}", itemvault_core::ping());
    println!("itemvault_core version={}", itemvault_core::core_version());
}
