//! x86 and x86-64 target description.
//!
//! - [`features`] - CPU feature ids and the x86-64 baseline
//! - [`detect`] - host detection through CPUID

pub mod detect;
pub mod features;

pub use features::{X86Feature, X64_BASELINE};
