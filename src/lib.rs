//! TPDE target description.
//!
//! Describes the machine code is generated for: which instruction set
//! extensions the CPU offers, how instructions are numbered, and who made the
//! processor. The host CPU is detected once per process and shared; other
//! targets are described by their architecture baseline.
//!
//! # Primary Usage
//!
//! ```
//! use tpde_target::x64::X86Feature;
//!
//! let cpu = tpde_target::host();
//! if cpu.arch().is_x86_family() && cpu.has_feature(X86Feature::Avx2) {
//!     // select AVX2 instruction sequences
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`] - Feature sets, instruction ids, CPU identity and the host cache
//! - [`x64`] - x86/x86-64 feature ids and CPUID detection
//! - [`arm`] - ARM/AArch64 feature ids, instruction ids and detection
//! - [`detect`] - Host detector dispatch

pub mod arm;
pub mod core;
pub mod detect;
pub mod x64;

pub use crate::core::{
    // Architecture tags
    Arch, SubArch,
    // Feature sets
    CpuFeatures, FeatureId, FeatureNamespace, MAX_FEATURES,
    // Instruction ids
    InstId, InstNamespace, INST_ID_NONE,
    // CPU identity
    CpuInfo, CpuInfoCache,
    // Errors
    TargetError, TargetResult,
};
pub use crate::core::host::host;
pub use arm::ArmFeature;
pub use x64::X86Feature;
