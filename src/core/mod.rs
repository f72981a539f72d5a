// This module is the hub for the target-description building blocks shared by every
// architecture: architecture tags (arch), the fixed-capacity feature bit-set and the
// typed feature namespace machinery (features), dense instruction-id tables that can
// extend one another (inst), the CPU identity record (cpu_info), the process-wide cached
// host record (host), per-target baseline descriptions (target), and the error type used
// for name lookups (error). Architecture-specific tables and detectors live in x64 and arm.

//! Core target description infrastructure.
//!
//! # Key Components
//!
//! ## Feature Sets (`features`)
//! - 256-bit `CpuFeatures` set keyed by small integer ids
//! - Per-architecture id enums generated by `cpu_feature_ids!`
//!
//! ## Instruction Ids (`inst`)
//! - Dense `InstId` numbering with namespace extension
//!
//! ## CPU Identity (`cpu_info`, `host`, `target`)
//! - `CpuInfo` record, detected once for the host or built from a target baseline

pub mod arch;
pub mod cpu_info;
pub mod error;
pub mod features;
pub mod host;
pub mod inst;
pub mod target;

pub use arch::{Arch, SubArch};
pub use cpu_info::{CpuInfo, FixedString, BRAND_CAPACITY, VENDOR_CAPACITY};
pub use error::{TargetError, TargetResult};
pub use features::{
    CpuFeatures, FeatureId, FeatureIter, FeatureNamespace, BIT_WORD_SIZE, MAX_FEATURES,
    NUM_BIT_WORDS,
};
pub use host::{host, CpuInfoCache};
pub use inst::{InstId, InstNamespace, INST_ID_NONE};
pub use target::baseline_features;
