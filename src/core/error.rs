//! Error types for target description parsing.
//!
//! Detection never fails; these errors only come out of name lookups
//! (feature names, architecture names, instruction mnemonics).

use thiserror::Error;

/// Main error type for target descriptions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("Unknown {namespace} feature: {name}")]
    UnknownFeature {
        namespace: &'static str,
        name: String,
    },

    #[error("Unknown architecture: {name}")]
    UnknownArch {
        name: String,
    },

    #[error("Unknown sub-architecture: {name}")]
    UnknownSubArch {
        name: String,
    },

    #[error("Unknown {namespace} instruction: {name}")]
    UnknownInstruction {
        namespace: &'static str,
        name: String,
    },

    #[error("Architecture {arch} has no feature namespace")]
    NoFeatureNamespace {
        arch: crate::core::arch::Arch,
    },
}

/// Result type alias for target description operations.
pub type TargetResult<T> = Result<T, TargetError>;
