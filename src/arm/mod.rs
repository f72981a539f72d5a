//! ARM and AArch64 target description.
//!
//! - [`features`] - CPU feature ids shared by AArch32 and AArch64
//! - [`inst`] - instruction ids common to all ARM instruction sets
//! - [`a32`] - A32 instruction ids, extending [`inst`]
//! - [`detect`] - AArch64 host detection

pub mod a32;
pub mod detect;
pub mod features;
pub mod inst;

pub use features::ArmFeature;
