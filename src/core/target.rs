//! Baseline CPU descriptions for compile targets.
//!
//! When compiling for a machine other than the host there is nothing to
//! detect; the target is described by the features its architecture
//! guarantees. The resulting record has `was_detected() == false`.

use super::arch::{Arch, SubArch};
use super::cpu_info::CpuInfo;
use super::features::CpuFeatures;
use crate::arm::ArmFeature;
use crate::x64::{X86Feature, X64_BASELINE};

/// Features guaranteed by `arch`/`sub_arch`.
pub fn baseline_features(arch: Arch, sub_arch: SubArch) -> CpuFeatures {
    let mut features = CpuFeatures::new();
    match arch {
        Arch::X64 => {
            features.add(X64_BASELINE);
        }
        Arch::X86 => {
            features.add([X86Feature::I486, X86Feature::Fpu]);
        }
        Arch::AArch64 => {
            features.add([ArmFeature::Armv8a, ArmFeature::Asimd, ArmFeature::Fp]);
        }
        _ if arch.is_aarch32() => {
            let v6 = matches!(sub_arch, SubArch::ArmV6 | SubArch::ArmV7 | SubArch::ArmV8);
            let v7 = matches!(sub_arch, SubArch::ArmV7 | SubArch::ArmV8);
            let v8 = sub_arch == SubArch::ArmV8;
            features.add([ArmFeature::Thumb]);
            features.add_if(v6, [ArmFeature::Armv6, ArmFeature::Edsp]);
            features.add_if(v7, [ArmFeature::Armv7, ArmFeature::Thumbv2]);
            features.add_if(v8, [ArmFeature::Armv8a, ArmFeature::Asimd, ArmFeature::Fp]);
        }
        _ => {}
    }
    features
}

impl CpuInfo {
    /// Describes a compile target by its architecture baseline.
    pub fn for_target(arch: Arch, sub_arch: SubArch) -> CpuInfo {
        let mut info = CpuInfo::new();
        info.init_arch(arch, sub_arch);
        *info.features_mut() = baseline_features(arch, sub_arch);
        log::trace!(
            "Target baseline for {arch}/{sub_arch}: {} features",
            info.features().len()
        );
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x64_baseline_has_sse2() {
        let info = CpuInfo::for_target(Arch::X64, SubArch::Unknown);
        assert_eq!(info.arch(), Arch::X64);
        assert!(!info.was_detected());
        assert!(info.has_feature(X86Feature::Sse2));
        assert!(!info.has_feature(X86Feature::Avx));
        assert!(!info.has_feature(X86Feature::NONE));
    }

    #[test]
    fn test_arm_baseline_grows_with_revision() {
        let v6 = baseline_features(Arch::Arm, SubArch::ArmV6);
        let v7 = baseline_features(Arch::Arm, SubArch::ArmV7);
        let v8 = baseline_features(Arch::Arm, SubArch::ArmV8);
        assert!(v7.has_all(&v6));
        assert!(v8.has_all(&v7));
        assert!(!v6.has(ArmFeature::Thumbv2));
        assert!(v8.has(ArmFeature::Asimd));
    }

    #[test]
    fn test_thumb_shares_arm_baseline() {
        assert_eq!(
            baseline_features(Arch::Thumb, SubArch::ArmV7),
            baseline_features(Arch::Arm, SubArch::ArmV7)
        );
        assert!(!baseline_features(Arch::AArch64, SubArch::ArmV8).has(ArmFeature::Thumb));
    }

    #[test]
    fn test_unknown_target_is_empty() {
        assert!(baseline_features(Arch::RiscV64, SubArch::Unknown).is_empty());
        assert!(baseline_features(Arch::Unknown, SubArch::Unknown).is_empty());
    }
}
