//! AArch64 host detection.
//!
//! User space cannot read the ID registers portably, so features come from
//! the operating system through `is_aarch64_feature_detected!`.

#[cfg(target_arch = "aarch64")]
use crate::core::arch::{Arch, SubArch};
#[cfg(target_arch = "aarch64")]
use crate::core::cpu_info::CpuInfo;

#[cfg(target_arch = "aarch64")]
use super::ArmFeature;

/// Cache line size in bytes from a `CTR_EL0` value.
///
/// `DminLine` (bits 19:16) is log2 of the smallest data cache line in words.
pub fn cache_line_from_ctr(ctr: u64) -> u32 {
    4 << ((ctr >> 16) & 0xF)
}

#[cfg(target_arch = "aarch64")]
fn read_ctr_el0() -> u64 {
    let ctr: u64;
    // SAFETY: CTR_EL0 is readable at EL0 on every supported OS.
    unsafe {
        std::arch::asm!("mrs {}, ctr_el0", out(reg) ctr, options(nomem, nostack, preserves_flags));
    }
    ctr
}

/// Fills `info` with the features of the running AArch64 processor.
#[cfg(target_arch = "aarch64")]
pub fn detect_host(info: &mut CpuInfo) {
    use ArmFeature as F;

    macro_rules! probe {
        ($($name:tt => [$($feature:ident),+],)*) => {
            $(
                info.features_mut().add_if(
                    std::arch::is_aarch64_feature_detected!($name),
                    [$(F::$feature),+],
                );
            )*
        };
    }

    info.init_arch(Arch::AArch64, SubArch::ArmV8);
    info.set_vendor("ARM");
    info.set_cache_line_size(cache_line_from_ctr(read_ctr_el0()));
    info.add_feature([F::Armv8a, F::Asimd, F::Fp]);

    probe! {
        "aes" => [Aes],
        "pmull" => [Pmull],
        "sha2" => [Sha1, Sha256],
        "sha3" => [Sha3, Sha512],
        "sm4" => [Sm3, Sm4],
        "crc" => [Crc32],
        "lse" => [Lse],
        "lse2" => [Lse2],
        "rdm" => [Rdm],
        "rcpc" => [Lrcpc],
        "rcpc2" => [Lrcpc2],
        "fp16" => [Fp16, Fp16conv],
        "fhm" => [Fhm],
        "dotprod" => [Dotprod],
        "jsconv" => [Jscvt],
        "fcma" => [Fcma],
        "dpb" => [Dpb],
        "dpb2" => [Dpb2],
        "dit" => [Dit],
        "flagm" => [Flagm],
        "frintts" => [Frintts],
        "ssbs" => [Ssbs],
        "sb" => [Sb],
        "paca" => [Pauth],
        "bti" => [Bti],
        "mte" => [Mte],
        "rand" => [Rng],
        "tme" => [Tme],
        "i8mm" => [I8mm],
        "bf16" => [Bf16],
        "sve" => [Sve],
        "sve2" => [Sve2],
        "sve2-aes" => [SveAes, SvePmull128],
        "sve2-sm4" => [SveSm4],
        "sve2-sha3" => [SveSha3],
        "sve2-bitperm" => [SveBitperm],
        "f32mm" => [SveF32mm],
        "f64mm" => [SveF64mm],
    }

    let features = info.features_mut();
    if features.has(F::Sve) {
        let i8mm = features.has(F::I8mm);
        let bf16 = features.has(F::Bf16);
        features.add_if(i8mm, [F::SveI8mm]);
        features.add_if(bf16, [F::SveBf16]);
    }

    info.set_detected(true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_line_from_ctr() {
        // DminLine = 4 (16 words)
        assert_eq!(cache_line_from_ctr(0x8444_C004), 64);
        // DminLine = 5 (32 words), as on Apple cores
        assert_eq!(cache_line_from_ctr(0x8035_8003), 128);
        assert_eq!(cache_line_from_ctr(0), 4);
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn test_host_has_baseline() {
        let mut info = CpuInfo::new();
        detect_host(&mut info);
        assert!(info.was_detected());
        assert_eq!(info.arch(), Arch::AArch64);
        assert!(info.has_feature(ArmFeature::Asimd));
        assert!(info.cache_line_size() >= 16);
    }
}
