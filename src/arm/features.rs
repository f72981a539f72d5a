//! ARM CPU feature identifiers.
//!
//! One namespace covers both AArch32 and AArch64; names follow the Arm
//! A-profile feature names, lowercased.

use crate::core::features::cpu_feature_ids;

cpu_feature_ids! {
    /// ARM CPU feature identifier.
    pub enum ArmFeature {
        None => "none",
        Armv6 => "armv6",
        Armv7 => "armv7",
        Armv8a => "armv8a",
        Thumb => "thumb",
        Thumbv2 => "thumbv2",
        Aes => "aes",
        Afp => "afp",
        Asimd => "asimd",
        Bf16 => "bf16",
        Bti => "bti",
        Ccidx => "ccidx",
        Chk => "chk",
        Clrbhb => "clrbhb",
        Cpuid => "cpuid",
        Crc32 => "crc32",
        Cssc => "cssc",
        D128 => "d128",
        Dgh => "dgh",
        Dit => "dit",
        Dotprod => "dotprod",
        Dpb => "dpb",
        Dpb2 => "dpb2",
        Ebf16 => "ebf16",
        Ecv => "ecv",
        Edsp => "edsp",
        Fcma => "fcma",
        Fgt => "fgt",
        Fgt2 => "fgt2",
        Fhm => "fhm",
        Flagm => "flagm",
        Flagm2 => "flagm2",
        Fmac => "fmac",
        Fp => "fp",
        Fp16 => "fp16",
        Fp16conv => "fp16conv",
        Frintts => "frintts",
        Gcs => "gcs",
        Hbc => "hbc",
        Hcx => "hcx",
        I8mm => "i8mm",
        Idiva => "idiva",
        Idivt => "idivt",
        Jscvt => "jscvt",
        Lor => "lor",
        Lrcpc => "lrcpc",
        Lrcpc2 => "lrcpc2",
        Lrcpc3 => "lrcpc3",
        Ls64 => "ls64",
        Ls64Accdata => "ls64_accdata",
        Ls64V => "ls64_v",
        Lse => "lse",
        Lse128 => "lse128",
        Lse2 => "lse2",
        Mops => "mops",
        Mpam => "mpam",
        Mte => "mte",
        Mte2 => "mte2",
        Mte3 => "mte3",
        Mte4 => "mte4",
        Nmi => "nmi",
        Nv => "nv",
        Nv2 => "nv2",
        Pan => "pan",
        Pan2 => "pan2",
        Pan3 => "pan3",
        Pauth => "pauth",
        Pmu => "pmu",
        Pmull => "pmull",
        Prfmslc => "prfmslc",
        Ras => "ras",
        Ras1p1 => "ras1_1",
        Ras2 => "ras2",
        Rdm => "rdm",
        Rme => "rme",
        Rng => "rng",
        RngTrap => "rng_trap",
        Rpres => "rpres",
        Rprfm => "rprfm",
        Sb => "sb",
        Sha1 => "sha1",
        Sha256 => "sha256",
        Sha3 => "sha3",
        Sha512 => "sha512",
        Sm3 => "sm3",
        Sm4 => "sm4",
        Sme => "sme",
        Sme2 => "sme2",
        Sme2p1 => "sme2_1",
        SmeB16b16 => "sme_b16b16",
        SmeB16f32 => "sme_b16f32",
        SmeBi32i32 => "sme_bi32i32",
        SmeF16f16 => "sme_f16f16",
        SmeF16f32 => "sme_f16f32",
        SmeF32f32 => "sme_f32f32",
        SmeF64f64 => "sme_f64f64",
        SmeFa64 => "sme_fa64",
        SmeI16i32 => "sme_i16i32",
        SmeI16i64 => "sme_i16i64",
        SmeI8i32 => "sme_i8i32",
        Specres => "specres",
        Specres2 => "specres2",
        Ssbs => "ssbs",
        Ssbs2 => "ssbs2",
        Sve => "sve",
        Sve2 => "sve2",
        Sve2p1 => "sve2_1",
        SveAes => "sve_aes",
        SveB16b16 => "sve_b16b16",
        SveBf16 => "sve_bf16",
        SveBitperm => "sve_bitperm",
        SveEbf16 => "sve_ebf16",
        SveF32mm => "sve_f32mm",
        SveF64mm => "sve_f64mm",
        SveI8mm => "sve_i8mm",
        SvePmull128 => "sve_pmull128",
        SveSha3 => "sve_sha3",
        SveSm4 => "sve_sm4",
        Sysinstr128 => "sysinstr128",
        Sysreg128 => "sysreg128",
        The => "the",
        Tme => "tme",
        Trf => "trf",
        Uao => "uao",
        VfpD32 => "vfp_d32",
        Vhe => "vhe",
        Wfxt => "wfxt",
        Xs => "xs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::{FeatureId, MAX_FEATURES};

    #[test]
    fn test_ids_fit_capacity() {
        assert_eq!(ArmFeature::NONE.id(), 0);
        assert!(ArmFeature::MAX_VALUE.id() < MAX_FEATURES);
        assert_eq!(ArmFeature::MAX_VALUE, ArmFeature::Xs);
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!(ArmFeature::Asimd.to_string(), "asimd");
        assert_eq!("sve2".parse::<ArmFeature>().unwrap(), ArmFeature::Sve2);
        assert_eq!("ls64_accdata".parse::<ArmFeature>().unwrap(), ArmFeature::Ls64Accdata);
        assert!("avx2".parse::<ArmFeature>().is_err());
    }
}
