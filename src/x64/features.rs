//! X86 and X86_64 CPU feature identifiers.
//!
//! Naming follows the CPUID feature names, lowercased (`avx512_f`, `sse4_1`).

use crate::core::features::cpu_feature_ids;

cpu_feature_ids! {
    /// X86 CPU feature identifier.
    pub enum X86Feature {
        None => "none",
        Mt => "mt",
        Nx => "nx",
        ThreeDNow => "3dnow",
        ThreeDNow2 => "3dnow2",
        Adx => "adx",
        Aesni => "aesni",
        Altmovcr8 => "altmovcr8",
        AmxBf16 => "amx_bf16",
        AmxComplex => "amx_complex",
        AmxFp16 => "amx_fp16",
        AmxInt8 => "amx_int8",
        AmxTile => "amx_tile",
        Avx => "avx",
        Avx2 => "avx2",
        Avx512Fmaps4 => "avx512_4fmaps",
        Avx512Vnniw4 => "avx512_4vnniw",
        Avx512Bf16 => "avx512_bf16",
        Avx512Bitalg => "avx512_bitalg",
        Avx512Bw => "avx512_bw",
        Avx512Cd => "avx512_cd",
        Avx512Dq => "avx512_dq",
        Avx512Er => "avx512_er",
        Avx512F => "avx512_f",
        Avx512Fp16 => "avx512_fp16",
        Avx512Ifma => "avx512_ifma",
        Avx512Pf => "avx512_pf",
        Avx512Vbmi => "avx512_vbmi",
        Avx512Vbmi2 => "avx512_vbmi2",
        Avx512Vl => "avx512_vl",
        Avx512Vnni => "avx512_vnni",
        Avx512Vp2intersect => "avx512_vp2intersect",
        Avx512Vpopcntdq => "avx512_vpopcntdq",
        AvxIfma => "avx_ifma",
        AvxNeConvert => "avx_ne_convert",
        AvxVnni => "avx_vnni",
        AvxVnniInt8 => "avx_vnni_int8",
        Bmi => "bmi",
        Bmi2 => "bmi2",
        CetIbt => "cet_ibt",
        CetSs => "cet_ss",
        CetSss => "cet_sss",
        Cldemote => "cldemote",
        Clflush => "clflush",
        Clflushopt => "clflushopt",
        Clwb => "clwb",
        Clzero => "clzero",
        Cmov => "cmov",
        Cmpccxadd => "cmpccxadd",
        Cmpxchg16b => "cmpxchg16b",
        Cmpxchg8b => "cmpxchg8b",
        Enclv => "enclv",
        Enqcmd => "enqcmd",
        Erms => "erms",
        F16c => "f16c",
        Fma => "fma",
        Fma4 => "fma4",
        Fpu => "fpu",
        Fsgsbase => "fsgsbase",
        Fsrm => "fsrm",
        Fsrc => "fsrc",
        Fsrs => "fsrs",
        Fxsr => "fxsr",
        Fxsropt => "fxsropt",
        Fzrm => "fzrm",
        Geode => "geode",
        Gfni => "gfni",
        Hle => "hle",
        Hreset => "hreset",
        I486 => "i486",
        Lahfsahf => "lahfsahf",
        Lam => "lam",
        Lwp => "lwp",
        Lzcnt => "lzcnt",
        Mcommit => "mcommit",
        Mmx => "mmx",
        Mmx2 => "mmx2",
        Monitor => "monitor",
        Monitorx => "monitorx",
        Movbe => "movbe",
        Movdir64b => "movdir64b",
        Movdiri => "movdiri",
        Mpx => "mpx",
        Msr => "msr",
        Msrlist => "msrlist",
        Msse => "msse",
        Osxsave => "osxsave",
        Ospke => "ospke",
        Pclmulqdq => "pclmulqdq",
        Pconfig => "pconfig",
        Popcnt => "popcnt",
        Prefetchiti => "prefetchiti",
        Prefetchw => "prefetchw",
        Prefetchwt1 => "prefetchwt1",
        Ptwrite => "ptwrite",
        RaoInt => "rao_int",
        Rdpid => "rdpid",
        Rdpru => "rdpru",
        Rdrand => "rdrand",
        Rdseed => "rdseed",
        Rdtsc => "rdtsc",
        Rdtscp => "rdtscp",
        Rtm => "rtm",
        Serialize => "serialize",
        Sha => "sha",
        Skinit => "skinit",
        Smap => "smap",
        Smep => "smep",
        Smx => "smx",
        Snp => "snp",
        Sse => "sse",
        Sse2 => "sse2",
        Sse3 => "sse3",
        Sse41 => "sse4_1",
        Sse42 => "sse4_2",
        Sse4a => "sse4a",
        Ssse3 => "ssse3",
        Svm => "svm",
        Tbm => "tbm",
        Tsx => "tsx",
        Tsxldtrk => "tsxldtrk",
        Uintr => "uintr",
        Vaes => "vaes",
        Vmx => "vmx",
        Vpclmulqdq => "vpclmulqdq",
        Waitpkg => "waitpkg",
        Wbnoinvd => "wbnoinvd",
        Wrmsrns => "wrmsrns",
        Xop => "xop",
        Xsave => "xsave",
        Xsavec => "xsavec",
        Xsaveopt => "xsaveopt",
        Xsaves => "xsaves",
    }
}

/// Features every x86-64 processor implements.
pub const X64_BASELINE: &[X86Feature] = &[
    X86Feature::I486,
    X86Feature::Fpu,
    X86Feature::Cmov,
    X86Feature::Cmpxchg8b,
    X86Feature::Fxsr,
    X86Feature::Mmx,
    X86Feature::Rdtsc,
    X86Feature::Sse,
    X86Feature::Sse2,
];
