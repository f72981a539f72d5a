// This module detects the host x86/x86-64 processor with the CPUID instruction. It reads
// the vendor string (leaf 0), the signature and basic feature flags (leaf 1), structured
// extended flags (leaf 7, subleaves 0 and 1), XSAVE extensions (leaf 0xD), processor trace
// (leaf 0x14), and the AMD extended leaves (0x80000001, brand string 0x80000002-4, and
// 0x80000008/0x8000001F). Features that need OS-managed register state (AVX, AVX-512, AMX)
// are only reported when XCR0 shows that state enabled. Leaf decoding is split from the
// raw CPUID access so it can be tested with recorded register values.

//! X86 CPU detection via CPUID.

use crate::core::arch::{Arch, SubArch};
use crate::core::cpu_info::CpuInfo;

use super::X86Feature as F;

/// Register values returned by one CPUID query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuidRegs {
    pub eax: u32,
    pub ebx: u32,
    pub ecx: u32,
    pub edx: u32,
}

/// Source of CPUID results.
pub trait CpuidReader {
    fn cpuid(&self, leaf: u32, subleaf: u32) -> CpuidRegs;

    /// Value of XCR0, only called when the OS reports XSAVE support.
    fn xcr0(&self) -> u64;
}

const XCR0_YMM: u64 = 0x0000_0006;
const XCR0_ZMM: u64 = 0x0000_00E6;
const XCR0_AMX: u64 = 0x0006_0000;

#[inline]
fn bit(value: u32, n: u32) -> bool {
    (value >> n) & 1 != 0
}

fn regs_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

fn trimmed_ascii(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim().to_string()
}

/// Fills `info` from the CPUID values provided by `reader`.
pub fn detect_with<R: CpuidReader>(reader: &R, info: &mut CpuInfo) {
    let arch = if cfg!(target_arch = "x86") { Arch::X86 } else { Arch::X64 };
    info.init_arch(arch, SubArch::Unknown);

    let leaf0 = reader.cpuid(0, 0);
    let max_leaf = leaf0.eax;
    let vendor = regs_to_bytes(&[leaf0.ebx, leaf0.edx, leaf0.ecx]);
    info.set_vendor(&trimmed_ascii(&vendor));

    // CPUID itself implies at least an i486.
    info.add_feature([F::I486]);

    let mut ymm = false;
    let mut zmm = false;
    let mut amx = false;

    if max_leaf >= 1 {
        let r = reader.cpuid(1, 0);

        let mut family = (r.eax >> 8) & 0x0F;
        let mut model = (r.eax >> 4) & 0x0F;
        if family == 0x0F {
            family += (r.eax >> 20) & 0xFF;
        }
        if family == 0x06 || family >= 0x0F {
            model += ((r.eax >> 16) & 0x0F) << 4;
        }
        info.set_family_id(family);
        info.set_model_id(model);
        info.set_stepping(r.eax & 0x0F);
        info.set_processor_type((r.eax >> 12) & 0x03);
        info.set_brand_id(r.ebx & 0xFF);
        info.set_cache_line_size(((r.ebx >> 8) & 0xFF) * 8);
        info.set_max_logical_processors((r.ebx >> 16) & 0xFF);

        let f = info.features_mut();
        f.add_if(bit(r.ecx, 0), [F::Sse3]);
        f.add_if(bit(r.ecx, 1), [F::Pclmulqdq]);
        f.add_if(bit(r.ecx, 3), [F::Monitor]);
        f.add_if(bit(r.ecx, 5), [F::Vmx]);
        f.add_if(bit(r.ecx, 6), [F::Smx]);
        f.add_if(bit(r.ecx, 9), [F::Ssse3]);
        f.add_if(bit(r.ecx, 13), [F::Cmpxchg16b]);
        f.add_if(bit(r.ecx, 19), [F::Sse41]);
        f.add_if(bit(r.ecx, 20), [F::Sse42]);
        f.add_if(bit(r.ecx, 22), [F::Movbe]);
        f.add_if(bit(r.ecx, 23), [F::Popcnt]);
        f.add_if(bit(r.ecx, 25), [F::Aesni]);
        f.add_if(bit(r.ecx, 26), [F::Xsave]);
        f.add_if(bit(r.ecx, 27), [F::Osxsave]);
        f.add_if(bit(r.ecx, 30), [F::Rdrand]);
        f.add_if(bit(r.edx, 0), [F::Fpu]);
        f.add_if(bit(r.edx, 4), [F::Rdtsc]);
        f.add_if(bit(r.edx, 5), [F::Msr]);
        f.add_if(bit(r.edx, 8), [F::Cmpxchg8b]);
        f.add_if(bit(r.edx, 15), [F::Cmov]);
        f.add_if(bit(r.edx, 19), [F::Clflush]);
        f.add_if(bit(r.edx, 23), [F::Mmx]);
        f.add_if(bit(r.edx, 24), [F::Fxsr]);
        f.add_if(bit(r.edx, 25), [F::Sse, F::Mmx2]);
        f.add_if(bit(r.edx, 26), [F::Sse2]);
        f.add_if(bit(r.edx, 28), [F::Mt]);

        if bit(r.ecx, 27) {
            let xcr0 = reader.xcr0();
            ymm = xcr0 & XCR0_YMM == XCR0_YMM;
            zmm = xcr0 & XCR0_ZMM == XCR0_ZMM;
            amx = xcr0 & XCR0_AMX == XCR0_AMX;
        }

        f.add_if(ymm && bit(r.ecx, 28), [F::Avx]);
        f.add_if(ymm && bit(r.ecx, 12), [F::Fma]);
        f.add_if(ymm && bit(r.ecx, 29), [F::F16c]);
    }

    if max_leaf >= 7 {
        let r = reader.cpuid(7, 0);
        let max_subleaf = r.eax;
        let f = info.features_mut();

        f.add_if(bit(r.ebx, 0), [F::Fsgsbase]);
        f.add_if(bit(r.ebx, 3), [F::Bmi]);
        f.add_if(bit(r.ebx, 4), [F::Hle]);
        f.add_if(bit(r.ebx, 7), [F::Smep]);
        f.add_if(bit(r.ebx, 8), [F::Bmi2]);
        f.add_if(bit(r.ebx, 9), [F::Erms]);
        f.add_if(bit(r.ebx, 11), [F::Rtm, F::Tsx]);
        f.add_if(bit(r.ebx, 14), [F::Mpx]);
        f.add_if(bit(r.ebx, 18), [F::Rdseed]);
        f.add_if(bit(r.ebx, 19), [F::Adx]);
        f.add_if(bit(r.ebx, 20), [F::Smap]);
        f.add_if(bit(r.ebx, 23), [F::Clflushopt]);
        f.add_if(bit(r.ebx, 24), [F::Clwb]);
        f.add_if(bit(r.ebx, 29), [F::Sha]);
        f.add_if(bit(r.ecx, 0), [F::Prefetchwt1]);
        f.add_if(bit(r.ecx, 4), [F::Ospke]);
        f.add_if(bit(r.ecx, 5), [F::Waitpkg]);
        f.add_if(bit(r.ecx, 7), [F::CetSs]);
        f.add_if(bit(r.ecx, 8), [F::Gfni]);
        f.add_if(bit(r.ecx, 22), [F::Rdpid]);
        f.add_if(bit(r.ecx, 25), [F::Cldemote]);
        f.add_if(bit(r.ecx, 27), [F::Movdiri]);
        f.add_if(bit(r.ecx, 28), [F::Movdir64b]);
        f.add_if(bit(r.ecx, 29), [F::Enqcmd]);
        f.add_if(bit(r.edx, 4), [F::Fsrm]);
        f.add_if(bit(r.edx, 5), [F::Uintr]);
        f.add_if(bit(r.edx, 14), [F::Serialize]);
        f.add_if(bit(r.edx, 16), [F::Tsxldtrk]);
        f.add_if(bit(r.edx, 18), [F::Pconfig]);
        f.add_if(bit(r.edx, 20), [F::CetIbt]);

        f.add_if(ymm && bit(r.ebx, 5), [F::Avx2]);
        f.add_if(ymm && bit(r.ecx, 9), [F::Vaes]);
        f.add_if(ymm && bit(r.ecx, 10), [F::Vpclmulqdq]);

        if zmm && bit(r.ebx, 16) {
            f.add([F::Avx512F]);
            f.add_if(bit(r.ebx, 17), [F::Avx512Dq]);
            f.add_if(bit(r.ebx, 21), [F::Avx512Ifma]);
            f.add_if(bit(r.ebx, 26), [F::Avx512Pf]);
            f.add_if(bit(r.ebx, 27), [F::Avx512Er]);
            f.add_if(bit(r.ebx, 28), [F::Avx512Cd]);
            f.add_if(bit(r.ebx, 30), [F::Avx512Bw]);
            f.add_if(bit(r.ebx, 31), [F::Avx512Vl]);
            f.add_if(bit(r.ecx, 1), [F::Avx512Vbmi]);
            f.add_if(bit(r.ecx, 6), [F::Avx512Vbmi2]);
            f.add_if(bit(r.ecx, 11), [F::Avx512Vnni]);
            f.add_if(bit(r.ecx, 12), [F::Avx512Bitalg]);
            f.add_if(bit(r.ecx, 14), [F::Avx512Vpopcntdq]);
            f.add_if(bit(r.edx, 2), [F::Avx512Vnniw4]);
            f.add_if(bit(r.edx, 3), [F::Avx512Fmaps4]);
            f.add_if(bit(r.edx, 8), [F::Avx512Vp2intersect]);
            f.add_if(bit(r.edx, 23), [F::Avx512Fp16]);
        }

        if amx {
            f.add_if(bit(r.edx, 22), [F::AmxBf16]);
            f.add_if(bit(r.edx, 24), [F::AmxTile]);
            f.add_if(bit(r.edx, 25), [F::AmxInt8]);
        }

        if max_subleaf >= 1 {
            let r = reader.cpuid(7, 1);
            let f = info.features_mut();
            f.add_if(bit(r.eax, 3), [F::RaoInt]);
            f.add_if(bit(r.eax, 7), [F::Cmpccxadd]);
            f.add_if(bit(r.eax, 10), [F::Fzrm]);
            f.add_if(bit(r.eax, 11), [F::Fsrs]);
            f.add_if(bit(r.eax, 12), [F::Fsrc]);
            f.add_if(bit(r.eax, 19), [F::Wrmsrns]);
            f.add_if(bit(r.eax, 22), [F::Hreset]);
            f.add_if(bit(r.eax, 26), [F::Lam]);
            f.add_if(bit(r.eax, 27), [F::Msrlist]);
            f.add_if(bit(r.edx, 14), [F::Prefetchiti]);

            f.add_if(ymm && bit(r.eax, 4), [F::AvxVnni]);
            f.add_if(ymm && bit(r.eax, 23), [F::AvxIfma]);
            f.add_if(ymm && bit(r.edx, 4), [F::AvxVnniInt8]);
            f.add_if(ymm && bit(r.edx, 5), [F::AvxNeConvert]);
            f.add_if(zmm && bit(r.eax, 5), [F::Avx512Bf16]);
            f.add_if(amx && bit(r.eax, 21), [F::AmxFp16]);
            f.add_if(amx && bit(r.edx, 8), [F::AmxComplex]);
        }
    }

    if max_leaf >= 0x0D && info.has_feature(F::Xsave) {
        let r = reader.cpuid(0x0D, 1);
        let f = info.features_mut();
        f.add_if(bit(r.eax, 0), [F::Xsaveopt]);
        f.add_if(bit(r.eax, 1), [F::Xsavec]);
        f.add_if(bit(r.eax, 3), [F::Xsaves]);
    }

    if max_leaf >= 0x14 {
        let r = reader.cpuid(0x14, 0);
        info.features_mut().add_if(bit(r.ebx, 4), [F::Ptwrite]);
    }

    let max_ext = reader.cpuid(0x8000_0000, 0).eax;

    if max_ext >= 0x8000_0001 {
        let r = reader.cpuid(0x8000_0001, 0);
        let f = info.features_mut();
        f.add_if(bit(r.ecx, 0), [F::Lahfsahf]);
        f.add_if(bit(r.ecx, 2), [F::Svm]);
        f.add_if(bit(r.ecx, 4), [F::Altmovcr8]);
        f.add_if(bit(r.ecx, 5), [F::Lzcnt]);
        f.add_if(bit(r.ecx, 6), [F::Sse4a]);
        f.add_if(bit(r.ecx, 7), [F::Msse]);
        f.add_if(bit(r.ecx, 8), [F::Prefetchw]);
        f.add_if(bit(r.ecx, 12), [F::Skinit]);
        f.add_if(bit(r.ecx, 15), [F::Lwp]);
        f.add_if(bit(r.ecx, 21), [F::Tbm]);
        f.add_if(bit(r.ecx, 29), [F::Monitorx]);
        f.add_if(ymm && bit(r.ecx, 11), [F::Xop]);
        f.add_if(ymm && bit(r.ecx, 16), [F::Fma4]);
        f.add_if(bit(r.edx, 20), [F::Nx]);
        f.add_if(bit(r.edx, 22), [F::Mmx2]);
        f.add_if(bit(r.edx, 25), [F::Fxsropt]);
        f.add_if(bit(r.edx, 27), [F::Rdtscp]);
        f.add_if(bit(r.edx, 30), [F::ThreeDNow2]);
        f.add_if(bit(r.edx, 31), [F::ThreeDNow]);
    }

    if max_ext >= 0x8000_0004 {
        let words: Vec<u32> = (0x8000_0002..=0x8000_0004)
            .flat_map(|leaf| {
                let r = reader.cpuid(leaf, 0);
                [r.eax, r.ebx, r.ecx, r.edx]
            })
            .collect();
        info.set_brand(&trimmed_ascii(&regs_to_bytes(&words)));
    }

    if max_ext >= 0x8000_0008 {
        let r = reader.cpuid(0x8000_0008, 0);
        let f = info.features_mut();
        f.add_if(bit(r.ebx, 0), [F::Clzero]);
        f.add_if(bit(r.ebx, 4), [F::Rdpru]);
        f.add_if(bit(r.ebx, 8), [F::Mcommit]);
        f.add_if(bit(r.ebx, 9), [F::Wbnoinvd]);
    }

    if max_ext >= 0x8000_001F {
        let r = reader.cpuid(0x8000_001F, 0);
        info.features_mut().add_if(bit(r.eax, 4), [F::Snp]);
    }

    info.set_detected(true);
}

/// Reads CPUID on the running processor.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub struct NativeCpuid;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl CpuidReader for NativeCpuid {
    #[allow(unused_unsafe)]
    fn cpuid(&self, leaf: u32, subleaf: u32) -> CpuidRegs {
        #[cfg(target_arch = "x86")]
        use std::arch::x86::__cpuid_count;
        #[cfg(target_arch = "x86_64")]
        use std::arch::x86_64::__cpuid_count;

        // SAFETY: CPUID is available on every processor Rust targets here.
        let r = unsafe { __cpuid_count(leaf, subleaf) };
        CpuidRegs {
            eax: r.eax,
            ebx: r.ebx,
            ecx: r.ecx,
            edx: r.edx,
        }
    }

    fn xcr0(&self) -> u64 {
        #[target_feature(enable = "xsave")]
        unsafe fn read_xcr0() -> u64 {
            #[cfg(target_arch = "x86")]
            use std::arch::x86::_xgetbv;
            #[cfg(target_arch = "x86_64")]
            use std::arch::x86_64::_xgetbv;

            _xgetbv(0)
        }

        // SAFETY: only called after CPUID reported OSXSAVE, so XGETBV is enabled.
        unsafe { read_xcr0() }
    }
}

/// Detects the running x86 processor.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn detect_host(info: &mut CpuInfo) {
    detect_with(&NativeCpuid, info);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    /// CPUID replay built from recorded register values.
    #[derive(Default)]
    struct RecordedCpuid {
        leaves: HashMap<(u32, u32), CpuidRegs>,
        xcr0: u64,
    }

    impl RecordedCpuid {
        fn with(mut self, leaf: u32, subleaf: u32, eax: u32, ebx: u32, ecx: u32, edx: u32) -> Self {
            self.leaves.insert((leaf, subleaf), CpuidRegs { eax, ebx, ecx, edx });
            self
        }
    }

    impl CpuidReader for RecordedCpuid {
        fn cpuid(&self, leaf: u32, subleaf: u32) -> CpuidRegs {
            self.leaves.get(&(leaf, subleaf)).copied().unwrap_or_default()
        }

        fn xcr0(&self) -> u64 {
            self.xcr0
        }
    }

    fn vendor_regs(vendor: &[u8; 12]) -> (u32, u32, u32) {
        let word = |i: usize| u32::from_le_bytes(vendor[i..i + 4].try_into().unwrap());
        (word(0), word(4), word(8))
    }

    fn skylake_like(xcr0: u64) -> RecordedCpuid {
        let (ebx, edx, ecx) = vendor_regs(b"GenuineIntel");
        let mut cpu = RecordedCpuid { xcr0, ..Default::default() }
            .with(0, 0, 0x16, ebx, ecx, edx)
            // family 6, model 0x5E, stepping 3; clflush 8*8; 16 logical
            .with(1, 0, 0x000506E3, 0x0010_0800, 0x7FFA_FBBF, 0xBFEB_FBFF)
            .with(7, 0, 0, 0x029C_67AF, 0, 0)
            .with(0x0D, 1, 0x0F, 0, 0, 0)
            .with(0x8000_0000, 0, 0x8000_0008, 0, 0, 0)
            .with(0x8000_0001, 0, 0, 0, 0x121, 0x2C10_0800);
        let brand = *b"Intel(R) Core(TM) i7-6700 CPU @ 3.40GHz\0\0\0\0\0\0\0\0\0";
        for (i, leaf) in (0x8000_0002u32..=0x8000_0004).enumerate() {
            let chunk = &brand[i * 16..i * 16 + 16];
            let w = |j: usize| u32::from_le_bytes(chunk[j..j + 4].try_into().unwrap());
            cpu = cpu.with(leaf, 0, w(0), w(4), w(8), w(12));
        }
        cpu
    }

    #[test]
    fn test_decodes_identity_fields() {
        let mut info = CpuInfo::new();
        detect_with(&skylake_like(0x7), &mut info);

        assert!(info.was_detected());
        assert!(info.is_vendor("GenuineIntel"));
        assert_eq!(info.brand(), "Intel(R) Core(TM) i7-6700 CPU @ 3.40GHz");
        assert_eq!(info.family_id(), 6);
        assert_eq!(info.model_id(), 0x5E);
        assert_eq!(info.stepping(), 3);
        assert_eq!(info.cache_line_size(), 64);
        assert_eq!(info.max_logical_processors(), 16);
    }

    #[test]
    fn test_decodes_feature_flags() {
        let mut info = CpuInfo::new();
        detect_with(&skylake_like(0x7), &mut info);

        for f in [F::I486, F::Sse2, F::Sse42, F::Popcnt, F::Avx, F::Avx2, F::Fma, F::Bmi2, F::Lzcnt, F::Xsaveopt] {
            assert!(info.has_feature(f), "missing {f}");
        }
        assert!(!info.has_feature(F::Avx512F));
        assert!(!info.has_feature(F::NONE));
    }

    #[test]
    fn test_avx_requires_os_support() {
        let mut info = CpuInfo::new();
        detect_with(&skylake_like(0x3), &mut info);

        assert!(info.has_feature(F::Osxsave));
        assert!(!info.features().has_any([F::Avx, F::Avx2, F::Fma, F::F16c]));
        assert!(info.has_feature(F::Bmi2));
    }

    #[test]
    fn test_minimal_cpuid() {
        let cpu = RecordedCpuid::default().with(0, 0, 0, 0, 0, 0);
        let mut info = CpuInfo::new();
        detect_with(&cpu, &mut info);
        assert!(info.was_detected());
        assert_eq!(info.vendor(), "");
        assert_eq!(info.feature_names(), vec!["i486"]);
    }
}
