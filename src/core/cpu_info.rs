// This module defines CpuInfo, the snapshot of one machine that the code generator reads
// when deciding which encodings it may emit. It owns one CpuFeatures set, the arch and
// sub-arch tags, the raw identification integers reported by the platform (family, model,
// brand, stepping, processor type), cache line size, logical processor and hardware
// thread counts, and two bounded strings for the vendor and brand names. The default
// value is the fully zeroed "not detected" record, so a CpuInfo is always safe to read
// even when detection is unavailable. Mutators exist for the detector and the target
// baseline tables; after construction the record is treated as read-only.

//! CPU identity record.

use std::fmt;

use super::arch::{Arch, SubArch};
use super::error::{TargetError, TargetResult};
use super::features::{CpuFeatures, FeatureId, FeatureNamespace};
use crate::arm::ArmFeature;
use crate::x64::X86Feature;

/// Capacity of [`CpuInfo::vendor`] in bytes.
pub const VENDOR_CAPACITY: usize = 16;

/// Capacity of [`CpuInfo::brand`] in bytes.
pub const BRAND_CAPACITY: usize = 64;

/// String stored inline in a fixed buffer of `N` bytes.
///
/// Longer input is truncated at the last character boundary that fits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedString<const N: usize> {
    buf: [u8; N],
    len: u8,
}

impl<const N: usize> FixedString<N> {
    const CAPACITY_FITS: () = assert!(N <= u8::MAX as usize);

    pub const fn new() -> Self {
        let () = Self::CAPACITY_FITS;
        Self { buf: [0; N], len: 0 }
    }

    pub fn as_str(&self) -> &str {
        // `set` only stores whole characters of a valid str.
        std::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replaces the content, truncating to the capacity.
    pub fn set(&mut self, s: &str) {
        let mut end = s.len().min(N);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf = [0; N];
        self.buf[..end].copy_from_slice(&s.as_bytes()[..end]);
        self.len = end as u8;
    }

    pub fn clear(&mut self) {
        self.buf = [0; N];
        self.len = 0;
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CpuInfo {
    arch: Arch,
    sub_arch: SubArch,
    /// True if the CPU was detected, false if detection failed or is unavailable.
    was_detected: bool,
    family_id: u32,
    model_id: u32,
    brand_id: u32,
    stepping: u32,
    processor_type: u32,
    /// Maximum number of addressable IDs for logical processors.
    max_logical_processors: u32,
    /// Cache line size in bytes.
    cache_line_size: u32,
    hw_thread_count: u32,
    vendor: FixedString<VENDOR_CAPACITY>,
    brand: FixedString<BRAND_CAPACITY>,
    features: CpuFeatures,
}

impl CpuInfo {
    /// The "unknown CPU" record: everything zero, not detected.
    pub const fn new() -> Self {
        Self {
            arch: Arch::Unknown,
            sub_arch: SubArch::Unknown,
            was_detected: false,
            family_id: 0,
            model_id: 0,
            brand_id: 0,
            stepping: 0,
            processor_type: 0,
            max_logical_processors: 0,
            cache_line_size: 0,
            hw_thread_count: 0,
            vendor: FixedString::new(),
            brand: FixedString::new(),
            features: CpuFeatures::new(),
        }
    }

    /// Returns the host CPU information, detecting it on first use.
    pub fn host() -> &'static CpuInfo {
        super::host::host()
    }

    /// Sets the architecture tags only; features and metadata are untouched.
    pub fn init_arch(&mut self, arch: Arch, sub_arch: SubArch) {
        self.arch = arch;
        self.sub_arch = sub_arch;
    }

    /// Returns the record to the "unknown CPU" state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }

    pub fn sub_arch(&self) -> SubArch {
        self.sub_arch
    }

    /// Whether the CPU was detected successfully.
    ///
    /// False means detection failed or there is no detector for the host
    /// architecture and operating system.
    pub fn was_detected(&self) -> bool {
        self.was_detected
    }

    /// CPU family id.
    ///
    /// On X86 this is the family from CPUID leaf 1 with the extended family
    /// already folded in. Other architectures report 0.
    pub fn family_id(&self) -> u32 {
        self.family_id
    }

    /// CPU model id (X86: CPUID model including the extended model).
    pub fn model_id(&self) -> u32 {
        self.model_id
    }

    pub fn brand_id(&self) -> u32 {
        self.brand_id
    }

    pub fn stepping(&self) -> u32 {
        self.stepping
    }

    pub fn processor_type(&self) -> u32 {
        self.processor_type
    }

    pub fn max_logical_processors(&self) -> u32 {
        self.max_logical_processors
    }

    /// Size of a CPU cache line in bytes.
    pub fn cache_line_size(&self) -> u32 {
        self.cache_line_size
    }

    /// Number of hardware threads available to the process.
    pub fn hw_thread_count(&self) -> u32 {
        self.hw_thread_count
    }

    pub fn vendor(&self) -> &str {
        self.vendor.as_str()
    }

    /// Tests whether the vendor string equals `s`.
    pub fn is_vendor(&self, s: &str) -> bool {
        self.vendor.as_str() == s
    }

    pub fn brand(&self) -> &str {
        self.brand.as_str()
    }

    pub fn features(&self) -> &CpuFeatures {
        &self.features
    }

    pub fn features_mut(&mut self) -> &mut CpuFeatures {
        &mut self.features
    }

    /// Tests whether the CPU has the given feature.
    pub fn has_feature(&self, id: impl FeatureId) -> bool {
        self.features.has(id)
    }

    pub fn add_feature<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: FeatureId,
    {
        self.features.add(ids);
    }

    pub fn remove_feature<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: FeatureId,
    {
        self.features.remove(ids);
    }

    /// Resolves a feature name in the namespace of this CPU's architecture.
    pub fn parse_feature(&self, name: &str) -> TargetResult<u32> {
        if self.arch.is_x86_family() {
            Ok(name.parse::<X86Feature>()?.id())
        } else if self.arch.is_arm_family() {
            Ok(name.parse::<ArmFeature>()?.id())
        } else {
            Err(TargetError::NoFeatureNamespace { arch: self.arch })
        }
    }

    /// Names of the present features, in the namespace of this CPU's architecture.
    pub fn feature_names(&self) -> Vec<&'static str> {
        if self.arch.is_x86_family() {
            self.features.names::<X86Feature>()
        } else if self.arch.is_arm_family() {
            self.features.names::<ArmFeature>()
        } else {
            Vec::new()
        }
    }

    pub fn set_detected(&mut self, detected: bool) {
        self.was_detected = detected;
    }

    pub fn set_family_id(&mut self, value: u32) {
        self.family_id = value;
    }

    pub fn set_model_id(&mut self, value: u32) {
        self.model_id = value;
    }

    pub fn set_brand_id(&mut self, value: u32) {
        self.brand_id = value;
    }

    pub fn set_stepping(&mut self, value: u32) {
        self.stepping = value;
    }

    pub fn set_processor_type(&mut self, value: u32) {
        self.processor_type = value;
    }

    pub fn set_max_logical_processors(&mut self, value: u32) {
        self.max_logical_processors = value;
    }

    pub fn set_cache_line_size(&mut self, value: u32) {
        self.cache_line_size = value;
    }

    pub fn set_hw_thread_count(&mut self, value: u32) {
        self.hw_thread_count = value;
    }

    /// Sets the vendor string, truncated to [`VENDOR_CAPACITY`] bytes.
    pub fn set_vendor(&mut self, vendor: &str) {
        self.vendor.set(vendor);
    }

    /// Sets the brand string, truncated to [`BRAND_CAPACITY`] bytes.
    pub fn set_brand(&mut self, brand: &str) {
        self.brand.set(brand);
    }

    fn typed_feature_list<F: FeatureNamespace>(&self) -> String {
        self.features.names::<F>().join(" ")
    }
}

impl fmt::Display for CpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "arch:           {} ({})", self.arch, self.sub_arch)?;
        writeln!(f, "detected:       {}", self.was_detected)?;
        writeln!(f, "vendor:         {}", self.vendor)?;
        writeln!(f, "brand:          {}", self.brand)?;
        writeln!(
            f,
            "family/model:   {}/{} stepping {} type {} brand-id {}",
            self.family_id, self.model_id, self.stepping, self.processor_type, self.brand_id
        )?;
        writeln!(f, "logical procs:  {}", self.max_logical_processors)?;
        writeln!(f, "hw threads:     {}", self.hw_thread_count)?;
        writeln!(f, "cache line:     {}", self.cache_line_size)?;
        let features = if self.arch.is_x86_family() {
            self.typed_feature_list::<X86Feature>()
        } else if self.arch.is_arm_family() {
            self.typed_feature_list::<ArmFeature>()
        } else {
            format!("{:?}", self.features)
        };
        write!(f, "features:       {features}")
    }
}
