//! Process-wide host CPU information.
//!
//! The host record is detected on first use and then shared read-only for the
//! rest of the process.

use std::sync::OnceLock;

use super::cpu_info::CpuInfo;

/// Holder that runs a detector at most once and serves its result afterwards.
///
/// Concurrent callers that race the first access block until the detector
/// finishes and all observe the same fully written value.
pub struct CpuInfoCache {
    cell: OnceLock<CpuInfo>,
    detect: fn() -> CpuInfo,
}

impl CpuInfoCache {
    pub const fn new(detect: fn() -> CpuInfo) -> Self {
        Self {
            cell: OnceLock::new(),
            detect,
        }
    }

    /// Returns the cached record, running the detector on first access.
    pub fn get(&self) -> &CpuInfo {
        self.cell.get_or_init(|| {
            let info = (self.detect)();
            log::debug!(
                "CPU info cached: arch={} detected={} features={}",
                info.arch(),
                info.was_detected(),
                info.features().len()
            );
            info
        })
    }

    /// Returns the record if it was already computed.
    pub fn try_get(&self) -> Option<&CpuInfo> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

static HOST: CpuInfoCache = CpuInfoCache::new(crate::detect::detect_host);

/// Returns the host CPU information, detecting it on first call.
///
/// Detection failure is not an error: the returned record then has
/// `was_detected() == false` and all fields at their defaults.
pub fn host() -> &'static CpuInfo {
    HOST.get()
}
