//! Host CPU detection entry point.
//!
//! Picks the detector for the architecture this crate was compiled for. Hosts
//! without a detector get the "unknown CPU" record; that is not an error.

use crate::core::cpu_info::CpuInfo;

/// Detects the host CPU. Runs the probing instructions every time it is
/// called; use [`crate::host`] for the cached record.
pub fn detect_host() -> CpuInfo {
    let mut info = CpuInfo::new();

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    crate::x64::detect::detect_host(&mut info);

    #[cfg(target_arch = "aarch64")]
    crate::arm::detect::detect_host(&mut info);

    if !info.was_detected() {
        log::debug!("No CPU detector for this host, using an unknown CPU description");
        return CpuInfo::new();
    }

    let threads = std::thread::available_parallelism()
        .map(|n| u32::try_from(n.get()).unwrap_or(u32::MAX))
        .unwrap_or(1);
    info.set_hw_thread_count(threads);

    log::trace!(
        "Detected {} ({}) with {} features",
        info.vendor(),
        info.brand(),
        info.features().len()
    );
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::arch::Arch;

    #[test]
    fn test_detect_matches_build_target() {
        let info = detect_host();
        if cfg!(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")) {
            assert!(info.was_detected());
            assert_eq!(info.arch(), Arch::HOST);
            assert!(info.hw_thread_count() >= 1);
            assert!(!info.features().is_empty());
        } else {
            assert_eq!(info, CpuInfo::new());
        }
    }
}
