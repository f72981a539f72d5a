//! Host CPU record sharing.
//!
//! Every caller, on every thread, sees the same record.

use std::sync::Barrier;

use tpde_target::{Arch, CpuInfo};

#[test]
fn test_host_is_shared_across_threads() {
    let _ = env_logger::builder().is_test(true).try_init();

    let barrier = Barrier::new(8);
    let seen: Vec<&'static CpuInfo> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    tpde_target::host()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = seen[0];
    for info in &seen {
        assert!(std::ptr::eq(*info, first));
    }
    assert!(std::ptr::eq(CpuInfo::host(), first));
}

#[test]
fn test_host_describes_build_target() {
    let info = tpde_target::host();
    if info.was_detected() {
        assert_eq!(info.arch(), Arch::HOST);
        assert!(info.hw_thread_count() >= 1);
    } else {
        assert_eq!(*info, CpuInfo::new());
    }
}

#[cfg(target_arch = "x86_64")]
#[test]
fn test_x64_host_has_baseline() {
    let info = tpde_target::host();
    assert!(info.was_detected());
    for &feature in tpde_target::x64::X64_BASELINE {
        assert!(info.has_feature(feature), "missing {feature}");
    }
}
