//! Instruction id tables.
//!
//! Checks the ARM tables as a client sees them: the shared table, the A32
//! table extending it, and the validity rules of each.

use tpde_target::arm::{a32, inst};
use tpde_target::{InstNamespace, TargetError, INST_ID_NONE};

#[test]
fn test_none_is_defined_everywhere() {
    assert_eq!(inst::NONE, INST_ID_NONE);
    assert_eq!(a32::NONE, INST_ID_NONE);
    assert!(inst::is_defined_id(INST_ID_NONE));
    assert!(a32::is_defined_id(INST_ID_NONE));
}

#[test]
fn test_extension_keeps_base_ids() {
    assert_eq!(a32::ADD, inst::ADD);
    assert_eq!(a32::YIELD, inst::YIELD);
    assert_eq!(a32::NAMESPACE.base().map(InstNamespace::name), Some("arm"));
    assert!(a32::NAMESPACE.extends(&inst::NAMESPACE));
    assert!(!inst::NAMESPACE.extends(&a32::NAMESPACE));
}

#[test]
fn test_validity_uses_the_derived_count() {
    assert!(a32::ID_COUNT > inst::ID_COUNT);

    // First id owned by the A32 table.
    let first = inst::ID_COUNT;
    assert_eq!(a32::ASRS, first);
    assert_eq!(a32::NAMESPACE.name_of(first), Some("asrs"));
    assert!(!inst::is_defined_id(first));
    assert!(a32::is_defined_id(first));

    assert!(a32::is_defined_id(a32::ID_COUNT - 1));
    assert!(!a32::is_defined_id(a32::ID_COUNT));
    assert!(!a32::is_defined_id(u32::MAX));
}

#[test]
fn test_ids_are_dense_and_named() {
    let ids: Vec<u32> = a32::NAMESPACE.iter().map(|(id, _)| id).collect();
    let expected: Vec<u32> = (1..a32::ID_COUNT).collect();
    assert_eq!(ids, expected);

    for (id, name) in a32::NAMESPACE.iter() {
        assert!(!name.is_empty());
        assert_eq!(a32::NAMESPACE.find(name), Some(id), "{name}");
    }
}

#[test]
fn test_mnemonic_lookup() {
    assert_eq!(a32::NAMESPACE.find("VADD"), Some(a32::VADD));
    assert_eq!(a32::NAMESPACE.find("mov"), Some(inst::MOV));
    assert_eq!(inst::NAMESPACE.find("vadd"), None);
    assert_eq!(a32::NAMESPACE.name_of(a32::VZIP), Some("vzip"));
    assert_eq!(a32::NAMESPACE.name_of(a32::ID_COUNT), None);

    assert_eq!(
        inst::NAMESPACE.parse("vadd"),
        Err(TargetError::UnknownInstruction {
            namespace: "arm",
            name: "vadd".to_string(),
        })
    );
}
