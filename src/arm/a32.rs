// This module holds the AArch32 (ARM and Thumb) instruction id table. It extends the
// shared ARM table in arm::inst: every shared mnemonic keeps its base id and is
// re-exported from here, and the A32-only mnemonics (load/store multiple, saturating
// and parallel arithmetic, coprocessor moves, and the whole VFP/ASIMD "v" family) are
// numbered from arm::inst::ID_COUNT upward. Validity checks for A32 ids must use this
// module's ID_COUNT, which is strictly greater than the base count.

//! AArch32 instruction ids.

use crate::core::inst::inst_id_table;

pub use super::inst::*;

inst_id_table! {
    namespace: "a32",
    base: { count: super::inst::ID_COUNT, namespace: super::inst::NAMESPACE },
    ids: {
        ASRS => "asrs",
        BFC => "bfc",
        BKPT => "bkpt",
        BLX => "blx",
        BX => "bx",
        BXJ => "bxj",
        CPS => "cps",
        CPSID => "cpsid",
        CPSIE => "cpsie",
        DBG => "dbg",
        EORS => "eors",
        LDA => "lda",
        LDAB => "ldab",
        LDAEX => "ldaex",
        LDAEXB => "ldaexb",
        LDAEXD => "ldaexd",
        LDAEXH => "ldaexh",
        LDAH => "ldah",
        LDM => "ldm",
        LDMDA => "ldmda",
        LDMDB => "ldmdb",
        LDMIB => "ldmib",
        LDRBT => "ldrbt",
        LDRD => "ldrd",
        LDREX => "ldrex",
        LDREXB => "ldrexb",
        LDREXD => "ldrexd",
        LDREXH => "ldrexh",
        LDRHT => "ldrht",
        LDRSBT => "ldrsbt",
        LDRSHT => "ldrsht",
        LDRT => "ldrt",
        LSLS => "lsls",
        LSRS => "lsrs",
        MCR => "mcr",
        MCR2 => "mcr2",
        MCRR => "mcrr",
        MCRR2 => "mcrr2",
        MLA => "mla",
        MLAS => "mlas",
        MLS => "mls",
        MOVS => "movs",
        MOVT => "movt",
        MOVW => "movw",
        MRC => "mrc",
        MRC2 => "mrc2",
        MRRC => "mrrc",
        MRRC2 => "mrrc2",
        MULS => "muls",
        MVNS => "mvns",
        ORRS => "orrs",
        PKHBT => "pkhbt",
        PKHTB => "pkhtb",
        PLD => "pld",
        PLDW => "pldw",
        PLI => "pli",
        POP => "pop",
        PUSH => "push",
        QADD => "qadd",
        QADD16 => "qadd16",
        QADD8 => "qadd8",
        QASX => "qasx",
        QDADD => "qdadd",
        QDSUB => "qdsub",
        QSAX => "qsax",
        QSUB => "qsub",
        QSUB16 => "qsub16",
        QSUB8 => "qsub8",
        REVSH => "revsh",
        RFE => "rfe",
        RFEDA => "rfeda",
        RFEDB => "rfedb",
        RFEIB => "rfeib",
        RORS => "rors",
        RRX => "rrx",
        RRXS => "rrxs",
        RSB => "rsb",
        RSBS => "rsbs",
        RSC => "rsc",
        RSCS => "rscs",
        SADD16 => "sadd16",
        SADD8 => "sadd8",
        SASX => "sasx",
        SEL => "sel",
        SETEND => "setend",
        SHADD16 => "shadd16",
        SHADD8 => "shadd8",
        SHASX => "shasx",
        SHSAX => "shsax",
        SHSUB16 => "shsub16",
        SHSUB8 => "shsub8",
        SMLABB => "smlabb",
        SMLABT => "smlabt",
        SMLAD => "smlad",
        SMLADX => "smladx",
        SMLAL => "smlal",
        SMLALBB => "smlalbb",
        SMLALBT => "smlalbt",
        SMLALD => "smlald",
        SMLALDX => "smlaldx",
        SMLALS => "smlals",
        SMLALTB => "smlaltb",
        SMLALTT => "smlaltt",
        SMLATB => "smlatb",
        SMLATT => "smlatt",
        SMLAWB => "smlawb",
        SMLAWT => "smlawt",
        SMLSD => "smlsd",
        SMLSDX => "smlsdx",
        SMLSLD => "smlsld",
        SMLSLDX => "smlsldx",
        SMMLA => "smmla",
        SMMLAR => "smmlar",
        SMMLS => "smmls",
        SMMLSR => "smmlsr",
        SMMUL => "smmul",
        SMMULR => "smmulr",
        SMUAD => "smuad",
        SMUADX => "smuadx",
        SMULBB => "smulbb",
        SMULBT => "smulbt",
        SMULLS => "smulls",
        SMULTB => "smultb",
        SMULTT => "smultt",
        SMULWB => "smulwb",
        SMULWT => "smulwt",
        SMUSD => "smusd",
        SMUSDX => "smusdx",
        SRS => "srs",
        SRSDA => "srsda",
        SRSDB => "srsdb",
        SRSIB => "srsib",
        SSAT => "ssat",
        SSAT16 => "ssat16",
        SSAX => "ssax",
        SSUB16 => "ssub16",
        SSUB8 => "ssub8",
        STL => "stl",
        STLB => "stlb",
        STLEX => "stlex",
        STLEXB => "stlexb",
        STLEXD => "stlexd",
        STLEXH => "stlexh",
        STLH => "stlh",
        STM => "stm",
        STMDA => "stmda",
        STMDB => "stmdb",
        STMIB => "stmib",
        STRBT => "strbt",
        STRD => "strd",
        STREX => "strex",
        STREXB => "strexb",
        STREXD => "strexd",
        STREXH => "strexh",
        STRHT => "strht",
        STRT => "strt",
        SXTAB => "sxtab",
        SXTAB16 => "sxtab16",
        SXTAH => "sxtah",
        SXTB16 => "sxtb16",
        TEQ => "teq",
        UADD16 => "uadd16",
        UADD8 => "uadd8",
        UASX => "uasx",
        UHADD16 => "uhadd16",
        UHADD8 => "uhadd8",
        UHASX => "uhasx",
        UHSAX => "uhsax",
        UHSUB16 => "uhsub16",
        UHSUB8 => "uhsub8",
        UMAAL => "umaal",
        UMLAL => "umlal",
        UMLALS => "umlals",
        UMULLS => "umulls",
        UQADD16 => "uqadd16",
        UQADD8 => "uqadd8",
        UQASX => "uqasx",
        UQSAX => "uqsax",
        UQSUB16 => "uqsub16",
        UQSUB8 => "uqsub8",
        USAD8 => "usad8",
        USADA8 => "usada8",
        USAT => "usat",
        USAT16 => "usat16",
        USAX => "usax",
        USUB16 => "usub16",
        USUB8 => "usub8",
        UXTAB => "uxtab",
        UXTAB16 => "uxtab16",
        UXTAH => "uxtah",
        UXTB16 => "uxtb16",
        VABA => "vaba",
        VABAL => "vabal",
        VABD => "vabd",
        VABDL => "vabdl",
        VABS => "vabs",
        VACGE => "vacge",
        VACGT => "vacgt",
        VACLE => "vacle",
        VACLT => "vaclt",
        VADD => "vadd",
        VADDHN => "vaddhn",
        VADDL => "vaddl",
        VADDW => "vaddw",
        VAND => "vand",
        VBIC => "vbic",
        VBIF => "vbif",
        VBIT => "vbit",
        VBSL => "vbsl",
        VCADD => "vcadd",
        VCEQ => "vceq",
        VCGE => "vcge",
        VCGT => "vcgt",
        VCLE => "vcle",
        VCLS => "vcls",
        VCLT => "vclt",
        VCLZ => "vclz",
        VCMLA => "vcmla",
        VCMP => "vcmp",
        VCMPE => "vcmpe",
        VCNT => "vcnt",
        VCVT => "vcvt",
        VCVTA => "vcvta",
        VCVTB => "vcvtb",
        VCVTM => "vcvtm",
        VCVTN => "vcvtn",
        VCVTP => "vcvtp",
        VCVTR => "vcvtr",
        VCVTT => "vcvtt",
        VDIV => "vdiv",
        VDOT => "vdot",
        VDUP => "vdup",
        VEOR => "veor",
        VEXT => "vext",
        VFMA => "vfma",
        VFMAB => "vfmab",
        VFMAL => "vfmal",
        VFMAT => "vfmat",
        VFMS => "vfms",
        VFMSL => "vfmsl",
        VFNMA => "vfnma",
        VFNMS => "vfnms",
        VHADD => "vhadd",
        VHSUB => "vhsub",
        VINS => "vins",
        VJCVT => "vjcvt",
        VLD1 => "vld1",
        VLD1R => "vld1r",
        VLD2 => "vld2",
        VLD2R => "vld2r",
        VLD3 => "vld3",
        VLD3R => "vld3r",
        VLD4 => "vld4",
        VLD4R => "vld4r",
        VLDR => "vldr",
        VMAX => "vmax",
        VMAXNM => "vmaxnm",
        VMIN => "vmin",
        VMINNM => "vminnm",
        VMLA => "vmla",
        VMLAL => "vmlal",
        VMLS => "vmls",
        VMLSL => "vmlsl",
        VMMLA => "vmmla",
        VMOV => "vmov",
        VMOVL => "vmovl",
        VMOVN => "vmovn",
        VMOVX => "vmovx",
        VMUL => "vmul",
        VMULL => "vmull",
        VMVN => "vmvn",
        VNEG => "vneg",
        VNMLA => "vnmla",
        VNMLS => "vnmls",
        VNMUL => "vnmul",
        VORN => "vorn",
        VORR => "vorr",
        VPADAL => "vpadal",
        VPADD => "vpadd",
        VPADDL => "vpaddl",
        VPMAX => "vpmax",
        VPMIN => "vpmin",
        VQABS => "vqabs",
        VQADD => "vqadd",
        VQDMLAL => "vqdmlal",
        VQDMLSL => "vqdmlsl",
        VQDMULH => "vqdmulh",
        VQDMULL => "vqdmull",
        VQMOVN => "vqmovn",
        VQMOVUN => "vqmovun",
        VQNEG => "vqneg",
        VQRDMLAH => "vqrdmlah",
        VQRDMLSH => "vqrdmlsh",
        VQRDMULH => "vqrdmulh",
        VQRSHL => "vqrshl",
        VQRSHRN => "vqrshrn",
        VQRSHRUN => "vqrshrun",
        VQSHL => "vqshl",
        VQSHLU => "vqshlu",
        VQSHRN => "vqshrn",
        VQSHRUN => "vqshrun",
        VQSUB => "vqsub",
        VRADDHN => "vraddhn",
        VRECPE => "vrecpe",
        VRECPS => "vrecps",
        VREV16 => "vrev16",
        VREV32 => "vrev32",
        VREV64 => "vrev64",
        VRHADD => "vrhadd",
        VRINTA => "vrinta",
        VRINTM => "vrintm",
        VRINTN => "vrintn",
        VRINTP => "vrintp",
        VRINTR => "vrintr",
        VRINTX => "vrintx",
        VRINTZ => "vrintz",
        VRSHL => "vrshl",
        VRSHR => "vrshr",
        VRSHRN => "vrshrn",
        VRSQRTE => "vrsqrte",
        VRSQRTS => "vrsqrts",
        VRSRA => "vrsra",
        VRSUBHN => "vrsubhn",
        VSDOT => "vsdot",
        VSELEQ => "vseleq",
        VSELGE => "vselge",
        VSELGT => "vselgt",
        VSELVS => "vselvs",
        VSHL => "vshl",
        VSHLL => "vshll",
        VSHR => "vshr",
        VSHRN => "vshrn",
        VSLI => "vsli",
        VSMMLA => "vsmmla",
        VSQRT => "vsqrt",
        VSRA => "vsra",
        VSRI => "vsri",
        VST1 => "vst1",
        VST2 => "vst2",
        VST3 => "vst3",
        VST4 => "vst4",
        VSTR => "vstr",
        VSUB => "vsub",
        VSUBHN => "vsubhn",
        VSUBL => "vsubl",
        VSUBW => "vsubw",
        VSUDOT => "vsudot",
        VSWP => "vswp",
        VTBL => "vtbl",
        VTBX => "vtbx",
        VTRN => "vtrn",
        VTST => "vtst",
        VUDOT => "vudot",
        VUMMLA => "vummla",
        VUSDOT => "vusdot",
        VUSMMLA => "vusmmla",
        VUZP => "vuzp",
        VZIP => "vzip",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm::inst;

    #[test]
    fn test_extends_shared_table() {
        assert!(ID_COUNT > inst::ID_COUNT);
        assert!(NAMESPACE.extends(&inst::NAMESPACE));
        assert_eq!(NAMESPACE.base_count(), inst::ID_COUNT);
        assert_eq!(NAMESPACE.count(), ID_COUNT);
    }

    #[test]
    fn test_own_ids_start_at_base_count() {
        assert_eq!(ASRS, inst::ID_COUNT);
        assert!(!inst::is_defined_id(ASRS));
        assert!(is_defined_id(ASRS));
        assert_eq!(BFC, ASRS + 1);
        assert!(is_defined_id(VZIP));
        assert!(!inst::is_defined_id(VZIP));
        assert_eq!(VZIP, ID_COUNT - 1);
    }

    #[test]
    fn test_shared_mnemonic_has_same_id() {
        assert_eq!(NOP, inst::NOP);
        assert_eq!(NAMESPACE.find("nop"), inst::NAMESPACE.find("nop"));
        assert_eq!(NAMESPACE.name_of(inst::ADD), Some("add"));
    }
}
