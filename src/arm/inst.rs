//! Instruction ids shared by every ARM profile.
//!
//! These mnemonics exist in both AArch32 and AArch64. Profile-specific
//! tables (see [`a32`](super::a32)) extend this one, so a shared mnemonic has
//! the same id in every ARM namespace.

use crate::core::inst::inst_id_table;

inst_id_table! {
    namespace: "arm",
    ids: {
        NONE => "",
        ADC => "adc",
        ADCS => "adcs",
        ADD => "add",
        ADDS => "adds",
        ADR => "adr",
        AESD => "aesd",
        AESE => "aese",
        AESIMC => "aesimc",
        AESMC => "aesmc",
        AND => "and",
        ANDS => "ands",
        ASR => "asr",
        B => "b",
        BFI => "bfi",
        BIC => "bic",
        BICS => "bics",
        BL => "bl",
        CLREX => "clrex",
        CLZ => "clz",
        CMN => "cmn",
        CMP => "cmp",
        CRC32B => "crc32b",
        CRC32CB => "crc32cb",
        CRC32CH => "crc32ch",
        CRC32CW => "crc32cw",
        CRC32H => "crc32h",
        CRC32W => "crc32w",
        DMB => "dmb",
        DSB => "dsb",
        EOR => "eor",
        ERET => "eret",
        HLT => "hlt",
        HVC => "hvc",
        ISB => "isb",
        LDR => "ldr",
        LDRB => "ldrb",
        LDRH => "ldrh",
        LDRSB => "ldrsb",
        LDRSH => "ldrsh",
        LSL => "lsl",
        LSR => "lsr",
        MOV => "mov",
        MRS => "mrs",
        MSR => "msr",
        MUL => "mul",
        MVN => "mvn",
        NOP => "nop",
        ORR => "orr",
        RBIT => "rbit",
        REV => "rev",
        REV16 => "rev16",
        ROR => "ror",
        SBC => "sbc",
        SBCS => "sbcs",
        SBFX => "sbfx",
        SDIV => "sdiv",
        SEV => "sev",
        SEVL => "sevl",
        SHA1C => "sha1c",
        SHA1H => "sha1h",
        SHA1M => "sha1m",
        SHA1P => "sha1p",
        SHA1SU0 => "sha1su0",
        SHA1SU1 => "sha1su1",
        SHA256H => "sha256h",
        SHA256H2 => "sha256h2",
        SHA256SU0 => "sha256su0",
        SHA256SU1 => "sha256su1",
        SMC => "smc",
        SMULL => "smull",
        STR => "str",
        STRB => "strb",
        STRH => "strh",
        SUB => "sub",
        SUBS => "subs",
        SVC => "svc",
        SXTB => "sxtb",
        SXTH => "sxth",
        TST => "tst",
        UBFX => "ubfx",
        UDF => "udf",
        UDIV => "udiv",
        UMULL => "umull",
        UXTB => "uxtb",
        UXTH => "uxth",
        WFE => "wfe",
        WFI => "wfi",
        YIELD => "yield",
    }
}
