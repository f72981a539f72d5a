//! Architecture and sub-architecture tags.

use std::fmt;
use std::str::FromStr;

use super::error::TargetError;

/// Instruction set architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Arch {
    #[default]
    Unknown = 0,
    /// 32-bit x86.
    X86,
    /// 64-bit x86 (AMD64/Intel 64).
    X64,
    /// 32-bit ARM in ARM (A32) mode.
    Arm,
    /// 32-bit ARM in Thumb (T32) mode.
    Thumb,
    /// 64-bit ARM.
    AArch64,
    RiscV32,
    RiscV64,
}

impl Arch {
    /// Architecture of the machine this crate was compiled for.
    pub const HOST: Arch = if cfg!(target_arch = "x86_64") {
        Arch::X64
    } else if cfg!(target_arch = "x86") {
        Arch::X86
    } else if cfg!(target_arch = "aarch64") {
        Arch::AArch64
    } else if cfg!(target_arch = "arm") {
        Arch::Arm
    } else if cfg!(target_arch = "riscv64") {
        Arch::RiscV64
    } else if cfg!(target_arch = "riscv32") {
        Arch::RiscV32
    } else {
        Arch::Unknown
    };

    const ALL: [Arch; 8] = [
        Arch::Unknown,
        Arch::X86,
        Arch::X64,
        Arch::Arm,
        Arch::Thumb,
        Arch::AArch64,
        Arch::RiscV32,
        Arch::RiscV64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Arch::Unknown => "unknown",
            Arch::X86 => "x86",
            Arch::X64 => "x64",
            Arch::Arm => "arm",
            Arch::Thumb => "thumb",
            Arch::AArch64 => "aarch64",
            Arch::RiscV32 => "riscv32",
            Arch::RiscV64 => "riscv64",
        }
    }

    pub fn is_x86_family(self) -> bool {
        matches!(self, Arch::X86 | Arch::X64)
    }

    pub fn is_arm_family(self) -> bool {
        matches!(self, Arch::Arm | Arch::Thumb | Arch::AArch64)
    }

    /// AArch32 (ARM or Thumb mode).
    pub fn is_aarch32(self) -> bool {
        matches!(self, Arch::Arm | Arch::Thumb)
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Arch {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let arch = match key.as_str() {
            "x86_64" | "amd64" | "x86-64" => Arch::X64,
            "i386" | "i686" => Arch::X86,
            "arm64" => Arch::AArch64,
            "armv7" | "arm32" | "a32" => Arch::Arm,
            "t32" => Arch::Thumb,
            other => Arch::ALL
                .into_iter()
                .find(|a| *a != Arch::Unknown && a.name() == other)
                .ok_or_else(|| TargetError::UnknownArch { name: s.to_string() })?,
        };
        Ok(arch)
    }
}

/// Architecture revision, meaningful only together with an [`Arch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SubArch {
    #[default]
    Unknown = 0,
    ArmV6,
    ArmV7,
    ArmV8,
}

impl SubArch {
    pub fn name(self) -> &'static str {
        match self {
            SubArch::Unknown => "unknown",
            SubArch::ArmV6 => "armv6",
            SubArch::ArmV7 => "armv7",
            SubArch::ArmV8 => "armv8",
        }
    }
}

impl fmt::Display for SubArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubArch {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" | "" => Ok(SubArch::Unknown),
            "armv6" | "v6" => Ok(SubArch::ArmV6),
            "armv7" | "v7" => Ok(SubArch::ArmV7),
            "armv8" | "armv8a" | "v8" => Ok(SubArch::ArmV8),
            _ => Err(TargetError::UnknownSubArch { name: s.to_string() }),
        }
    }
}
