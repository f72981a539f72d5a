// This module defines the dense instruction-id numbering shared by every architecture
// table. An instruction id is a plain u32 starting at 0 (the "none" id) and ending at a
// per-namespace count sentinel. A namespace may extend a base namespace: it reuses every
// base id unchanged and numbers its own mnemonics from the base count upward, so the
// validity check of a derived namespace always uses the derived count. InstNamespace is
// the runtime descriptor of one table (name lookup in both directions, count, base chain)
// and the inst_id_table! macro builds the constants, the count and the descriptor.

//! Instruction identifier namespaces.

use std::fmt;
use std::sync::OnceLock;

use hashbrown::HashMap;

use super::error::{TargetError, TargetResult};

/// Instruction identifier.
///
/// Only meaningful together with the namespace that defines it. Ids carry no
/// modifier bits.
pub type InstId = u32;

/// The "no instruction" id, defined by every namespace.
pub const INST_ID_NONE: InstId = 0;

/// Descriptor of one instruction id table.
pub struct InstNamespace {
    name: &'static str,
    base: Option<&'static InstNamespace>,
    /// Mnemonics owned by this namespace, starting at the base count.
    names: &'static [&'static str],
    index: OnceLock<HashMap<&'static str, InstId>>,
}

impl InstNamespace {
    pub const fn new(
        name: &'static str,
        base: Option<&'static InstNamespace>,
        names: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            base,
            names,
            index: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The namespace this one extends, if any.
    pub fn base(&self) -> Option<&'static InstNamespace> {
        self.base
    }

    /// Number of ids inherited from the base namespace.
    pub const fn base_count(&self) -> InstId {
        match self.base {
            Some(base) => base.count(),
            None => 0,
        }
    }

    /// The count sentinel; valid ids are `0..count`.
    pub const fn count(&self) -> InstId {
        self.base_count() + self.names.len() as InstId
    }

    /// Tests whether `id` is defined in this namespace (including the none id).
    pub const fn is_defined_id(&self, id: InstId) -> bool {
        id < self.count()
    }

    /// Tests whether `other` is this namespace or one of its bases.
    pub fn extends(&self, other: &InstNamespace) -> bool {
        let mut current = Some(self);
        while let Some(ns) = current {
            if std::ptr::eq(ns, other) {
                return true;
            }
            current = ns.base;
        }
        false
    }

    /// Mnemonic of `id`, or `None` if the id is not defined here.
    pub fn name_of(&self, id: InstId) -> Option<&'static str> {
        let base_count = self.base_count();
        if id < base_count {
            return self.base.and_then(|base| base.name_of(id));
        }
        self.names.get((id - base_count) as usize).copied()
    }

    /// Looks up a mnemonic (case-insensitive). The none id is never returned.
    pub fn find(&self, mnemonic: &str) -> Option<InstId> {
        let key = mnemonic.trim().to_ascii_lowercase();
        if let Some(&id) = self.name_index().get(key.as_str()) {
            return Some(id);
        }
        self.base.and_then(|base| base.find(&key))
    }

    /// Like [`find`](Self::find), but reports unknown mnemonics as errors.
    pub fn parse(&self, mnemonic: &str) -> TargetResult<InstId> {
        self.find(mnemonic)
            .ok_or_else(|| TargetError::UnknownInstruction {
                namespace: self.name,
                name: mnemonic.to_string(),
            })
    }

    /// Iterate over `(id, mnemonic)` of every instruction, base ids first.
    pub fn iter(&self) -> impl Iterator<Item = (InstId, &'static str)> + '_ {
        (1..self.count()).filter_map(move |id| self.name_of(id).map(|name| (id, name)))
    }

    fn name_index(&self) -> &HashMap<&'static str, InstId> {
        self.index.get_or_init(|| {
            let base_count = self.base_count();
            self.names
                .iter()
                .enumerate()
                .filter(|(_, name)| !name.is_empty())
                .map(|(i, &name)| (name, base_count + i as InstId))
                .collect()
        })
    }
}

impl fmt::Debug for InstNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstNamespace")
            .field("name", &self.name)
            .field("base", &self.base.map(|b| b.name))
            .field("count", &self.count())
            .finish()
    }
}

/// Builds an instruction id table.
///
/// Expands to one `InstId` constant per mnemonic, numbered from the count of
/// the base table (or from zero), plus `ID_COUNT`, `NAMESPACE` and
/// `is_defined_id`.
macro_rules! inst_id_table {
    (
        namespace: $ns:literal,
        ids: { $($konst:ident => $text:literal,)* }
    ) => {
        $crate::core::inst::inst_id_table!(@emit $ns, None, 0, { $($konst => $text,)* });
    };
    (
        namespace: $ns:literal,
        base: { count: $base_count:expr, namespace: $base_ns:expr $(,)? },
        ids: { $($konst:ident => $text:literal,)* }
    ) => {
        $crate::core::inst::inst_id_table!(
            @emit $ns, Some(&$base_ns), $base_count, { $($konst => $text,)* }
        );
    };
    (@emit $ns:literal, $base:expr, $base_count:expr, { $($konst:ident => $text:literal,)* }) => {
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[repr(u32)]
        enum Ordinal {
            $($konst,)*
            __Count,
        }

        const BASE_COUNT: $crate::core::inst::InstId = $base_count;

        $(
            pub const $konst: $crate::core::inst::InstId =
                BASE_COUNT + Ordinal::$konst as $crate::core::inst::InstId;
        )*

        /// Count sentinel of this namespace; valid ids are `0..ID_COUNT`.
        pub const ID_COUNT: $crate::core::inst::InstId =
            BASE_COUNT + Ordinal::__Count as $crate::core::inst::InstId;

        /// Descriptor of this namespace.
        pub static NAMESPACE: $crate::core::inst::InstNamespace =
            $crate::core::inst::InstNamespace::new($ns, $base, &[$($text,)*]);

        /// Tests whether `id` is defined in this namespace (counts the none id too).
        #[inline]
        pub const fn is_defined_id(id: $crate::core::inst::InstId) -> bool {
            id < ID_COUNT
        }

        const _: () = assert!(ID_COUNT > BASE_COUNT, "an instruction table must define ids");
    };
}

pub(crate) use inst_id_table;

#[cfg(test)]
mod tests {
    use super::*;

    static BASE: InstNamespace = InstNamespace::new("base", None, &["", "add", "sub"]);
    static DERIVED: InstNamespace = InstNamespace::new("derived", Some(&BASE), &["mla", "mls"]);

    #[test]
    fn test_counts_compose() {
        assert_eq!(BASE.count(), 3);
        assert_eq!(DERIVED.base_count(), 3);
        assert_eq!(DERIVED.count(), 5);
        assert!(DERIVED.is_defined_id(4));
        assert!(!DERIVED.is_defined_id(5));
        assert!(!BASE.is_defined_id(3));
    }

    #[test]
    fn test_lookup_falls_through_to_base() {
        assert_eq!(DERIVED.find("add"), Some(1));
        assert_eq!(DERIVED.find("MLS"), Some(4));
        assert_eq!(BASE.find("mla"), None);
        assert_eq!(DERIVED.name_of(2), Some("sub"));
        assert_eq!(DERIVED.name_of(3), Some("mla"));
        assert_eq!(DERIVED.name_of(5), None);
        assert_eq!(DERIVED.find(""), None);
    }

    #[test]
    fn test_extends_walks_base_chain() {
        assert!(DERIVED.extends(&BASE));
        assert!(DERIVED.extends(&DERIVED));
        assert!(!BASE.extends(&DERIVED));
    }

    #[test]
    fn test_parse_unknown_mnemonic() {
        let err = DERIVED.parse("vadd").unwrap_err();
        assert_eq!(
            err,
            TargetError::UnknownInstruction {
                namespace: "derived",
                name: "vadd".to_string()
            }
        );
    }

    #[test]
    fn test_iter_skips_none() {
        let all: Vec<_> = DERIVED.iter().map(|(_, name)| name).collect();
        assert_eq!(all, vec!["add", "sub", "mla", "mls"]);
    }
}
