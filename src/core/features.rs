// This module implements the CPU feature bit-set that instruction selection consults
// before emitting an encoding. CpuFeatures is a fixed 256-bit vector stored as four u64
// words; every architecture shares the same storage and layers its own identifier enum
// on top through the FeatureId trait (X86Feature, ArmFeature, or a raw u32 id). Queries
// are single-word bit tests, bulk tests (has_all) walk the four words, and iteration
// yields set ids in ascending order by peeling the lowest set bit of each word. The
// cpu_feature_ids! macro generates the per-architecture enums together with their name
// tables, the FeatureId impl, FromStr parsing and a compile-time check that every id
// fits into the shared capacity.

//! CPU feature bit-set.
//!
//! Each feature is represented by a single bit. Identifier `0` is reserved as
//! "no feature" in every namespace and is never reported by detection.

use std::fmt;

/// Maximum number of feature ids a [`CpuFeatures`] can hold.
pub const MAX_FEATURES: u32 = 256;

/// Width of a storage word in bits.
pub const BIT_WORD_SIZE: u32 = u64::BITS;

/// Number of storage words backing a [`CpuFeatures`].
pub const NUM_BIT_WORDS: usize = (MAX_FEATURES / BIT_WORD_SIZE) as usize;

/// Anything that names a feature bit.
///
/// Implemented by the per-architecture feature enums and by `u32` for raw ids.
pub trait FeatureId: Copy {
    fn id(self) -> u32;
}

impl FeatureId for u32 {
    #[inline]
    fn id(self) -> u32 {
        self
    }
}

impl<T: FeatureId> FeatureId for &T {
    #[inline]
    fn id(self) -> u32 {
        (*self).id()
    }
}

/// A feature namespace with a name table, implemented by the generated enums.
pub trait FeatureNamespace: FeatureId + Sized + 'static {
    /// Every identifier of the namespace, indexed by id.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn from_id(id: u32) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }
}

#[inline]
fn split(id: u32) -> (usize, u32) {
    debug_assert!(id < MAX_FEATURES, "feature id {id} exceeds capacity {MAX_FEATURES}");
    ((id / BIT_WORD_SIZE) as usize, id % BIT_WORD_SIZE)
}

/// Set of CPU features.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CpuFeatures {
    bits: [u64; NUM_BIT_WORDS],
}

impl CpuFeatures {
    /// Create an empty feature set.
    pub const fn new() -> Self {
        Self {
            bits: [0; NUM_BIT_WORDS],
        }
    }

    /// Create a feature set from raw storage words.
    pub const fn from_words(bits: [u64; NUM_BIT_WORDS]) -> Self {
        Self { bits }
    }

    /// Raw storage words, lowest ids first.
    pub fn words(&self) -> &[u64; NUM_BIT_WORDS] {
        &self.bits
    }

    /// Returns true if no feature is set.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().fold(0, |acc, w| acc | w) == 0
    }

    /// Number of features present.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Tests whether the feature `id` is present.
    #[inline]
    pub fn has(&self, id: impl FeatureId) -> bool {
        let (idx, bit) = split(id.id());
        (self.bits[idx] >> bit) & 1 != 0
    }

    /// Tests whether any of the given features is present.
    pub fn has_any<I>(&self, ids: I) -> bool
    where
        I: IntoIterator,
        I::Item: FeatureId,
    {
        ids.into_iter().fold(false, |acc, id| acc | self.has(id))
    }

    /// Tests whether every feature of `other` is also present in `self`.
    pub fn has_all(&self, other: &CpuFeatures) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .all(|(a, b)| (a & b) == *b)
    }

    /// Adds the given features.
    pub fn add<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: FeatureId,
    {
        for id in ids {
            let (idx, bit) = split(id.id());
            self.bits[idx] |= 1u64 << bit;
        }
    }

    /// Adds the given features if `condition` holds.
    pub fn add_if<I>(&mut self, condition: bool, ids: I)
    where
        I: IntoIterator,
        I::Item: FeatureId,
    {
        if condition {
            self.add(ids);
        }
    }

    /// Removes the given features.
    pub fn remove<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: FeatureId,
    {
        for id in ids {
            let (idx, bit) = split(id.id());
            self.bits[idx] &= !(1u64 << bit);
        }
    }

    /// Clears every feature.
    pub fn reset(&mut self) {
        self.bits.fill(0);
    }

    /// Iterate over the ids of all features present, in ascending order.
    pub fn iter(&self) -> FeatureIter<'_> {
        FeatureIter {
            words: &self.bits,
            index: 0,
            current: self.bits[0],
        }
    }

    /// Iterate over the present features as identifiers of namespace `F`.
    ///
    /// Ids that `F` does not define are skipped.
    pub fn iter_as<F: FeatureNamespace>(&self) -> impl Iterator<Item = F> + '_ {
        self.iter().filter_map(F::from_id)
    }

    /// Names of the present features, interpreted in namespace `F`.
    pub fn names<F: FeatureNamespace>(&self) -> Vec<&'static str> {
        self.iter_as::<F>().map(F::name).collect()
    }
}

impl fmt::Debug for CpuFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F: FeatureId> FromIterator<F> for CpuFeatures {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut features = CpuFeatures::new();
        features.add(iter);
        features
    }
}

impl<F: FeatureId> Extend<F> for CpuFeatures {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a> IntoIterator for &'a CpuFeatures {
    type Item = u32;
    type IntoIter = FeatureIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the set bits of a [`CpuFeatures`].
#[derive(Clone)]
pub struct FeatureIter<'a> {
    words: &'a [u64; NUM_BIT_WORDS],
    index: usize,
    current: u64,
}

impl Iterator for FeatureIter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while self.current == 0 {
            self.index += 1;
            if self.index >= NUM_BIT_WORDS {
                return None;
            }
            self.current = self.words[self.index];
        }

        let bit = self.current.trailing_zeros();
        // Clear the lowest set bit.
        self.current &= self.current - 1;
        Some(self.index as u32 * BIT_WORD_SIZE + bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest: usize = self.words[(self.index + 1).min(NUM_BIT_WORDS)..]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        let n = self.current.count_ones() as usize + rest;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FeatureIter<'_> {}

impl std::iter::FusedIterator for FeatureIter<'_> {}

/// Generates a feature identifier enum.
///
/// The first entry must be the `None` sentinel; ids are assigned in order.
macro_rules! cpu_feature_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $text:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// The "no feature" sentinel.
            pub const NONE: $name = Self::ALL_IDS[0];
            /// The highest identifier of this namespace.
            pub const MAX_VALUE: $name = Self::ALL_IDS[Self::ALL_IDS.len() - 1];

            const ALL_IDS: &'static [$name] = &[$($name::$variant,)*];
            const NAMES: &'static [&'static str] = &[$($text,)*];

            /// Lowercase name of the feature.
            pub fn name(self) -> &'static str {
                Self::NAMES[self as usize]
            }

            /// Converts a raw id back into an identifier.
            pub fn from_id(id: u32) -> Option<Self> {
                Self::ALL_IDS.get(id as usize).copied()
            }

            fn name_index() -> &'static hashbrown::HashMap<&'static str, $name> {
                static INDEX: std::sync::OnceLock<hashbrown::HashMap<&'static str, $name>> =
                    std::sync::OnceLock::new();
                INDEX.get_or_init(|| {
                    Self::ALL_IDS[1..].iter().map(|&f| (f.name(), f)).collect()
                })
            }
        }

        const _: () = assert!(
            ($name::MAX_VALUE as u32) < $crate::core::features::MAX_FEATURES,
            "feature ids exceed the capacity of CpuFeatures"
        );

        impl $crate::core::features::FeatureId for $name {
            #[inline]
            fn id(self) -> u32 {
                self as u32
            }
        }

        impl $crate::core::features::FeatureNamespace for $name {
            const ALL: &'static [$name] = Self::ALL_IDS;

            fn name(self) -> &'static str {
                $name::name(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::core::error::TargetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim().to_ascii_lowercase().replace(['-', '.'], "_");
                Self::name_index()
                    .get(key.as_str())
                    .copied()
                    .ok_or_else(|| $crate::core::error::TargetError::UnknownFeature {
                        namespace: stringify!($name),
                        name: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use cpu_feature_ids;
