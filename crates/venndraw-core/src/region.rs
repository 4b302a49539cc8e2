//! Set counts and combination keys.
//!
//! A Venn diagram over N sets has 2^N faces. Every face except the outer
//! one is named by a [`CombinationKey`]: an N-bit descriptor whose i-th
//! digit (left to right) is `1` when the face lies inside set i.
//!
//! # Example
//!
//! ```
//! # use venndraw_core::region::{CombinationKey, SetCount};
//! let key: CombinationKey = "101".parse().unwrap();
//! assert_eq!(key.set_count(), SetCount::Three);
//! assert!(key.contains(0));
//! assert!(!key.contains(1));
//! assert!(key.contains(2));
//!
//! let keys: Vec<String> = SetCount::Two.keys().map(|k| k.to_string()).collect();
//! assert_eq!(keys, ["01", "10", "11"]);
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors produced when building set counts or combination keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("unsupported number of sets: {0} (expected 2, 3 or 4)")]
    UnsupportedSetCount(usize),

    #[error("invalid combination key `{0}`: expected 2 to 4 binary digits")]
    InvalidKey(String),

    #[error("combination key `{0}` is not inside any set")]
    EmptyKey(String),

    #[error("set index {index} is out of range for {count} sets")]
    SetIndexOutOfRange { index: usize, count: usize },
}

/// Number of sets a diagram is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SetCount {
    Two,
    Three,
    Four,
}

impl SetCount {
    /// Every supported set count, smallest first.
    pub const ALL: [SetCount; 3] = [SetCount::Two, SetCount::Three, SetCount::Four];

    /// Returns N as a plain integer.
    pub fn get(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Returns the number of non-empty regions, 2^N - 1.
    pub fn region_count(self) -> usize {
        (1 << self.get()) - 1
    }

    /// Iterates every non-empty combination key in ascending order.
    ///
    /// Ascending numeric order is the same as lexicographic order of the
    /// keys' binary strings, so `"001"` comes first and `"111"` last.
    pub fn keys(self) -> impl Iterator<Item = CombinationKey> {
        (1..=self.region_count() as u8).map(move |mask| CombinationKey {
            set_count: self,
            mask,
        })
    }

    fn full_mask(self) -> u8 {
        self.region_count() as u8
    }
}

impl TryFrom<usize> for SetCount {
    type Error = RegionError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(RegionError::UnsupportedSetCount(other)),
        }
    }
}

impl fmt::Display for SetCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The in/out descriptor of one region of an N-set diagram.
///
/// The mask is stored with set 0 in the most significant of the N bits, so
/// the mask's binary rendering, zero-padded to N digits, is the key's string
/// form. Keys order by set count first, then by mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CombinationKey {
    set_count: SetCount,
    mask: u8,
}

impl CombinationKey {
    /// Creates a key from its raw mask.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::EmptyKey`] for a zero mask and
    /// [`RegionError::InvalidKey`] for a mask wider than N bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use venndraw_core::region::{CombinationKey, SetCount};
    /// let key = CombinationKey::new(SetCount::Four, 0b1001).unwrap();
    /// assert_eq!(key.to_string(), "1001");
    /// assert!(CombinationKey::new(SetCount::Two, 0b100).is_err());
    /// ```
    pub fn new(set_count: SetCount, mask: u8) -> Result<Self, RegionError> {
        if mask == 0 {
            return Err(RegionError::EmptyKey("0".repeat(set_count.get())));
        }
        if mask > set_count.full_mask() {
            return Err(RegionError::InvalidKey(format!("{mask:b}")));
        }
        Ok(Self { set_count, mask })
    }

    /// Creates the key of the region inside exactly the given sets.
    ///
    /// # Errors
    ///
    /// Fails when an index is not below N or when `sets` is empty.
    pub fn from_sets(set_count: SetCount, sets: &[usize]) -> Result<Self, RegionError> {
        let mut mask = 0u8;
        for &index in sets {
            if index >= set_count.get() {
                return Err(RegionError::SetIndexOutOfRange {
                    index,
                    count: set_count.get(),
                });
            }
            mask |= 1 << (set_count.get() - 1 - index);
        }
        Self::new(set_count, mask)
    }

    /// Returns the number of sets this key was built for.
    pub fn set_count(self) -> SetCount {
        self.set_count
    }

    /// Returns the raw mask, set 0 in the most significant position.
    pub fn mask(self) -> u8 {
        self.mask
    }

    /// Returns `true` when the region lies inside set `index`.
    ///
    /// Indices at or beyond N are never contained.
    pub fn contains(self, index: usize) -> bool {
        let n = self.set_count.get();
        index < n && (self.mask >> (n - 1 - index)) & 1 == 1
    }

    /// Returns how many sets the region lies inside.
    pub fn degree(self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Iterates the indices of the sets this region lies inside.
    pub fn sets(self) -> impl Iterator<Item = usize> {
        (0..self.set_count.get()).filter(move |&index| self.contains(index))
    }
}

impl fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.mask, width = self.set_count.get())
    }
}

impl FromStr for CombinationKey {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let set_count =
            SetCount::try_from(s.len()).map_err(|_| RegionError::InvalidKey(s.to_string()))?;

        let mut mask = 0u8;
        for digit in s.chars() {
            mask <<= 1;
            match digit {
                '0' => {}
                '1' => mask |= 1,
                _ => return Err(RegionError::InvalidKey(s.to_string())),
            }
        }

        if mask == 0 {
            return Err(RegionError::EmptyKey(s.to_string()));
        }

        Ok(Self { set_count, mask })
    }
}
