//! Region label computation.
//!
//! Given N input collections (N in 2..=4), every element of their union
//! falls into exactly one region: the one whose [`CombinationKey`] marks the
//! sets the element belongs to. [`compute_regions`] builds those regions and
//! [`get_labels`] turns them into display strings according to a [`Fill`].
//!
//! # Example
//!
//! ```
//! use venndraw::labels::{Fill, get_labels};
//!
//! let labels = get_labels([vec![1, 2, 3], vec![2, 3, 4]], &Fill::default()).unwrap();
//! assert_eq!(labels.get_str("10"), Some("1"));
//! assert_eq!(labels.get_str("01"), Some("1"));
//! assert_eq!(labels.get_str("11"), Some("2"));
//! ```

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fmt::{self, Display},
    hash::Hash,
    str::FromStr,
};

use log::{debug, trace};
use serde::Deserialize;
use thiserror::Error;

use venndraw_core::region::{CombinationKey, SetCount};

use crate::error::VennError;

/// A fill mode name that is not one of `number`, `logic`, `percent` or `elements`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported fill mode `{0}` (expected number, logic, percent or elements)")]
pub struct UnknownFillMode(pub String);

/// One piece of information a region label can show.
///
/// Declaration order is the order pieces appear in a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// The combination key as a prefix, e.g. `"011: "`
    Logic,
    /// The number of elements in the region
    Number,
    /// The region size relative to the union, e.g. `"(22.7%)"`
    Percent,
    /// The region's elements, sorted and comma separated
    Elements,
}

impl FillMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Logic => "logic",
            Self::Number => "number",
            Self::Percent => "percent",
            Self::Elements => "elements",
        }
    }
}

impl FromStr for FillMode {
    type Err = UnknownFillMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "logic" => Ok(Self::Logic),
            "number" => Ok(Self::Number),
            "percent" => Ok(Self::Percent),
            "elements" => Ok(Self::Elements),
            other => Err(UnknownFillMode(other.to_string())),
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of [`FillMode`]s a label is composed of.
///
/// Modes compose: selecting several shows all of them, always in
/// [`FillMode`] declaration order. Repeated modes count once. The default
/// shows only the region size.
///
/// ```
/// use venndraw::labels::{Fill, FillMode};
///
/// let fill: Fill = "percent,logic".parse().unwrap();
/// assert_eq!(fill.modes().collect::<Vec<_>>(), [FillMode::Logic, FillMode::Percent]);
/// assert!("number,colour".parse::<Fill>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<FillMode>")]
pub struct Fill {
    modes: BTreeSet<FillMode>,
}

impl Fill {
    pub fn new(modes: impl IntoIterator<Item = FillMode>) -> Self {
        Self {
            modes: modes.into_iter().collect(),
        }
    }

    pub fn contains(&self, mode: FillMode) -> bool {
        self.modes.contains(&mode)
    }

    /// Iterates the selected modes in label order.
    pub fn modes(&self) -> impl Iterator<Item = FillMode> + '_ {
        self.modes.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl Default for Fill {
    fn default() -> Self {
        Self::new([FillMode::Number])
    }
}

impl From<Vec<FillMode>> for Fill {
    fn from(modes: Vec<FillMode>) -> Self {
        Self::new(modes)
    }
}

impl FromStr for Fill {
    type Err = UnknownFillMode;

    /// Parses a comma separated list of mode names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(FillMode::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// The elements of every non-empty region of an N-set diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions<T: Eq + Hash> {
    set_count: SetCount,
    regions: BTreeMap<CombinationKey, HashSet<T>>,
    union_len: usize,
}

impl<T: Eq + Hash> Regions<T> {
    pub fn set_count(&self) -> SetCount {
        self.set_count
    }

    /// Returns the elements of a region, or `None` for a key built for
    /// another set count.
    pub fn get(&self, key: CombinationKey) -> Option<&HashSet<T>> {
        self.regions.get(&key)
    }

    /// Returns the number of elements in a region, zero for foreign keys.
    pub fn size(&self, key: CombinationKey) -> usize {
        self.get(key).map_or(0, HashSet::len)
    }

    /// Returns the number of regions, always 2^N - 1.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns the number of distinct elements across all inputs.
    pub fn union_len(&self) -> usize {
        self.union_len
    }

    /// Iterates regions in key order.
    pub fn iter(&self) -> impl Iterator<Item = (CombinationKey, &HashSet<T>)> {
        self.regions.iter().map(|(key, elements)| (*key, elements))
    }

    /// Formats every region into a display label.
    pub fn to_labels(&self, fill: &Fill) -> RegionLabels
    where
        T: Display,
    {
        let labels = self
            .iter()
            .map(|(key, elements)| (key, self.format_label(key, elements, fill)))
            .collect();

        RegionLabels {
            set_count: self.set_count,
            labels,
        }
    }

    fn format_label(&self, key: CombinationKey, elements: &HashSet<T>, fill: &Fill) -> String
    where
        T: Display,
    {
        let mut label = String::new();

        for mode in fill.modes() {
            match mode {
                FillMode::Logic => label.push_str(&format!("{key}: ")),
                FillMode::Number => label.push_str(&elements.len().to_string()),
                FillMode::Percent => {
                    let percent = if self.union_len == 0 {
                        0.0
                    } else {
                        100.0 * elements.len() as f64 / self.union_len as f64
                    };
                    label.push_str(&format!("({percent:.1}%)"));
                }
                FillMode::Elements => {
                    let mut names: Vec<String> = elements.iter().map(ToString::to_string).collect();
                    names.sort();
                    if fill.contains(FillMode::Number) || fill.contains(FillMode::Percent) {
                        label.push('\n');
                    }
                    label.push_str(&names.join(", "));
                }
            }
        }

        label
    }
}

/// Display labels keyed by combination key, tagged with their set count.
///
/// Built by [`get_labels`], or by hand for custom annotations:
///
/// ```
/// use venndraw::labels::RegionLabels;
/// use venndraw::region::SetCount;
///
/// let labels = RegionLabels::from_pairs(SetCount::Two, [("10", "only A"), ("11", "both")]).unwrap();
/// assert_eq!(labels.len(), 2);
/// assert_eq!(labels.get_str("01"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLabels {
    set_count: SetCount,
    labels: BTreeMap<CombinationKey, String>,
}

impl RegionLabels {
    /// Creates an empty mapping for `set_count` sets.
    pub fn new(set_count: SetCount) -> Self {
        Self {
            set_count,
            labels: BTreeMap::new(),
        }
    }

    /// Builds a mapping from `(key, label)` string pairs.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::InvalidArgument`] when a key does not parse or
    /// has a different number of digits than `set_count`.
    pub fn from_pairs<K, L>(
        set_count: SetCount,
        pairs: impl IntoIterator<Item = (K, L)>,
    ) -> Result<Self, VennError>
    where
        K: AsRef<str>,
        L: Into<String>,
    {
        let mut labels = Self::new(set_count);
        for (key, label) in pairs {
            let key: CombinationKey = key.as_ref().parse()?;
            labels.insert(key, label)?;
        }
        Ok(labels)
    }

    /// Sets the label of one region, replacing any previous label.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::InvalidArgument`] for a key built for another
    /// set count.
    pub fn insert(&mut self, key: CombinationKey, label: impl Into<String>) -> Result<(), VennError> {
        if key.set_count() != self.set_count {
            return Err(VennError::InvalidArgument(format!(
                "key `{key}` does not belong to a {}-set diagram",
                self.set_count
            )));
        }
        self.labels.insert(key, label.into());
        Ok(())
    }

    pub fn set_count(&self) -> SetCount {
        self.set_count
    }

    pub fn get(&self, key: CombinationKey) -> Option<&str> {
        self.labels.get(&key).map(String::as_str)
    }

    /// Looks a label up by the key's string form, e.g. `"011"`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        key.parse::<CombinationKey>().ok().and_then(|key| self.get(key))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates labels in key order.
    pub fn iter(&self) -> impl Iterator<Item = (CombinationKey, &str)> {
        self.labels.iter().map(|(key, label)| (*key, label.as_str()))
    }
}

/// Computes the elements of every non-empty region.
///
/// Each input is deduplicated. Inputs may be empty.
///
/// # Errors
///
/// Returns [`VennError::InvalidArgument`] unless 2, 3 or 4 collections
/// are supplied.
pub fn compute_regions<I, C, T>(data: I) -> Result<Regions<T>, VennError>
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let sets: Vec<HashSet<T>> = data
        .into_iter()
        .map(|collection| collection.into_iter().collect())
        .collect();
    let set_count = SetCount::try_from(sets.len())?;

    let union: HashSet<T> = sets.iter().flatten().cloned().collect();
    let union_len = union.len();

    let mut regions: BTreeMap<CombinationKey, HashSet<T>> = set_count
        .keys()
        .map(|key| (key, HashSet::new()))
        .collect();

    for element in union {
        let mask = sets
            .iter()
            .fold(0u8, |mask, set| (mask << 1) | u8::from(set.contains(&element)));
        let key = CombinationKey::new(set_count, mask)?;
        regions.entry(key).or_default().insert(element);
    }

    debug!(set_count = set_count.get(), union_len; "Regions computed");

    Ok(Regions {
        set_count,
        regions,
        union_len,
    })
}

/// Computes region labels for 2 to 4 input collections.
///
/// # Errors
///
/// Returns [`VennError::InvalidArgument`] unless 2, 3 or 4 collections
/// are supplied.
pub fn get_labels<I, C, T>(data: I, fill: &Fill) -> Result<RegionLabels, VennError>
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = T>,
    T: Eq + Hash + Clone + Display,
{
    let labels = compute_regions(data)?.to_labels(fill);
    trace!(labels:?; "Region labels");
    Ok(labels)
}

/// Like [`get_labels`], but checks the collection count against the set
/// count the caller expects.
///
/// # Errors
///
/// Returns [`VennError::InvalidArgument`] when the number of collections
/// differs from `set_count`.
pub fn get_labels_for<I, C, T>(
    set_count: SetCount,
    data: I,
    fill: &Fill,
) -> Result<RegionLabels, VennError>
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = T>,
    T: Eq + Hash + Clone + Display,
{
    let collections: Vec<C> = data.into_iter().collect();
    if collections.len() != set_count.get() {
        return Err(VennError::InvalidArgument(format!(
            "expected {set_count} collections, got {}",
            collections.len()
        )));
    }
    get_labels(collections, fill)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> CombinationKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_two_set_regions() {
        let regions = compute_regions([vec![1, 2, 3], vec![2, 3, 4]]).unwrap();

        assert_eq!(regions.set_count(), SetCount::Two);
        assert_eq!(regions.len(), 3);
        assert_eq!(regions.get(key("10")), Some(&HashSet::from([1])));
        assert_eq!(regions.get(key("01")), Some(&HashSet::from([4])));
        assert_eq!(regions.get(key("11")), Some(&HashSet::from([2, 3])));
        assert_eq!(regions.union_len(), 4);
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let regions = compute_regions([vec!["a", "a", "b"], vec!["b", "b"]]).unwrap();
        assert_eq!(regions.size(key("10")), 1);
        assert_eq!(regions.size(key("11")), 1);
        assert_eq!(regions.size(key("01")), 0);
    }

    #[test]
    fn test_empty_collection() {
        let empty: Vec<i32> = Vec::new();
        let regions = compute_regions([vec![1, 2], empty, vec![2, 3]]).unwrap();

        for (key, elements) in regions.iter() {
            if key.contains(1) {
                assert!(elements.is_empty(), "region {key} should be empty");
            }
        }
        assert_eq!(regions.size(key("100")), 1);
        assert_eq!(regions.size(key("101")), 1);
        assert_eq!(regions.size(key("001")), 1);
    }

    #[test]
    fn test_unsupported_set_counts() {
        for count in [0usize, 1, 5] {
            let data: Vec<Vec<u8>> = vec![vec![1]; count];
            let err = compute_regions(data).unwrap_err();
            assert!(
                matches!(err, VennError::InvalidArgument(_)),
                "count {count}: {err}"
            );
        }
    }

    #[test]
    fn test_get_labels_for_mismatch() {
        let err = get_labels_for(SetCount::Three, [vec![1], vec![2]], &Fill::default()).unwrap_err();
        match err {
            VennError::InvalidArgument(message) => {
                assert_eq!(message, "expected 3 collections, got 2");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_get_labels_for_match() {
        let labels =
            get_labels_for(SetCount::Two, [vec![1], vec![1]], &Fill::default()).unwrap();
        assert_eq!(labels.get_str("11"), Some("1"));
    }

    #[test]
    fn test_number_labels() {
        let a: Vec<u32> = (0..10).collect();
        let b: Vec<u32> = (5..15).collect();
        let c: Vec<u32> = (3..8).collect();
        let labels = get_labels([a, b, c], &Fill::default()).unwrap();

        let expected = [
            ("001", "0"),
            ("010", "5"),
            ("011", "0"),
            ("100", "3"),
            ("101", "2"),
            ("110", "2"),
            ("111", "3"),
        ];
        let actual: Vec<(String, &str)> = labels.iter().map(|(k, l)| (k.to_string(), l)).collect();
        assert_eq!(actual.len(), expected.len());
        for ((key, label), (expected_key, expected_label)) in actual.iter().zip(expected) {
            assert_eq!(key, expected_key);
            assert_eq!(*label, expected_label);
        }
    }

    #[test]
    fn test_logic_and_number_labels() {
        let a: Vec<u32> = (0..10).collect();
        let b: Vec<u32> = (5..15).collect();
        let c: Vec<u32> = (3..8).collect();
        let fill = Fill::new([FillMode::Number, FillMode::Logic]);
        let labels = get_labels([a, b, c], &fill).unwrap();

        assert_eq!(labels.get_str("001"), Some("001: 0"));
        assert_eq!(labels.get_str("010"), Some("010: 5"));
    }

    #[test]
    fn test_percent_labels() {
        let a: Vec<u32> = (0..10).collect();
        let b: Vec<u32> = (5..15).collect();
        let c: Vec<u32> = (3..8).collect();
        let fill = Fill::new([FillMode::Number, FillMode::Percent]);
        let labels = get_labels([a, b, c], &fill).unwrap();

        // 15 distinct elements in total
        assert_eq!(labels.get_str("010"), Some("5(33.3%)"));
        assert_eq!(labels.get_str("011"), Some("0(0.0%)"));
    }

    #[test]
    fn test_percent_of_empty_union() {
        let empty: Vec<i32> = Vec::new();
        let labels = get_labels([empty.clone(), empty], &Fill::new([FillMode::Percent])).unwrap();
        assert_eq!(labels.get_str("11"), Some("(0.0%)"));
    }

    #[test]
    fn test_element_labels() {
        let labels = get_labels(
            [vec!["pear", "apple", "fig"], vec!["fig", "kiwi"]],
            &Fill::new([FillMode::Elements]),
        )
        .unwrap();
        assert_eq!(labels.get_str("10"), Some("apple, pear"));
        assert_eq!(labels.get_str("11"), Some("fig"));
        assert_eq!(labels.get_str("01"), Some("kiwi"));
    }

    #[test]
    fn test_elements_after_count_go_on_new_line() {
        let fill = Fill::new([FillMode::Elements, FillMode::Number, FillMode::Logic]);
        let labels = get_labels([vec!['x', 'y'], vec!['y']], &fill).unwrap();
        assert_eq!(labels.get_str("10"), Some("10: 1\nx"));

        let logic_only = Fill::new([FillMode::Logic, FillMode::Elements]);
        let labels = get_labels([vec!['x', 'y'], vec!['y']], &logic_only).unwrap();
        assert_eq!(labels.get_str("11"), Some("11: y"));
    }

    #[test]
    fn test_empty_fill_gives_blank_labels() {
        let labels = get_labels([vec![1], vec![2]], &Fill::new([])).unwrap();
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|(_, label)| label.is_empty()));
    }

    #[test]
    fn test_fill_parsing() {
        let fill: Fill = "number, logic,number".parse().unwrap();
        assert_eq!(
            fill.modes().collect::<Vec<_>>(),
            [FillMode::Logic, FillMode::Number]
        );
        assert_eq!(
            "count".parse::<Fill>(),
            Err(UnknownFillMode("count".to_string()))
        );
        assert!("".parse::<Fill>().unwrap().is_empty());
    }

    #[test]
    fn test_fill_default() {
        let fill = Fill::default();
        assert!(fill.contains(FillMode::Number));
        assert_eq!(fill.modes().count(), 1);
    }

    #[test]
    fn test_region_labels_insert_rejects_foreign_key() {
        let mut labels = RegionLabels::new(SetCount::Two);
        assert!(labels.insert(key("01"), "x").is_ok());
        assert!(matches!(
            labels.insert(key("011"), "y"),
            Err(VennError::InvalidArgument(_))
        ));
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn test_region_labels_from_pairs_rejects_bad_keys() {
        assert!(RegionLabels::from_pairs(SetCount::Two, [("1x", "a")]).is_err());
        assert!(RegionLabels::from_pairs(SetCount::Two, [("00", "a")]).is_err());
        assert!(RegionLabels::from_pairs(SetCount::Three, [("01", "a")]).is_err());
    }
}
