// VectorSet - a partial assignment of CVSS v2 metric values, one per group

use crate::catalog::{MetricGroup, MetricValue};
use crate::codec;
use crate::error::CvssError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A selection of at most one metric value per group.
///
/// Backed by a fixed array of one optional slot per [`MetricGroup`], so the
/// "one value per group" invariant is structural: adding a value for a
/// group that already has one overwrites it. The set owns no resources and
/// carries no synchronization; the expected usage is parse, compute,
/// discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VectorSet {
    slots: [Option<MetricValue>; MetricGroup::COUNT],
}

impl VectorSet {
    /// An empty set. Scoring an empty set yields a base score of 0.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` for its group, replacing any prior selection for the
    /// same group. Never fails.
    pub fn add(&mut self, value: MetricValue) {
        self.slots[value.group.index()] = Some(value);
    }

    /// Deselect `value` if it is currently selected. A different value of
    /// the same group is left untouched; removing an absent value is a
    /// no-op.
    pub fn remove(&mut self, value: MetricValue) {
        let slot = &mut self.slots[value.group.index()];
        if *slot == Some(value) {
            *slot = None;
        }
    }

    /// Whether exactly `value` is selected.
    pub fn has(&self, value: MetricValue) -> bool {
        self.slots[value.group.index()] == Some(value)
    }

    /// The selected value for `group`, if any.
    pub fn get(&self, group: MetricGroup) -> Option<MetricValue> {
        self.slots[group.index()]
    }

    /// Selected values, in canonical group order.
    pub fn iter(&self) -> impl Iterator<Item = &MetricValue> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// Number of groups with a selection.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }
}

/// Displays the canonical serialized form: tokens sorted ascending by byte
/// value, joined with `/`.
impl std::fmt::Display for VectorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&codec::serialize(self))
    }
}

impl FromStr for VectorSet {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse(s)
    }
}

/// Serializes as the canonical vector string.
impl Serialize for VectorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&codec::serialize(self))
    }
}

impl<'de> Deserialize<'de> for VectorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
