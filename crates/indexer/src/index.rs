use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Segments of one parsed file: ThreePrefix -> SevenPrefix values in
/// first-seen order, each value present once. Buckets keep the order
/// their columns appear in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentBuckets(IndexMap<String, Vec<String>>);

impl SegmentBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `seven` under `three` unless the bucket already holds it.
    /// Returns whether the value was added.
    pub fn insert(&mut self, three: &str, seven: &str) -> bool {
        let bucket = self.0.entry(three.to_string()).or_default();
        if bucket.iter().any(|existing| existing == seven) {
            return false;
        }
        bucket.push(seven.to_string());
        true
    }

    /// Number of ThreePrefix buckets ("buttons").
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, three: &str) -> Option<&[String]> {
        self.0.get(three).map(Vec::as_slice)
    }

    pub fn contains(&self, three: &str, seven: &str) -> bool {
        self.get(three)
            .is_some_and(|bucket| bucket.iter().any(|value| value == seven))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// City -> Operator -> segments, both levels in insertion order.
///
/// The builder inserts cities sorted by folder name and operators in file
/// scan order, so iteration order is scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentIndex(IndexMap<String, IndexMap<String, SegmentBuckets>>);

/// Where a seven-digit segment was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentHit<'a> {
    pub city: &'a str,
    pub operator: &'a str,
}

impl SegmentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a parsed file at `city/operator`, creating the city level on
    /// first use. A repeated operator is replaced where it stands; the
    /// replaced buckets are returned.
    pub fn insert_group(
        &mut self,
        city: &str,
        operator: &str,
        buckets: SegmentBuckets,
    ) -> Option<SegmentBuckets> {
        self.0
            .entry(city.to_string())
            .or_default()
            .insert(operator.to_string(), buckets)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(IndexMap::is_empty)
    }

    pub fn city_count(&self) -> usize {
        self.0.len()
    }

    /// Number of (city, operator) entries.
    pub fn group_count(&self) -> usize {
        self.0.values().map(IndexMap::len).sum()
    }

    /// Total ThreePrefix buckets across all groups.
    pub fn button_count(&self) -> usize {
        self.groups().map(|(_, _, buckets)| buckets.len()).sum()
    }

    pub fn get(&self, city: &str, operator: &str) -> Option<&SegmentBuckets> {
        self.0.get(city).and_then(|ops| ops.get(operator))
    }

    /// All groups in search order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &str, &SegmentBuckets)> {
        self.0.iter().flat_map(|(city, operators)| {
            operators
                .iter()
                .map(move |(operator, buckets)| (city.as_str(), operator.as_str(), buckets))
        })
    }

    /// First group, in insertion order, whose `three` bucket holds `seven`.
    ///
    /// A segment listed under several groups resolves to whichever comes
    /// first; there is no other tie-break.
    pub fn find(&self, three: &str, seven: &str) -> Option<SegmentHit<'_>> {
        self.groups()
            .find(|(_, _, buckets)| buckets.contains(three, seven))
            .map(|(city, operator, _)| SegmentHit { city, operator })
    }
}
