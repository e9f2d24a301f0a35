use crate::index::SegmentIndex;
use serde::{Deserialize, Serialize};

/// Counters reported with every listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// City folders found under the root, parsed or not
    pub cities: usize,

    /// Successfully parsed (city, operator) files
    pub groups: usize,

    /// ThreePrefix buckets across all groups
    pub buttons: usize,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts for `index`, given how many city folders the scan saw.
    pub fn from_index(cities: usize, index: &SegmentIndex) -> Self {
        Self {
            cities,
            groups: index.group_count(),
            buttons: index.button_count(),
        }
    }
}
