use crate::builder::ScanReport;
use crate::error::SegmentError;
use crate::index::SegmentIndex;
use crate::stats::ScanStats;
use serde::{Deserialize, Serialize};

pub const LISTING_OK_MESSAGE: &str = "Data retrieved successfully";
pub const QUERY_OK_MESSAGE: &str = "Mobile number information found.";

/// Result of a full listing of the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<SegmentIndex>,
    pub fail_files: Vec<String>,
    pub statistics: ScanStats,
}

impl ListingResponse {
    pub fn success(report: ScanReport) -> Self {
        Self {
            success: true,
            message: LISTING_OK_MESSAGE.to_string(),
            data: Some(report.index),
            fail_files: report.fail_files,
            statistics: report.stats,
        }
    }

    /// Failed listings always report zero statistics.
    pub fn failure(error: &SegmentError, fail_files: Vec<String>) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            data: None,
            fail_files,
            statistics: ScanStats::new(),
        }
    }
}

/// Owner of a queried number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileMatch {
    pub mobile: String,
    pub city: String,
    pub operator: String,
    pub three_segment: String,
    pub seven_segment: String,
}

/// Result of a single-number query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<MobileMatch>,
}

impl QueryResponse {
    pub fn found(hit: MobileMatch) -> Self {
        Self {
            success: true,
            message: QUERY_OK_MESSAGE.to_string(),
            data: Some(hit),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl From<SegmentError> for QueryResponse {
    fn from(error: SegmentError) -> Self {
        Self::failure(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn failed_listing_serializes_nulls_and_zeroes() {
        let response = ListingResponse::failure(&SegmentError::NoCityFolders, Vec::new());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": false,
                "message": "No city folders found",
                "data": null,
                "fail_files": [],
                "statistics": {"cities": 0, "groups": 0, "buttons": 0}
            })
        );
    }

    #[test]
    fn query_failure_from_error_uses_display_text() {
        let response = QueryResponse::from(SegmentError::InvalidMobileFormat);
        assert!(!response.success);
        assert_eq!(
            response.message,
            "Invalid mobile number format. Must be 11 digits."
        );
        assert_eq!(response.data, None);
    }
}
