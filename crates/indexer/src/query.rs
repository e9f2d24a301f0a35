use crate::builder::build_index;
use crate::error::SegmentError;
use crate::mobile::MobileNumber;
use crate::response::{MobileMatch, QueryResponse};
use std::path::Path;

/// Look up which city and operator own `mobile`.
///
/// The number is validated before the filesystem is touched. A failed
/// build is reported with its own message. Matching walks cities in
/// sorted order and operators in scan order; the first hit wins.
pub fn query_mobile(mobile: Option<&str>, root: impl AsRef<Path>) -> QueryResponse {
    match MobileNumber::from_param(mobile) {
        Ok(mobile) => query_number(&mobile, root),
        Err(e) => e.into(),
    }
}

/// Look up an already validated number.
pub fn query_number(mobile: &MobileNumber, root: impl AsRef<Path>) -> QueryResponse {
    let listing = build_index(root);
    let index = match listing.data {
        Some(index) if listing.success => index,
        _ => return QueryResponse::failure(listing.message),
    };

    let three = mobile.three_segment();
    let seven = mobile.seven_segment();
    match index.find(three, seven) {
        Some(hit) => {
            log::debug!("{mobile} -> {}/{}", hit.city, hit.operator);
            QueryResponse::found(MobileMatch {
                mobile: mobile.to_string(),
                city: hit.city.to_string(),
                operator: hit.operator.to_string(),
                three_segment: three.to_string(),
                seven_segment: seven.to_string(),
            })
        }
        None => SegmentError::NotFound.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn invalid_number_skips_scan() {
        // The root does not exist; a scan would report that instead.
        let root = Path::new("/nonexistent/segment/root");
        for mobile in [None, Some("1234"), Some("1852326691a")] {
            let response = query_mobile(mobile, root);
            assert!(!response.success);
            assert_eq!(
                response.message,
                "Invalid mobile number format. Must be 11 digits."
            );
            assert_eq!(response.data, None);
        }
    }

    #[test]
    fn build_failure_message_is_propagated() {
        let temp = tempdir().unwrap();
        let response = query_mobile(Some("18523266910"), temp.path());
        assert!(!response.success);
        assert_eq!(response.message, "No city folders found");
    }

    #[test]
    fn unknown_segment_is_not_found() {
        let temp = tempdir().unwrap();
        let city = temp.path().join("CityA");
        fs::create_dir(&city).unwrap();
        fs::write(city.join("联通号段数据_修改后.csv"), "185 号段\n1852326\n").unwrap();

        let response = query_mobile(Some("18500000000"), temp.path());
        assert!(!response.success);
        assert_eq!(
            response.message,
            "Mobile number information not found in the database."
        );
        assert_eq!(response.data, None);
    }
}
