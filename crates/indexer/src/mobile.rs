use crate::error::SegmentError;
use std::fmt;
use std::str::FromStr;

const MOBILE_LEN: usize = 11;

/// An 11-digit ASCII mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub fn parse(raw: &str) -> Result<Self, SegmentError> {
        if raw.len() != MOBILE_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SegmentError::InvalidMobileFormat);
        }
        Ok(Self(raw.to_string()))
    }

    /// Parse an optional request parameter; absent counts as malformed.
    pub fn from_param(raw: Option<&str>) -> Result<Self, SegmentError> {
        raw.map_or(Err(SegmentError::InvalidMobileFormat), Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First three digits.
    pub fn three_segment(&self) -> &str {
        &self.0[..3]
    }

    /// First seven digits.
    pub fn seven_segment(&self) -> &str {
        &self.0[..7]
    }
}

impl FromStr for MobileNumber {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_prefixes() {
        let mobile: MobileNumber = "18523266910".parse().unwrap();
        assert_eq!(mobile.three_segment(), "185");
        assert_eq!(mobile.seven_segment(), "1852326");
        assert_eq!(mobile.to_string(), "18523266910");
    }

    #[test]
    fn absent_param_is_malformed() {
        assert!(matches!(
            MobileNumber::from_param(None),
            Err(SegmentError::InvalidMobileFormat)
        ));
        assert!(MobileNumber::from_param(Some("13800000000")).is_ok());
    }

    #[test]
    fn rejects_bad_formats() {
        for raw in [
            "",
            "1234",
            "1852326691a",
            "185232669100",
            " 18523266910",
            "１８５２３２６６９１０",
        ] {
            assert!(
                matches!(
                    MobileNumber::parse(raw),
                    Err(SegmentError::InvalidMobileFormat)
                ),
                "accepted {raw:?}"
            );
        }
    }
}
