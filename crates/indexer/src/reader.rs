use crate::error::ReadFailure;
use crate::index::SegmentBuckets;
use encoding_rs::{GBK, UTF_8};
use std::borrow::Cow;
use std::path::Path;

/// Header substring marking a segment column, e.g. `"138 号段"`.
pub const SEGMENT_COLUMN_MARKER: &str = " 号段";

const SEGMENT_LEN: usize = 7;

/// Text encodings a segment file may be stored in, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// UTF-8, leading BOM optional. Rejects malformed input so that
    /// legacy files fall through to the next candidate.
    Utf8,
    /// GBK. Malformed sequences are replaced.
    Gbk,
}

impl SourceEncoding {
    pub const CANDIDATES: [Self; 2] = [Self::Utf8, Self::Gbk];

    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Gbk => "GBK",
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<Cow<'_, str>, ReadFailure> {
        match self {
            Self::Utf8 => {
                let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
                if had_errors {
                    return Err(ReadFailure::Decode {
                        encoding: self.name(),
                    });
                }
                Ok(text)
            }
            Self::Gbk => Ok(GBK.decode_without_bom_handling(bytes).0),
        }
    }
}

/// Read one segment file, or `None` if it is unreadable or holds nothing
/// usable.
pub fn read_segment_file(path: &Path) -> Option<SegmentBuckets> {
    match try_read_segment_file(path) {
        Ok(buckets) => Some(buckets),
        Err(failure) => {
            log::debug!("Rejected {}: {failure}", path.display());
            None
        }
    }
}

/// Like [`read_segment_file`] but reports why the file was rejected.
pub fn try_read_segment_file(path: &Path) -> Result<SegmentBuckets, ReadFailure> {
    let bytes = std::fs::read(path)?;

    let mut last_failure = None;
    let mut utf8_malformed = false;
    for encoding in SourceEncoding::CANDIDATES {
        let parsed = encoding
            .decode(&bytes)
            .and_then(|text| parse_segments(&text));
        match parsed {
            Ok(buckets) => {
                log::debug!(
                    "Parsed {} as {} ({} segment columns)",
                    path.display(),
                    encoding.name(),
                    buckets.len()
                );
                return Ok(buckets);
            }
            Err(failure) => {
                let terminal = failure.is_terminal();
                if matches!(failure, ReadFailure::Decode { .. }) {
                    utf8_malformed = true;
                } else if terminal && !utf8_malformed {
                    return Err(failure);
                }
                log::debug!(
                    "{} did not parse as {}: {failure}",
                    path.display(),
                    encoding.name()
                );
                last_failure = Some(failure);
                if terminal {
                    break;
                }
            }
        }
    }

    // A UTF-8 file with a few bad bytes reads as garbage under GBK; decode
    // it again with the bad bytes replaced.
    if utf8_malformed {
        log::debug!("Re-reading {} as lossy UTF-8", path.display());
        return parse_segments(&UTF_8.decode_with_bom_removal(&bytes).0);
    }

    Err(last_failure.unwrap_or(ReadFailure::NoSegmentValues))
}

fn parse_segments(text: &str) -> Result<SegmentBuckets, ReadFailure> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<(usize, String)> = reader
        .headers()?
        .iter()
        .enumerate()
        .filter(|(_, name)| name.contains(SEGMENT_COLUMN_MARKER))
        .map(|(idx, name)| (idx, three_prefix_key(name)))
        .collect();
    if columns.is_empty() {
        return Err(ReadFailure::NoSegmentColumns);
    }

    let mut buckets = SegmentBuckets::new();
    for record in reader.records() {
        let record = record?;
        for (idx, three) in &columns {
            // Short rows just lack the cell.
            let Some(cell) = record.get(*idx) else {
                continue;
            };
            let seven = cell.trim();
            if is_segment_value(seven) {
                buckets.insert(three, seven);
            }
        }
    }

    if buckets.is_empty() {
        return Err(ReadFailure::NoSegmentValues);
    }
    Ok(buckets)
}

/// `"138 号段"` -> `"138"`.
pub fn three_prefix_key(header: &str) -> String {
    header.replace(SEGMENT_COLUMN_MARKER, "").trim().to_string()
}

/// Exactly seven ASCII digits.
pub fn is_segment_value(value: &str) -> bool {
    value.len() == SEGMENT_LEN && value.bytes().all(|b| b.is_ascii_digit())
}
