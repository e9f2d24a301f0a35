//! # Mobile Segment Index
//!
//! Answers "which city and operator own this mobile number?" from a tree
//! of per-city, per-operator CSV files.
//!
//! ## Pipeline
//!
//! ```text
//! Source root
//!     │
//!     ├──> Scanner (one folder per city, sorted)
//!     │      └─> <operator>号段数据_修改后.csv
//!     │
//!     ├──> Reader (UTF-8 / GBK, " 号段" columns)
//!     │      └─> ThreePrefix -> [SevenPrefix]
//!     │
//!     └──> Index (City -> Operator -> ThreePrefix)
//!            └─> First-match lookup
//! ```
//!
//! Every call rebuilds the index from disk; nothing is shared between
//! calls.
//!
//! ## Example
//!
//! ```no_run
//! use mobile_segment_index::{build_index, query_mobile};
//!
//! let listing = build_index("/srv/segments");
//! println!("{} groups", listing.statistics.groups);
//!
//! let answer = query_mobile(Some("18523266910"), "/srv/segments");
//! if let Some(hit) = answer.data {
//!     println!("{} {}", hit.city, hit.operator);
//! }
//! ```

mod builder;
mod config;
mod error;
mod index;
mod mobile;
mod query;
mod reader;
mod response;
mod scanner;
mod stats;

pub use builder::{build_index, IndexBuilder, ScanReport};
pub use config::{SourceConfig, SOURCE_ROOT_ENV};
pub use error::{ReadFailure, Result, SegmentError};
pub use index::{SegmentBuckets, SegmentHit, SegmentIndex};
pub use mobile::MobileNumber;
pub use query::{query_mobile, query_number};
pub use reader::{
    is_segment_value, read_segment_file, three_prefix_key, try_read_segment_file,
    SourceEncoding, SEGMENT_COLUMN_MARKER,
};
pub use response::{
    ListingResponse, MobileMatch, QueryResponse, LISTING_OK_MESSAGE, QUERY_OK_MESSAGE,
};
pub use scanner::{
    operator_from_file_name, CityFolder, SegmentFile, SourceScanner, MODIFIED_SUFFIX,
    OPERATOR_SUFFIX, SEGMENT_FILE_MARKER,
};
pub use stats::ScanStats;
