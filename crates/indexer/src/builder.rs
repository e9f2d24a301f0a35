use crate::error::{Result, SegmentError};
use crate::index::SegmentIndex;
use crate::reader::try_read_segment_file;
use crate::response::ListingResponse;
use crate::scanner::SourceScanner;
use crate::stats::ScanStats;
use std::path::Path;
use std::time::Instant;

/// Everything one walk of the source root produced.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub index: SegmentIndex,
    /// `"{city}/{file}"` for every file that yielded nothing.
    pub fail_files: Vec<String>,
    pub stats: ScanStats,
}

/// Builds a fresh [`SegmentIndex`] from the files under a source root.
/// Nothing is cached between builds.
pub struct IndexBuilder {
    scanner: SourceScanner,
}

impl IndexBuilder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            scanner: SourceScanner::new(root),
        }
    }

    /// Walk the root and parse every participating file.
    ///
    /// Fails only when the root itself is missing, unlistable, or has no
    /// city folders. Per-file problems land in `fail_files`.
    pub fn scan(&self) -> Result<ScanReport> {
        let started = Instant::now();
        let cities = self.scanner.city_folders()?;
        if cities.is_empty() {
            return Err(SegmentError::NoCityFolders);
        }

        let mut report = ScanReport::default();
        for city in &cities {
            let files = match self.scanner.segment_files(city) {
                Ok(files) => files,
                Err(e) => {
                    log::warn!("Skipping city folder {}: {e}", city.path.display());
                    continue;
                }
            };

            for file in files {
                match try_read_segment_file(&file.path) {
                    Ok(buckets) => {
                        if report
                            .index
                            .insert_group(&city.name, &file.operator, buckets)
                            .is_some()
                        {
                            log::warn!(
                                "Operator {} in {} defined twice; keeping {}",
                                file.operator,
                                city.name,
                                file.file_name
                            );
                        }
                    }
                    Err(failure) => {
                        log::warn!("Failed to parse {}/{}: {failure}", city.name, file.file_name);
                        report
                            .fail_files
                            .push(format!("{}/{}", city.name, file.file_name));
                    }
                }
            }
        }

        report.stats = ScanStats::from_index(cities.len(), &report.index);
        log::info!(
            "Scanned {} cities: {} groups, {} buttons, {} failed files in {}ms",
            report.stats.cities,
            report.stats.groups,
            report.stats.buttons,
            report.fail_files.len(),
            started.elapsed().as_millis()
        );
        Ok(report)
    }

    /// Scan and fold the outcome into a listing result.
    pub fn build(&self) -> ListingResponse {
        match self.scan() {
            Ok(report) if report.index.is_empty() => {
                ListingResponse::failure(&SegmentError::NoValidData, report.fail_files)
            }
            Ok(report) => ListingResponse::success(report),
            Err(e) => {
                log::warn!("Listing {} failed: {e}", self.scanner.root().display());
                ListingResponse::failure(&e, Vec::new())
            }
        }
    }
}

/// Build the full listing for `root`.
pub fn build_index(root: impl AsRef<Path>) -> ListingResponse {
    IndexBuilder::new(root).build()
}
