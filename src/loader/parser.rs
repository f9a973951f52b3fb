use super::dataset::Dataset;
use crate::error::{JobDataError, Result};
use crate::model::Job;

/// Number of leading columns a row must carry:
/// name, employer, location, position type, core competency.
pub const REQUIRED_COLUMNS: usize = 5;

/// Parse RFC-4180 CSV text into a [`Dataset`].
///
/// The first record is the header and is skipped. Columns are positional;
/// extra trailing columns are ignored. A header-only input yields an empty
/// dataset. Any short or undecodable row fails the whole parse.
pub fn parse_jobs(text: &str) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header_len = reader.headers().map_err(malformed)?.len();
    if header_len == 0 {
        return Err(JobDataError::MalformedRecord {
            line: 1,
            reason: "missing header row".to_string(),
        });
    }

    let mut dataset = Dataset::new();
    for result in reader.records() {
        let record = result.map_err(malformed)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() < REQUIRED_COLUMNS {
            return Err(JobDataError::MalformedRecord {
                line,
                reason: format!(
                    "expected {} columns, found {}",
                    REQUIRED_COLUMNS,
                    record.len()
                ),
            });
        }

        dataset.push(Job::new(
            &record[0],
            &record[1],
            &record[2],
            &record[3],
            &record[4],
        ));
    }

    Ok(dataset)
}

fn malformed(err: csv::Error) -> JobDataError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    JobDataError::MalformedRecord {
        line,
        reason: err.to_string(),
    }
}
