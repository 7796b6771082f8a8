//! Resolution levels available per simulation, read off `.../LevN/Horizons.h5` file names.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog::Catalog;

/// Basename whose presence marks a resolution level as available.
pub const HORIZONS_FILE: &str = "Horizons.h5";
/// Directory prefix carrying the level number.
pub const LEVEL_PREFIX: &str = "Lev";

/// Identifier → ascending resolution levels, in catalog order.
pub type ResolutionMap = Map<String, Value>;

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("record has no `files` array")]
    MissingFiles,
    #[error("file entry {index} has no string `filename`")]
    MissingFilename { index: usize },
    #[error("`{filename}` has no directory to read a resolution level from")]
    NoLevelDirectory { filename: String },
    #[error("cannot parse resolution level from `{dir}` in `{filename}`")]
    BadLevel {
        dir: String,
        filename: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("simulation {id}")]
    Simulation {
        id: String,
        #[source]
        source: Box<ResolutionError>,
    },
}

/// Level number from a directory name: the text after the last `Lev`, or the
/// whole name when there is none.
///
/// Accepts surrounding whitespace, one leading sign and single `_` separators
/// between digits (`Lev1_0` is 10). Values outside `i64` are rejected.
pub fn level_from_dir(dir: &str) -> Result<i64, std::num::ParseIntError> {
    let text = dir.rsplit(LEVEL_PREFIX).next().unwrap_or(dir).trim();
    let body = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    if body.contains('_') && separators_between_digits(body) {
        return text.replace('_', "").parse::<i64>();
    }
    // Misplaced separators fall through and fail as an invalid digit.
    text.parse::<i64>()
}

fn separators_between_digits(body: &str) -> bool {
    !body.starts_with('_') && !body.ends_with('_') && !body.contains("__")
}

/// Sorted levels for one record's `files` entries. Duplicates are kept.
pub fn resolutions_for_files(files: &[Value]) -> Result<Vec<i64>, ResolutionError> {
    let mut levels = Vec::new();
    for (index, file) in files.iter().enumerate() {
        let filename = file
            .get("filename")
            .and_then(Value::as_str)
            .ok_or(ResolutionError::MissingFilename { index })?;
        let segments: Vec<&str> = filename.split('/').collect();
        if segments.last() != Some(&HORIZONS_FILE) {
            continue;
        }
        let dir = match segments.len() {
            n if n >= 2 => segments[n - 2],
            _ => {
                return Err(ResolutionError::NoLevelDirectory {
                    filename: filename.to_string(),
                })
            }
        };
        let level = level_from_dir(dir).map_err(|source| ResolutionError::BadLevel {
            dir: dir.to_string(),
            filename: filename.to_string(),
            source,
        })?;
        levels.push(level);
    }
    levels.sort_unstable();
    Ok(levels)
}

/// Sorted levels for a full record.
pub fn resolutions_for_record(record: &Value) -> Result<Vec<i64>, ResolutionError> {
    let files = record
        .get("files")
        .and_then(Value::as_array)
        .ok_or(ResolutionError::MissingFiles)?;
    resolutions_for_files(files)
}

/// Resolution lists for every simulation in the catalog. The first bad record aborts.
pub fn resolutions_for_catalog(catalog: &Catalog) -> Result<ResolutionMap, ResolutionError> {
    let mut out = Map::new();
    for (id, record) in catalog.iter() {
        let levels = resolutions_for_record(record).map_err(|e| ResolutionError::Simulation {
            id: id.to_string(),
            source: Box::new(e),
        })?;
        tracing::debug!(id, ?levels, "resolutions");
        out.insert(id.to_string(), Value::from(levels));
    }
    Ok(out)
}
