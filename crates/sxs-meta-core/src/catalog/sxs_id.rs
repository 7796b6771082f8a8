//! Simulation identifiers (`SXS:BBH:0001`) as they appear at the end of record titles.

/// Category tag kept by the exporter.
pub const BBH_TAG: &str = "BBH";

/// Last space-separated token of a record title.
///
/// Splits on single spaces only, so a trailing space yields an empty token.
pub fn sxs_id_from_title(title: &str) -> &str {
    title.split(' ').next_back().unwrap_or(title)
}

/// True for `<a>:BBH:<n>` with exactly three colon-separated parts.
pub fn is_bbh_id(id: &str) -> bool {
    let parts: Vec<&str> = id.split(':').collect();
    parts.len() == 3 && parts[1] == BBH_TAG
}
