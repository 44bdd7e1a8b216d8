use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;

/// Timestamp layout embedded in artifact names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H_%M_%S";

// substring match, not full-path anchoring
static BACKUP_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"config-.*\.xml").expect("backup name pattern"));

/// Remote artifact name for one backup run.
pub fn artifact_name(hostname: &str, domain: &str, at: DateTime<Local>) -> String {
    format!(
        "config-{}.{}-{}.xml",
        hostname,
        domain,
        at.format(TIMESTAMP_FORMAT)
    )
}

/// Keeps the names that look like uploaded configuration backups,
/// e.g. dropping the "." and ".." entries of a raw listing.
pub fn filter_backups<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .filter(|name| BACKUP_NAME.is_match(name))
        .collect()
}
