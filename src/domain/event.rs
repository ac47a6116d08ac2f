use chrono::NaiveDateTime;

use crate::ingest::translate::{EndReason, Shuffle};

/// One normalized listening session record from the play-activity export.
///
/// An event carries no artist: the export does not have a reliable per-event
/// artist column, so the artist is inferred later against the reference
/// tables. Events are immutable once normalized.
#[derive(Debug, Clone)]
pub struct PlayEvent {
    pub album: String,
    pub song: String,
    pub started_at: NaiveDateTime,
    pub milliseconds_played: i64,
    pub end_reason: EndReason,
    pub shuffle: Shuffle,
    /// "OS name | device type | OS version"
    pub platform: String,
    /// Country display name, already translated from the ISO code
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
