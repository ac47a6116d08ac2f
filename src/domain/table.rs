//! The canonical analysis table consumed by the visualization layer.

use std::io::Write;

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Separator used for the composite "Song and Artist name" and platform labels
pub const LABEL_SEPARATOR: &str = " | ";

/// Column names of the canonical table. The downstream chart code selects
/// columns by these exact names.
pub const COLUMNS: &[&str] = &[
    "Datetime",
    "Day name",
    "Day number",
    "Month number",
    "Year",
    "Hour",
    "Artist",
    "Album name",
    "Song name",
    "Song and Artist name",
    "Platform",
    "Milliseconds played",
    "End reason",
    "Shuffle",
    "Country",
    "Latitude",
    "Longitude",
];

/// One analysis-ready listening event.
///
/// `artist` is `None` when the artist could not be resolved. That is the
/// unresolved marker: a real value distinct from every artist name, so it can
/// never collide with one in grouping operations.
#[derive(Debug, Clone)]
pub struct AnalysisRow {
    pub datetime: NaiveDateTime,
    pub day_name: String,
    pub day_number: u32,
    pub month_number: u32,
    pub year: i32,
    pub hour: u32,
    pub artist: Option<String>,
    pub album_name: String,
    pub song_name: String,
    pub song_and_artist: String,
    pub platform: String,
    pub milliseconds_played: i64,
    pub end_reason: &'static str,
    pub shuffle: &'static str,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AnalysisRow {
    /// Builds a row, deriving the time-bucket fields and the composite
    /// "Song and Artist name" label from the other values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        datetime: NaiveDateTime,
        artist: Option<String>,
        album_name: String,
        song_name: String,
        platform: String,
        milliseconds_played: i64,
        end_reason: &'static str,
        shuffle: &'static str,
        country: String,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        let song_and_artist = match &artist {
            Some(artist) => format!("{song_name}{LABEL_SEPARATOR}{artist}"),
            // unresolved events group by song name alone
            None => song_name.clone(),
        };

        Self {
            day_name: datetime.format("%A").to_string(),
            day_number: datetime.day(),
            month_number: datetime.month(),
            year: datetime.year(),
            hour: datetime.hour(),
            datetime,
            artist,
            album_name,
            song_name,
            song_and_artist,
            platform,
            milliseconds_played,
            end_reason,
            shuffle,
            country,
            latitude,
            longitude,
        }
    }
}

/// The in-memory canonical event table for one run.
#[derive(Debug, Default)]
pub struct AnalysisTable {
    pub rows: Vec<AnalysisRow>,
}

impl AnalysisTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Moves all rows of `other` to the end of this table
    pub fn append(&mut self, mut other: AnalysisTable) {
        self.rows.append(&mut other.rows);
    }

    /// Writes the table as CSV with the fixed column set.
    ///
    /// Unresolved artists and absent coordinates serialize as empty fields.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(COLUMNS)?;

        for row in &self.rows {
            out.write_record([
                row.datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
                row.day_name.clone(),
                row.day_number.to_string(),
                row.month_number.to_string(),
                row.year.to_string(),
                row.hour.to_string(),
                row.artist.clone().unwrap_or_default(),
                row.album_name.clone(),
                row.song_name.clone(),
                row.song_and_artist.clone(),
                row.platform.clone(),
                row.milliseconds_played.to_string(),
                row.end_reason.to_string(),
                row.shuffle.to_string(),
                row.country.clone(),
                row.latitude.map(|v| v.to_string()).unwrap_or_default(),
                row.longitude.map(|v| v.to_string()).unwrap_or_default(),
            ])?;
        }

        out.flush()?;
        Ok(())
    }
}
