/// Delimiter between artist and title in a daily-history track description
const DESCRIPTION_DELIMITER: &str = " - ";

/// One entry of the vendor library catalog.
///
/// Deduplicated on the full (artist, title, album) triple. Read-only
/// reference data for the lifetime of a parse run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryTrackEntry {
    pub artist: String,
    pub title: String,
    pub album: String,
}

/// One daily-history record, split out of a free-text "Artist - Title"
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyHistoryEntry {
    pub artist: String,
    pub title: String,
}

impl DailyHistoryEntry {
    /// Splits a track description on the first " - ".
    ///
    /// Returns None when the delimiter is absent or either side is empty;
    /// such rows are dropped before indexing.
    pub fn from_description(description: &str) -> Option<Self> {
        let (artist, title) = description.split_once(DESCRIPTION_DELIMITER)?;
        if artist.is_empty() || title.is_empty() {
            return None;
        }
        Some(Self {
            artist: artist.to_string(),
            title: title.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DailyHistoryEntry;

    #[test]
    fn description_splits_on_first_delimiter() {
        let entry = DailyHistoryEntry::from_description("Orbital - Halcyon - On and On").unwrap();
        assert_eq!(entry.artist, "Orbital");
        assert_eq!(entry.title, "Halcyon - On and On");
    }

    #[test]
    fn description_without_delimiter_is_dropped() {
        assert_eq!(DailyHistoryEntry::from_description("Untitled"), None);
        // a plain hyphen is not the delimiter
        assert_eq!(DailyHistoryEntry::from_description("AC-DC"), None);
    }

    #[test]
    fn description_with_empty_side_is_dropped() {
        assert_eq!(DailyHistoryEntry::from_description(" - Song"), None);
        assert_eq!(DailyHistoryEntry::from_description("Artist - "), None);
    }
}
