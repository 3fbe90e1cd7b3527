/// Snapshot of one track as reported by a speaker.
///
/// `playlist_position` is the 1-based index of the track within the queue;
/// `duration` keeps the speaker's formatted `H:MM:SS` string as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub duration: String,
    pub playlist_position: usize,
}
