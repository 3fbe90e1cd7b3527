//! Display formatting for tracks and queues.

use crossterm::style::Stylize;
use soco::Track;

/// One human-readable sentence describing the current track.
pub fn format_track(track: &Track) -> String {
    format!(
        "Current track: {} - {}. From album {}. This is track number {} in the playlist. It is {} minutes long.",
        track.artist, track.title, track.album, track.playlist_position, track.duration
    )
}

/// Render the queue as one line per track, in playback order.
///
/// Index labels are right-justified to the width of the longest label so
/// lines align across digit counts. The entry whose 1-based position equals
/// `current_position` is emphasized in bold when `emphasis_enabled`; with
/// emphasis unavailable the lines are plain text with no escape sequences.
pub fn render_queue(queue: &[Track], current_position: usize, emphasis_enabled: bool) -> Vec<String> {
    let padding = queue.len().to_string().len();

    queue
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let position = i + 1;
            let line = format!(
                "{:>width$}: {} - {}. From album {}.",
                position,
                track.artist,
                track.title,
                track.album,
                width = padding
            );

            if emphasis_enabled && position == current_position {
                line.bold().to_string()
            } else {
                line
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soco::sample_track;

    #[test]
    fn test_track_sentence() {
        let track = Track {
            artist: "Radiohead".to_string(),
            title: "Everything In Its Right Place".to_string(),
            album: "Kid A".to_string(),
            duration: "0:04:11".to_string(),
            playlist_position: 3,
        };

        assert_eq!(
            format_track(&track),
            "Current track: Radiohead - Everything In Its Right Place. From album Kid A. \
             This is track number 3 in the playlist. It is 0:04:11 minutes long."
        );
    }

    fn sample_queue(length: usize) -> Vec<Track> {
        (1..=length).map(sample_track).collect()
    }

    #[test]
    fn test_labels_align_for_ten_tracks() {
        let lines = render_queue(&sample_queue(10), 1, false);
        assert!(lines[0].starts_with(" 1: "));
        assert!(lines[9].starts_with("10: "));
    }

    #[test]
    fn test_labels_align_for_a_hundred_tracks() {
        let lines = render_queue(&sample_queue(100), 1, false);
        assert!(lines[0].starts_with("  1: "));
        assert!(lines[9].starts_with(" 10: "));
        assert!(lines[99].starts_with("100: "));
    }

    #[test]
    fn test_line_content() {
        let lines = render_queue(&sample_queue(2), 1, false);
        assert_eq!(lines[1], "2: Artist 2 - Track 2. From album Album 2.");
    }

    #[test]
    fn test_emphasis_marks_only_the_current_track() {
        let lines = render_queue(&sample_queue(3), 2, true);
        assert!(!lines[0].contains('\u{1b}'));
        assert!(lines[1].contains("\u{1b}[1m"));
        assert!(!lines[2].contains('\u{1b}'));
    }

    #[test]
    fn test_no_escape_sequences_when_emphasis_unavailable() {
        let lines = render_queue(&sample_queue(3), 2, false);
        assert!(lines.iter().all(|line| !line.contains('\u{1b}')));
    }

    #[test]
    fn test_empty_queue_renders_nothing() {
        assert!(render_queue(&[], 0, true).is_empty());
    }
}
