use mockall::mock;

use crate::error::SocoError;
use crate::model::{Track, TransportInfo};
use crate::speaker::control::SpeakerControl;

mock! {
    #[derive(Debug)]
    pub Speaker {}

    impl SpeakerControl for Speaker {
        fn get_volume(&self) -> Result<u8, SocoError>;
        fn set_volume(&self, volume: u8) -> Result<u8, SocoError>;
        fn get_current_track_info(&self) -> Result<Track, SocoError>;
        fn get_queue(&self) -> Result<Vec<Track>, SocoError>;
        fn play_from_queue(&self, index: usize) -> Result<(), SocoError>;
        fn play(&self) -> Result<(), SocoError>;
        fn pause(&self) -> Result<(), SocoError>;
        fn stop(&self) -> Result<(), SocoError>;
        fn next(&self) -> Result<(), SocoError>;
        fn previous(&self) -> Result<(), SocoError>;
        fn get_speaker_info(&self) -> Result<Vec<(String, String)>, SocoError>;
        fn get_transport_info(&self) -> Result<TransportInfo, SocoError>;
        fn party_mode(&self) -> Result<(), SocoError>;
    }
}

/// Builds a `MockSpeaker` with a full set of permissive defaults so tests
/// only override what they assert on.
pub struct MockSpeakerBuilder {
    volume: u8,
    track: Track,
    queue: Vec<Track>,
    transport_state: String,
}

impl MockSpeakerBuilder {
    pub fn new() -> Self {
        Self {
            volume: 50,
            track: sample_track(1),
            queue: (1..=3).map(sample_track).collect(),
            transport_state: "PLAYING".to_string(),
        }
    }

    pub fn volume(mut self, volume: u8) -> Self {
        self.volume = volume;
        self
    }

    pub fn track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }

    pub fn queue(mut self, queue: Vec<Track>) -> Self {
        self.queue = queue;
        self
    }

    pub fn transport_state(mut self, state: impl Into<String>) -> Self {
        self.transport_state = state.into();
        self
    }

    pub fn build(self) -> MockSpeaker {
        let mut speaker = MockSpeaker::new();

        let volume = self.volume;
        speaker.expect_get_volume().returning(move || Ok(volume));
        speaker.expect_set_volume().returning(|volume| Ok(volume));

        let track = self.track.clone();
        speaker
            .expect_get_current_track_info()
            .returning(move || Ok(track.clone()));

        let queue = self.queue.clone();
        speaker.expect_get_queue().returning(move || Ok(queue.clone()));

        speaker.expect_play_from_queue().returning(|_| Ok(()));
        speaker.expect_play().returning(|| Ok(()));
        speaker.expect_pause().returning(|| Ok(()));
        speaker.expect_stop().returning(|| Ok(()));
        speaker.expect_next().returning(|| Ok(()));
        speaker.expect_previous().returning(|| Ok(()));
        speaker.expect_party_mode().returning(|| Ok(()));

        speaker.expect_get_speaker_info().returning(|| {
            Ok(vec![
                ("name".to_string(), "Living Room Speaker".to_string()),
                ("room".to_string(), "Living Room".to_string()),
                ("model".to_string(), "Sonos One".to_string()),
            ])
        });

        let state = self.transport_state.clone();
        speaker.expect_get_transport_info().returning(move || {
            Ok(TransportInfo {
                current_transport_state: state.clone(),
                current_transport_status: "OK".to_string(),
                current_speed: "1".to_string(),
            })
        });

        speaker
    }
}

impl Default for MockSpeakerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A plausible queue entry for the given 1-based position.
pub fn sample_track(position: usize) -> Track {
    Track {
        artist: format!("Artist {}", position),
        title: format!("Track {}", position),
        album: format!("Album {}", position),
        duration: "0:03:21".to_string(),
        playlist_position: position,
    }
}
