use crate::error::Result;
use crate::model::{Track, TransportInfo};

/// Everything the CLI needs from a speaker, behind one object-safe trait.
///
/// The network-backed implementation is [`super::Speaker`]; tests use the
/// mockall-generated [`super::MockSpeaker`] so no live speaker is required.
/// Every operation crosses the network and can fail.
pub trait SpeakerControl {
    /// Current volume level, 0-100.
    fn get_volume(&self) -> Result<u8>;

    /// Set the volume to an absolute level and return the level now in
    /// effect.
    fn set_volume(&self, volume: u8) -> Result<u8>;

    /// Metadata for the track currently loaded on the transport.
    fn get_current_track_info(&self) -> Result<Track>;

    /// The playback queue, in playback order with 1-based positions.
    fn get_queue(&self) -> Result<Vec<Track>>;

    /// Jump playback to the 0-based queue index.
    fn play_from_queue(&self, index: usize) -> Result<()>;

    fn play(&self) -> Result<()>;
    fn pause(&self) -> Result<()>;
    fn stop(&self) -> Result<()>;
    fn next(&self) -> Result<()>;
    fn previous(&self) -> Result<()>;

    /// Device-description fields, in document order.
    fn get_speaker_info(&self) -> Result<Vec<(String, String)>>;

    /// Transport state as reported by `GetTransportInfo`.
    fn get_transport_info(&self) -> Result<TransportInfo>;

    /// Make this speaker the coordinator of every other speaker on the
    /// network.
    fn party_mode(&self) -> Result<()>;
}
