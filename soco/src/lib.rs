pub mod client;
pub mod didl;
pub mod discovery;
pub mod error;
pub mod model;
pub mod speaker;

// Re-export key types for easier access
pub use discovery::{Discovery, SsdpDiscovery};
pub use error::{Result, SocoError};
pub use model::{Action, Track, TransportInfo};
pub use speaker::{Speaker, SpeakerControl};

#[cfg(feature = "mock")]
pub use discovery::MockDiscovery;
#[cfg(feature = "mock")]
pub use speaker::{sample_track, MockSpeaker, MockSpeakerBuilder};
