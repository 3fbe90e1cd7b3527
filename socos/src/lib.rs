pub mod command;
pub mod dispatch;
pub mod error;
pub mod queue;
pub mod render;
pub mod volume;

pub use command::{DiscoveryCommand, SpeakerCommand, SpeakerTarget};
pub use error::CommandError;
