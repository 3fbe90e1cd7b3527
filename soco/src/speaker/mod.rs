mod control;
mod device;
#[cfg(any(test, feature = "mock"))]
mod mock;
#[allow(clippy::module_inception)]
mod speaker;

pub use control::SpeakerControl;
pub use device::DeviceDescription;
#[cfg(any(test, feature = "mock"))]
pub use mock::{sample_track, MockSpeaker, MockSpeakerBuilder};
pub use speaker::Speaker;
