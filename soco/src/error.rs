use thiserror::Error;

#[derive(Debug, Error)]
pub enum SocoError {
  #[error("speaker unreachable")]
  DeviceUnreachable,
  #[error("bad response from speaker: error {0}")]
  BadResponse(u16),
  #[error("failed to parse speaker response: {0}")]
  ParseError(String),
  #[error("discovery failed: {0}")]
  DiscoveryFailed(String),
}

pub type Result<T> = std::result::Result<T, SocoError>;
