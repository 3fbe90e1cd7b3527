#[derive(Debug)]
pub struct ServiceInfo {
  pub endpoint: &'static str,
  pub service: &'static str,
}

#[derive(Debug)]
pub enum Service {
  AVTransport(ServiceInfo),
  RenderingControl(ServiceInfo),
  ContentDirectory(ServiceInfo),
}

impl Service {
  pub fn av_transport() -> Self {
    Service::AVTransport(ServiceInfo {
      endpoint: "MediaRenderer/AVTransport/Control",
      service: "urn:schemas-upnp-org:service:AVTransport:1",
    })
  }

  pub fn rendering_control() -> Self {
    Service::RenderingControl(ServiceInfo {
      endpoint: "MediaRenderer/RenderingControl/Control",
      service: "urn:schemas-upnp-org:service:RenderingControl:1",
    })
  }

  pub fn content_directory() -> Self {
    Service::ContentDirectory(ServiceInfo {
      endpoint: "MediaServer/ContentDirectory/Control",
      service: "urn:schemas-upnp-org:service:ContentDirectory:1",
    })
  }

  pub fn get_info(&self) -> &ServiceInfo {
    match self {
      Service::AVTransport(info) => info,
      Service::RenderingControl(info) => info,
      Service::ContentDirectory(info) => info,
    }
  }
}

/// SOAP actions the controller issues against a speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Play,
  Pause,
  Stop,
  Next,
  Previous,
  Seek,
  GetVolume,
  SetVolume,
  GetPositionInfo,
  GetTransportInfo,
  SetAVTransportURI,
  Browse,
}

impl Action {
  pub fn endpoint(&self) -> &str {
    self.context().get_info().endpoint
  }

  pub fn service(&self) -> &str {
    self.context().get_info().service
  }

  pub fn name(&self) -> &str {
    match self {
      Action::Play => "Play",
      Action::Pause => "Pause",
      Action::Stop => "Stop",
      Action::Next => "Next",
      Action::Previous => "Previous",
      Action::Seek => "Seek",
      Action::GetVolume => "GetVolume",
      Action::SetVolume => "SetVolume",
      Action::GetPositionInfo => "GetPositionInfo",
      Action::GetTransportInfo => "GetTransportInfo",
      Action::SetAVTransportURI => "SetAVTransportURI",
      Action::Browse => "Browse",
    }
  }

  fn context(&self) -> Service {
    match self {
      Action::GetVolume | Action::SetVolume => Service::rendering_control(),
      Action::Browse => Service::content_directory(),
      _ => Service::av_transport(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_volume_actions_use_rendering_control() {
    assert_eq!(Action::GetVolume.endpoint(), "MediaRenderer/RenderingControl/Control");
    assert_eq!(Action::SetVolume.service(), "urn:schemas-upnp-org:service:RenderingControl:1");
  }

  #[test]
  fn test_browse_uses_content_directory() {
    assert_eq!(Action::Browse.endpoint(), "MediaServer/ContentDirectory/Control");
  }

  #[test]
  fn test_transport_actions_use_av_transport() {
    for action in [Action::Play, Action::Pause, Action::Stop, Action::Next, Action::Previous, Action::Seek] {
      assert_eq!(action.service(), "urn:schemas-upnp-org:service:AVTransport:1");
    }
  }
}
