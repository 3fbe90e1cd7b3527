use ureq::{Agent, Error};
use xmltree::Element;

use crate::client::Client;
use crate::didl;
use crate::discovery::{Discovery, SsdpDiscovery};
use crate::error::{Result, SocoError};
use crate::model::{Action, Track, TransportInfo};
use crate::speaker::control::SpeakerControl;
use crate::speaker::device::DeviceDescription;

/// A stateless controller for one speaker, addressed by IP.
///
/// Holds no cached state: every accessor is a fresh round-trip so a
/// one-shot CLI invocation always sees the speaker's current view.
#[derive(Debug, Clone)]
pub struct Speaker {
    ip: String,
    client: Client,
}

impl Speaker {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            client: Client::default(),
        }
    }

    pub fn with_client(ip: impl Into<String>, client: Client) -> Self {
        Self {
            ip: ip.into(),
            client,
        }
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    fn device_description(&self) -> Result<DeviceDescription> {
        let location = format!("http://{}:1400/xml/device_description.xml", self.ip);
        let xml = match Agent::new().get(&location).call() {
            Ok(response) => response
                .into_string()
                .map_err(|_| SocoError::ParseError("failed to read response body".into()))?,
            Err(Error::Status(code, _)) => return Err(SocoError::BadResponse(code)),
            Err(_) => return Err(SocoError::DeviceUnreachable),
        };

        DeviceDescription::from_xml(&xml)
    }

    fn parse_element_u8(&self, element: &Element, key: &str) -> Result<u8> {
        self.client
            .get_child_element_text(element, key)?
            .parse()
            .map_err(|e| SocoError::ParseError(format!("failed to parse {}: {}", key, e)))
    }

    fn element_text_or_default(&self, element: &Element, key: &str) -> String {
        self.client
            .get_child_element_text(element, key)
            .map(|text| text.into_owned())
            .unwrap_or_default()
    }
}

impl SpeakerControl for Speaker {
    fn get_volume(&self) -> Result<u8> {
        let payload = "<InstanceID>0</InstanceID><Channel>Master</Channel>";
        let response = self.client.send_action(&self.ip, Action::GetVolume, payload)?;
        self.parse_element_u8(&response, "CurrentVolume")
    }

    fn set_volume(&self, volume: u8) -> Result<u8> {
        log::info!("setting volume on {} to {}", self.ip, volume);
        let payload = format!(
            "<InstanceID>0</InstanceID><Channel>Master</Channel><DesiredVolume>{}</DesiredVolume>",
            volume
        );
        self.client.send_action(&self.ip, Action::SetVolume, &payload)?;
        Ok(volume)
    }

    fn get_current_track_info(&self) -> Result<Track> {
        let payload = "<InstanceID>0</InstanceID>";
        let response = self.client.send_action(&self.ip, Action::GetPositionInfo, payload)?;

        let position = self
            .element_text_or_default(&response, "Track")
            .parse::<usize>()
            .unwrap_or(0);
        let duration = self.element_text_or_default(&response, "TrackDuration");
        let metadata = self.element_text_or_default(&response, "TrackMetaData");

        // Empty or NOT_IMPLEMENTED metadata happens on idle transports and
        // line-in sources; report an unnamed track rather than failing.
        let mut track = match metadata.as_str() {
            "" | "NOT_IMPLEMENTED" => Track::default(),
            didl_xml => didl::parse_track_metadata(didl_xml).unwrap_or_default(),
        };

        track.duration = duration;
        track.playlist_position = position;
        Ok(track)
    }

    fn get_queue(&self) -> Result<Vec<Track>> {
        let payload = "<ObjectID>Q:0</ObjectID>\
            <BrowseFlag>BrowseDirectChildren</BrowseFlag>\
            <Filter>dc:title,dc:creator,upnp:album,res</Filter>\
            <StartingIndex>0</StartingIndex>\
            <RequestedCount>0</RequestedCount>\
            <SortCriteria></SortCriteria>";
        let response = self.client.send_action(&self.ip, Action::Browse, payload)?;

        let result = self.client.get_child_element_text(&response, "Result")?;
        didl::parse_queue(&result)
    }

    fn play_from_queue(&self, index: usize) -> Result<()> {
        log::info!("jumping {} to queue index {}", self.ip, index);

        // Point the transport at its own queue, seek, then play.
        let uid = self.device_description()?.uid().to_string();
        let payload = format!(
            "<InstanceID>0</InstanceID><CurrentURI>x-rincon-queue:{}#0</CurrentURI><CurrentURIMetaData></CurrentURIMetaData>",
            uid
        );
        self.client.send_action(&self.ip, Action::SetAVTransportURI, &payload)?;

        let payload = format!(
            "<InstanceID>0</InstanceID><Unit>TRACK_NR</Unit><Target>{}</Target>",
            index + 1
        );
        self.client.send_action(&self.ip, Action::Seek, &payload)?;

        self.play()
    }

    fn play(&self) -> Result<()> {
        let payload = "<InstanceID>0</InstanceID><Speed>1</Speed>";
        self.client.send_action(&self.ip, Action::Play, payload)?;
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        let payload = "<InstanceID>0</InstanceID>";
        self.client.send_action(&self.ip, Action::Pause, payload)?;
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        let payload = "<InstanceID>0</InstanceID>";
        self.client.send_action(&self.ip, Action::Stop, payload)?;
        Ok(())
    }

    fn next(&self) -> Result<()> {
        let payload = "<InstanceID>0</InstanceID>";
        self.client.send_action(&self.ip, Action::Next, payload)?;
        Ok(())
    }

    fn previous(&self) -> Result<()> {
        let payload = "<InstanceID>0</InstanceID>";
        self.client.send_action(&self.ip, Action::Previous, payload)?;
        Ok(())
    }

    fn get_speaker_info(&self) -> Result<Vec<(String, String)>> {
        Ok(self.device_description()?.fields())
    }

    fn get_transport_info(&self) -> Result<TransportInfo> {
        let payload = "<InstanceID>0</InstanceID>";
        let response = self.client.send_action(&self.ip, Action::GetTransportInfo, payload)?;

        Ok(TransportInfo {
            current_transport_state: self
                .client
                .get_child_element_text(&response, "CurrentTransportState")?
                .into_owned(),
            current_transport_status: self.element_text_or_default(&response, "CurrentTransportStatus"),
            current_speed: self.element_text_or_default(&response, "CurrentSpeed"),
        })
    }

    fn party_mode(&self) -> Result<()> {
        let uid = self.device_description()?.uid().to_string();
        log::info!("party mode: making {} the coordinator", self.ip);

        let addresses = SsdpDiscovery::default().speaker_addresses()?;
        let payload = format!(
            "<InstanceID>0</InstanceID><CurrentURI>x-rincon:{}</CurrentURI><CurrentURIMetaData></CurrentURIMetaData>",
            uid
        );

        for address in addresses.iter().filter(|address| *address != &self.ip) {
            self.client.send_action(address, Action::SetAVTransportURI, &payload)?;
        }

        Ok(())
    }
}
