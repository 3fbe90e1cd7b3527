use serde_derive::Deserialize;

use crate::error::{Result, SocoError};

#[derive(Debug, Deserialize)]
struct DeviceRoot {
    device: DeviceDescription,
}

/// The subset of `/xml/device_description.xml` the controller reports.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DeviceDescription {
    #[serde(rename = "friendlyName")]
    pub name: String,
    #[serde(rename = "roomName", default)]
    pub room_name: String,
    #[serde(rename = "modelName", default)]
    pub model: String,
    #[serde(rename = "modelNumber", default)]
    pub model_number: String,
    #[serde(rename = "serialNum", default)]
    pub serial_number: String,
    #[serde(rename = "softwareVersion", default)]
    pub software_version: String,
    #[serde(rename = "UDN", default)]
    pub udn: String,
}

impl DeviceDescription {
    pub fn from_xml(xml: &str) -> Result<Self> {
        log::debug!("parsing device description ({} bytes)", xml.len());

        let root: DeviceRoot = serde_xml_rs::from_str(xml).map_err(|e| {
            log::debug!("device description parsing failed: {}", e);
            SocoError::ParseError(format!("failed to parse device description: {}", e))
        })?;

        Ok(root.device)
    }

    /// The RINCON identifier, without the `uuid:` prefix the UDN carries.
    pub fn uid(&self) -> &str {
        self.udn.strip_prefix("uuid:").unwrap_or(&self.udn)
    }

    /// Fields as ordered key/value pairs, the shape the `info` command
    /// prints.
    pub fn fields(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), self.name.clone()),
            ("room".to_string(), self.room_name.clone()),
            ("model".to_string(), self.model.clone()),
            ("model number".to_string(), self.model_number.clone()),
            ("serial number".to_string(), self.serial_number.clone()),
            ("software version".to_string(), self.software_version.clone()),
            ("uid".to_string(), self.uid().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
        <root xmlns="urn:schemas-upnp-org:device-1-0">
            <device>
                <friendlyName>192.168.1.100 - Sonos One</friendlyName>
                <roomName>Living Room</roomName>
                <modelName>Sonos One</modelName>
                <modelNumber>S13</modelNumber>
                <serialNum>00-0E-58-C0-12-34:5</serialNum>
                <softwareVersion>56.0-76060</softwareVersion>
                <UDN>uuid:RINCON_000E58C0123456789</UDN>
            </device>
        </root>"#;

    #[test]
    fn test_from_xml() {
        let device = DeviceDescription::from_xml(DEVICE_XML).unwrap();
        assert_eq!(device.room_name, "Living Room");
        assert_eq!(device.model, "Sonos One");
        assert_eq!(device.uid(), "RINCON_000E58C0123456789");
    }

    #[test]
    fn test_fields_keep_document_order() {
        let device = DeviceDescription::from_xml(DEVICE_XML).unwrap();
        let fields = device.fields();
        assert_eq!(fields[0].0, "name");
        assert_eq!(fields[1], ("room".to_string(), "Living Room".to_string()));
        assert_eq!(fields.last().unwrap().0, "uid");
    }

    #[test]
    fn test_from_xml_invalid() {
        let result = DeviceDescription::from_xml("<root></root>");
        assert!(matches!(result, Err(SocoError::ParseError(_))));
    }
}
