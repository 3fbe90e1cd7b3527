use ureq::{ Agent, Response };
use xmltree::Element;
use std::borrow::Cow;

use crate::SocoError;
use crate::model::Action;

/// SOAP client for the UPnP control endpoints a speaker exposes on port 1400.
#[derive(Debug)]
pub struct Client {
  agent: Agent,
}

impl Client {
  pub fn new(agent: Agent) -> Self {
    Self { agent }
  }

  pub fn send_action(&self, ip: &str, action: Action, payload: &str) -> Result<Element, SocoError> {
    let body = format!(r#"
      <s:Envelope
        xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"
        s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding"
      >
        <s:Body>
          <u:{action} xmlns:u="{service}">
            {payload}
          </u:{action}>
        </s:Body>
      </s:Envelope>
    "#,
      action = action.name(),
      payload = payload,
      service = action.service()
    );

    let soap_action = format!("\"{}#{}\"", action.service(), action.name());
    let url = format!("http://{}:1400/{}", ip, action.endpoint());

    log::debug!("sending {} to {}", action.name(), url);

    let response = self.agent.post(&url)
      .set("Content-Type", "text/xml; charset=\"utf-8\"")
      .set("SOAPACTION", &soap_action)
      .send_string(&body);

    match response {
      Ok(response) => self.parse_xml_response(response, action),
      Err(_) => Err(SocoError::DeviceUnreachable),
    }
  }

  fn parse_xml_response(&self, response: Response, action: Action) -> Result<Element, SocoError> {
    let xml_string = response
      .into_string()
      .map_err(|_| SocoError::ParseError("failed to read response body".to_string()))?;

    let xml = Element::parse(xml_string.as_bytes())
      .map_err(|e| SocoError::ParseError(format!("failed to parse XML: {}", e)))?;

    let body = self.get_child_element(&xml, "Body")?;

    if let Some(fault) = body.get_child("Fault") {
      let error_code = fault
        .get_child("detail")
        .and_then(|c| c.get_child("UPnPError"))
        .and_then(|c| c.get_child("errorCode"))
        .and_then(|c| c.get_text())
        .ok_or_else(|| SocoError::ParseError("failed to parse fault".to_string()))?
        .parse::<u16>()
        .map_err(|_| SocoError::ParseError("invalid error code format".to_string()))?;

      Err(SocoError::BadResponse(error_code))
    } else {
      Ok(self.get_child_element(body, &format!("{}Response", action.name()))?.clone())
    }
  }

  pub fn get_child_element<'a>(&self, el: &'a Element, name: &str) -> Result<&'a Element, SocoError> {
    el
      .get_child(name)
      .ok_or_else(|| SocoError::ParseError(format!("missing {} element", name)))
  }

  pub fn get_child_element_text<'a>(&self, el: &'a Element, name: &str) -> Result<Cow<'a, str>, SocoError> {
    self.get_child_element(el, name)?
      .get_text()
      .ok_or_else(|| SocoError::ParseError(format!("no text on {} element", name)))
  }
}

impl Default for Client {
  fn default() -> Self {
    Self {
      agent: Agent::new(),
    }
  }
}

impl Clone for Client {
  fn clone(&self) -> Self {
    Self {
      agent: Agent::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_child_element_text() {
    let xml = "<Envelope><CurrentVolume>45</CurrentVolume></Envelope>";
    let element = Element::parse(xml.as_bytes()).unwrap();
    let client = Client::default();

    let text = client.get_child_element_text(&element, "CurrentVolume").unwrap();
    assert_eq!(text, "45");
  }

  #[test]
  fn test_get_child_element_missing() {
    let xml = "<Envelope></Envelope>";
    let element = Element::parse(xml.as_bytes()).unwrap();
    let client = Client::default();

    let result = client.get_child_element(&element, "CurrentVolume");
    assert!(matches!(result, Err(SocoError::ParseError(_))));
  }
}
