use std::net::UdpSocket;
use std::str;
use std::time::Duration;

use url::Url;

use crate::error::{Result, SocoError};

const MULTICAST_ADDRESS: &str = "239.255.255.250:1900";
const SONOS_SEARCH_TARGET: &str = "urn:schemas-upnp-org:device:ZonePlayer:1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Capability for finding speakers on the local network.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Discovery {
    /// Network addresses of every speaker that answered, in response order.
    fn speaker_addresses(&self) -> Result<Vec<String>>;
}

/// SSDP-backed discovery over a multicast M-SEARCH.
pub struct SsdpDiscovery {
    timeout: Duration,
}

impl SsdpDiscovery {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SsdpDiscovery {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Discovery for SsdpDiscovery {
    fn speaker_addresses(&self) -> Result<Vec<String>> {
        let mut socket = UdpSocket::bind("0.0.0.0:0")
            .map_err(|e| SocoError::DiscoveryFailed(format!("failed to bind socket: {}", e)))?;

        let responses = send_search(&mut socket, MULTICAST_ADDRESS, SONOS_SEARCH_TARGET, self.timeout)
            .map_err(|e| SocoError::DiscoveryFailed(format!("SSDP search failed: {}", e)))?;

        Ok(addresses_from_responses(&responses))
    }
}

pub trait SsdpSocket {
    fn send_to(&mut self, buf: &[u8], addr: &str) -> std::io::Result<usize>;
    fn recv_from(&mut self, buf: &mut [u8]) -> std::io::Result<(usize, String)>;
    fn set_multicast_loop_v4(&mut self, multicast_loop: bool) -> std::io::Result<()>;
    fn set_read_timeout(&mut self, dur: Option<Duration>) -> std::io::Result<()>;
}

impl SsdpSocket for UdpSocket {
    fn send_to(&mut self, buf: &[u8], addr: &str) -> std::io::Result<usize> {
        UdpSocket::send_to(self, buf, addr)
    }

    fn recv_from(&mut self, buf: &mut [u8]) -> std::io::Result<(usize, String)> {
        let (size, src) = UdpSocket::recv_from(self, buf)?;
        Ok((size, src.to_string()))
    }

    fn set_multicast_loop_v4(&mut self, loop_v4: bool) -> std::io::Result<()> {
        UdpSocket::set_multicast_loop_v4(self, loop_v4)
    }

    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> std::io::Result<()> {
        UdpSocket::set_read_timeout(self, timeout)
    }
}

/// Sends an SSDP M-SEARCH request and collects the raw responses until the
/// read timeout elapses.
fn send_search<S: SsdpSocket>(
    socket: &mut S,
    host: &str,
    target: &str,
    timeout: Duration,
) -> std::io::Result<Vec<String>> {
    socket.set_multicast_loop_v4(true)?;
    socket.set_read_timeout(Some(timeout))?;

    let m_search = format!(
        "M-SEARCH * HTTP/1.1\r\n\
        HOST: {}\r\n\
        MAN: \"ssdp:discover\"\r\n\
        MX: 2\r\n\
        ST: {}\r\n\
        \r\n",
        host, target
    );

    socket.send_to(m_search.as_bytes(), host)?;

    let mut responses = Vec::new();
    let mut buf = [0; 1024];

    loop {
        match socket.recv_from(&mut buf) {
            Ok((amt, _)) => {
                if let Ok(response) = str::from_utf8(&buf[..amt]) {
                    responses.push(response.to_string());
                }
            }
            Err(e) => {
                // Timed out means no more responses are coming.
                if e.kind() == std::io::ErrorKind::WouldBlock || e.kind() == std::io::ErrorKind::TimedOut {
                    break;
                }
                log::warn!("error receiving SSDP response: {}", e);
                break;
            }
        }
    }

    Ok(responses)
}

/// Extracts speaker IPs from SSDP responses, de-duplicated but otherwise in
/// the order the responses arrived.
fn addresses_from_responses(responses: &[String]) -> Vec<String> {
    let mut addresses = Vec::new();

    for response in responses {
        let location = match location_header(response) {
            Some(location) => location,
            None => continue,
        };

        let ip = match host_from_url(&location) {
            Some(ip) => ip,
            None => continue,
        };

        if !addresses.contains(&ip) {
            addresses.push(ip);
        }
    }

    addresses
}

fn location_header(response: &str) -> Option<String> {
    let line = response
        .lines()
        .find(|line| line.to_ascii_lowercase().starts_with("location:"))?;
    Some(line["location:".len()..].trim().to_string())
}

fn host_from_url(url: &str) -> Option<String> {
    let parsed_url = Url::parse(url).ok()?;
    parsed_url.host_str().map(|host| host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSocket {
        responses: Vec<String>,
        index: usize,
        send_error: bool,
    }

    impl SsdpSocket for StubSocket {
        fn send_to(&mut self, _buf: &[u8], _addr: &str) -> std::io::Result<usize> {
            if self.send_error {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "send failed"));
            }
            Ok(0)
        }

        fn recv_from(&mut self, buf: &mut [u8]) -> std::io::Result<(usize, String)> {
            if self.index >= self.responses.len() {
                return Err(std::io::Error::from(std::io::ErrorKind::WouldBlock));
            }
            let response = self.responses[self.index].clone();
            buf[..response.len()].copy_from_slice(response.as_bytes());
            self.index += 1;
            Ok((response.len(), "stub".to_string()))
        }

        fn set_multicast_loop_v4(&mut self, _multicast_loop: bool) -> std::io::Result<()> {
            Ok(())
        }

        fn set_read_timeout(&mut self, _dur: Option<Duration>) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn ssdp_response(ip: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nST: {}\r\nLOCATION: http://{}:1400/xml/device_description.xml\r\n\r\n",
            SONOS_SEARCH_TARGET, ip
        )
    }

    #[test]
    fn test_send_search_collects_responses() {
        let mut socket = StubSocket {
            responses: vec![ssdp_response("192.168.1.10"), ssdp_response("192.168.1.11")],
            index: 0,
            send_error: false,
        };

        let responses = send_search(&mut socket, MULTICAST_ADDRESS, SONOS_SEARCH_TARGET, DEFAULT_TIMEOUT).unwrap();
        assert_eq!(responses.len(), 2);
    }

    #[test]
    fn test_send_search_send_error() {
        let mut socket = StubSocket {
            responses: vec![],
            index: 0,
            send_error: true,
        };

        let result = send_search(&mut socket, MULTICAST_ADDRESS, SONOS_SEARCH_TARGET, DEFAULT_TIMEOUT);
        assert!(result.is_err());
    }

    #[test]
    fn test_addresses_preserve_response_order() {
        let responses = vec![
            ssdp_response("192.168.1.12"),
            ssdp_response("192.168.1.10"),
            ssdp_response("192.168.1.11"),
        ];

        let addresses = addresses_from_responses(&responses);
        assert_eq!(addresses, vec!["192.168.1.12", "192.168.1.10", "192.168.1.11"]);
    }

    #[test]
    fn test_addresses_deduplicated() {
        let responses = vec![ssdp_response("192.168.1.10"), ssdp_response("192.168.1.10")];
        let addresses = addresses_from_responses(&responses);
        assert_eq!(addresses, vec!["192.168.1.10"]);
    }

    #[test]
    fn test_response_without_location_skipped() {
        let responses = vec!["HTTP/1.1 200 OK\r\nST: upnp:rootdevice\r\n\r\n".to_string()];
        assert!(addresses_from_responses(&responses).is_empty());
    }
}
