/// Result of an AVTransport `GetTransportInfo` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportInfo {
    pub current_transport_state: String,
    pub current_transport_status: String,
    pub current_speed: String,
}
