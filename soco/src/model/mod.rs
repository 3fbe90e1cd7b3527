mod action;
mod track;
mod transport_info;

pub use action::Action;
pub use track::Track;
pub use transport_info::TransportInfo;
