//! Maps a resolved command to exactly one handler and produces its output.

use soco::{Discovery, SpeakerControl};

use crate::command::{DiscoveryCommand, SpeakerCommand};
use crate::error::CommandError;
use crate::{queue, render, volume};

/// Run a discovery-mode command (`speaker_spec` was "all").
pub fn run_discovery(name: &str, discovery: &dyn Discovery) -> Result<String, CommandError> {
    match DiscoveryCommand::parse(name) {
        Some(DiscoveryCommand::ListIps) => {
            let addresses = discovery.speaker_addresses()?;
            Ok(addresses.join("\n"))
        }
        None => Err(CommandError::UnknownDiscoveryCommand),
    }
}

/// Run a single-speaker command and return its display payload.
///
/// The command name is resolved before the speaker is contacted, so an
/// unknown command never causes network traffic.
pub fn run_speaker(
    name: &str,
    argument: Option<&str>,
    speaker: &dyn SpeakerControl,
    emphasis_enabled: bool,
) -> Result<String, CommandError> {
    let command = SpeakerCommand::parse(name).ok_or(CommandError::UnknownSpeakerCommand)?;

    match command {
        SpeakerCommand::Info => {
            let info = speaker.get_speaker_info()?;
            Ok(info
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        SpeakerCommand::State => Ok(speaker.get_transport_info()?.current_transport_state),
        SpeakerCommand::Play => {
            match argument {
                Some(index) => queue::play_index(speaker, index)?,
                None => speaker.play()?,
            }
            // Whether or not a jump happened, report what is playing now.
            Ok(render::format_track(&speaker.get_current_track_info()?))
        }
        SpeakerCommand::Pause => {
            speaker.pause()?;
            Ok("OK".to_string())
        }
        SpeakerCommand::Stop => {
            speaker.stop()?;
            Ok("OK".to_string())
        }
        SpeakerCommand::Next => {
            speaker.next()?;
            Ok("OK".to_string())
        }
        SpeakerCommand::Previous => {
            speaker.previous()?;
            Ok("OK".to_string())
        }
        SpeakerCommand::Current => Ok(render::format_track(&speaker.get_current_track_info()?)),
        SpeakerCommand::Queue => {
            let tracks = speaker.get_queue()?;
            let current = speaker.get_current_track_info()?;
            Ok(render::render_queue(&tracks, current.playlist_position, emphasis_enabled).join("\n"))
        }
        SpeakerCommand::Volume => match argument {
            Some(token) => Ok(volume::adjust(speaker, &token.to_lowercase())?.to_string()),
            None => Ok(speaker.get_volume()?.to_string()),
        },
        SpeakerCommand::PartyMode => {
            speaker.party_mode()?;
            Ok("OK".to_string())
        }
    }
}
