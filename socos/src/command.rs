pub const VALID_DISCOVERY_COMMANDS: &str = "Valid commands (with 'all'): list_ips";
pub const VALID_SPEAKER_COMMANDS: &str = "Valid commands (with IP): info, state, play, \
    pause, stop, next, previous, current, queue, volume and partymode";

/// Which speaker(s) an invocation addresses. Fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerTarget {
    /// Every speaker on the network (discovery mode)
    All,
    /// One speaker, by network address
    Address(String),
}

impl SpeakerTarget {
    pub fn from_spec(spec: &str) -> Self {
        if spec == "all" {
            SpeakerTarget::All
        } else {
            SpeakerTarget::Address(spec.to_string())
        }
    }
}

/// A fully parsed invocation: target, command name, optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub target: SpeakerTarget,
    pub command: String,
    pub argument: Option<String>,
}

impl Invocation {
    /// Parse argv with the program name already stripped.
    ///
    /// Exactly two or three arguments are accepted; any other count is a
    /// usage error and nothing further is resolved.
    pub fn from_args(args: &[String]) -> Option<Self> {
        if args.len() < 2 || args.len() > 3 {
            return None;
        }

        Some(Self {
            target: SpeakerTarget::from_spec(&args[0]),
            command: args[1].clone(),
            argument: args.get(2).cloned(),
        })
    }
}

/// Commands valid in discovery mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryCommand {
    ListIps,
}

impl DiscoveryCommand {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "list_ips" => Some(DiscoveryCommand::ListIps),
            _ => None,
        }
    }
}

/// Commands valid against a single speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakerCommand {
    Info,
    State,
    Play,
    Pause,
    Stop,
    Next,
    Previous,
    Current,
    Queue,
    Volume,
    PartyMode,
}

impl SpeakerCommand {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "info" => Some(SpeakerCommand::Info),
            "state" => Some(SpeakerCommand::State),
            "play" => Some(SpeakerCommand::Play),
            "pause" => Some(SpeakerCommand::Pause),
            "stop" => Some(SpeakerCommand::Stop),
            "next" => Some(SpeakerCommand::Next),
            "previous" => Some(SpeakerCommand::Previous),
            "current" => Some(SpeakerCommand::Current),
            "queue" => Some(SpeakerCommand::Queue),
            "volume" => Some(SpeakerCommand::Volume),
            "partymode" => Some(SpeakerCommand::PartyMode),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_spec() {
        assert_eq!(SpeakerTarget::from_spec("all"), SpeakerTarget::All);
        assert_eq!(
            SpeakerTarget::from_spec("192.168.1.100"),
            SpeakerTarget::Address("192.168.1.100".to_string())
        );
    }

    #[test]
    fn test_all_is_case_sensitive_as_a_target() {
        // "All" is a valid (if unlikely) hostname, not discovery mode.
        assert_eq!(
            SpeakerTarget::from_spec("All"),
            SpeakerTarget::Address("All".to_string())
        );
    }

    #[test]
    fn test_commands_match_case_insensitively() {
        assert_eq!(SpeakerCommand::parse("PLAY"), Some(SpeakerCommand::Play));
        assert_eq!(SpeakerCommand::parse("PartyMode"), Some(SpeakerCommand::PartyMode));
        assert_eq!(DiscoveryCommand::parse("LIST_IPS"), Some(DiscoveryCommand::ListIps));
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_invocation_arity() {
        assert!(Invocation::from_args(&args(&[])).is_none());
        assert!(Invocation::from_args(&args(&["192.168.1.100"])).is_none());
        assert!(Invocation::from_args(&args(&["192.168.1.100", "play", "3", "4"])).is_none());
        assert!(Invocation::from_args(&args(&["192.168.1.100", "play", "3", "4", "5"])).is_none());

        let invocation = Invocation::from_args(&args(&["192.168.1.100", "play", "3"])).unwrap();
        assert_eq!(invocation.command, "play");
        assert_eq!(invocation.argument.as_deref(), Some("3"));

        let invocation = Invocation::from_args(&args(&["all", "list_ips"])).unwrap();
        assert_eq!(invocation.target, SpeakerTarget::All);
        assert_eq!(invocation.argument, None);
    }

    #[test]
    fn test_unknown_commands_rejected() {
        assert_eq!(SpeakerCommand::parse("shuffle"), None);
        assert_eq!(DiscoveryCommand::parse("play"), None);
    }
}
