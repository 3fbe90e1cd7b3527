//! Queue-index navigation for the `play <index>` command.

use soco::SpeakerControl;

use crate::error::CommandError;

/// What `play <index>` should do once the index has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// The requested index is already playing; issue nothing.
    Stay,
    /// Jump the transport to this 0-based queue index.
    Jump(usize),
}

/// Validate a 1-based queue index against the queue and decide whether a
/// jump is needed.
///
/// Requesting the current track's own index is a no-op, never a restart.
pub fn decide(
    queue_length: usize,
    current_position: usize,
    requested: &str,
) -> Result<NavAction, CommandError> {
    let requested: usize = requested
        .parse()
        .map_err(|_| CommandError::InvalidIndex { max: queue_length })?;

    if requested < 1 || requested > queue_length {
        return Err(CommandError::InvalidIndex { max: queue_length });
    }

    if requested == current_position {
        Ok(NavAction::Stay)
    } else {
        Ok(NavAction::Jump(requested - 1))
    }
}

/// Read the queue and current position, then issue at most one jump.
///
/// Validation completes before anything is mutated, so a bad index never
/// moves the transport.
pub fn play_index(speaker: &dyn SpeakerControl, requested: &str) -> Result<(), CommandError> {
    let queue = speaker.get_queue()?;
    let current = speaker.get_current_track_info()?;

    match decide(queue.len(), current.playlist_position, requested)? {
        NavAction::Stay => Ok(()),
        NavAction::Jump(index) => Ok(speaker.play_from_queue(index)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_index_is_a_no_op_for_every_position() {
        let queue_length = 8;
        for position in 1..=queue_length {
            let action = decide(queue_length, position, &position.to_string()).unwrap();
            assert_eq!(action, NavAction::Stay);
        }
    }

    #[test]
    fn test_other_index_jumps_zero_based() {
        assert_eq!(decide(5, 3, "1").unwrap(), NavAction::Jump(0));
        assert_eq!(decide(5, 3, "5").unwrap(), NavAction::Jump(4));
    }

    #[test]
    fn test_zero_and_past_end_rejected() {
        assert!(matches!(decide(5, 3, "0"), Err(CommandError::InvalidIndex { max: 5 })));
        assert!(matches!(decide(5, 3, "6"), Err(CommandError::InvalidIndex { max: 5 })));
    }

    #[test]
    fn test_non_integer_rejected() {
        assert!(matches!(decide(5, 3, "abc"), Err(CommandError::InvalidIndex { max: 5 })));
        assert!(matches!(decide(5, 3, "-1"), Err(CommandError::InvalidIndex { max: 5 })));
        assert!(matches!(decide(5, 3, "2.5"), Err(CommandError::InvalidIndex { max: 5 })));
    }

    #[test]
    fn test_empty_queue_rejects_everything() {
        assert!(matches!(decide(0, 0, "1"), Err(CommandError::InvalidIndex { max: 0 })));
    }
}
