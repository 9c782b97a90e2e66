//! Background Music

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Intended playback state.
///
/// The flag flips on every toggle whether or not the browser honours the
/// resulting play request, so after a rejected `play()` it reads `true`
/// while the track is silent. Nothing resynchronises it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playback {
    is_playing: bool,
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Flip the flag and return the command to send to the audio element
    pub fn toggle(&mut self) -> PlaybackCommand {
        let command = if self.is_playing {
            PlaybackCommand::Pause
        } else {
            PlaybackCommand::Play
        };
        self.is_playing = !self.is_playing;
        command
    }

    pub fn label(&self) -> &'static str {
        if self.is_playing {
            "Pause Music"
        } else {
            "Play Music"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let mut playback = Playback::default();
        assert!(!playback.is_playing());
        assert_eq!(playback.toggle(), PlaybackCommand::Play);
        assert!(playback.is_playing());
        assert_eq!(playback.toggle(), PlaybackCommand::Pause);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_flag_flips_even_if_play_is_rejected() {
        let mut playback = Playback::default();
        let command = playback.toggle();
        assert_eq!(command, PlaybackCommand::Play);
        // Browser refused to start the track; flag still says playing
        assert!(playback.is_playing());
        assert_eq!(playback.label(), "Pause Music");
        // Next press pauses rather than retrying
        assert_eq!(playback.toggle(), PlaybackCommand::Pause);
    }
}
