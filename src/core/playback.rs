// Background music autoplay bookkeeping. Browsers may reject `play()` until the
// user interacts with the page; the rejection is remembered and retried on the
// next gesture while music stays enabled.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackGate {
    needs_gesture: bool,
}

impl PlaybackGate {
    pub fn needs_gesture(&self) -> bool {
        self.needs_gesture
    }

    pub fn on_play_result(&mut self, started: bool) {
        if started {
            self.needs_gesture = false;
        } else {
            if !self.needs_gesture {
                log::info!("[music] autoplay blocked, retrying on next gesture");
            }
            self.needs_gesture = true;
        }
    }

    /// Whether a user gesture should trigger another `play()` attempt.
    pub fn should_retry(&self, music_enabled: bool) -> bool {
        self.needs_gesture && music_enabled
    }

    pub fn on_disabled(&mut self) {
        self.needs_gesture = false;
    }
}
