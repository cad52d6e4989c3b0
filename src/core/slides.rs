use super::constants::SWIPE_THRESHOLD_PX;
use super::shayari::{Shayari, BACKGROUNDS, SHAYARI_COLLECTION};

/// Number of ending slides after the shayari: heart game, then model viewer.
pub const ENDING_SLIDES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slide {
    Shayari {
        lines: &'static Shayari,
        background: &'static str,
    },
    HeartGame,
    ModelViewer,
}

impl Slide {
    /// The freehand canvas lives on the model viewer slide and can only be
    /// measured while that slide is shown.
    pub fn hosts_drawing_surface(&self) -> bool {
        matches!(self, Slide::ModelViewer)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    First,
    Last,
}

#[inline]
pub fn nav_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowRight" | "PageDown" | " " => Some(NavCommand::Next),
        "ArrowLeft" | "PageUp" => Some(NavCommand::Prev),
        "Home" => Some(NavCommand::First),
        "End" => Some(NavCommand::Last),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct SlideDeck {
    current: usize,
    shayari: &'static [Shayari],
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::new(SHAYARI_COLLECTION)
    }
}

impl SlideDeck {
    pub fn new(shayari: &'static [Shayari]) -> Self {
        Self { current: 0, shayari }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.shayari.len() + ENDING_SLIDES
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total()
    }

    /// Move to `index` if it is in range and not already shown.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.total() || index == self.current {
            return false;
        }
        log::debug!("[slides] {} -> {}", self.current, index);
        self.current = index;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    pub fn prev(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(i) => self.go_to(i),
            None => false,
        }
    }

    pub fn apply(&mut self, cmd: NavCommand) -> bool {
        match cmd {
            NavCommand::Next => self.next(),
            NavCommand::Prev => self.prev(),
            NavCommand::First => self.go_to(0),
            NavCommand::Last => self.go_to(self.total() - 1),
        }
    }

    /// One-based position counter shown under the indicator dots, e.g. "3 / 9".
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.total())
    }

    pub fn content(&self) -> Slide {
        match self.shayari.get(self.current) {
            Some(lines) => Slide::Shayari {
                lines,
                background: BACKGROUNDS[self.current % BACKGROUNDS.len()],
            },
            None if self.current == self.shayari.len() => Slide::HeartGame,
            None => Slide::ModelViewer,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left: advance.
    Left,
    /// Finger moved left-to-right: go back.
    Right,
}

/// Horizontal swipe detector fed with touch-start / touch-end x coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn end(&mut self, x: f32) -> Option<Swipe> {
        let diff = self.start_x.take()? - x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            None
        } else if diff > 0.0 {
            Some(Swipe::Left)
        } else {
            Some(Swipe::Right)
        }
    }
}
