use raylib::consts::KeyboardKey;

/// Navigation request produced by keyboard or touch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    First,
    Last,
    GoTo(usize),
}

pub fn command_for_key(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_DOWN | KeyboardKey::KEY_SPACE | KeyboardKey::KEY_PAGE_DOWN => {
            Some(Command::Next)
        }
        KeyboardKey::KEY_LEFT | KeyboardKey::KEY_UP | KeyboardKey::KEY_PAGE_UP => Some(Command::Prev),
        KeyboardKey::KEY_HOME => Some(Command::First),
        KeyboardKey::KEY_END => Some(Command::Last),
        _ => None,
    }
}

/// Turns a press/release pair into a horizontal swipe.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, start_x: None }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finger moving left (positive `start - end`) advances, right goes back.
    /// Travel up to the threshold is ignored.
    pub fn touch_end(&mut self, x: f32) -> Option<Command> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 { Some(Command::Next) } else { Some(Command::Prev) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_map_to_commands() {
        for key in [KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_DOWN, KeyboardKey::KEY_SPACE, KeyboardKey::KEY_PAGE_DOWN] {
            assert_eq!(command_for_key(key), Some(Command::Next));
        }
        for key in [KeyboardKey::KEY_LEFT, KeyboardKey::KEY_UP, KeyboardKey::KEY_PAGE_UP] {
            assert_eq!(command_for_key(key), Some(Command::Prev));
        }
        assert_eq!(command_for_key(KeyboardKey::KEY_HOME), Some(Command::First));
        assert_eq!(command_for_key(KeyboardKey::KEY_END), Some(Command::Last));
        assert_eq!(command_for_key(KeyboardKey::KEY_A), None);
    }

    #[test]
    fn short_swipes_are_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(250.0), None);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(350.0), None);
    }

    #[test]
    fn swipe_direction_follows_finger() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(400.0);
        assert_eq!(swipe.touch_end(200.0), Some(Command::Next));
        swipe.touch_start(200.0);
        assert_eq!(swipe.touch_end(251.0), Some(Command::Prev));
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.touch_end(0.0), None);
        swipe.touch_start(500.0);
        swipe.touch_end(500.0);
        assert_eq!(swipe.touch_end(0.0), None);
    }
}
