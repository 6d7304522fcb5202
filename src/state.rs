#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Next, // Outgoing slide leaves to the left, incoming enters from the right
    Prev, // Mirrored
}

impl Direction {
    /// Sign of the horizontal offset the outgoing slide travels to.
    pub fn exit_sign(self) -> f32 {
        match self {
            Direction::Next => -1.0,
            Direction::Prev => 1.0,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct NavigationState {
    pub current: usize,   // Index of the slide being shown
    pub animating: bool,  // A slide transition is in flight
}
