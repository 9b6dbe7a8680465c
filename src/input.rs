use crate::navigation::Command;

/// Keys the presenter reacts to, independent of the window backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Right,
    Left,
    Space,
    PageDown,
    PageUp,
    Home,
    End,
    F,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::Right,
        Key::Left,
        Key::Space,
        Key::PageDown,
        Key::PageUp,
        Key::Home,
        Key::End,
        Key::F,
    ];

    pub fn command(self) -> Command {
        match self {
            Key::Right | Key::Space | Key::PageDown => Command::Next,
            Key::Left | Key::PageUp => Command::Previous,
            Key::Home => Command::First,
            Key::End => Command::Last,
            Key::F => Command::ToggleFullscreen,
        }
    }
}

/// Wheel movement in paged mode: down is forward.
pub fn wheel_command(delta: f32) -> Option<Command> {
    if delta < 0.0 {
        Some(Command::Next)
    } else if delta > 0.0 {
        Some(Command::Previous)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_space_navigate() {
        assert_eq!(Key::Right.command(), Command::Next);
        assert_eq!(Key::Space.command(), Command::Next);
        assert_eq!(Key::Left.command(), Command::Previous);
        assert_eq!(Key::F.command(), Command::ToggleFullscreen);
    }

    #[test]
    fn wheel_direction() {
        assert_eq!(wheel_command(-1.0), Some(Command::Next));
        assert_eq!(wheel_command(1.0), Some(Command::Previous));
        assert_eq!(wheel_command(0.0), None);
    }
}
