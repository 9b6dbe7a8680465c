use tracing::debug;

/// A navigation request produced by keyboard, pointer or a scene hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
    ToggleFullscreen,
}

/// Which entry point changed the current index last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// `next`, `previous`, `go_to` and friends.
    User,
    /// A viewport intersection report.
    Observed,
}

/// Owns the index of the slide currently presented.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: usize,
    len: usize,
    origin: Option<ChangeOrigin>,
}

impl Navigator {
    /// A navigator over `len` slides. A deck is never empty, but a zero
    /// length still yields a navigator pinned at index 0.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            origin: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// 1-based page number for the counter overlay.
    pub fn position(&self) -> usize {
        self.current + 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.len
    }

    pub fn origin(&self) -> Option<ChangeOrigin> {
        self.origin
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    fn set(&mut self, index: usize, origin: ChangeOrigin) -> bool {
        if index == self.current {
            return false;
        }
        debug!(from = self.current, to = index, ?origin, "slide changed");
        self.current = index;
        self.origin = Some(origin);
        true
    }

    /// Advances one slide, saturating at the last one.
    pub fn next(&mut self) -> bool {
        let target = (self.current + 1).min(self.last_index());
        self.set(target, ChangeOrigin::User)
    }

    /// Steps back one slide, saturating at the first one.
    pub fn previous(&mut self) -> bool {
        let target = self.current.saturating_sub(1);
        self.set(target, ChangeOrigin::User)
    }

    pub fn first(&mut self) -> bool {
        self.set(0, ChangeOrigin::User)
    }

    pub fn last(&mut self) -> bool {
        let target = self.last_index();
        self.set(target, ChangeOrigin::User)
    }

    /// Jumps straight to `index`. Targets outside the deck are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            debug!(index, len = self.len, "ignored out-of-range jump");
            return false;
        }
        self.set(index, ChangeOrigin::User)
    }

    /// Records the section a viewport observer reports as visible.
    ///
    /// Each report overwrites the previous one; out-of-range reports are
    /// dropped.
    pub fn set_visible_index(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.set(index, ChangeOrigin::Observed)
    }

    /// Applies a batch of intersection reports in arrival order.
    pub fn observe<I>(&mut self, indices: I) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .fold(false, |changed, index| self.set_visible_index(index) || changed)
    }

    /// Applies a navigation command. Returns whether the index changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::First => self.first(),
            Command::Last => self.last(),
            Command::GoTo(index) => self.go_to(index),
            Command::ToggleFullscreen => false,
        }
    }
}
