//! Carousel navigation state for the detail modal.
//!
//! DESIGN
//! ======
//! Pure state: an index into the fetched user list, the last step direction,
//! whether the modal is open, and which face of the card is showing. The
//! server has no session storage for it, so routes rebuild a `Carousel` from
//! the URL on every request and render links for the states reachable from
//! it ([`Carousel::href`]).

/// Which side of the card is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Stats,
    Messages,
}

impl Face {
    /// Parse the `face` query value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "stats" => Some(Self::Stats),
            "messages" => Some(Self::Messages),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Stats => Self::Messages,
            Self::Messages => Self::Stats,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Messages => "messages",
        }
    }
}

/// Direction of the last step. Only drives the slide-in class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub fn from_step(step: i8) -> Self {
        if step < 0 { Self::Backward } else { Self::Forward }
    }

    #[must_use]
    pub fn step(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// What happens to the face when the carousel moves to another user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipPolicy {
    /// Every step shows the stats face again.
    #[default]
    ResetOnNavigate,
    /// The face survives navigation.
    Persist,
}

impl FlipPolicy {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "reset" => Some(Self::ResetOnNavigate),
            "persist" => Some(Self::Persist),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: Direction,
    selected: bool,
    face: Face,
    policy: FlipPolicy,
}

impl Carousel {
    /// A closed carousel over `len` users.
    #[must_use]
    pub fn new(len: usize, policy: FlipPolicy) -> Self {
        Self { len, index: 0, direction: Direction::Forward, selected: false, face: Face::Stats, policy }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected
    }

    /// Open the modal on the tile at `position`. Returns `false` (and leaves
    /// the state untouched) if there is no such tile.
    pub fn select(&mut self, position: usize) -> bool {
        if position >= self.len {
            return false;
        }
        self.index = position;
        self.selected = true;
        true
    }

    pub fn close(&mut self) {
        self.selected = false;
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.len;
        self.after_step();
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Backward;
        self.index = (self.index + self.len - 1) % self.len;
        self.after_step();
    }

    pub fn flip(&mut self) {
        self.face = self.face.flipped();
    }

    pub fn show(&mut self, face: Face) {
        self.face = face;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn after_step(&mut self) {
        if self.policy == FlipPolicy::ResetOnNavigate {
            self.face = Face::Stats;
        }
    }

    /// URL that reproduces this state. A closed carousel links back to the grid.
    #[must_use]
    pub fn href(&self) -> String {
        if !self.selected {
            return "/".to_owned();
        }
        format!("/heroes/{}?face={}&dir={}", self.index, self.face.as_str(), self.direction.step())
    }

    /// Links for the states one step away: (previous, next, flipped, closed).
    #[must_use]
    pub fn links(&self) -> CarouselLinks {
        let mut prev = self.clone();
        prev.prev();
        let mut next = self.clone();
        next.next();
        let mut flipped = self.clone();
        flipped.flip();
        let mut closed = self.clone();
        closed.close();
        CarouselLinks { prev: prev.href(), next: next.href(), flip: flipped.href(), close: closed.href() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLinks {
    pub prev: String,
    pub next: String,
    pub flip: String,
    pub close: String,
}

#[cfg(test)]
#[path = "carousel_test.rs"]
mod tests;
