//! Rotating testimonial index.

/// Which way the card should slide for the last transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn class(self) -> &'static str {
        match self {
            Direction::Forward => "slide-forward",
            Direction::Backward => "slide-backward",
        }
    }
}

/// Index into a fixed-length list, always in `0..len` (0 when empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> Direction {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        Direction::Forward
    }

    pub fn previous(&mut self) -> Direction {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        Direction::Backward
    }

    /// Jump to `index`. Returns `None` and leaves the carousel alone when
    /// `index` is out of range.
    pub fn jump(&mut self, index: usize) -> Option<Direction> {
        if index >= self.len {
            return None;
        }
        let direction = if index < self.index {
            Direction::Backward
        } else {
            Direction::Forward
        };
        self.index = index;
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_after_len_steps() {
        let mut c = Carousel::new(4);
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut c = Carousel::new(4);
        assert_eq!(c.previous(), Direction::Backward);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn jump_sets_index_and_direction() {
        let mut c = Carousel::new(4);
        assert_eq!(c.jump(2), Some(Direction::Forward));
        assert_eq!(c.index(), 2);
        assert_eq!(c.jump(1), Some(Direction::Backward));
        assert_eq!(c.jump(4), None);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        c.next();
        c.previous();
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
        assert_eq!(c.jump(0), None);
    }
}
