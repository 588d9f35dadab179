//! Travel directions and node link slots.
//!
//! `Direction` is what an entity is doing; `Link` is which of a node's five
//! neighbor slots an edge occupies.  The four cardinals map one-to-one onto
//! link slots; `Stop` has no slot and `Portal` has no direction.

use std::ops::Neg;

use crate::Vector2;

/// Heading of a moving entity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Stop,
}

impl Direction {
    /// The four movable directions, in the order direction lists are built.
    pub const CARDINALS: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// UP↔DOWN, LEFT↔RIGHT, STOP↔STOP.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Stop  => Direction::Stop,
        }
    }

    /// Unit movement delta in screen space (y grows downward).
    #[inline]
    pub fn delta(self) -> Vector2 {
        match self {
            Direction::Up    => Vector2::new(0.0, -1.0),
            Direction::Down  => Vector2::new(0.0, 1.0),
            Direction::Left  => Vector2::new(-1.0, 0.0),
            Direction::Right => Vector2::new(1.0, 0.0),
            Direction::Stop  => Vector2::ZERO,
        }
    }

    /// The neighbor slot this direction travels along.  `None` for `Stop`.
    #[inline]
    pub fn link(self) -> Option<Link> {
        match self {
            Direction::Up    => Some(Link::Up),
            Direction::Down  => Some(Link::Down),
            Direction::Left  => Some(Link::Left),
            Direction::Right => Some(Link::Right),
            Direction::Stop  => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
            Direction::Stop  => "stop",
        }
    }
}

impl Neg for Direction {
    type Output = Direction;
    #[inline]
    fn neg(self) -> Direction {
        self.opposite()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Link ──────────────────────────────────────────────────────────────────────

/// One of the five neighbor slots every maze node carries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Link {
    Up,
    Down,
    Left,
    Right,
    Portal,
}

impl Link {
    pub const COUNT: usize = 5;

    pub const ALL: [Link; Link::COUNT] =
        [Link::Up, Link::Down, Link::Left, Link::Right, Link::Portal];

    /// Slot index into a node's neighbor array.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Link::Up     => 0,
            Link::Down   => 1,
            Link::Left   => 2,
            Link::Right  => 3,
            Link::Portal => 4,
        }
    }

    /// The direction travelling along this slot; `None` for `Portal`.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Link::Up     => Some(Direction::Up),
            Link::Down   => Some(Direction::Down),
            Link::Left   => Some(Direction::Left),
            Link::Right  => Some(Direction::Right),
            Link::Portal => None,
        }
    }
}
