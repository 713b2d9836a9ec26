use std::collections::VecDeque;

use super::{CardinalDirection, Position};

/// The controllable actor.
///
/// Input only ever writes `pending`; the engine copies it into `direction`
/// at the start of the next tick, so a key press never takes effect mid-frame.
/// In snake mode `position` mirrors the snake head.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    /// Committed heading; `None` means standing still.
    pub direction: Option<CardinalDirection>,
    /// Heading requested by input, committed on the next tick.
    pub pending: Option<CardinalDirection>,
}

impl PlayerState {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            direction: None,
            pending: None,
        }
    }

    pub fn heading(mut self, direction: CardinalDirection) -> Self {
        self.direction = Some(direction);
        self.pending = Some(direction);
        self
    }

    /// Copies the pending direction into the committed one.
    pub fn commit(&mut self) {
        self.direction = self.pending;
    }
}

/// AI hunter that closes in on the player one greedy step at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pursuer {
    pub position: Position,
    /// Ticks between moves.
    pub move_frequency: u32,
    /// Ticks elapsed since the last move.
    pub move_counter: u32,
}

impl Pursuer {
    pub fn new(position: Position, move_frequency: u32) -> Self {
        Self {
            position,
            move_frequency: move_frequency.max(1),
            move_counter: 0,
        }
    }

    /// Advances the throttle by one tick and steps toward `target` when it
    /// fires. Returns whether the pursuer moved.
    pub fn tick(&mut self, target: Position) -> bool {
        self.move_counter += 1;
        if self.move_counter < self.move_frequency {
            return false;
        }
        self.move_counter = 0;
        self.position = self.position.step_toward(target);
        true
    }
}

/// Ordered body segments, head first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snake {
    segments: VecDeque<Position>,
}

impl Snake {
    pub fn new(segments: impl IntoIterator<Item = Position>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// A straight snake of `length` segments with its head at `head`, the
    /// body trailing away from `heading`.
    pub fn straight(head: Position, heading: CardinalDirection, length: usize) -> Self {
        let tail_direction = heading.opposite();
        let mut segments = VecDeque::with_capacity(length);
        let mut cursor = head;
        for _ in 0..length {
            segments.push_back(cursor);
            cursor = cursor.offset(tail_direction);
        }
        Self { segments }
    }

    pub fn head(&self) -> Option<Position> {
        self.segments.front().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }

    pub fn push_head(&mut self, head: Position) {
        self.segments.push_front(head);
    }

    pub fn pop_tail(&mut self) -> Option<Position> {
        self.segments.pop_back()
    }
}
