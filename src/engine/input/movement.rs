// Directional movement state

use super::action::{Axis, Direction};

/// Which directions currently have a velocity ramp issued and not yet cancelled
///
/// A direction flips on when its ramp is requested and flips off only when its
/// whole axis is cancelled, so a held, auto-repeating key actuates once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl MovementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn slot(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Mark a direction active
    /// Returns false if it already was, meaning nothing should be actuated
    pub fn activate(&mut self, direction: Direction) -> bool {
        let slot = self.slot(direction);
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    /// Clear both directions on an axis
    /// Returns false if neither was active
    pub fn cancel(&mut self, axis: Axis) -> bool {
        if !self.is_axis_active(axis) {
            return false;
        }
        for direction in axis.directions() {
            *self.slot(direction) = false;
        }
        true
    }

    /// Whether either direction on the axis is active
    pub fn is_axis_active(&self, axis: Axis) -> bool {
        axis.directions().iter().any(|d| self.is_active(*d))
    }

    /// All currently active directions
    pub fn active_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_active(*d))
            .collect()
    }

    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}
