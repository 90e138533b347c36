use rand::Rng;

use crate::world::{Grid, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }

    /// The neighbouring cell in this direction, if it has non-negative
    /// coordinates. Upper bounds are left to the caller.
    pub fn step(&self, pos: Position) -> Option<Position> {
        match self {
            Direction::Up => pos.y.checked_sub(1).map(|y| Position::new(pos.x, y)),
            Direction::Down => Some(Position::new(pos.x, pos.y + 1)),
            Direction::Left => pos.x.checked_sub(1).map(|x| Position::new(x, pos.y)),
            Direction::Right => Some(Position::new(pos.x + 1, pos.y)),
        }
    }
}

/// Move one cell in `direction` if the destination is inside the grid and not
/// a wall. Otherwise the original position comes back unchanged.
pub fn attempt_move(pos: Position, direction: Direction, grid: &Grid) -> Position {
    match direction.step(pos) {
        Some(next) if grid.is_walkable(next) => next,
        _ => pos,
    }
}
