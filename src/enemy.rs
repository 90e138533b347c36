use rand::Rng;

use crate::config::GameConfig;
use crate::movement::{Direction, attempt_move};
use crate::world::{Grid, Position};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnemyBehavior {
    /// Keep heading one way, turning at random now and then.
    #[cfg_attr(not(test), allow(dead_code, reason = "the game ships with pursuing enemies"))]
    Wander,
    /// Mostly steer toward the player.
    #[default]
    Pursue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub position: Position,
    pub direction: Direction,
    pub move_counter: u32,
}

impl Enemy {
    pub fn new(position: Position, direction: Direction) -> Self {
        Enemy {
            position,
            direction,
            move_counter: 0,
        }
    }

    /// Enemies ignore terrain when placed, so one may start inside a wall.
    pub fn spawn(count: usize, width: usize, height: usize, rng: &mut impl Rng) -> Vec<Enemy> {
        (0..count)
            .map(|_| {
                let position = Position::random(width, height, rng);
                Enemy::new(position, Direction::random(rng))
            })
            .collect()
    }

    pub fn update(&mut self, grid: &Grid, target: Position, config: &GameConfig, rng: &mut impl Rng) {
        self.move_counter += 1;
        if self.move_counter < config.enemy_move_period {
            return;
        }
        self.move_counter = 0;

        let turn_chance = config.random_turn_percent.min(100);
        match config.enemy_behavior {
            EnemyBehavior::Wander => {
                if rng.gen_ratio(turn_chance, 100) {
                    self.direction = Direction::random(rng);
                }
            }
            EnemyBehavior::Pursue => {
                self.direction = if rng.gen_ratio(turn_chance, 100) {
                    Direction::random(rng)
                } else {
                    chase_direction(self.position, target)
                };
            }
        }

        let next = attempt_move(self.position, self.direction, grid);
        if next == self.position {
            // Blocked: sit this turn out and try another heading next time.
            self.direction = Direction::random(rng);
        } else {
            self.position = next;
        }
    }
}

/// Head along the axis with the larger gap to `to`. Ties go to the vertical
/// axis, so an enemy already on the target cell picks `Up`.
pub fn chase_direction(from: Position, to: Position) -> Direction {
    let dx = to.x as i64 - from.x as i64;
    let dy = to.y as i64 - from.y as i64;

    if dx.abs() > dy.abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
