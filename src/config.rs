use std::time::Duration;

use crate::enemy::EnemyBehavior;

pub const TICK_INTERVAL: Duration = Duration::from_millis(50);
pub const INPUT_QUEUE_CAPACITY: usize = 10;

pub const FOOD_COUNT: usize = 10;
pub const FOOD_POINTS: u32 = 10;
/// Stored on every food item but never counted down.
pub const FOOD_DURATION: u32 = 10;

pub const ENEMY_COUNT: usize = 3;
/// Enemies act once every this many ticks.
pub const ENEMY_MOVE_PERIOD: u32 = 3;
pub const RANDOM_TURN_PERCENT: u32 = 20;

pub const WALL_CHANCE_PERCENT: u32 = 3;

/// Path of the log file. Logging stays off when unset.
pub const LOG_PATH_ENV: &str = "GRID_CHASE_LOG";

/// Per-session tunables. The binary always plays with `GameConfig::default()`.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub food_count: usize,
    pub food_points: u32,
    pub food_duration: u32,
    pub enemy_count: usize,
    pub enemy_move_period: u32,
    pub random_turn_percent: u32,
    pub enemy_behavior: EnemyBehavior,
    pub wall_chance_percent: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            food_count: FOOD_COUNT,
            food_points: FOOD_POINTS,
            food_duration: FOOD_DURATION,
            enemy_count: ENEMY_COUNT,
            enemy_move_period: ENEMY_MOVE_PERIOD,
            random_turn_percent: RANDOM_TURN_PERCENT,
            enemy_behavior: EnemyBehavior::Pursue,
            wall_chance_percent: WALL_CHANCE_PERCENT,
        }
    }
}
