use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::movement::{Direction, attempt_move};
use crate::world::{Cell, Grid, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub position: Position,
    pub score: u32,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Player { position, score: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub duration: u32,
}

impl Food {
    pub fn new(position: Position, duration: u32) -> Self {
        Food { position, duration }
    }

    pub fn spawn(count: usize, duration: u32, width: usize, height: usize, rng: &mut impl Rng) -> Vec<Food> {
        (0..count)
            .map(|_| Food::new(Position::random(width, height, rng), duration))
            .collect()
    }
}

/// One play session. The main loop is the only writer; a restart builds a
/// fresh value rather than patching this one.
pub struct Game<R = ThreadRng> {
    pub grid: Grid,
    pub player: Player,
    pub food: Vec<Food>,
    pub enemies: Vec<Enemy>,
    pub game_over: bool,
    config: GameConfig,
    rng: R,
}

impl Game<ThreadRng> {
    pub fn new(width: usize, height: usize) -> Self {
        Game::with_rng(width, height, GameConfig::default(), rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(width: usize, height: usize, config: GameConfig, mut rng: R) -> Self {
        let width = width.max(1);
        let height = height.max(1);

        let player = Player::new(Position::random(width, height, &mut rng));
        let food = Food::spawn(config.food_count, config.food_duration, width, height, &mut rng);
        let enemies = Enemy::spawn(config.enemy_count, width, height, &mut rng);
        let mut grid = Grid::generate(width, height, player.position, config.wall_chance_percent, &mut rng);

        // Food always sits on open ground, even where a wall was rolled.
        for item in &food {
            grid.set(item.position, Cell::Open);
        }
        debug!(width, height, walls = grid.wall_count(), "terrain generated");

        Game::from_parts(grid, player, food, enemies, config, rng)
    }

    pub fn from_parts(
        grid: Grid,
        player: Player,
        food: Vec<Food>,
        enemies: Vec<Enemy>,
        config: GameConfig,
        rng: R,
    ) -> Self {
        Game {
            grid,
            player,
            food,
            enemies,
            game_over: false,
            config,
            rng,
        }
    }

    /// Throw this session away and deal a new one of the given size, keeping
    /// only the configuration and the random source.
    pub fn restart(self, width: usize, height: usize) -> Self {
        let Game { config, rng, .. } = self;
        Game::with_rng(width, height, config, rng)
    }

    pub fn move_player(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }
        self.player.position = attempt_move(self.player.position, direction, &self.grid);
    }

    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        self.check_food();
        self.move_enemies();
        if self.check_collision() {
            info!(score = self.player.score, "player caught, game over");
        }
    }

    /// Eat whatever food shares the player's cell. Returns how many items
    /// were eaten.
    pub fn check_food(&mut self) -> usize {
        let before = self.food.len();
        let player = self.player.position;
        self.food.retain(|item| item.position != player);

        let eaten = before - self.food.len();
        if eaten > 0 {
            self.player.score += self.config.food_points * eaten as u32;
            debug!(eaten, score = self.player.score, remaining = self.food.len(), "food eaten");
        }
        eaten
    }

    pub fn move_enemies(&mut self) {
        let target = self.player.position;
        for enemy in &mut self.enemies {
            enemy.update(&self.grid, target, &self.config, &mut self.rng);
        }
    }

    pub fn check_collision(&mut self) -> bool {
        let player = self.player.position;
        if self.enemies.iter().any(|enemy| enemy.position == player) {
            self.game_over = true;
        }
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn quiet_config() -> GameConfig {
        GameConfig {
            enemy_count: 0,
            ..GameConfig::default()
        }
    }

    fn scripted(player: Position, food: Vec<Food>, enemies: Vec<Enemy>) -> Game<ChaCha8Rng> {
        Game::from_parts(
            Grid::open(10, 10),
            Player::new(player),
            food,
            enemies,
            GameConfig::default(),
            ChaCha8Rng::seed_from_u64(0),
        )
    }

    #[test]
    fn new_session_has_expected_population() {
        let game = Game::with_rng(40, 20, GameConfig::default(), ChaCha8Rng::seed_from_u64(1));

        assert_eq!(game.grid.width(), 40);
        assert_eq!(game.grid.height(), 20);
        assert_eq!(game.food.len(), 10);
        assert_eq!(game.enemies.len(), 3);
        assert_eq!(game.player.score, 0);
        assert!(!game.game_over);
        assert!(game.grid.in_bounds(game.player.position));
        assert_eq!(game.grid.get(game.player.position), Cell::Open);
        assert!(game.food.iter().all(|f| f.duration == 10));
    }

    #[test]
    fn food_never_sits_on_a_wall() {
        let config = GameConfig {
            wall_chance_percent: 100,
            ..GameConfig::default()
        };
        let game = Game::with_rng(8, 8, config, ChaCha8Rng::seed_from_u64(2));

        for item in &game.food {
            assert_eq!(game.grid.get(item.position), Cell::Open);
        }
    }

    #[test]
    fn degenerate_size_is_clamped() {
        let game = Game::with_rng(0, 0, GameConfig::default(), ChaCha8Rng::seed_from_u64(3));
        assert_eq!((game.grid.width(), game.grid.height()), (1, 1));
    }

    #[test]
    fn player_moves_respect_walls() {
        let mut game = scripted(Position::new(5, 5), vec![], vec![]);
        game.grid.set(Position::new(5, 4), Cell::Wall);

        game.move_player(Direction::Up);
        assert_eq!(game.player.position, Position::new(5, 5));

        game.move_player(Direction::Down);
        assert_eq!(game.player.position, Position::new(5, 6));
    }

    #[test]
    fn eating_food_scores_once() {
        let food = vec![
            Food::new(Position::new(5, 5), 10),
            Food::new(Position::new(1, 1), 10),
            Food::new(Position::new(8, 2), 10),
        ];
        let mut game = scripted(Position::new(5, 5), food, vec![]);

        game.tick();
        assert_eq!(game.player.score, 10);
        assert_eq!(
            game.food.iter().map(|f| f.position).collect::<Vec<_>>(),
            vec![Position::new(1, 1), Position::new(8, 2)]
        );

        game.tick();
        assert_eq!(game.player.score, 10);
        assert_eq!(game.food.len(), 2);
    }

    #[test]
    fn stacked_food_scores_per_item() {
        let food = vec![
            Food::new(Position::new(2, 2), 10),
            Food::new(Position::new(2, 2), 10),
        ];
        let mut game = scripted(Position::new(2, 2), food, vec![]);

        assert_eq!(game.check_food(), 2);
        assert_eq!(game.player.score, 20);
        assert!(game.food.is_empty());
    }

    #[test]
    fn enemy_on_player_ends_the_game() {
        let enemy = Enemy::new(Position::new(4, 4), Direction::Left);
        let mut game = scripted(Position::new(4, 4), vec![], vec![enemy]);

        game.tick();
        assert!(game.game_over);
    }

    #[test]
    fn enemy_walking_into_player_ends_the_game() {
        let mut enemy = Enemy::new(Position::new(3, 4), Direction::Right);
        enemy.move_counter = 2;
        let config = GameConfig {
            random_turn_percent: 0,
            ..GameConfig::default()
        };
        let mut game = Game::from_parts(
            Grid::open(10, 10),
            Player::new(Position::new(4, 4)),
            vec![],
            vec![enemy],
            config,
            ChaCha8Rng::seed_from_u64(0),
        );

        game.tick();
        assert_eq!(game.enemies[0].position, Position::new(4, 4));
        assert!(game.game_over);
    }

    #[test]
    fn game_over_freezes_the_session() {
        let food = vec![Food::new(Position::new(4, 4), 10), Food::new(Position::new(0, 0), 10)];
        let enemies = vec![
            Enemy::new(Position::new(4, 4), Direction::Up),
            Enemy::new(Position::new(8, 8), Direction::Left),
        ];
        let mut game = scripted(Position::new(4, 5), food, enemies);
        game.game_over = true;

        let food_before = game.food.clone();
        let enemies_before = game.enemies.clone();
        for _ in 0..30 {
            game.tick();
            game.move_player(Direction::Up);
        }

        assert_eq!(game.player.score, 0);
        assert_eq!(game.player.position, Position::new(4, 5));
        assert_eq!(game.food, food_before);
        assert_eq!(game.enemies, enemies_before);
    }

    #[test]
    fn restart_replaces_everything() {
        let mut game = Game::with_rng(30, 15, GameConfig::default(), ChaCha8Rng::seed_from_u64(4));
        game.player.score = 120;
        game.game_over = true;
        game.food.truncate(4);
        let old_player = game.player.position;
        let old_food = game.food.clone();
        let old_enemies = game.enemies.clone();
        let old_grid = game.grid.clone();

        let game = game.restart(30, 15);
        assert!(!game.game_over);
        assert_eq!(game.player.score, 0);
        assert_eq!(game.food.len(), 10);
        assert_eq!(game.enemies.len(), 3);
        assert_eq!((game.grid.width(), game.grid.height()), (30, 15));
        assert_ne!((game.player.position, &game.food[..4]), (old_player, &old_food[..]));
        assert_ne!(game.enemies, old_enemies);
        assert_ne!(game.grid, old_grid);
    }

    #[test]
    fn restart_follows_a_resized_screen() {
        let game = Game::with_rng(30, 15, GameConfig::default(), ChaCha8Rng::seed_from_u64(5));
        let game = game.restart(25, 12);
        assert_eq!((game.grid.width(), game.grid.height()), (25, 12));
    }

    #[test]
    fn random_play_keeps_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut game = Game::with_rng(12, 8, quiet_config(), ChaCha8Rng::seed_from_u64(7));

        let mut food_left = game.food.len();
        let mut score = game.player.score;
        for _ in 0..3_000 {
            game.move_player(Direction::random(&mut rng));
            game.tick();

            assert!(game.grid.in_bounds(game.player.position));
            assert!(game.food.len() <= food_left);
            let eaten = (food_left - game.food.len()) as u32;
            assert_eq!(game.player.score, score + eaten * 10);
            food_left = game.food.len();
            score = game.player.score;
        }
        assert!(!game.game_over);
    }
}
