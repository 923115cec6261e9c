//! # Snake Engine
//!
//! Tick-driven simulation of a growing snake on a fixed board.
//!
//! ```text
//!            initialize()
//!                 │
//!                 ▼
//!   ┌──────► Playing ──── wall / self / full board ────► GameOver
//!   │                                                       │
//!   └──────────────────── Restart ──────────────────────────┘
//! ```
//!
//! The engine never sleeps and never owns a timer. Every successful tick
//! returns [`TickOutcome::Continue`], which the controller turns into a request
//! for exactly one more tick. A tick that ends the game returns
//! [`TickOutcome::Ended`] and the chain simply stops.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of a freshly initialized snake.
pub const INITIAL_LENGTH: usize = 3;

/// Rejected food draws before falling back to enumerating free cells.
const MAX_FOOD_DRAWS: usize = 256;

/// A board coordinate. Signed so the off-board head can be checked before
/// anything is mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step along `direction`.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Cell::new(self.x, self.y - 1),
            Direction::Down => Cell::new(self.x, self.y + 1),
            Direction::Left => Cell::new(self.x - 1, self.y),
            Direction::Right => Cell::new(self.x + 1, self.y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Playing,
    GameOver,
}

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    HitWall,
    HitSelf,
    /// No free cell left for food. Counts as a win.
    BoardFull,
}

/// Commands the engine understands. Anything else is dropped by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Turn(Direction),
    Restart,
}

/// What the host should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still playing: schedule exactly one more tick.
    Continue,
    /// The round ended (or was already over): schedule nothing.
    Ended,
}

pub struct GameEngine {
    width: i32,
    height: i32,
    snake: Vec<Cell>,
    direction: Direction,
    pending_direction: Direction,
    food: Cell,
    score: u32,
    high_score: u32,
    lifecycle: Lifecycle,
    end_reason: Option<EndReason>,
    epoch: u64,
    rng: StdRng,
}

impl GameEngine {
    /// Build an engine on a `width` × `height` board and start the first round.
    ///
    /// `epoch` tags every tick this instance asks for. The owner must never
    /// reuse one, or a tick meant for a discarded engine would be accepted.
    pub fn new(width: u16, height: u16, epoch: u64, rng: StdRng) -> Self {
        let mut engine = Self {
            width: i32::from(width),
            height: i32::from(height),
            snake: Vec::with_capacity(INITIAL_LENGTH),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: Cell::new(0, 0),
            score: 0,
            high_score: 0,
            lifecycle: Lifecycle::Playing,
            end_reason: None,
            epoch,
            rng,
        };
        engine.initialize();
        engine
    }

    /// Same as [`GameEngine::new`] with an entropy-seeded RNG.
    pub fn with_random_seed(width: u16, height: u16, epoch: u64) -> Self {
        let seed: u64 = rand::rng().random();
        debug!(
            "New snake engine {}x{} (epoch {}, seed {})",
            width, height, epoch, seed
        );
        Self::new(width, height, epoch, StdRng::seed_from_u64(seed))
    }

    /// Reset the round. The high score survives.
    pub fn initialize(&mut self) {
        let cx = self.width / 2 - 1;
        let cy = self.height / 2;
        self.snake.clear();
        self.snake
            .extend((0..INITIAL_LENGTH as i32).map(|i| Cell::new(cx - i, cy)));
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.lifecycle = Lifecycle::Playing;
        self.end_reason = None;
        if !self.spawn_food() {
            // Only reachable on boards smaller than the initial snake.
            self.finish(EndReason::BoardFull);
        }
    }

    /// Apply a player command. Returns `true` when a new tick chain must be
    /// armed (a restart from `GameOver`).
    pub fn handle_input(&mut self, command: GameCommand) -> bool {
        match (self.lifecycle, command) {
            (Lifecycle::Playing, GameCommand::Turn(direction)) => {
                if direction != self.direction.opposite() {
                    self.pending_direction = direction;
                }
                false
            }
            (Lifecycle::GameOver, GameCommand::Restart) => {
                info!("Snake restarted (high score {})", self.high_score);
                self.initialize();
                self.lifecycle == Lifecycle::Playing
            }
            _ => false,
        }
    }

    /// Advance the simulation by one step.
    pub fn handle_tick(&mut self) -> TickOutcome {
        if self.lifecycle == Lifecycle::GameOver {
            return TickOutcome::Ended;
        }

        self.direction = self.pending_direction;
        let new_head = self.head().step(self.direction);

        if !self.in_bounds(new_head) {
            self.finish(EndReason::HitWall);
            return TickOutcome::Ended;
        }
        // Linear in snake length; boards are small.
        if self.snake.contains(&new_head) {
            self.finish(EndReason::HitSelf);
            return TickOutcome::Ended;
        }

        self.snake.insert(0, new_head);
        if new_head == self.food {
            self.score += 1;
            trace!("Food eaten at {:?}, score {}", new_head, self.score);
            if !self.spawn_food() {
                self.finish(EndReason::BoardFull);
                return TickOutcome::Ended;
            }
        } else {
            self.snake.pop();
        }

        TickOutcome::Continue
    }

    fn finish(&mut self, reason: EndReason) {
        self.lifecycle = Lifecycle::GameOver;
        self.end_reason = Some(reason);
        self.high_score = self.high_score.max(self.score);
        info!(
            "Game over ({:?}): score {}, high score {}",
            reason, self.score, self.high_score
        );
    }

    /// Place food on a free cell. Returns `false` if the board is full.
    ///
    /// Uniform rejection sampling; after `MAX_FOOD_DRAWS` misses the free
    /// cells are enumerated and one is picked uniformly, so this always
    /// terminates.
    fn spawn_food(&mut self) -> bool {
        for _ in 0..MAX_FOOD_DRAWS {
            let candidate = Cell::new(
                self.rng.random_range(0..self.width),
                self.rng.random_range(0..self.height),
            );
            if !self.snake.contains(&candidate) {
                self.food = candidate;
                trace!("Food spawned at {:?}", candidate);
                return true;
            }
        }

        let free: Vec<Cell> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.snake.contains(cell))
            .collect();
        if free.is_empty() {
            return false;
        }
        self.food = free[self.rng.random_range(0..free.len())];
        debug!("Food spawned at {:?} after exhaustive scan", self.food);
        true
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Token identifying this instance's tick chain.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn board_size(&self) -> (u16, u16) {
        (self.width as u16, self.height as u16)
    }

    /// Move the food to a chosen cell. Test-only: lets scenarios put food in
    /// the snake's path.
    #[cfg(test)]
    pub fn place_food(&mut self, cell: Cell) {
        assert!(!self.snake.contains(&cell), "food placed on the snake");
        self.food = cell;
    }

    /// Replace the snake body. Test-only.
    #[cfg(test)]
    pub fn set_snake(&mut self, cells: Vec<Cell>, direction: Direction) {
        self.snake = cells;
        self.direction = direction;
        self.pending_direction = direction;
    }

    #[cfg(test)]
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_engine;

    fn cells(points: &[(i32, i32)]) -> Vec<Cell> {
        points.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    /// Keep food out of the way of a straight run to the right.
    fn park_food(engine: &mut GameEngine) {
        let (_, h) = engine.board_size();
        engine.place_food(Cell::new(0, i32::from(h) - 1));
    }

    #[test]
    fn test_initialize_centers_snake_heading_right() {
        let engine = seeded_engine(60, 25);
        assert_eq!(engine.snake(), cells(&[(29, 12), (28, 12), (27, 12)]));
        assert_eq!(engine.direction(), Direction::Right);
        assert_eq!(engine.pending_direction(), Direction::Right);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.lifecycle(), Lifecycle::Playing);
        assert!(!engine.snake().contains(&engine.food()));
    }

    #[test]
    fn test_single_tick_translates_snake() {
        let mut engine = seeded_engine(60, 25);
        park_food(&mut engine);
        assert_eq!(engine.handle_tick(), TickOutcome::Continue);
        assert_eq!(engine.snake(), cells(&[(30, 12), (29, 12), (28, 12)]));
    }

    #[test]
    fn test_ticks_without_input_run_straight_into_wall() {
        let mut engine = seeded_engine(20, 10);
        park_food(&mut engine);
        let start = engine.snake().to_vec();

        // Head starts at x = 9; nine moves reach x = 18, the tenth x = 19.
        for step in 1..=10 {
            assert_eq!(engine.handle_tick(), TickOutcome::Continue);
            assert_eq!(engine.direction(), Direction::Right);
            let expected: Vec<Cell> = start
                .iter()
                .map(|c| Cell::new(c.x + step, c.y))
                .collect();
            assert_eq!(engine.snake(), expected);
        }

        assert_eq!(engine.handle_tick(), TickOutcome::Ended);
        assert_eq!(engine.lifecycle(), Lifecycle::GameOver);
        assert_eq!(engine.end_reason(), Some(EndReason::HitWall));
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut engine = seeded_engine(60, 25);
        engine.place_food(Cell::new(30, 12));

        assert_eq!(engine.handle_tick(), TickOutcome::Continue);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.snake().len(), 4);
        assert_eq!(engine.head(), Cell::new(30, 12));
        assert!(!engine.snake().contains(&engine.food()));
    }

    #[test]
    fn test_length_is_invariant_without_food() {
        let mut engine = seeded_engine(60, 25);
        park_food(&mut engine);
        engine.handle_input(GameCommand::Turn(Direction::Up));
        for _ in 0..5 {
            engine.handle_tick();
            assert_eq!(engine.snake().len(), INITIAL_LENGTH);
        }
    }

    #[test]
    fn test_reverse_turn_is_dropped() {
        let mut engine = seeded_engine(60, 25);
        engine.handle_input(GameCommand::Turn(Direction::Left));
        assert_eq!(engine.pending_direction(), Direction::Right);

        engine.handle_input(GameCommand::Turn(Direction::Down));
        assert_eq!(engine.pending_direction(), Direction::Down);
        // Still committed Right, so Left stays forbidden until the tick commits.
        engine.handle_input(GameCommand::Turn(Direction::Left));
        assert_eq!(engine.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_leaving_left_edge_ends_game_and_updates_high_score() {
        let mut engine = seeded_engine(60, 25);
        engine.set_snake(cells(&[(0, 5), (1, 5), (2, 5)]), Direction::Left);
        engine.place_food(Cell::new(30, 20));
        engine.set_score(7);

        assert_eq!(engine.handle_tick(), TickOutcome::Ended);
        assert_eq!(engine.lifecycle(), Lifecycle::GameOver);
        assert_eq!(engine.high_score(), 7);
        // No mutation on the fatal step.
        assert_eq!(engine.snake(), cells(&[(0, 5), (1, 5), (2, 5)]));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut engine = seeded_engine(20, 20);
        // A hook shape: heading Up runs into (5, 4).
        engine.set_snake(
            cells(&[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)]),
            Direction::Up,
        );
        engine.place_food(Cell::new(0, 0));

        assert_eq!(engine.handle_tick(), TickOutcome::Ended);
        assert_eq!(engine.end_reason(), Some(EndReason::HitSelf));
    }

    #[test]
    fn test_ticks_after_game_over_are_ignored() {
        let mut engine = seeded_engine(60, 25);
        engine.set_snake(cells(&[(0, 5), (1, 5), (2, 5)]), Direction::Left);
        engine.place_food(Cell::new(30, 20));
        engine.handle_tick();

        let frozen = engine.snake().to_vec();
        assert_eq!(engine.handle_tick(), TickOutcome::Ended);
        assert_eq!(engine.snake(), frozen);
    }

    #[test]
    fn test_turns_are_ignored_after_game_over() {
        let mut engine = seeded_engine(60, 25);
        engine.set_snake(cells(&[(0, 5), (1, 5), (2, 5)]), Direction::Left);
        engine.place_food(Cell::new(30, 20));
        engine.handle_tick();

        assert!(!engine.handle_input(GameCommand::Turn(Direction::Up)));
        assert_eq!(engine.pending_direction(), Direction::Left);
    }

    #[test]
    fn test_restart_resets_round_but_keeps_high_score() {
        let mut engine = seeded_engine(60, 25);
        engine.set_snake(cells(&[(0, 5), (1, 5), (2, 5)]), Direction::Left);
        engine.place_food(Cell::new(30, 20));
        engine.set_score(4);
        engine.handle_tick();
        assert_eq!(engine.high_score(), 4);

        assert!(engine.handle_input(GameCommand::Restart));
        assert_eq!(engine.snake(), cells(&[(29, 12), (28, 12), (27, 12)]));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.lifecycle(), Lifecycle::Playing);
        assert_eq!(engine.end_reason(), None);
        assert_eq!(engine.high_score(), 4);
    }

    #[test]
    fn test_restart_while_playing_is_ignored() {
        let mut engine = seeded_engine(60, 25);
        park_food(&mut engine);
        engine.handle_tick();
        assert!(!engine.handle_input(GameCommand::Restart));
        assert_eq!(engine.head(), Cell::new(30, 12));
    }

    #[test]
    fn test_high_score_is_max_across_rounds() {
        let mut engine = seeded_engine(60, 25);
        for (round_score, expected_high) in [(3, 3), (1, 3), (5, 5), (0, 5)] {
            engine.set_snake(cells(&[(0, 5), (1, 5), (2, 5)]), Direction::Left);
            engine.place_food(Cell::new(30, 20));
            engine.set_score(round_score);
            engine.handle_tick();
            assert_eq!(engine.high_score(), expected_high);
            engine.handle_input(GameCommand::Restart);
        }
    }

    #[test]
    fn test_food_never_lands_on_snake() {
        // A one-row board is half snake, so the sampler misses often.
        for seed in 0..50 {
            let engine = GameEngine::new(6, 1, 1, StdRng::seed_from_u64(seed));
            assert_eq!(engine.snake(), cells(&[(2, 0), (1, 0), (0, 0)]));
            assert!((3..6).contains(&engine.food().x));
            assert_eq!(engine.food().y, 0);
        }
    }

    #[test]
    fn test_full_board_ends_round_as_win() {
        let mut engine = GameEngine::new(6, 1, 1, StdRng::seed_from_u64(9));
        engine.set_snake(
            cells(&[(4, 0), (3, 0), (2, 0), (1, 0), (0, 0)]),
            Direction::Right,
        );
        engine.place_food(Cell::new(5, 0));
        engine.set_score(2);

        assert_eq!(engine.handle_tick(), TickOutcome::Ended);
        assert_eq!(engine.snake().len(), 6);
        assert_eq!(engine.score(), 3);
        assert_eq!(engine.lifecycle(), Lifecycle::GameOver);
        assert_eq!(engine.end_reason(), Some(EndReason::BoardFull));
        assert_eq!(engine.high_score(), 3);
    }

    #[test]
    fn test_epoch_survives_restart() {
        let mut engine = GameEngine::new(20, 10, 7, StdRng::seed_from_u64(3));
        assert_eq!(engine.epoch(), 7);
        engine.handle_input(GameCommand::Turn(Direction::Up));
        while engine.handle_tick() == TickOutcome::Continue {}
        assert!(engine.handle_input(GameCommand::Restart));
        assert_eq!(engine.epoch(), 7);
    }
}
