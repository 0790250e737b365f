use crate::highscore::HighScoreStore;
use crate::{log, warn};

use super::rng::GameRng;
use super::snake::Snake;
use super::types::{Direction, EndReason, GamePhase, GridSize, Point};

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    grid: GridSize,
    score_reward: u32,
    high_score_store: HighScoreStore,
    rng: GameRng,
}

/// Read-only view of one tick, consumed by the renderer.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub cells: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    pub grid: GridSize,
}

impl GameState {
    pub fn new(
        grid: GridSize,
        score_reward: u32,
        high_score_store: HighScoreStore,
        rng: GameRng,
    ) -> Self {
        let high_score = high_score_store.load();
        let mut state = Self {
            snake: Snake::spawn(&grid),
            food: Point::new(0, 0),
            score: 0,
            high_score,
            phase: GamePhase::Running,
            end_reason: None,
            grid,
            score_reward,
            high_score_store,
            rng,
        };
        state.spawn_food();
        state
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn reset(&mut self) {
        self.snake = Snake::spawn(&self.grid);
        self.score = 0;
        self.phase = GamePhase::Running;
        self.end_reason = None;
        self.spawn_food();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.phase == GamePhase::Over {
            return;
        }
        // Checked against the last applied direction, not the latest intent,
        // so a rapid key sequence cannot queue a reversal into the neck.
        if !direction.is_opposite(&self.snake.direction) {
            self.snake.pending_direction = Some(direction);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::Over => GamePhase::Over,
        };
    }

    pub fn step(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let next_head = match self.next_head_position() {
            Ok(point) => point,
            Err(reason) => {
                self.end_round(reason);
                return;
            }
        };

        self.snake.grow_head(next_head);

        if next_head == self.food {
            self.score += self.score_reward;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.record_high_score();
            self.spawn_food();
        } else {
            self.snake.drop_tail();
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: self.snake.body.iter().copied().collect(),
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            phase: self.phase,
            end_reason: self.end_reason,
            grid: self.grid,
        }
    }

    fn next_head_position(&self) -> Result<Point, EndReason> {
        let head = self.snake.head();

        let next_head = match self.snake.direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x, head.y - 1)
            }
            Direction::Down => {
                if head.y >= self.grid.height - 1 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x, head.y + 1)
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x - 1, head.y)
            }
            Direction::Right => {
                if head.x >= self.grid.width - 1 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x + 1, head.y)
            }
        };

        // The tail counts too: moving into the cell it still occupies is death.
        if self.snake.occupies(&next_head) {
            return Err(EndReason::SelfCollision);
        }

        Ok(next_head)
    }

    fn end_round(&mut self, reason: EndReason) {
        self.phase = GamePhase::Over;
        self.end_reason = Some(reason);
        log!("Round over: {:?}. Final score: {}", reason, self.score);
        self.record_high_score();
    }

    fn record_high_score(&mut self) {
        if self.score <= self.high_score {
            return;
        }
        self.high_score = self.score;
        if let Err(e) = self.high_score_store.save(self.high_score) {
            warn!("Failed to persist high score: {}", e);
        }
    }

    fn spawn_food(&mut self) {
        let mut free_cells = Vec::with_capacity(self.grid.cell_count());
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let cell = Point::new(x, y);
                if !self.snake.occupies(&cell) {
                    free_cells.push(cell);
                }
            }
        }

        match self.rng.pick(&free_cells) {
            Some(&cell) => {
                self.food = cell;
                log!("Food spawned at ({}, {})", cell.x, cell.y);
            }
            None => {
                self.end_round(EndReason::BoardFull);
            }
        }
    }

    #[cfg(test)]
    fn set_snake(&mut self, cells: &[Point], direction: Direction) {
        self.snake.body = cells.iter().copied().collect();
        self.snake.body_set = cells.iter().copied().collect();
        self.snake.direction = direction;
        self.snake.pending_direction = None;
    }

    #[cfg(test)]
    fn set_food(&mut self, cell: Point) {
        self.food = cell;
    }
}
