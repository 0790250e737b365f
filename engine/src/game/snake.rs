use std::collections::{HashSet, VecDeque};

use super::types::{Direction, GridSize, Point};

pub const SPAWN_LENGTH: usize = 3;

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// Three segments centered on the grid, heading right, tail trailing left.
    pub fn spawn(grid: &GridSize) -> Self {
        let head = Point::new(grid.width / 2, grid.height / 2);

        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        for i in 0..SPAWN_LENGTH {
            let segment = Point::new(head.x - i, head.y);
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self {
            body,
            body_set,
            direction: Direction::Right,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: &Point) -> bool {
        self.body_set.contains(cell)
    }

    pub fn grow_head(&mut self, cell: Point) {
        self.body.push_front(cell);
        self.body_set.insert(cell);
    }

    pub fn drop_tail(&mut self) {
        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridSize = GridSize {
        width: 40,
        height: 30,
    };

    #[test]
    fn test_spawn_has_three_contiguous_segments() {
        let snake = Snake::spawn(&GRID);
        assert_eq!(snake.len(), SPAWN_LENGTH);
        assert_eq!(snake.head(), Point::new(20, 15));
        let segments: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(
            segments,
            vec![Point::new(20, 15), Point::new(19, 15), Point::new(18, 15)]
        );
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_grow_head_and_drop_tail_keep_occupancy_in_sync() {
        let mut snake = Snake::spawn(&GRID);
        let new_head = Point::new(21, 15);

        snake.grow_head(new_head);
        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(&new_head));

        snake.drop_tail();
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(&Point::new(18, 15)));
        assert!(snake.occupies(&Point::new(19, 15)));
    }

    #[test]
    fn test_occupies_only_body_cells() {
        let snake = Snake::spawn(&GRID);
        assert!(snake.occupies(&Point::new(19, 15)));
        assert!(!snake.occupies(&Point::new(21, 15)));
        assert!(!snake.occupies(&Point::new(20, 16)));
    }
}
