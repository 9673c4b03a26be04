use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Terrain {
    Wall,
    Floor,
}

/// Overlay content of a floor cell. A cell without decoration is `None` in an
/// `Option<Decoration>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Decoration {
    Goop,
    Checkpoint,
    CheckpointCollected,
    Goal,
}

/// Axis-aligned unit step. `Up` increases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// Order used when a random walker draws a direction.
    pub const ALL: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Down, Direction::Up];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Up => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameInput {
    Move(Direction),
    GiveUp,
    Advance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub from: Pos,
    pub to: Pos,
    pub collected_checkpoint: bool,
    pub won: bool,
}

impl MoveReport {
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Moved(MoveReport),
    Blocked,
    Regenerated { attempts: u32 },
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    Moved { from: Pos, to: Pos },
    Blocked { at: Pos, direction: Direction },
    CheckpointCollected { pos: Pos, total: u32 },
    GoalReached { pos: Pos },
    GaveUp { checkpoints: u32 },
    Advanced { levels_cleared: u32 },
    BoardGenerated { attempts: u32, goals: usize },
}
