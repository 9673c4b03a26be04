pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod journal;
pub mod mapgen;
mod movement;
pub mod render;
pub mod replay;
pub mod types;

pub use board::Board;
pub use config::GeneratorConfig;
pub use error::{GenerationError, ReplayError};
pub use game::Game;
pub use journal::{InputJournal, InputRecord};
pub use mapgen::{BoardGenerator, GeneratedBoard, VisitHistogram, estimate_reachability};
pub use render::{DrawLayer, MeshInstance, MeshRole, draw_list};
pub use replay::*;
pub use types::*;
