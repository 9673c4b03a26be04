//! Render boundary: the board exposes what to draw as mesh-role instances; the
//! renderer resolves roles to its own resources.

use crate::board::Board;
use crate::types::{Decoration, Pos, Terrain};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeshRole {
    Wall,
    Floor,
    Player,
    Goop,
    Checkpoint,
    CheckpointCollected,
    Goal,
}

impl MeshRole {
    pub const ALL: [MeshRole; 7] = [
        MeshRole::Wall,
        MeshRole::Floor,
        MeshRole::Player,
        MeshRole::Goop,
        MeshRole::Checkpoint,
        MeshRole::CheckpointCollected,
        MeshRole::Goal,
    ];

    /// Name the mesh is stored under in the asset index.
    pub fn name(self) -> &'static str {
        match self {
            MeshRole::Wall => "Wall",
            MeshRole::Floor => "Floor",
            MeshRole::Player => "Player",
            MeshRole::Goop => "Goop",
            MeshRole::Checkpoint => "Checkpoint",
            MeshRole::CheckpointCollected => "CheckpointCollected",
            MeshRole::Goal => "Goal",
        }
    }

    pub fn for_terrain(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Wall => MeshRole::Wall,
            Terrain::Floor => MeshRole::Floor,
        }
    }

    pub fn for_decoration(decoration: Decoration) -> Self {
        match decoration {
            Decoration::Goop => MeshRole::Goop,
            Decoration::Checkpoint => MeshRole::Checkpoint,
            Decoration::CheckpointCollected => MeshRole::CheckpointCollected,
            Decoration::Goal => MeshRole::Goal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DrawLayer {
    Terrain,
    Decoration,
    Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshInstance {
    pub role: MeshRole,
    pub pos: Pos,
    pub layer: DrawLayer,
}

/// Instances in draw order: terrain and decoration cell by cell in row-major order,
/// the player last so it sits on top.
pub fn draw_list(board: &Board) -> Vec<MeshInstance> {
    let mut instances = Vec::with_capacity(board.width() * board.height() + 8);
    for pos in board.positions() {
        instances.push(MeshInstance {
            role: MeshRole::for_terrain(board.terrain_at(pos)),
            pos,
            layer: DrawLayer::Terrain,
        });
        if let Some(decoration) = board.decoration_at(pos) {
            instances.push(MeshInstance {
                role: MeshRole::for_decoration(decoration),
                pos,
                layer: DrawLayer::Decoration,
            });
        }
    }
    instances.push(MeshInstance {
        role: MeshRole::Player,
        pos: board.player(),
        layer: DrawLayer::Player,
    });
    instances
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_match_the_asset_index() {
        let names: Vec<&str> = MeshRole::ALL.iter().map(|role| role.name()).collect();
        assert_eq!(
            names,
            ["Wall", "Floor", "Player", "Goop", "Checkpoint", "CheckpointCollected", "Goal"]
        );
    }

    #[test]
    fn every_cell_gets_terrain_and_only_decorated_cells_get_overlays() {
        let mut board = Board::open(4, 3, Pos::new(1, 1)).expect("valid board");
        board.set_decoration(Pos::new(2, 1), Some(Decoration::Goal));

        let instances = draw_list(&board);

        let terrain = instances.iter().filter(|i| i.layer == DrawLayer::Terrain).count();
        assert_eq!(terrain, 12);
        let overlays: Vec<_> =
            instances.iter().filter(|i| i.layer == DrawLayer::Decoration).collect();
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].role, MeshRole::Goal);
        assert_eq!(overlays[0].pos, Pos::new(2, 1));
    }

    #[test]
    fn player_is_drawn_last() {
        let board = Board::open(5, 5, Pos::new(2, 3)).expect("valid board");
        let instances = draw_list(&board);
        let last = instances.last().expect("non-empty draw list");
        assert_eq!(last.role, MeshRole::Player);
        assert_eq!(last.pos, Pos::new(2, 3));
        assert_eq!(instances.iter().filter(|i| i.role == MeshRole::Player).count(), 1);
    }
}
