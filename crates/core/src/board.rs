//! Board state: terrain grid, decoration overlay, player position, and progress counters.

use crate::config::{MIN_SIDE, is_interior};
use crate::error::GenerationError;
use crate::types::{Decoration, Direction, Pos, Terrain};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    terrain: Vec<Terrain>,
    decorations: Vec<Option<Decoration>>,
    pub(crate) player: Pos,
    pub(crate) checkpoints: u32,
    pub(crate) won: bool,
}

impl Board {
    /// Walled border, open floor inside, no decorations.
    pub fn open(width: usize, height: usize, player: Pos) -> Result<Self, GenerationError> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(GenerationError::BoardTooSmall { width, height });
        }
        if !is_interior(width, height, player) {
            return Err(GenerationError::PlayerNotInterior { pos: player });
        }

        let mut terrain = vec![Terrain::Wall; width * height];
        for y in 1..(height - 1) {
            for x in 1..(width - 1) {
                terrain[y * width + x] = Terrain::Floor;
            }
        }

        Ok(Self {
            width,
            height,
            terrain,
            decorations: vec![None; width * height],
            player,
            checkpoints: 0,
            won: false,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn checkpoints(&self) -> u32 {
        self.checkpoints
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0
                || pos.y == 0
                || pos.x as usize == self.width - 1
                || pos.y as usize == self.height - 1)
    }

    /// Out-of-bounds cells read as wall.
    pub fn terrain_at(&self, pos: Pos) -> Terrain {
        if !self.in_bounds(pos) {
            return Terrain::Wall;
        }
        self.terrain[self.index(pos)]
    }

    pub fn decoration_at(&self, pos: Pos) -> Option<Decoration> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.decorations[self.index(pos)]
    }

    /// Border cells stay wall. Walling a cell clears its decoration.
    pub fn set_terrain(&mut self, pos: Pos, terrain: Terrain) {
        if !self.in_bounds(pos) || self.is_border(pos) {
            return;
        }
        let idx = self.index(pos);
        self.terrain[idx] = terrain;
        if terrain == Terrain::Wall {
            self.decorations[idx] = None;
        }
    }

    /// Decorations only land on floor; requests for wall cells are ignored.
    pub fn set_decoration(&mut self, pos: Pos, decoration: Option<Decoration>) {
        if self.terrain_at(pos) != Terrain::Floor {
            return;
        }
        let idx = self.index(pos);
        self.decorations[idx] = decoration;
    }

    /// Row-major iteration over every cell position.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    pub fn cells_with(&self, decoration: Decoration) -> Vec<Pos> {
        self.positions().filter(|&pos| self.decoration_at(pos) == Some(decoration)).collect()
    }

    /// Where a slide starting at `start` comes to rest: just before the first wall,
    /// or on the first goop cell entered.
    pub fn slide_from(&self, start: Pos, direction: Direction) -> Pos {
        let mut at = start;
        loop {
            let next = at.step(direction);
            if self.terrain_at(next) == Terrain::Wall {
                return at;
            }
            at = next;
            if self.decoration_at(at) == Some(Decoration::Goop) {
                return at;
            }
        }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.terrain.len() * 2 + 24);
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for terrain in &self.terrain {
            bytes.push(match terrain {
                Terrain::Wall => 0,
                Terrain::Floor => 1,
            });
        }
        for decoration in &self.decorations {
            bytes.push(match decoration {
                None => 0,
                Some(Decoration::Goop) => 1,
                Some(Decoration::Checkpoint) => 2,
                Some(Decoration::CheckpointCollected) => 3,
                Some(Decoration::Goal) => 4,
            });
        }
        bytes.extend(self.player.y.to_le_bytes());
        bytes.extend(self.player.x.to_le_bytes());
        bytes.extend(self.checkpoints.to_le_bytes());
        bytes.push(u8::from(self.won));
        bytes
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
