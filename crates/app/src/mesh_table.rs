//! Resolves the board's mesh roles to drawable styles.

use goop_core::MeshRole;
use macroquad::color::Color;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshStyle {
    pub color: Color,
    /// Extrusion above the floor plane, in cells.
    pub height: f32,
    /// Margin left empty on each side of the cell footprint, in cells.
    pub inset: f32,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum MeshTableError {
    #[error("mesh '{0}' is listed more than once")]
    DuplicateName(String),
    #[error("mesh '{0}' does not name a board role")]
    UnknownName(String),
    #[error("no mesh provided for role '{0}'")]
    MissingRole(&'static str),
}

#[derive(Clone, Debug)]
pub struct MeshTable {
    styles: [MeshStyle; MeshRole::ALL.len()],
}

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

const BUILTIN_ENTRIES: [(&str, MeshStyle); 7] = [
    ("Wall", MeshStyle { color: rgb(0.45, 0.42, 0.40), height: 1.0, inset: 0.0 }),
    ("Floor", MeshStyle { color: rgb(0.22, 0.22, 0.28), height: 0.0, inset: 0.03 }),
    ("Player", MeshStyle { color: rgb(0.95, 0.55, 0.20), height: 0.6, inset: 0.22 }),
    ("Goop", MeshStyle { color: rgb(0.35, 0.75, 0.30), height: 0.12, inset: 0.12 }),
    ("Checkpoint", MeshStyle { color: rgb(0.95, 0.85, 0.25), height: 0.3, inset: 0.3 }),
    (
        "CheckpointCollected",
        MeshStyle { color: rgb(0.45, 0.42, 0.25), height: 0.05, inset: 0.3 },
    ),
    ("Goal", MeshStyle { color: rgb(0.30, 0.55, 0.95), height: 0.4, inset: 0.18 }),
];

impl MeshTable {
    /// Every role must appear exactly once; unknown names are rejected.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, MeshTableError>
    where
        I: IntoIterator<Item = (&'a str, MeshStyle)>,
    {
        let mut slots: [Option<MeshStyle>; MeshRole::ALL.len()] = [None; MeshRole::ALL.len()];
        for (name, style) in entries {
            let Some(role) = MeshRole::ALL.iter().copied().find(|role| role.name() == name) else {
                return Err(MeshTableError::UnknownName(name.to_string()));
            };
            let slot = &mut slots[role as usize];
            if slot.is_some() {
                return Err(MeshTableError::DuplicateName(name.to_string()));
            }
            *slot = Some(style);
        }

        let mut styles = [BUILTIN_ENTRIES[0].1; MeshRole::ALL.len()];
        for role in MeshRole::ALL {
            styles[role as usize] =
                slots[role as usize].ok_or(MeshTableError::MissingRole(role.name()))?;
        }
        Ok(Self { styles })
    }

    pub fn builtin() -> Result<Self, MeshTableError> {
        Self::from_entries(BUILTIN_ENTRIES)
    }

    pub fn style(&self, role: MeshRole) -> MeshStyle {
        self.styles[role as usize]
    }
}
