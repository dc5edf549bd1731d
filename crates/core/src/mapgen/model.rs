//! Public data model for a generated maze and its initial entity layout.

use crate::state::Map;
use crate::types::{Pos, TileKind};

use super::generator::HazardOutcome;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub level: u8,
    pub map: Map,
    pub start: Pos,
    pub exit: Pos,
    pub traps: Vec<Pos>,
    pub hazard: HazardOutcome,
    pub escort: Option<Pos>,
    /// Roaming order.
    pub quiz_npcs: Vec<Pos>,
}

impl GeneratedMaze {
    pub fn hazard_cells(&self) -> Option<[Pos; 2]> {
        self.hazard.cells()
    }

    /// Every cell an entity occupies at spawn time, in placement order.
    pub fn occupied_cells(&self) -> Vec<Pos> {
        let mut cells = self.traps.clone();
        cells.extend(self.hazard_cells().into_iter().flatten());
        cells.extend(self.escort);
        cells.extend(self.quiz_npcs.iter().copied());
        cells
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.push(self.level);
        bytes.extend((self.map.cols() as u32).to_le_bytes());
        bytes.extend((self.map.rows() as u32).to_le_bytes());
        for tile in &self.map.tiles {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
            });
        }
        push_pos(&mut bytes, self.start);
        push_pos(&mut bytes, self.exit);

        bytes.extend((self.traps.len() as u32).to_le_bytes());
        for &trap in &self.traps {
            push_pos(&mut bytes, trap);
        }

        match self.hazard_cells() {
            Some([a, b]) => {
                bytes.push(1);
                push_pos(&mut bytes, a);
                push_pos(&mut bytes, b);
            }
            None => bytes.push(0),
        }
        match self.escort {
            Some(pos) => {
                bytes.push(1);
                push_pos(&mut bytes, pos);
            }
            None => bytes.push(0),
        }

        bytes.extend((self.quiz_npcs.len() as u32).to_le_bytes());
        for &npc in &self.quiz_npcs {
            push_pos(&mut bytes, npc);
        }

        bytes
    }
}

pub(crate) fn push_pos(bytes: &mut Vec<u8>, pos: Pos) {
    bytes.extend(pos.y.to_le_bytes());
    bytes.extend(pos.x.to_le_bytes());
}
