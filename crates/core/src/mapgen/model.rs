//! Public data model for a generated room.

use crate::room::Room;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedRoom {
    pub room: Room,
    pub spawn: Pos,
    /// Detours spliced into the base path.
    pub splices: u32,
}

impl GeneratedRoom {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.room.canonical_bytes();
        bytes.extend(self.spawn.x.to_le_bytes());
        bytes.extend(self.spawn.y.to_le_bytes());
        bytes.extend(self.splices.to_le_bytes());
        bytes
    }
}
