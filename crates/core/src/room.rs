//! Tile graph for a single room: free/blocked cells threaded into one path by
//! previous/next links. A missing link is `None`; `Some((0, 0))` is a real link.

use crate::types::{Direction, Pos};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub is_free: bool,
    pub previous: Option<Pos>,
    pub next: Option<Pos>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomDims {
    pub width: usize,
    pub height: usize,
}

impl Default for RoomDims {
    fn default() -> Self {
        Self { width: 9, height: 7 }
    }
}

impl RoomDims {
    pub fn start_column(self) -> i32 {
        (self.width / 2) as i32
    }

    /// Tile the player occupies when a room starts; it sits below the path and is never free.
    pub fn spawn_tile(self) -> Pos {
        Pos { y: 0, x: self.start_column() }
    }

    /// Tiles the generator may carve: every column of rows `1..=height-2`.
    pub fn interior_tile_count(self) -> usize {
        self.width * self.height.saturating_sub(2)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    NoFreeTiles,
    HeadCount(usize),
    BrokenLink { from: Pos, to: Pos },
    Unreached { visited: usize, free: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Room {
    pub fn blocked(dims: RoomDims) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
            tiles: vec![Tile::default(); dims.width * dims.height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> RoomDims {
        RoomDims { width: self.width, height: self.height }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Rows `0` and `height - 1` are never carved.
    pub fn is_interior(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && pos.y >= 1 && (pos.y as usize) + 1 < self.height
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(&self.tiles[self.index(pos)])
    }

    pub(crate) fn tile_mut(&mut self, pos: Pos) -> Option<&mut Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        Some(&mut self.tiles[idx])
    }

    pub fn is_free(&self, pos: Pos) -> bool {
        self.tile(pos).is_some_and(|tile| tile.is_free)
    }

    pub fn set_free(&mut self, pos: Pos, is_free: bool) {
        if let Some(tile) = self.tile_mut(pos) {
            tile.is_free = is_free;
        }
    }

    /// Thread `from -> to`, overwriting whatever links those two tiles had on that side.
    pub(crate) fn link(&mut self, from: Pos, to: Pos) {
        if let Some(tile) = self.tile_mut(from) {
            tile.next = Some(to);
        }
        if let Some(tile) = self.tile_mut(to) {
            tile.previous = Some(from);
        }
    }

    pub(crate) fn unlink(&mut self, from: Pos, to: Pos) {
        if let Some(tile) = self.tile_mut(from)
            && tile.next == Some(to)
        {
            tile.next = None;
        }
        if let Some(tile) = self.tile_mut(to)
            && tile.previous == Some(from)
        {
            tile.previous = None;
        }
    }

    /// Full-grid scan; the room-clear check relies on this rather than a running counter.
    pub fn free_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_free).count()
    }

    pub fn has_free_neighbor(&self, pos: Pos) -> bool {
        pos.neighbors().into_iter().any(|neighbor| self.is_free(neighbor))
    }

    /// Every position in row-major order, bottom row first.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    pub fn free_tiles(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|&pos| self.is_free(pos))
    }

    /// First free tile (row-major) whose predecessor is missing or no longer free.
    pub fn path_head(&self) -> Option<Pos> {
        self.free_tiles().find(|&pos| self.is_path_head(pos))
    }

    /// Walk the linked path from its head while links lead to free tiles.
    pub fn path(&self) -> PathIter<'_> {
        self.path_from(self.path_head())
    }

    pub fn path_from(&self, start: Option<Pos>) -> PathIter<'_> {
        let cursor = start.filter(|&pos| self.is_free(pos));
        PathIter { room: self, cursor, budget: self.free_count() }
    }

    /// Check that the free tiles form exactly one simple path. Returns its length.
    pub fn validate_path(&self) -> Result<usize, PathError> {
        let free = self.free_count();
        if free == 0 {
            return Err(PathError::NoFreeTiles);
        }

        let heads: Vec<Pos> = self.free_tiles().filter(|&pos| self.is_path_head(pos)).collect();
        if heads.len() != 1 {
            return Err(PathError::HeadCount(heads.len()));
        }

        for pos in self.free_tiles() {
            let Some(next) = self.tile(pos).and_then(|tile| tile.next) else {
                continue;
            };
            if !self.is_free(next) {
                continue;
            }
            let adjacent = Direction::between(pos, next).is_some();
            let mirrored = self.tile(next).and_then(|tile| tile.previous) == Some(pos);
            if !adjacent || !mirrored {
                return Err(PathError::BrokenLink { from: pos, to: next });
            }
        }

        let visited = self.path_from(Some(heads[0])).count();
        if visited != free {
            return Err(PathError::Unreached { visited, free });
        }
        Ok(visited)
    }

    /// Top row first; `.` is free and `#` is blocked.
    pub fn to_ascii(&self) -> String {
        let mut rows = Vec::with_capacity(self.height);
        for y in (0..self.height).rev() {
            let row: String = (0..self.width)
                .map(|x| if self.is_free(Pos { y: y as i32, x: x as i32 }) { '.' } else { '#' })
                .collect();
            rows.push(row);
        }
        rows.join("\n")
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len() * 19);
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(u8::from(tile.is_free));
            for link in [tile.previous, tile.next] {
                match link {
                    Some(pos) => {
                        bytes.push(1);
                        bytes.extend(pos.x.to_le_bytes());
                        bytes.extend(pos.y.to_le_bytes());
                    }
                    None => bytes.push(0),
                }
            }
        }
        bytes
    }

    fn is_path_head(&self, pos: Pos) -> bool {
        match self.tile(pos).and_then(|tile| tile.previous) {
            Some(previous) => !self.is_free(previous),
            None => true,
        }
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

pub struct PathIter<'a> {
    room: &'a Room,
    cursor: Option<Pos>,
    budget: usize,
}

impl Iterator for PathIter<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.budget == 0 {
            return None;
        }
        let current = self.cursor?;
        self.budget -= 1;
        self.cursor = self
            .room
            .tile(current)
            .and_then(|tile| tile.next)
            .filter(|&next| self.room.is_free(next));
        Some(current)
    }
}
