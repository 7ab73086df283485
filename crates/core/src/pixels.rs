//! Pixel projection of a room: 5 px tiles separated by 1 px gridlines, 4 bytes per
//! pixel, rows padded to 16 bytes. Row 0 in memory is tile row 0 (bottom-up).

use crate::room::{Room, RoomDims};
use crate::types::Pos;

pub const TILE_SIZE: usize = 5;
pub const GRIDLINE_SIZE: usize = 1;
pub const TILE_PITCH: usize = TILE_SIZE + GRIDLINE_SIZE;
pub const BYTES_PER_PIXEL: usize = 4;
pub const ROW_ALIGNMENT: usize = 16;

pub const GRIDLINE_COLOR: u32 = 0x0000_0000;
pub const PLAYER_LIGHT_COLOR: u32 = 0x006F_6F6F;
pub const PLAYER_DARK_COLOR: u32 = 0x008F_8F8F;
pub const FREE_COLOR: u32 = 0x00FF_FFFF;
pub const BLOCKED_COLOR: u32 = 0x000F_0F0F;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pitch: usize,
    memory: Vec<u8>,
}

impl PixelBuffer {
    pub fn for_room(dims: RoomDims) -> Self {
        let mut buffer = Self { width: 0, height: 0, pitch: 0, memory: Vec::new() };
        buffer.resize_for(dims);
        buffer
    }

    pub fn resize_for(&mut self, dims: RoomDims) {
        self.width = dims.width * TILE_PITCH + GRIDLINE_SIZE;
        self.height = dims.height * TILE_PITCH + GRIDLINE_SIZE;
        self.pitch = (self.width * BYTES_PER_PIXEL + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);
        self.memory.clear();
        self.memory.resize(self.pitch * self.height, 0);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row including padding.
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn bytes(&self) -> &[u8] {
        &self.memory
    }

    /// Packed `0x00RRGGBB` value at pixel `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y * self.pitch + x * BYTES_PER_PIXEL;
        let bytes = self.memory.get(offset..offset + BYTES_PER_PIXEL)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn redraw(&mut self, room: &Room, player: Pos) {
        for y in 0..self.height {
            let row_start = y * self.pitch;
            let row = &mut self.memory[row_start..row_start + self.width * BYTES_PER_PIXEL];
            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                pixel.copy_from_slice(&pixel_color(room, player, x, y).to_le_bytes());
            }
        }
    }

    /// Top-down RGBA8 copy without row padding, for texture uploads.
    pub fn to_rgba_top_down(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.width * self.height * 4);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let [blue, green, red, _] = self.pixel(x, y).unwrap_or(0).to_le_bytes();
                rgba.extend([red, green, blue, u8::MAX]);
            }
        }
        rgba
    }
}

fn pixel_color(room: &Room, player: Pos, x: usize, y: usize) -> u32 {
    if x % TILE_PITCH == 0 || y % TILE_PITCH == 0 {
        return GRIDLINE_COLOR;
    }
    let tile = Pos { y: (y / TILE_PITCH) as i32, x: (x / TILE_PITCH) as i32 };
    if tile == player {
        if (x & 1) == (y & 1) { PLAYER_LIGHT_COLOR } else { PLAYER_DARK_COLOR }
    } else if room.is_free(tile) {
        FREE_COLOR
    } else {
        BLOCKED_COLOR
    }
}
