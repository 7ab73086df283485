//! Room generation orchestration: lay the base column, then carve detours into it.

use log::debug;

use crate::rng::RoomRng;
use crate::room::{Room, RoomDims};
use crate::types::Pos;

use super::model::GeneratedRoom;
use super::seed::{draw_blocked_index, draw_branch, nth_blocked_interior_tile};
use super::splice::{DetourPlan, plan_detour};
use super::{DENSITY_DIVISOR, MAX_FAILED_ITERATIONS};

pub struct RoomGenerator {
    dims: RoomDims,
}

impl RoomGenerator {
    pub fn new(dims: RoomDims) -> Self {
        debug_assert!(dims.width > 0 && dims.height >= 3, "rooms need an interior row");
        Self { dims }
    }

    pub fn dims(&self) -> RoomDims {
        self.dims
    }

    pub fn generate(&self, seed: u32) -> GeneratedRoom {
        let mut room = self.base_room();
        let mut rng = RoomRng::new(seed);
        let splices = self.carve(&mut room, &mut rng);

        debug!(
            "generated {}x{} room from seed {seed}: {splices} splices, {} free tiles",
            self.dims.width,
            self.dims.height,
            room.free_count()
        );

        GeneratedRoom { room, spawn: self.dims.spawn_tile(), splices }
    }

    /// One free column above the spawn tile, linked bottom to top.
    fn base_room(&self) -> Room {
        let mut room = Room::blocked(self.dims);
        let x = self.dims.start_column();
        let top = self.dims.height as i32 - 2;
        for y in 1..=top {
            room.set_free(Pos { y, x }, true);
        }
        for y in 1..top {
            room.link(Pos { y, x }, Pos { y: y + 1, x });
        }
        room
    }

    fn carve(&self, room: &mut Room, rng: &mut RoomRng) -> u32 {
        let eligible = self.dims.interior_tile_count();
        let density_floor = eligible / DENSITY_DIVISOR;
        let mut remaining_blocked = eligible - room.free_count();
        let mut failed_iterations = 0;
        let mut splices = 0;

        while failed_iterations < MAX_FAILED_ITERATIONS && remaining_blocked > density_floor {
            failed_iterations += 1;

            let index = draw_blocked_index(rng, remaining_blocked);
            let Some(start) = nth_blocked_interior_tile(room, index) else {
                break;
            };
            let branch = draw_branch(rng);

            for direction in branch.directions() {
                match plan_detour(room, start, direction, branch.stretch) {
                    DetourPlan::Splice(edit) => {
                        let Some(freed) = edit.apply(room) else {
                            continue;
                        };
                        debug!("spliced {freed} tiles from {start:?} heading {direction:?}");
                        remaining_blocked -= freed;
                        failed_iterations = 0;
                        splices += 1;
                        break;
                    }
                    DetourPlan::TooClose => break,
                    DetourPlan::Miss => {}
                }
            }
        }

        splices
    }
}
