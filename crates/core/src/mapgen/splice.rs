//! Detour planning and the splice transaction that threads a detour into the path.
//!
//! A detour replaces one path edge `from -> to` with a U-shaped loop that leaves
//! `from`, runs `depth` tiles away from the edge, crosses over, and comes back into
//! `to`. The edge is always perpendicular to the branch direction, so both legs of
//! the loop run parallel to each other and the path stays simple.

use std::iter;

use crate::room::Room;
use crate::types::{Direction, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum DetourPlan {
    Splice(SpliceEdit),
    /// The existing path already runs parallel within reach; the iteration gives up.
    TooClose,
    /// Nothing to splice in this direction; the next direction may still work.
    Miss,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct SpliceEdit {
    from: Pos,
    to: Pos,
    detour: Vec<Pos>,
}

pub(super) fn plan_detour(
    room: &Room,
    start: Pos,
    direction: Direction,
    stretch: usize,
) -> DetourPlan {
    let Some((junction, reach)) = cast_ray(room, start, direction) else {
        return DetourPlan::Miss;
    };
    let Some((from, to)) = perpendicular_edge(room, junction, direction) else {
        return DetourPlan::Miss;
    };

    // The junction's own leg is blocked up to `reach` by construction of the ray.
    let partner = if from == junction { to } else { from };
    let back = direction.opposite();
    let mut depth = reach.min(stretch);
    for step in 1..=depth {
        let probe = partner.offset(back, step as i32);
        if !room.is_interior(probe) {
            depth = step - 1;
            break;
        }
        if room.is_free(probe) {
            return DetourPlan::TooClose;
        }
    }
    if depth == 0 {
        return DetourPlan::Miss;
    }

    let outbound = (1..=depth).map(|step| from.offset(back, step as i32));
    let inbound = (1..=depth).rev().map(|step| to.offset(back, step as i32));
    DetourPlan::Splice(SpliceEdit { from, to, detour: outbound.chain(inbound).collect() })
}

/// Walk from `start` until a free tile is hit. Returns the junction and its distance.
fn cast_ray(room: &Room, start: Pos, direction: Direction) -> Option<(Pos, usize)> {
    let mut probe = start;
    let mut reach = 0;
    loop {
        probe = probe.step(direction);
        reach += 1;
        if !room.is_interior(probe) {
            return None;
        }
        if room.is_free(probe) {
            return Some((probe, reach));
        }
    }
}

/// Outgoing edge first, then incoming; only edges crossing `direction` can host a detour.
fn perpendicular_edge(room: &Room, junction: Pos, direction: Direction) -> Option<(Pos, Pos)> {
    let tile = room.tile(junction)?;
    let crosses = |a: Pos, b: Pos| {
        room.is_free(a)
            && room.is_free(b)
            && Direction::between(a, b).is_some_and(|step| step.is_perpendicular_to(direction))
    };

    if let Some(next) = tile.next
        && crosses(junction, next)
    {
        return Some((junction, next));
    }
    if let Some(previous) = tile.previous
        && crosses(previous, junction)
    {
        return Some((previous, junction));
    }
    None
}

impl SpliceEdit {
    /// The edit only applies to the room it was planned against.
    pub(super) fn is_valid_for(&self, room: &Room) -> bool {
        let edge_intact = room.tile(self.from).and_then(|tile| tile.next) == Some(self.to)
            && room.tile(self.to).and_then(|tile| tile.previous) == Some(self.from);
        let detour_blocked =
            self.detour.iter().all(|&pos| room.is_interior(pos) && !room.is_free(pos));
        let chain_adjacent = self
            .chain()
            .collect::<Vec<_>>()
            .windows(2)
            .all(|pair| Direction::between(pair[0], pair[1]).is_some());
        edge_intact && detour_blocked && chain_adjacent
    }

    /// Detach the edge, free the detour, relink. Returns the number of freed tiles, or
    /// `None` when the room no longer matches the plan, in which case nothing is touched.
    pub(super) fn apply(&self, room: &mut Room) -> Option<usize> {
        if !self.is_valid_for(room) {
            return None;
        }
        self.detach(room);
        self.mark_free(room);
        self.relink(room);
        Some(self.detour.len())
    }

    fn detach(&self, room: &mut Room) {
        room.unlink(self.from, self.to);
    }

    fn mark_free(&self, room: &mut Room) {
        for &pos in &self.detour {
            room.set_free(pos, true);
        }
    }

    fn relink(&self, room: &mut Room) {
        let chain: Vec<Pos> = self.chain().collect();
        for pair in chain.windows(2) {
            room.link(pair[0], pair[1]);
        }
    }

    fn chain(&self) -> impl Iterator<Item = Pos> + '_ {
        iter::once(self.from).chain(self.detour.iter().copied()).chain(iter::once(self.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomDims;

    fn column_room() -> Room {
        let mut room = Room::blocked(RoomDims::default());
        for y in 1..=5 {
            room.set_free(Pos { y, x: 4 }, true);
        }
        for y in 1..5 {
            room.link(Pos { y, x: 4 }, Pos { y: y + 1, x: 4 });
        }
        room
    }

    fn expect_splice(plan: DetourPlan) -> SpliceEdit {
        match plan {
            DetourPlan::Splice(edit) => edit,
            other => panic!("expected a splice, got {other:?}"),
        }
    }

    #[test]
    fn ray_toward_the_column_plans_a_u_detour() {
        let room = column_room();
        let edit = expect_splice(plan_detour(&room, Pos { y: 2, x: 1 }, Direction::Right, 9));

        assert_eq!(edit.from, Pos { y: 2, x: 4 });
        assert_eq!(edit.to, Pos { y: 3, x: 4 });
        assert_eq!(
            edit.detour,
            vec![
                Pos { y: 2, x: 3 },
                Pos { y: 2, x: 2 },
                Pos { y: 2, x: 1 },
                Pos { y: 3, x: 1 },
                Pos { y: 3, x: 2 },
                Pos { y: 3, x: 3 },
            ]
        );
    }

    #[test]
    fn stretch_caps_the_detour_depth() {
        let room = column_room();
        let edit = expect_splice(plan_detour(&room, Pos { y: 2, x: 0 }, Direction::Right, 2));
        assert_eq!(edit.detour.len(), 4);
    }

    #[test]
    fn top_junction_falls_back_to_incoming_edge() {
        let room = column_room();
        let edit = expect_splice(plan_detour(&room, Pos { y: 5, x: 6 }, Direction::Left, 9));
        assert_eq!((edit.from, edit.to), (Pos { y: 4, x: 4 }, Pos { y: 5, x: 4 }));
        assert_eq!(edit.detour.len(), 4);
    }

    #[test]
    fn ray_leaving_the_interior_misses() {
        let room = column_room();
        assert_eq!(plan_detour(&room, Pos { y: 2, x: 1 }, Direction::Left, 9), DetourPlan::Miss);
        assert_eq!(plan_detour(&room, Pos { y: 2, x: 1 }, Direction::Up, 9), DetourPlan::Miss);
    }

    #[test]
    fn parallel_edge_cannot_host_a_detour() {
        let mut room = column_room();
        room.set_free(Pos { y: 1, x: 4 }, false);
        // Junction (4,2) is reached moving up and every column edge runs vertically.
        assert_eq!(plan_detour(&room, Pos { y: 1, x: 4 }, Direction::Up, 9), DetourPlan::Miss);
    }

    #[test]
    fn free_tile_on_partner_leg_is_too_close() {
        let mut room = column_room();
        room.set_free(Pos { y: 3, x: 2 }, true);
        assert_eq!(
            plan_detour(&room, Pos { y: 2, x: 1 }, Direction::Right, 9),
            DetourPlan::TooClose
        );
    }

    #[test]
    fn applied_splice_keeps_a_single_path() {
        let mut room = column_room();
        let edit = expect_splice(plan_detour(&room, Pos { y: 2, x: 1 }, Direction::Right, 9));

        assert_eq!(edit.apply(&mut room), Some(6));
        assert_eq!(room.validate_path(), Ok(11));
        let walked: Vec<Pos> = room.path().take(5).collect();
        assert_eq!(
            walked,
            vec![
                Pos { y: 1, x: 4 },
                Pos { y: 2, x: 4 },
                Pos { y: 2, x: 3 },
                Pos { y: 2, x: 2 },
                Pos { y: 2, x: 1 },
            ]
        );
    }

    #[test]
    fn stale_edit_leaves_room_untouched() {
        let mut room = column_room();
        let edit = expect_splice(plan_detour(&room, Pos { y: 2, x: 1 }, Direction::Right, 9));
        room.set_free(Pos { y: 3, x: 2 }, true);
        let before = room.clone();

        assert_eq!(edit.apply(&mut room), None);
        assert_eq!(room, before);
    }
}
