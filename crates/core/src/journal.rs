use crate::types::Direction;

use serde::{Deserialize, Serialize};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Accepted move intents for one run, enough to rebuild it from its starting seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u32,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Move { direction: Direction },
}

impl InputJournal {
    pub fn new(seed: u32) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, inputs: Vec::new() }
    }

    pub fn append_move(&mut self, direction: Direction, seq: u64) {
        self.inputs.push(InputRecord { seq, payload: InputPayload::Move { direction } });
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.inputs.iter().map(|record| match record.payload {
            InputPayload::Move { direction } => direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_survives_json_roundtrip() {
        let mut journal = InputJournal::new(420_023);
        journal.append_move(Direction::Up, 0);
        journal.append_move(Direction::Left, 1);

        let json = serde_json::to_string(&journal).expect("journal should serialize");
        let decoded: InputJournal = serde_json::from_str(&json).expect("journal should parse");

        assert_eq!(decoded, journal);
        assert_eq!(decoded.directions().collect::<Vec<_>>(), vec![Direction::Up, Direction::Left]);
    }
}
