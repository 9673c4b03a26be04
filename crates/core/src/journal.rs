use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::types::GameInput;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    #[serde(default)]
    pub config: GeneratorConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub input: GameInput,
}

impl InputJournal {
    pub fn new(seed: u64, config: GeneratorConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    pub fn append(&mut self, input: GameInput) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, input });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn append_numbers_inputs_in_order() {
        let mut journal = InputJournal::new(7, GeneratorConfig::default());
        journal.append(GameInput::Move(Direction::Up));
        journal.append(GameInput::GiveUp);

        let seqs: Vec<u64> = journal.inputs.iter().map(|record| record.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn json_without_config_uses_default_board() {
        let journal = InputJournal::from_json(
            r#"{ "format_version": 1, "seed": 3, "inputs": [ { "seq": 0, "input": "Advance" } ] }"#,
        )
        .expect("journal parses");

        assert_eq!(journal.config, GeneratorConfig::default());
        assert_eq!(journal.inputs[0].input, GameInput::Advance);
    }

    #[test]
    fn moves_serialize_with_their_direction() {
        let mut journal = InputJournal::new(1, GeneratorConfig::default());
        journal.append(GameInput::Move(Direction::Left));
        let json = journal.to_json().expect("serializes");
        assert!(json.contains(r#""Move": "Left""#), "unexpected json: {json}");
        assert_eq!(InputJournal::from_json(&json).expect("parses"), journal);
    }
}
