//! Line-oriented op scripts replayed against a [`ThingVector`].
//!
//! ```text
//! # comments and blank lines are ignored
//! push 1
//! push 2
//! pop
//! at 0
//! dump
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use thing_vector::{Thing, ThingVector, VectorError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Push(i64),
    Pop,
    Front,
    Back,
    At(usize),
    Len,
    Capacity,
    Dump,
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or_else(|| "empty op".to_string())?;
        let operand = words.next();
        if let Some(extra) = words.next() {
            return Err(format!("unexpected trailing `{extra}`"));
        }

        let op = match (name, operand) {
            ("push", Some(value)) => Op::Push(
                value
                    .parse()
                    .map_err(|e| format!("bad push value `{value}`: {e}"))?,
            ),
            ("at", Some(index)) => Op::At(
                index
                    .parse()
                    .map_err(|e| format!("bad index `{index}`: {e}"))?,
            ),
            ("push" | "at", None) => return Err(format!("`{name}` needs an operand")),
            ("pop", None) => Op::Pop,
            ("front", None) => Op::Front,
            ("back", None) => Op::Back,
            ("len", None) => Op::Len,
            ("capacity", None) => Op::Capacity,
            ("dump", None) => Op::Dump,
            (_, Some(operand)) if is_known(name) => {
                return Err(format!("`{name}` takes no operand, got `{operand}`"))
            }
            _ => return Err(format!("unknown op `{name}`")),
        };
        Ok(op)
    }
}

fn is_known(name: &str) -> bool {
    matches!(name, "pop" | "front" | "back" | "len" | "capacity" | "dump")
}

/// Parse a whole script, naming the 1-based line of the first bad op.
pub fn parse_script(source: &str) -> Result<Vec<Op>, ReplayError> {
    let mut ops = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((code, _)) => code,
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        let op = line.parse::<Op>().map_err(|reason| ReplayError::Parse {
            line: i + 1,
            reason,
        })?;
        ops.push(op);
    }
    Ok(ops)
}

/// Result of applying one [`Op`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pushed { value: i64, len: usize, capacity: usize },
    Popped { value: i64, len: usize, capacity: usize },
    Value(i64),
    Count(usize),
    Contents(Vec<i64>),
    Failed(VectorError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pushed { value, len, capacity } => {
                write!(f, "pushed {value} (len {len}, capacity {capacity})")
            }
            Outcome::Popped { value, len, capacity } => {
                write!(f, "popped {value} (len {len}, capacity {capacity})")
            }
            Outcome::Value(value) => write!(f, "{value}"),
            Outcome::Count(count) => write!(f, "{count}"),
            Outcome::Contents(values) => write!(f, "{values:?}"),
            Outcome::Failed(err) => write!(f, "error: {err}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Replayer {
    things: ThingVector,
}

impl Replayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn things(&self) -> &ThingVector {
        &self.things
    }

    pub fn apply(&mut self, op: Op) -> Outcome {
        log::debug!("apply {op:?}");
        match op {
            Op::Push(value) => match self.things.try_push(Thing::new(value)) {
                Ok(()) => Outcome::Pushed {
                    value,
                    len: self.things.len(),
                    capacity: self.things.capacity(),
                },
                Err(err) => Outcome::Failed(err),
            },
            Op::Pop => match self.things.pop() {
                Ok(thing) => Outcome::Popped {
                    value: thing.value(),
                    len: self.things.len(),
                    capacity: self.things.capacity(),
                },
                Err(err) => Outcome::Failed(err),
            },
            Op::Front if self.things.is_empty() => Outcome::Failed(VectorError::EmptyContainer),
            Op::Front => Outcome::Value(self.things.front().value()),
            Op::Back if self.things.is_empty() => Outcome::Failed(VectorError::EmptyContainer),
            Op::Back => Outcome::Value(self.things.back().value()),
            Op::At(index) => match self.things.at(index) {
                Ok(thing) => Outcome::Value(thing.value()),
                Err(err) => Outcome::Failed(err),
            },
            Op::Len => Outcome::Count(self.things.len()),
            Op::Capacity => Outcome::Count(self.things.capacity()),
            Op::Dump => Outcome::Contents(self.things.as_slice().iter().map(Thing::value).collect()),
        }
    }

    pub fn run(&mut self, ops: impl IntoIterator<Item = Op>) -> Vec<Outcome> {
        ops.into_iter().map(|op| self.apply(op)).collect()
    }
}
