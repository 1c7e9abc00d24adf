//! Reference simulator for the generated machines, only used to check their behaviour.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::io::Cursor;
use turingbf::{parse, Compiler, Machine, Move, StateId, Symbol, Target};

pub const MAX_STEPS: usize = 50_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accept,
    Reject,
    /// No transition matched the current cell.
    Stuck,
    StepLimit
}

pub struct Run {
    pub outcome: Outcome,
    pub tape: HashMap<i64, Symbol>,
    pub head: i64,
    pub visited: HashSet<StateId>
}

impl Run {

    pub fn cell(&self, i: i64) -> Symbol {
        self.tape.get(&i).cloned().unwrap_or(Symbol::Blank)
    }

    /// Bytes written to the output region, up to the write head.
    pub fn output(&self, machine: &Machine) -> Vec<u8> {
        let layout = machine.layout();
        let mut out = Vec::new();
        for i in layout.write_head_origin()..layout.data_origin() {
            match self.cell(i as i64) {
                Symbol::Byte(b) => out.push(b),
                _ => break
            }
        }
        out
    }

    /// Brainfuck cell `offset` of the data region.
    pub fn data(&self, machine: &Machine, offset: usize) -> Symbol {
        self.cell((machine.layout().data_origin() + offset) as i64)
    }

}

/// Runs `machine` with `input` loaded on the first cells of the tape.
pub fn simulate(machine: &Machine, input: &[u8]) -> Run {
    let mut tape = input.iter()
        .enumerate()
        .map(|(i, b)| (i as i64, Symbol::Byte(*b)))
        .collect::<HashMap<_, _>>();
    let mut head = 0i64;
    let mut state = machine.start();
    let mut visited = HashSet::new();

    let mut outcome = Outcome::StepLimit;
    for _ in 0..MAX_STEPS {
        visited.insert(state);
        let cell = tape.get(&head).cloned().unwrap_or(Symbol::Blank);
        let t = match machine.state(state).transition_for(cell) {
            Some(t) => *t,
            None => {
                outcome = Outcome::Stuck;
                break;
            }
        };

        if t.write != Symbol::Any {
            tape.insert(head, t.write);
        }
        match t.shift {
            Move::Left => head -= 1,
            Move::Right => head += 1,
            Move::Stay => {}
        }
        match t.target {
            Target::State(next) => state = next,
            Target::Accept => {
                outcome = Outcome::Accept;
                break;
            },
            Target::Reject => {
                outcome = Outcome::Reject;
                break;
            }
        }
    }

    Run { outcome, tape, head, visited }
}

/// States reachable from the initial one.
pub fn reachable(machine: &Machine) -> HashSet<StateId> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(machine.start());
    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        for t in machine.state(id).transitions() {
            if let Target::State(next) = t.target {
                queue.push_back(next);
            }
        }
    }
    seen
}

pub fn compile(program: &[u8]) -> Machine {
    Compiler::new().compile(&parse(Cursor::new(program)).unwrap())
}
