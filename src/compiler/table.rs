use std::collections::HashMap;
use std::ops::{Index, IndexMut};
use crate::machine::{Layout, Machine, State, StateId};

/// Private helper states owned by a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `>`: zero-initializes a never visited cell.
    ZeroFill,
    /// `<`: rejects when the head leaves the data region.
    UnderflowGuard,
    /// `,`: walks left to the beginning of the input region.
    SeekInputStart,
    /// `,`: looks for the first unconsumed input cell, one state per cell of the input region.
    FindUnconsumed(usize)
}

/// Phases of the 256-way fan-outs used by `.` and `,`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    SeekWriteHead,
    AdvanceWriteHead,
    Return
}

/// Abstract name of a state, resolved to a [`StateId`](crate::machine::StateId) on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// Prologue state initializing the given tape cell.
    Prologue(usize),
    /// Entry state of the instruction at the given index.
    Instruction(usize),
    Helper { ip: usize, role: Role },
    Indexed { ip: usize, phase: Phase, value: u8 }
}

/// Arena of states, allocating each key exactly once.
#[derive(Debug, Default)]
pub struct StateTable {
    states: Vec<State>,
    ids: HashMap<StateKey, StateId>
}

impl StateTable {

    pub fn new() -> StateTable {
        StateTable::default()
    }

    /// Returns the state for `key`, appending a new empty one on the first request.
    pub fn get(&mut self, key: StateKey) -> StateId {
        let states = &mut self.states;
        *self.ids.entry(key).or_insert_with(|| {
            states.push(State::default());
            StateId(states.len() - 1)
        })
    }

    /// Returns the id of `key` if it has already been allocated.
    pub fn index_of(&self, key: StateKey) -> Option<StateId> {
        self.ids.get(&key).cloned()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Freezes the table into a [`Machine`](crate::machine::Machine).
    pub fn freeze(self, layout: Layout, instruction_states: Vec<StateId>) -> Machine {
        debug_assert!(
            self.states.iter().all(|s| !s.transitions().is_empty()),
            "every allocated state must have at least one transition"
        );
        Machine::new(self.states, layout, instruction_states)
    }

}

impl Index<StateId> for StateTable {
    type Output = State;

    fn index(&self, id: StateId) -> &State {
        &self.states[id.0]
    }
}

impl IndexMut<StateId> for StateTable {
    fn index_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Move, Symbol, Target, Transition};

    #[test]
    fn test_same_key_same_state() {
        let mut table = StateTable::new();
        let a = table.get(StateKey::Instruction(1));
        let b = table.get(StateKey::Helper { ip: 0, role: Role::ZeroFill });
        assert_eq!(table.get(StateKey::Instruction(1)), a);
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_allocation_order() {
        let mut table = StateTable::new();
        assert_eq!(table.get(StateKey::Prologue(0)), StateId(0));
        assert_eq!(table.get(StateKey::Indexed { ip: 0, phase: Phase::Return, value: 9 }), StateId(1));
        assert_eq!(table.get(StateKey::Indexed { ip: 0, phase: Phase::Return, value: 10 }), StateId(2));
        assert_eq!(table.index_of(StateKey::Prologue(0)), Some(StateId(0)));
        assert_eq!(table.index_of(StateKey::Prologue(1)), None);
    }

    #[test]
    fn test_mutation_through_index() {
        let mut table = StateTable::new();
        let id = table.get(StateKey::Instruction(0));
        table[id].push(Transition::new(Symbol::Any, Target::Accept, Symbol::Any, Move::Stay));

        // Requesting the key again must not reset the state
        let again = table.get(StateKey::Instruction(0));
        assert_eq!(table[again].transitions().len(), 1);
    }
}
