//! One generator per Brainfuck instruction.
//!
//! Each generator fills the state of its own instruction pointer and any private
//! helper state it needs, linking to `StateKey::Instruction(ip + 1)` when done.
//! Since the [`StateTable`](crate::compiler::table::StateTable) hands out exactly one state
//! per key, instructions can be generated independently and still form a single graph.

use crate::machine::{Move, StateId, Symbol, Target, Transition};
use crate::compiler::table::{Phase, Role, StateKey, StateTable};

use Move::*;
use Symbol::{Any, Blank, Byte, MarkA, MarkB, WriteHead};

fn next(table: &mut StateTable, ip: usize) -> StateId {
    table.get(StateKey::Instruction(ip + 1))
}

/// Emits a clone of a sub-graph for every byte value.
///
/// A Turing Machine cannot carry a value in a register while moving the head,
/// so `.` and `,` remember the byte they move around by being in one of 256 copies of the same state.
/// `emit` receives the table, the value and the state of the clone for that value.
pub fn fan_out<F>(table: &mut StateTable, ip: usize, phase: Phase, mut emit: F)
    where F: FnMut(&mut StateTable, u8, StateId)
{
    for value in 0..=255u8 {
        let id = table.get(StateKey::Indexed { ip, phase, value });
        emit(table, value, id);
    }
}

fn indexed(table: &mut StateTable, ip: usize, phase: Phase, value: u8) -> StateId {
    table.get(StateKey::Indexed { ip, phase, value })
}

/// Writes `f(i)` for every cell value `i`. Marker symbols are rejected.
fn map_cell<F>(table: &mut StateTable, ip: usize, f: F)
    where F: Fn(u8) -> u8
{
    let next = next(table, ip);
    let state = table.get(StateKey::Instruction(ip));
    for i in 0..=255u8 {
        table[state].push(Transition::new(Byte(i), next, Byte(f(i)), Stay));
    }
    table[state].push(Transition::new(Any, Target::Reject, Any, Stay));
}

/// `+`
pub fn add(table: &mut StateTable, ip: usize) {
    map_cell(table, ip, |i| i.wrapping_add(1));
}

/// `-`
pub fn sub(table: &mut StateTable, ip: usize) {
    map_cell(table, ip, |i| i.wrapping_sub(1));
}

/// `>`
///
/// Data grows rightward: a blank cell reached this way is initialized to zero.
pub fn right(table: &mut StateTable, ip: usize) {
    let next = next(table, ip);
    let state = table.get(StateKey::Instruction(ip));
    let zero_fill = table.get(StateKey::Helper { ip, role: Role::ZeroFill });

    table[state].push(Transition::new(Any, zero_fill, Any, Right));
    table[zero_fill].push(Transition::new(Blank, next, Byte(0), Stay));
    table[zero_fill].push(Transition::new(Any, next, Any, Stay));
}

/// `<`
///
/// The cell left of the data origin is always a free output slot or the write head,
/// so landing on one of those means the data pointer underflowed.
pub fn left(table: &mut StateTable, ip: usize) {
    let next = next(table, ip);
    let state = table.get(StateKey::Instruction(ip));
    let guard = table.get(StateKey::Helper { ip, role: Role::UnderflowGuard });

    table[state].push(Transition::new(Any, guard, Any, Left));
    table[guard].push(Transition::new(MarkA, Target::Reject, Any, Stay));
    table[guard].push(Transition::new(WriteHead, Target::Reject, Any, Stay));
    table[guard].push(Transition::new(Any, next, Any, Stay));
}

/// Walks right until the `B` sentinel, then writes the remembered value over it.
fn return_phase(table: &mut StateTable, ip: usize) {
    let next = next(table, ip);
    fan_out(table, ip, Phase::Return, |table, value, id| {
        table[id].push(Transition::new(MarkB, next, Byte(value), Stay));
        table[id].push(Transition::new(Any, id, Any, Right));
    });
}

/// `.`
///
/// Appends the current cell to the output region:
/// 1. mark the data cell with `B`, remembering its value `i`;
/// 2. walk left to the write head and write `i` over it;
/// 3. turn the following free slot into the new write head;
/// 4. walk right back to `B` and restore `i`.
pub fn output(table: &mut StateTable, ip: usize) {
    let state = table.get(StateKey::Instruction(ip));
    for i in 0..=255u8 {
        let seek = indexed(table, ip, Phase::SeekWriteHead, i);
        table[state].push(Transition::new(Byte(i), seek, MarkB, Stay));
    }
    table[state].push(Transition::new(Any, Target::Reject, Any, Stay));

    fan_out(table, ip, Phase::SeekWriteHead, |table, value, id| {
        let advance = indexed(table, ip, Phase::AdvanceWriteHead, value);
        table[id].push(Transition::new(WriteHead, advance, Byte(value), Right));
        table[id].push(Transition::new(Any, id, Any, Left));
    });

    // No free slot after the write head: the output region is exhausted
    fan_out(table, ip, Phase::AdvanceWriteHead, |table, value, id| {
        let ret = indexed(table, ip, Phase::Return, value);
        table[id].push(Transition::new(MarkA, ret, WriteHead, Right));
        table[id].push(Transition::new(Any, Target::Reject, Any, Stay));
    });

    return_phase(table, ip);
}

/// `,`, with `input_size` the number of cells of the input region.
///
/// Consumes the first unconsumed input cell:
/// mark the data cell with `B`, rewind to the blank before the input region,
/// skip the consumed (`A`) cells, consume the next one remembering its value `i`,
/// then walk right back to `B` and write `i`.
///
/// The scan counts the cells it visits, one state per cell, so that it never
/// mistakes bytes already written to the output region for input.
pub fn input(table: &mut StateTable, ip: usize, input_size: usize) {
    fn find(table: &mut StateTable, ip: usize, cell: usize) -> StateId {
        table.get(StateKey::Helper { ip, role: Role::FindUnconsumed(cell) })
    }

    let state = table.get(StateKey::Instruction(ip));
    let seek = table.get(StateKey::Helper { ip, role: Role::SeekInputStart });
    let first = find(table, ip, 0);

    table[state].push(Transition::new(Any, seek, MarkB, Left));

    table[seek].push(Transition::new(Blank, first, Any, Right));
    table[seek].push(Transition::new(Any, seek, Any, Left));

    for cell in 0..input_size {
        let current = find(table, ip, cell);
        let next_cell = find(table, ip, cell + 1);
        table[current].push(Transition::new(MarkA, next_cell, Any, Right));
        for i in 0..=255u8 {
            let ret = indexed(table, ip, Phase::Return, i);
            table[current].push(Transition::new(Byte(i), ret, MarkA, Right));
        }
        table[current].push(Transition::new(Any, Target::Reject, Any, Stay));
    }

    // Past the end of the input region: no input left
    let exhausted = find(table, ip, input_size);
    table[exhausted].push(Transition::new(Any, Target::Reject, Any, Stay));

    return_phase(table, ip);
}

/// `[`, with `end` the index of the matching `]`.
///
/// Only a concrete zero leaves the loop, markers never do.
pub fn loop_start(table: &mut StateTable, ip: usize, end: usize) {
    let next = next(table, ip);
    let exit = table.get(StateKey::Instruction(end + 1));
    let state = table.get(StateKey::Instruction(ip));

    table[state].push(Transition::new(Byte(0), exit, Byte(0), Stay));
    table[state].push(Transition::new(Any, next, Any, Stay));
}

/// `]`, with `start` the index of the matching `[`.
pub fn loop_end(table: &mut StateTable, ip: usize, start: usize) {
    let next = next(table, ip);
    let body = table.get(StateKey::Instruction(start + 1));
    let state = table.get(StateKey::Instruction(ip));

    table[state].push(Transition::new(Byte(0), next, Byte(0), Stay));
    table[state].push(Transition::new(Any, body, Any, Stay));
}
