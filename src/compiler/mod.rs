pub mod generators;
pub mod table;

use crate::machine::{Layout, Machine, Move, Symbol, Target, Transition, MAX_REGION_SIZE};
use crate::parser::{Instruction, Program};
use self::table::{StateKey, StateTable};

/// Builder for the [`Compiler`](crate::compiler::Compiler) struct.
#[derive(Debug, Clone, Default)]
pub struct CompilerBuilder {
    layout: Layout
}

impl CompilerBuilder {

    /// Creates a new [`CompilerBuilder`](crate::compiler::CompilerBuilder) with the default settings.
    pub fn new() -> CompilerBuilder {
        CompilerBuilder {
            layout: Layout::default()
        }
    }

    /// Sets the number of tape cells reserved for the program input.
    /// Panics if the size is zero or larger than [`MAX_REGION_SIZE`](crate::machine::MAX_REGION_SIZE).
    pub fn input_size(&mut self, input_size: usize) -> &mut Self {
        if input_size == 0 || input_size > MAX_REGION_SIZE {
            panic!("Input size must be between 1 and {}.", MAX_REGION_SIZE);
        }
        self.layout.input_size = input_size;
        self
    }

    /// Sets the number of tape cells reserved for the program output, write head included.
    /// Panics if the size is zero or larger than [`MAX_REGION_SIZE`](crate::machine::MAX_REGION_SIZE).
    pub fn output_size(&mut self, output_size: usize) -> &mut Self {
        if output_size == 0 || output_size > MAX_REGION_SIZE {
            panic!("Output size must be between 1 and {}.", MAX_REGION_SIZE);
        }
        self.layout.output_size = output_size;
        self
    }

    /// Builds the actual [`Compiler`](crate::compiler::Compiler).
    pub fn build(&mut self) -> Compiler {
        Compiler {
            layout: self.layout,
            table: StateTable::new()
        }
    }

}

/// Compiler from Brainfuck to a single-tape Turing Machine.
pub struct Compiler {
    layout: Layout,
    table: StateTable
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new()
    }
}

impl Compiler {

    /// Builds a [`Compiler`](crate::compiler::Compiler) with the default settings.
    pub fn new() -> Compiler {
        CompilerBuilder::new().build()
    }

    /// Creates a [`CompilerBuilder`](crate::compiler::CompilerBuilder) to configure
    /// a new [`Compiler`](crate::compiler::Compiler).
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Compiles the given program into a finished machine.
    pub fn compile(mut self, program: &Program) -> Machine {
        self.prologue();
        debug!("Prologue emitted {} states.", self.table.len());

        for (ip, instruction) in program.instructions().iter().enumerate() {
            self.compile_instruction(program, ip, *instruction);
        }
        self.epilogue(program.len());

        let instruction_states = (0..=program.len())
            .map(|ip| self.table.get(StateKey::Instruction(ip)))
            .collect::<Vec<_>>();
        let machine = self.table.freeze(self.layout, instruction_states);
        debug!("Generated {} states, {} transitions.", machine.states().len(), machine.transition_count());
        machine
    }

    fn compile_instruction(&mut self, program: &Program, ip: usize, instruction: Instruction) {
        use self::generators::*;
        trace!("Generating {:?} at {} ({} states so far).", instruction, ip, self.table.len());

        let table = &mut self.table;
        match instruction {
            Instruction::Add => add(table, ip),
            Instruction::Sub => sub(table, ip),
            Instruction::Right => right(table, ip),
            Instruction::Left => left(table, ip),
            Instruction::Output => output(table, ip),
            Instruction::Input => input(table, ip, self.layout.input_size),
            Instruction::LoopStart => loop_start(table, ip, Self::partner(program, ip)),
            Instruction::LoopEnd => loop_end(table, ip, Self::partner(program, ip))
        }
    }

    fn partner(program: &Program, ip: usize) -> usize {
        // The parser rejects unmatched brackets
        program.jump_target(ip).unwrap_or_else(|| panic!("Bracket at {} has no partner", ip))
    }

    /// Initializes the reserved regions of the tape, one state per cell,
    /// then hands off to the first instruction with the head on the data origin.
    fn prologue(&mut self) {
        let layout = self.layout;
        let data_origin = layout.data_origin();
        let table = &mut self.table;

        for cell in 0..data_origin {
            let state = table.get(StateKey::Prologue(cell));
            let next = table.get(StateKey::Prologue(cell + 1));

            if cell < layout.input_size {
                // Blank input cells count as already consumed
                table[state].push(Transition::new(Symbol::Blank, next, Symbol::MarkA, Move::Right));
                table[state].push(Transition::new(Symbol::Any, next, Symbol::Any, Move::Right));
            } else if cell == layout.write_head_origin() {
                table[state].push(Transition::new(Symbol::Any, next, Symbol::WriteHead, Move::Right));
            } else {
                table[state].push(Transition::new(Symbol::Any, next, Symbol::MarkA, Move::Right));
            }
        }

        let origin = table.get(StateKey::Prologue(data_origin));
        let first = table.get(StateKey::Instruction(0));
        table[origin].push(Transition::new(Symbol::Any, first, Symbol::Byte(0), Move::Stay));
    }

    /// Rewinds the head to the first input cell and accepts.
    fn epilogue(&mut self, len: usize) {
        let state = self.table.get(StateKey::Instruction(len));
        self.table[state].push(Transition::new(Symbol::Blank, Target::Accept, Symbol::Blank, Move::Right));
        self.table[state].push(Transition::new(Symbol::Any, state, Symbol::Any, Move::Left));
    }

}
