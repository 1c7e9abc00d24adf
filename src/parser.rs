use std::collections::HashMap;
use std::io::Read;
use crate::BrainfuckError;

/// A single Brainfuck instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Add,
    Sub,
    Right,
    Left,
    Input,
    Output,
    LoopStart,
    LoopEnd
}

impl Instruction {

    /// Maps a source byte to its instruction. Every other byte is a comment.
    pub fn from_byte(b: u8) -> Option<Instruction> {
        match b {
            b'+' => Some(Instruction::Add),
            b'-' => Some(Instruction::Sub),
            b'>' => Some(Instruction::Right),
            b'<' => Some(Instruction::Left),
            b',' => Some(Instruction::Input),
            b'.' => Some(Instruction::Output),
            b'[' => Some(Instruction::LoopStart),
            b']' => Some(Instruction::LoopEnd),
            _ => None
        }
    }

}

/// Span of bytes in the original source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub start: usize,
    pub end: usize
}

impl Position {

    /// Position of the single byte at `offset`.
    pub fn at(offset: usize) -> Position {
        Position {
            start: offset,
            end: offset + 1
        }
    }

}

/// A parsed Brainfuck program: the filtered instruction stream
/// together with the matching of its brackets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
    positions: Vec<Position>,
    jumps: HashMap<usize, usize>
}

impl Program {

    /// The filtered instructions.
    pub fn instructions(&self) -> &[Instruction] {
        &*self.instructions
    }

    /// Source position of the instruction at `ip`.
    pub fn position(&self, ip: usize) -> Option<Position> {
        self.positions.get(ip).cloned()
    }

    /// Index of the bracket matching the one at `ip`.
    pub fn jump_target(&self, ip: usize) -> Option<usize> {
        self.jumps.get(&ip).cloned()
    }

    /// The whole jump map. Contains both directions of every bracket pair.
    pub fn jumps(&self) -> &HashMap<usize, usize> {
        &self.jumps
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

}

/// Parses a Brainfuck program from the given stream.
///
/// Brackets are matched during the same scan: an unmatched `]` or
/// an unclosed `[` aborts parsing with a [`ParseError`](crate::BrainfuckError::ParseError).
pub fn parse(r: impl Read) -> Result<Program, BrainfuckError> {
    let mut program = Program::default();
    let mut pending: Vec<(usize, Position)> = Vec::new();

    for (offset, b) in r.bytes().enumerate() {
        let instruction = match Instruction::from_byte(b?) {
            Some(i) => i,
            None => continue
        };
        let ip = program.instructions.len();
        let position = Position::at(offset);

        match instruction {
            Instruction::LoopStart => pending.push((ip, position)),
            Instruction::LoopEnd => {
                let (start, _) = pending.pop().ok_or_else(|| BrainfuckError::ParseError {
                    message: "Unmatched ]".to_owned(),
                    position
                })?;
                program.jumps.insert(start, ip);
                program.jumps.insert(ip, start);
            },
            _ => {}
        }

        program.instructions.push(instruction);
        program.positions.push(position);
    }

    if let Some((_, position)) = pending.pop() {
        return Err(BrainfuckError::ParseError {
            message: "Unclosed [".to_owned(),
            position
        });
    }

    trace!("Parsed {} instructions, {} bracket pairs.", program.len(), program.jumps.len() / 2);
    Ok(program)
}
