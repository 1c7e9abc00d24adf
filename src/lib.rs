#[macro_use] extern crate log;
#[macro_use] extern crate lazy_static;

pub mod error;
pub mod parser;
pub mod machine;
pub mod compiler;
pub mod printer;

pub use error::BrainfuckError;
pub use parser::{parse, Instruction, Program};
pub use machine::{Layout, Machine, Move, State, StateId, Symbol, Target, Transition, MAX_REGION_SIZE};
pub use compiler::{Compiler, CompilerBuilder};
