//! Textual form of a [`Machine`](crate::machine::Machine), as read by the Turing Machine simulator.
//!
//! ```text
//! alphabet: 0, 1, ..., 255, A, B, WH;
//! accept: qA;
//! reject: qR;
//! q0 {
//!     _ -> q1 A >
//!     * -> q1 * >
//! }
//! ```

use std::fmt;
use std::io::Write;
use itertools::Itertools;
use crate::BrainfuckError;
use crate::machine::{Machine, State, StateId, Symbol, Target};

lazy_static! {

    /// Symbols declared in the alphabet. Blank and the wildcard are implicit.
    pub static ref ALPHABET: Vec<Symbol> =
        (0..=255u8).map(Symbol::Byte)
        .chain(vec![Symbol::MarkA, Symbol::MarkB, Symbol::WriteHead])
        .collect();

}

struct StateDisplay<'a>(StateId, &'a State);

impl<'a> fmt::Display for StateDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} {{", self.0)?;
        for t in self.1.transitions() {
            writeln!(f, "    {} -> {} {} {}", t.read, t.target, t.write, t.shift)?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "alphabet: {};", ALPHABET.iter().join(", "))?;
        writeln!(f, "accept: {};", Target::Accept)?;
        writeln!(f, "reject: {};", Target::Reject)?;
        for (i, state) in self.states().iter().enumerate() {
            writeln!(f, "{}", StateDisplay(StateId(i), state))?;
        }
        Ok(())
    }
}

impl Machine {

    /// Dumps the machine in its textual form to the given stream.
    pub fn dump(&self, target: &mut impl Write) -> Result<(), BrainfuckError> {
        write!(target, "{}", self)?;
        target.flush()?;
        Ok(())
    }

}
