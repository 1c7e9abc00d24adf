//! Single-tape Turing Machine model produced by the [`Compiler`](crate::Compiler).

use std::fmt;

/// A symbol that can be read from or written to the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A Brainfuck cell value.
    Byte(u8),
    /// Default content of a never visited cell.
    Blank,
    /// Matches every symbol. When written, leaves the cell untouched.
    Any,
    /// Consumed input cell or free output slot.
    MarkA,
    /// Temporary marker left on the data cell while `.` and `,` travel the tape.
    MarkB,
    /// Position where the next output byte will be written.
    WriteHead
}

impl Symbol {

    /// Returns whether a transition reading `self` fires on a cell holding `cell`.
    pub fn matches(self, cell: Symbol) -> bool {
        self == Symbol::Any || self == cell
    }

}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Byte(b) => write!(f, "{}", b),
            Symbol::Blank => write!(f, "_"),
            Symbol::Any => write!(f, "*"),
            Symbol::MarkA => write!(f, "A"),
            Symbol::MarkB => write!(f, "B"),
            Symbol::WriteHead => write!(f, "WH")
        }
    }
}

/// Stable index of a state inside a [`Machine`](crate::machine::Machine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub usize);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Destination of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    State(StateId),
    Accept,
    Reject
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Target::State(id) => write!(f, "{}", id),
            Target::Accept => write!(f, "qA"),
            Target::Reject => write!(f, "qR")
        }
    }
}

impl From<StateId> for Target {
    fn from(id: StateId) -> Self {
        Target::State(id)
    }
}

/// Head movement after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Stay
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Left => write!(f, "<"),
            Move::Right => write!(f, ">"),
            Move::Stay => write!(f, "!")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub read: Symbol,
    pub target: Target,
    pub write: Symbol,
    pub shift: Move
}

impl Transition {

    pub fn new(read: Symbol, target: impl Into<Target>, write: Symbol, shift: Move) -> Transition {
        Transition {
            read,
            target: target.into(),
            write,
            shift
        }
    }

}

/// Ordered list of transitions. The first matching one wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    transitions: Vec<Transition>
}

impl State {

    pub fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    pub fn transitions(&self) -> &[Transition] {
        &*self.transitions
    }

    /// Returns the first transition firing on `cell`, if any.
    pub fn transition_for(&self, cell: Symbol) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.read.matches(cell))
    }

}

/// Largest number of cells a reserved region of the tape can span.
pub const MAX_REGION_SIZE: usize = 4096;

/// Arrangement of the reserved regions on the tape.
///
/// Cells are numbered from the initial head position:
/// `input_size` input cells, then the write head followed by the free output slots
/// (`output_size` cells in total), then the Brainfuck data cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub input_size: usize,
    pub output_size: usize
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            input_size: 16,
            output_size: 16
        }
    }
}

impl Layout {

    /// Cell holding the write head when the program starts.
    pub fn write_head_origin(&self) -> usize {
        self.input_size
    }

    /// Cell of the data pointer when the program starts.
    pub fn data_origin(&self) -> usize {
        self.input_size + self.output_size
    }

}

/// A finished Turing Machine. State `q0` is the initial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    states: Vec<State>,
    layout: Layout,
    instruction_states: Vec<StateId>
}

impl Machine {

    pub(crate) fn new(states: Vec<State>, layout: Layout, instruction_states: Vec<StateId>) -> Machine {
        Machine {
            states,
            layout,
            instruction_states
        }
    }

    pub fn states(&self) -> &[State] {
        &*self.states
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub fn start(&self) -> StateId {
        StateId(0)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// State executing the instruction at `ip`.
    /// `ip == program.len()` is the final state that rewinds the head and accepts.
    pub fn instruction_state(&self, ip: usize) -> Option<StateId> {
        self.instruction_states.get(ip).cloned()
    }

    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matches_everything() {
        for &cell in &[Symbol::Byte(0), Symbol::Byte(255), Symbol::Blank, Symbol::MarkA, Symbol::MarkB, Symbol::WriteHead] {
            assert!(Symbol::Any.matches(cell));
        }
        assert!(Symbol::Byte(3).matches(Symbol::Byte(3)));
        assert!(!Symbol::Byte(0).matches(Symbol::Blank));
        assert!(!Symbol::Byte(0).matches(Symbol::MarkA));
    }

    #[test]
    fn test_first_match_wins() {
        let mut state = State::default();
        state.push(Transition::new(Symbol::Byte(0), Target::Accept, Symbol::Any, Move::Stay));
        state.push(Transition::new(Symbol::Any, Target::Reject, Symbol::Any, Move::Stay));
        state.push(Transition::new(Symbol::Byte(1), Target::Accept, Symbol::Any, Move::Stay));

        assert_eq!(state.transition_for(Symbol::Byte(0)).unwrap().target, Target::Accept);
        assert_eq!(state.transition_for(Symbol::Byte(1)).unwrap().target, Target::Reject);
    }

    #[test]
    fn test_layout() {
        let widest = Layout { input_size: MAX_REGION_SIZE, output_size: MAX_REGION_SIZE };
        assert_eq!(widest.data_origin(), 2 * MAX_REGION_SIZE);

        let layout = Layout::default();
        assert_eq!(layout.write_head_origin(), 16);
        assert_eq!(layout.data_origin(), 32);
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::Byte(42).to_string(), "42");
        assert_eq!(Symbol::WriteHead.to_string(), "WH");
        assert_eq!(Target::State(StateId(7)).to_string(), "q7");
        assert_eq!(Target::Reject.to_string(), "qR");
        assert_eq!(Move::Stay.to_string(), "!");
    }
}
