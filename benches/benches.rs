#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;

use std::io::{self, Cursor};
use std::fmt;
use criterion::{Criterion, ParameterizedBenchmark};
use turingbf::{Compiler, Machine, Program};
use turingbf::parser::parse;

struct Source<'a> {
    name: &'a str,
    raw_program: &'a [u8],
    program: Program,
    machine: Machine
}

impl<'a> fmt::Debug for Source<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

macro_rules! source {
    ($name:ident) => {
        {
            let raw_program: &[u8] = include_bytes!(concat!("../tests/programs/", stringify!($name), ".b"));
            let program = parse(Cursor::new(raw_program)).unwrap();
            let machine = Compiler::new().compile(&program);
            Source {
                name: stringify!($name),
                raw_program,
                program,
                machine
            }
        }
    };
}

lazy_static! {
    static ref SOURCES: [Source<'static>; 4] = [
        source!(hello_world),
        source!(seven),
        source!(increment_input),
        source!(reverse)
    ];
}

// Benchmark for the parser
fn parser_benches(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "Parser",
        move |b, &source| {
            b.iter(|| parse(Cursor::new(source.raw_program)).unwrap());
        },
        &*SOURCES
    );
}

// Generation of the machine compared with its serialization
fn compile_vs_dump(c: &mut Criterion) {
    c.bench("Backend",
        ParameterizedBenchmark::new(
            "Compile",
            |b, s| b.iter(|| Compiler::new().compile(&s.program)),
            &*SOURCES
        )
        .with_function(
            "Dump",
            |b, s| b.iter(|| s.machine.dump(&mut io::sink()).unwrap())
        )
    );
}

criterion_group!(benches, parser_benches, compile_vs_dump);
criterion_main!(benches);
