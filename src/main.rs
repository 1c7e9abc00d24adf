#[macro_use] extern crate log;

use std::fs::File;
use std::io::{self, BufWriter};
use clap::{App, Arg};
use turingbf::{BrainfuckError, Compiler, MAX_REGION_SIZE};
use turingbf::parser::parse;

fn main_compile(path: &str, output: Option<&str>, input_size: usize, output_size: usize) -> Result<(), BrainfuckError> {

    // Parse the file
    debug!("Opening {}.", path);
    let file = File::open(path)?;
    debug!("Parsing source file.");
    let program = parse(file)?;

    // Generate the machine
    debug!("Compiling {} instructions.", program.len());
    let machine =
        Compiler::builder()
        .input_size(input_size)
        .output_size(output_size)
        .build()
        .compile(&program);
    info!("Generated {} states and {} transitions.", machine.states().len(), machine.transition_count());

    // Write it out
    match output {
        Some(out) => {
            debug!("Writing machine to {}.", out);
            machine.dump(&mut BufWriter::new(File::create(out)?))?;
        },
        None => {
            let stdout = io::stdout();
            machine.dump(&mut BufWriter::new(stdout.lock()))?;
        }
    }
    debug!("Done.");

    Ok(())

}

/// Parses the size of a reserved tape region given on the command line.
fn parse_size(name: &str, value: &str) -> Result<usize, BrainfuckError> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 && n <= MAX_REGION_SIZE => Ok(n),
        _ => Err(format!("Invalid {}: '{}' (expected 1 to {})", name, value, MAX_REGION_SIZE).into())
    }
}

fn main() {

    // All the cli options are here
    let matches = App::new("turingbf")
        .version("0.1.0")
        .author("Marco Cameriero")
        .about("Compiles Brainfuck to a single-tape Turing Machine")
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1)
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("FILE")
                .help("Writes the machine to the given file instead of stdout")
        )
        .arg(
            Arg::with_name("input-size")
                .long("input-size")
                .takes_value(true)
                .default_value("16")
                .help("Number of tape cells reserved for the program input")
        )
        .arg(
            Arg::with_name("output-size")
                .long("output-size")
                .takes_value(true)
                .default_value("16")
                .help("Number of tape cells reserved for the program output")
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity. Repeat to increase.")
        )
        .get_matches();

    // Initialize logger as soon as possible
    let verbosity = match matches.occurrences_of("v") {
        0     => "warn",
        1     => "info",
        2     => "debug",
        3 | _ => "trace"
    };
    env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or("TURINGBF_LOG", format!("turingbf={}", verbosity))
            .write_style_or("TURINGBF_LOG_STYLE", "auto")
    )
    .init();

    let file = matches.value_of("INPUT").unwrap();
    let sizes = parse_size("input size", matches.value_of("input-size").unwrap_or("16"))
        .and_then(|i| parse_size("output size", matches.value_of("output-size").unwrap_or("16")).map(|o| (i, o)));

    let res = sizes.and_then(|(input_size, output_size)| {
        main_compile(file, matches.value_of("output"), input_size, output_size)
    });
    if let Err(e) = res {
        error!("{}", e);
        std::process::exit(1);
    }
}
