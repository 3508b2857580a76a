use std::fs;

use clap::Parser;
use tinc::{parse_script, run_calc, run_script};

/// tinc is a tiny imperative scripting language with a script interpreter
/// and a line-oriented integer calculator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate with the line-oriented integer calculator instead of the
    /// script pipeline.
    #[arg(short, long)]
    calc: bool,

    /// Print the parsed syntax tree before running the program.
    #[arg(short, long)]
    dump_ast: bool,

    /// Path to the source file to run.
    file: String,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               &args.file);
                     std::process::exit(1);
                 });

    if args.calc {
        match run_calc(&source) {
            Ok(output) => {
                for line in output {
                    println!("{line}");
                }
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if args.dump_ast {
        let parsed = parse_script(&source);
        for statement in &parsed.statements {
            println!("{statement}");
        }
    }

    match run_script(&source) {
        Ok(run) => {
            for diagnostic in &run.diagnostics {
                eprintln!("{diagnostic}");
            }
            for line in run.output {
                println!("{line}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
