//! CLI wrapper for running note snippets.
//!
//! Usage:
//!   just-notes <file.js>              # Run a snippet file
//!   just-notes -e "code"              # Evaluate a snippet
//!   just-notes                        # Start REPL (interactive mode)

use clap::Parser;
use just_notes::parser::NotesParser;
use just_notes::runner::ds::value::Value;
use just_notes::runner::eval::{execute_statement, run_program};
use just_notes::runner::plugin::config::{EvalConfig, DEFAULT_MAX_FACTORIAL_INPUT};
use just_notes::runner::plugin::types::{ConsoleLine, EvalContext};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "just-notes", about = "Run JavaScript interview note snippets")]
struct Cli {
    /// Snippet file to run; omit for the REPL.
    file: Option<PathBuf>,

    /// Evaluate code instead of reading a file.
    #[arg(short, long, value_name = "CODE", conflicts_with = "file")]
    eval: Option<String>,

    /// Report results that do not fit in 64 bits as range errors instead of big integers.
    #[arg(long)]
    fixed_width: bool,

    /// Largest input accepted by `factorial`.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_FACTORIAL_INPUT)]
    max_factorial: u64,

    /// Log parsing and evaluation events to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.trace);

    let config = EvalConfig::new()
        .with_exact_integers(!args.fixed_width)
        .with_max_factorial_input(args.max_factorial);

    if let Some(code) = &args.eval {
        eval_code(code, config);
    } else if let Some(file) = &args.file {
        run_file(file, config);
    } else if let Err(e) = run_repl(config) {
        eprintln!("Error reading input: {}", e);
        process::exit(1);
    }
}

fn init_tracing(enabled: bool) {
    if !enabled {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

fn print_output(ctx: &mut EvalContext) {
    for line in ctx.take_output() {
        match line {
            ConsoleLine::Log(text) => println!("{}", text),
            ConsoleLine::Error(text) => eprintln!("{}", text),
        }
    }
}

/// Parse and run `source`, exiting the process on the first error.
fn run_or_exit(source: &str, config: EvalConfig) -> Option<Value> {
    let ast = match NotesParser::parse_to_ast_from_str(source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        }
    };

    let mut ctx = EvalContext::with_core().with_config(config);
    let result = run_program(&ast, &mut ctx);
    print_output(&mut ctx);
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            process::exit(1);
        }
    }
}

fn run_file(path: &PathBuf, config: EvalConfig) {
    let source = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            process::exit(1);
        }
    };
    run_or_exit(&source, config);
}

fn eval_code(code: &str, config: EvalConfig) {
    // Print the last value if it's not undefined
    if let Some(val) = run_or_exit(code, config) {
        if !matches!(val, Value::Undefined) {
            println!("{}", val.inspect());
        }
    }
}

fn run_repl(config: EvalConfig) -> io::Result<()> {
    println!("just-notes v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a snippet and press Enter. Type .exit to quit.");
    println!();

    let mut ctx = EvalContext::with_core().with_config(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        stdout.flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let input = input.trim();

        if input == ".exit" || input == ".quit" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let ast = match NotesParser::parse_to_ast_from_str(input) {
            Ok(program) => program,
            Err(e) => {
                eprintln!("Parse error: {}", e);
                continue;
            }
        };

        for stmt in &ast.body {
            let result = execute_statement(stmt, &mut ctx);
            print_output(&mut ctx);
            match result {
                Ok(completion) => {
                    if let Some(val) = completion.value {
                        if !matches!(val, Value::Undefined) {
                            println!("{}", val.inspect());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Runtime error: {}", e);
                    break;
                }
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
