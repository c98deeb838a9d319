use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::error;
use shuntcalc::{
    config::{Config, DEFAULT_MAX_TOKEN_LEN, DEFAULT_PRECISION, DEFAULT_PROMPT, DEFAULT_STACK_CAPACITY},
    repl::run_session,
};

/// shuntcalc evaluates infix arithmetic one line at a time, printing each
/// result or a descriptive error.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from this file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Digits printed after the decimal point.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: u16,

    /// Slots in each of the operand and operator stacks.
    #[arg(long, default_value_t = DEFAULT_STACK_CAPACITY)]
    stack_capacity: usize,

    /// Longest numeric literal accepted, in characters.
    #[arg(long, default_value_t = DEFAULT_MAX_TOKEN_LEN)]
    max_token_len: usize,

    /// Prompt printed before every line.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Prints results only, without prompts.
    #[arg(short, long)]
    quiet: bool,

    /// Logs every line outcome to standard error.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config { operand_capacity:  self.stack_capacity,
                 operator_capacity: self.stack_capacity,
                 max_token_len:     self.max_token_len,
                 precision:         self.precision,
                 prompt:            (!self.quiet).then(|| self.prompt.clone()), }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = args.config();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let result = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => run_session(&config, BufReader::new(file), &mut stdout, &mut stderr),
            Err(e) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist? ({e})",
                          path.display());
                return ExitCode::FAILURE;
            },
        },
        None => run_session(&config, io::stdin().lock(), &mut stdout, &mut stderr),
    };

    if let Err(e) = result {
        error!("session aborted: {e}");
        eprintln!("ERROR: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
