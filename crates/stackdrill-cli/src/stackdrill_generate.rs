//! Worksheet generation CLI
//!
//! Usage: stackdrill_generate <plus|minus|mix> [options]
//!
//! Options:
//!   -o, --output <PATH>          Output markup file (default: output.tex)
//!   -s, --stack-height <N>       Maximum operands per problem, 2-4 (default: 4)
//!   -t, --total-problems <N>     Problems to generate, rounded up to rows of 5 (default: 50)
//!   --seed <N>                   Seed for reproducible worksheets
//!   --help, -h                   Show help
//!
//! Example: stackdrill_generate mix -t 20 -o drill.tex

use rand::SeedableRng;
use rand::rngs::StdRng;
use stackdrill_core::app::generator::{GenerateOptions, generate_worksheet_with_progress};
use stackdrill_core::constants::{
    DEFAULT_MAX_OPERANDS, DEFAULT_OUTPUT_PATH, DEFAULT_TOTAL_PROBLEMS, MAX_OPERANDS, MIN_OPERANDS,
    PROBLEMS_PER_ROW,
};
use stackdrill_core::domain::problem::clamp_stack_height;
use stackdrill_core::infra::markup_io::save_document;
use stackdrill_core::Operation;
use std::env;
use std::time::Instant;

/// Answer key lines shown after generation
const ANSWER_PREVIEW: usize = 3;

struct Args {
    operation: Operation,
    output: String,
    stack_height: i64,
    total_problems: usize,
    seed: Option<u64>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <plus|minus|mix> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <operation>              plus, minus or mix");
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  -o, --output <PATH>      Output markup file (default: {})",
        DEFAULT_OUTPUT_PATH
    );
    eprintln!(
        "  -s, --stack-height <N>   Maximum operands per problem, {}-{} (default: {})",
        MIN_OPERANDS, MAX_OPERANDS, DEFAULT_MAX_OPERANDS
    );
    eprintln!(
        "  -t, --total-problems <N> Problems to generate, rounded up to rows of {} (default: {})",
        PROBLEMS_PER_ROW, DEFAULT_TOTAL_PROBLEMS
    );
    eprintln!("  --seed <N>               Seed for reproducible worksheets");
    eprintln!("  --help, -h               Show this help message");
    eprintln!();
    eprintln!("Note: problems with 3 or 4 operands are always addition, even for minus/mix.");
}

fn option_value<'a>(args: &'a [String], i: usize) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", args[i]))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut operation: Option<Operation> = None;
    let mut output = DEFAULT_OUTPUT_PATH.to_string();
    let mut stack_height = DEFAULT_MAX_OPERANDS as i64;
    let mut total_problems = DEFAULT_TOTAL_PROBLEMS;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                output = option_value(&args, i)?.to_string();
                i += 1;
            }
            "-s" | "--stack-height" => {
                let value = option_value(&args, i)?;
                stack_height = value
                    .parse()
                    .map_err(|_| format!("Invalid stack height: {}", value))?;
                i += 1;
            }
            "-t" | "--total-problems" => {
                let value = option_value(&args, i)?;
                total_problems = value
                    .parse()
                    .map_err(|_| format!("Invalid problem count: {}", value))?;
                i += 1;
            }
            "--seed" => {
                let value = option_value(&args, i)?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid seed: {}", value))?,
                );
                i += 1;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if operation.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                operation = Some(arg.parse().map_err(|e| format!("{}", e))?);
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let operation = operation.ok_or("Missing operation argument")?;

    Ok(Args {
        operation,
        output,
        stack_height,
        total_problems,
        seed,
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let max_operands = clamp_stack_height(args.stack_height);
    if max_operands as i64 != args.stack_height {
        eprintln!(
            "Warning: Stack height {} is outside {}-{}, using {}",
            args.stack_height, MIN_OPERANDS, MAX_OPERANDS, max_operands
        );
    }

    let options = GenerateOptions {
        operation: args.operation,
        max_operands,
        total_problems: args.total_problems,
        per_row: PROBLEMS_PER_ROW,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!(
        "Generating {} problems ({} rows of {})...",
        options.problem_count(),
        options.rows(),
        PROBLEMS_PER_ROW
    );
    if let Some(seed) = args.seed {
        println!("Using seed {}.", seed);
    }

    let start = Instant::now();
    let worksheet = match generate_worksheet_with_progress(&mut rng, &options, |current, total| {
        log::trace!("Generated problem {}/{}", current, total);
    }) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error generating problems: {}", e);
            std::process::exit(1);
        }
    };

    match save_document(&args.output, &worksheet.document) {
        Ok(_) => println!("Generated LaTeX problems saved to {}", args.output),
        Err(e) => {
            eprintln!("Error saving document: {}", e);
            std::process::exit(1);
        }
    }

    for line in worksheet.answer_key().take(ANSWER_PREVIEW) {
        println!("  {}", line);
    }
    if worksheet.problems.len() > ANSWER_PREVIEW {
        println!("  ...");
    }

    println!(
        "Done! {} problems in {:.2} seconds.",
        worksheet.problems.len(),
        start.elapsed().as_secs_f64()
    );
}
