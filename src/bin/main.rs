use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use lp_analyzer::analysis::{AnalysisConfig, analyze};
use lp_analyzer::io::import;
use lp_analyzer::report::{default_output_path, render};

/// Find badly scaled coefficients, bounds and right-hand sides in a linear program.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Opts {
    /// File containing the problem description, in MPS format
    input_file: PathBuf,
    /// File to write the report to [default: the input file with a .txt extension]
    #[arg(short, long)]
    output_file: Option<PathBuf>,
    /// Print the report instead of writing it to a file
    #[arg(long, conflicts_with = "output_file")]
    stdout: bool,
    /// Let the objective function count towards the variable coefficient statistics
    #[arg(long)]
    include_objective: bool,
    /// Also report the N variables that appear in the most rows
    #[arg(long, value_name = "N", default_value_t = 0)]
    densest_columns: usize,
    /// Print the model that was read
    #[arg(long)]
    print_model: bool,
    /// More logging; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", error);
        exit(1);
    }

    let model = match import(&opts.input_file) {
        Ok(model) => model,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        },
    };

    if opts.print_model {
        println!("{}", model);
    }

    let config = AnalysisConfig {
        include_objective_coefficients: opts.include_objective,
        densest_columns: opts.densest_columns,
    };
    let report = render(&analyze(&model, &config));

    if opts.stdout {
        print!("{}", report);
        return;
    }

    let output_file = opts.output_file.unwrap_or_else(|| default_output_path(&opts.input_file));
    if let Err(error) = fs::write(&output_file, report) {
        eprintln!("Could not write report to {}: {}", output_file.display(), error);
        exit(1);
    }
    info!(component = "cli", path = %output_file.display(), "Report written");
}
