use clap::{Parser, Subcommand};

mod config;
mod repl;

use config::FracConfig;

#[derive(Parser, Debug)]
#[command(name = "frac_cli", about = "Interactive fraction calculator", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive menu (default when no subcommand is given)
    Repl,
    /// Evaluate a single expression and print the formatted equation
    Eval {
        /// Expression such as "1/2+3/4"
        expr: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = FracConfig::load();

    match cli.command {
        Some(Command::Eval { expr }) => {
            if let Err(err) = run_eval(&expr, &config) {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        Some(Command::Repl) | None => {
            if let Err(err) = repl::Repl::new(config).run() {
                eprintln!("Error: {err:?}");
                std::process::exit(1);
            }
        }
    }
}

fn run_eval(expr: &str, config: &FracConfig) -> anyhow::Result<()> {
    let (operand1, op, operand2) = frac_parser::parse_expression(expr, &config.bounds())?;
    let equation = frac_core::Equation::evaluate(operand1, op, operand2)?;
    println!("{equation}");
    Ok(())
}
