//! Numbered-menu REPL over the session stores.
//!
//! Six documented options plus the undocumented 256, which clears the
//! console and redraws the menu. Invalid fraction entry re-prompts inside
//! the option; an invalid menu choice just reports and loops.

use frac_core::{Equation, Fraction};
use frac_parser::Bounds;
use frac_session::SessionState;
use rand::Rng;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::config::FracConfig;

const LIMIT_REACHED: &str = "Fractions Limit Reached";
const INVALID_OPTION: &str = "No working case. Retry.";
const INVALID_FRACTION: &str = "Invalid Fraction. Please Retry.";

pub struct Repl {
    state: SessionState,
    bounds: Bounds,
}

impl Repl {
    pub fn new(config: FracConfig) -> Self {
        Self {
            state: SessionState::new(config.capacity),
            bounds: config.bounds(),
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        show_menu();

        loop {
            let readline = rl.readline("\nPlease choose an option:\n> ");
            match readline {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;

                    let choice: i64 = match line.parse() {
                        Ok(n) => n,
                        Err(_) => {
                            println!("{INVALID_OPTION}");
                            continue;
                        }
                    };
                    debug!(choice, "menu dispatch");
                    if !self.dispatch(choice, &mut rl)? {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Returns `Ok(false)` when the user chose to quit.
    fn dispatch(&mut self, choice: i64, rl: &mut DefaultEditor) -> rustyline::Result<bool> {
        match choice {
            1 => self.create_random_fraction(),
            2 => self.get_fraction_from_user(rl)?,
            3 => self.display_fractions(),
            4 => self.evaluate_expression(rl)?,
            5 => self.display_all_equations(),
            6 => {
                println!("\nGood bye!");
                return Ok(false);
            }
            256 => show_menu(),
            _ => println!("{INVALID_OPTION}"),
        }
        Ok(true)
    }

    /// Option 1. Random fractions may be zero or negative even though typed
    /// ones may not; the denominator is re-drawn until nonzero.
    fn create_random_fraction(&mut self) {
        if !self.state.fractions.can_store() {
            println!("{LIMIT_REACHED}");
            return;
        }

        let mut rng = rand::thread_rng();
        let mut numerator = rng.gen_range(0..self.bounds.max_numerator);
        let mut denominator = 0;
        while denominator == 0 {
            denominator = rng.gen_range(0..self.bounds.max_denominator);
        }
        if rng.gen_bool(0.5) {
            numerator = -numerator;
        }

        if let Err(err) = self.state.fractions.store(Fraction::new(numerator, denominator)) {
            println!("{err}");
        }
    }

    /// Option 2. Re-prompts until the entry parses and validates.
    fn get_fraction_from_user(&mut self, rl: &mut DefaultEditor) -> rustyline::Result<()> {
        if !self.state.fractions.can_store() {
            println!("{LIMIT_REACHED}");
            return Ok(());
        }

        let fraction = loop {
            let line = match rl.readline("Please enter a fraction : ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
                Err(err) => return Err(err),
            };
            match frac_parser::parse_fraction(&line, &self.bounds) {
                Ok(fraction) => break fraction,
                Err(_) => println!("{INVALID_FRACTION}"),
            }
        };

        if let Err(err) = self.state.fractions.store(fraction) {
            println!("{err}");
        }
        Ok(())
    }

    /// Option 3. Raw entry alongside its reduced form, in insertion order.
    fn display_fractions(&self) {
        for (index, fraction) in self.state.fractions.list().iter().enumerate() {
            println!("Fraction {}: {} = {}", index + 1, fraction, fraction.reduced());
        }
    }

    /// Option 4. Re-prompts until a valid expression parses, then evaluates
    /// and stores the equation.
    fn evaluate_expression(&mut self, rl: &mut DefaultEditor) -> rustyline::Result<()> {
        if !self.state.equations.can_store() {
            println!("{LIMIT_REACHED}");
            return Ok(());
        }

        let equation = loop {
            let line = match rl.readline("Please enter an expression to evaluate : ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
                Err(err) => return Err(err),
            };
            let (operand1, op, operand2) =
                match frac_parser::parse_expression(&line, &self.bounds) {
                    Ok(parts) => parts,
                    Err(_) => {
                        println!("{INVALID_FRACTION}");
                        continue;
                    }
                };
            match Equation::evaluate(operand1, op, operand2) {
                Ok(equation) => break equation,
                Err(err) => println!("{err}"),
            }
        };

        if let Err(err) = self.state.equations.store(equation) {
            println!("{err}");
        }
        Ok(())
    }

    /// Option 5.
    fn display_all_equations(&self) {
        println!("Here are all equations stored in history:");
        for (index, equation) in self.state.equations.list().iter().enumerate() {
            println!("Equation {} : {}", index + 1, equation);
        }
    }
}

fn show_menu() {
    // Clear the console before redrawing.
    print!("\x1b[1;1H\x1b[2J");
    println!("Options:");
    println!("1. Create Random Fraction");
    println!("2. Get Fraction From User");
    println!("3. Display Fractions");
    println!("4. Evaluate Expression");
    println!("5. Display All Equations");
    println!("6. Quit");
}
