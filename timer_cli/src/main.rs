//! # Timer555 CLI Application
//!
//! Terminal front end for the 555 timer calculator: pin reference, the
//! monostable component calculator, parts list and wiring guide.
//!
//! Values not given on the command line are prompted for; pressing Enter
//! keeps the default shown in brackets.

use std::io::{self, BufRead, Write};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use timer_core::bom::{bill_of_materials, wiring_guide};
use timer_core::pins::{self, PinInfo};
use timer_core::units::to_fixed;
use timer_core::{calculate, CalcError, CalculationResult, TimerDesign, TimerInput};
use tracing::Level;

/// Exit code when the calculator rejects its inputs
const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Parser)]
#[command(name = "timer555")]
#[command(about = "555 timer IC calculator: pin reference and monostable component picker", long_about = None)]
#[command(version)]
struct Cli {
    /// Log calculation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate timing components and driver transistor for a delay
    Calc(CalcArgs),

    /// List the eight pins of the 555
    Pins,

    /// Show one pin; trigger and output pins also run the calculator
    Pin {
        /// Pin number (1-8)
        number: u8,

        #[command(flatten)]
        calc: CalcArgs,
    },
}

#[derive(Args, Clone)]
struct CalcArgs {
    /// Desired delay in seconds
    #[arg(short, long, allow_negative_numbers = true)]
    delay: Option<f64>,

    /// Supply voltage in volts
    #[arg(long, allow_negative_numbers = true)]
    voltage: Option<f64>,

    /// Load current in mA
    #[arg(short, long, allow_negative_numbers = true)]
    current: Option<f64>,

    /// Use defaults for missing values instead of prompting
    #[arg(long)]
    no_input: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Also print the parts list and wiring guide
    #[arg(long)]
    bom: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripts and other front ends
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Calc(args) => handle_calc(&args),
        Commands::Pins => {
            handle_pins();
            0
        }
        Commands::Pin { number, calc } => handle_pin(number, &calc),
    };

    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn resolve_input(args: &CalcArgs) -> TimerInput {
    let defaults = TimerInput::default();
    // Prompts would corrupt JSON on stdout
    let may_prompt = !args.no_input && matches!(args.format, OutputFormat::Human);
    let value = |given: Option<f64>, prompt: &str, default: f64| match given {
        Some(v) => v,
        None if may_prompt => prompt_f64(prompt, default),
        None => default,
    };

    let missing = args.delay.is_none() || args.voltage.is_none() || args.current.is_none();
    if missing && may_prompt {
        println!("Enter 555 Delay Timer Parameters");
        println!();
    }

    TimerInput {
        delay_s: value(args.delay, "Delay (seconds)", defaults.delay_s),
        voltage_v: value(args.voltage, "Voltage (V)", defaults.voltage_v),
        load_current_ma: value(args.current, "Load Current (mA)", defaults.load_current_ma),
    }
}

fn handle_calc(args: &CalcArgs) -> i32 {
    let input = resolve_input(args);
    tracing::debug!(?input, "running monostable calculation");

    let result: CalculationResult = calculate(&input).into();

    match args.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", CalcError::from(e));
                return 1;
            }
        },
        OutputFormat::Human => print_human(&input, &result, args.bom),
    }

    if result.valid {
        0
    } else {
        EXIT_INVALID_INPUT
    }
}

fn handle_pins() {
    println!("NE555 / LM555 Pinout");
    println!("====================");
    for pin in pins::diagram_order() {
        println!(
            "  {} {:<4} {:<16} {}{}",
            pin.number,
            pin.label,
            pin.title,
            pin.description,
            if pin.has_calculator { "  [calculator]" } else { "" }
        );
    }
}

fn handle_pin(number: u8, calc: &CalcArgs) -> i32 {
    let pin = match pins::pin(number) {
        Ok(pin) => pin,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if matches!(calc.format, OutputFormat::Human) || !pin.has_calculator {
        print_pin(pin);
    }

    if pin.has_calculator {
        handle_calc(calc)
    } else {
        0
    }
}

fn print_pin(pin: &PinInfo) {
    println!("PIN {}: {}", pin.number, pin.label);
    println!("  {}", pin.title);
    println!("  {}", pin.description);
    println!();
}

fn print_human(input: &TimerInput, result: &CalculationResult, with_bom: bool) {
    let design = match &result.design {
        Some(design) if result.valid => design,
        _ => {
            eprintln!("Cannot calculate components:");
            for error in &result.errors {
                eprintln!("  - {}", error);
            }
            return;
        }
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  555 TIMER CONFIGURATION");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Delay:    {} s", input.delay_s);
    println!("  Voltage:  {} V", input.voltage_v);
    println!("  Load:     {} mA", input.load_current_ma);
    println!();
    println!("Component Values:");
    println!("  Resistor (R):  {} kΩ", to_fixed(design.resistor().kilohms(), 1));
    println!("  Capacitor (C): {} µF", design.capacitor_uf);
    println!("  Actual Delay:  {} s", design.actual_delay_display());
    println!("  Error:         {}%", design.delay_error_display());
    println!();
    print_transistor(design);
    println!();

    if !design.warnings.is_empty() {
        println!("Warnings:");
        for warning in &design.warnings {
            println!("  [WARN] {}", warning);
        }
        println!();
    }

    println!("Suggestions:");
    for suggestion in &design.suggestions {
        println!("  {} {}", suggestion.severity.tag(), suggestion.text);
    }

    if with_bom {
        print_bom(design);
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", design.lcd_summary());
    println!("═══════════════════════════════════════");
}

fn print_transistor(design: &TimerDesign) {
    let t = &design.transistor;
    println!("Transistor Selection:");
    println!("  Model:        {}", t.name);
    println!("  Type:         {}", t.kind.display_name());
    println!("  Specs:        {}", t.specs);
    println!("  Base/Gate R:  {}", t.bias_resistor);
    println!("  Power Rating: {}", t.power_rating);
    println!("  Load Power:   {} W", design.power_display());
    if let Some(warning) = &t.warning {
        println!("  {}", warning);
    }
}

fn print_bom(design: &TimerDesign) {
    println!();
    println!("=== FULL COMPONENT LIST ===");
    for line in bill_of_materials(design) {
        println!("  {} x {}: {}", line.quantity, line.part, line.value);
    }

    println!();
    println!("=== 555 PIN TO PIN WIRING ===");
    for step in wiring_guide(design) {
        println!("  Pin {} ({}): {}", step.pin, step.label, step.instruction);
    }
}
