//! fieldguard CLI - validate login payloads from the command line.
//!
//! This is a demonstration CLI for the fieldguard library.

use anyhow::{bail, Context};
use fieldguard::prelude::*;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("fieldguard");

    if args.len() < 2 {
        print_usage(program);
        return ExitCode::from(2);
    }

    let result = match args[1].as_str() {
        "validate" => validate_command(&args[2..]),
        "actions" => {
            list_actions();
            Ok(true)
        }
        "help" | "--help" | "-h" => {
            print_usage(program);
            Ok(true)
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(program);
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::from(2)
        }
    }
}

fn print_usage(program: &str) {
    println!("fieldguard v{}", fieldguard::VERSION);
    println!();
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  validate <file|->   Validate a login JSON payload");
    println!("  actions             List the supported actions");
    println!("  help                Show this help message");
    println!();
    println!("Validate options:");
    println!("  --action <action>   Action to validate for (default: create)");
    println!("  --config <path>     TOML file with rule defaults");
    println!("  --json              Print the report as JSON");
}

fn list_actions() {
    let defaults = RuleConfig::default();
    println!("Actions:");
    for action in Action::all() {
        let note = if defaults.skip_actions.contains(*action) {
            " (built-in rules skipped)"
        } else {
            ""
        };
        println!("  • {}{}", action, note);
    }
}

#[derive(Debug)]
struct ValidateOptions {
    input: String,
    action: Action,
    config: Option<PathBuf>,
    json: bool,
}

fn parse_validate_options(args: &[String]) -> anyhow::Result<ValidateOptions> {
    let Some(input) = args.first() else {
        bail!("Please specify an input file, or - for stdin");
    };

    let mut options = ValidateOptions {
        input: input.clone(),
        action: Action::Create,
        config: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--action" => {
                options.action = option_value(args, i)?.parse()?;
                i += 2;
            }
            "--config" => {
                options.config = Some(PathBuf::from(option_value(args, i)?));
                i += 2;
            }
            "--json" => {
                options.json = true;
                i += 1;
            }
            other => bail!("Unknown option: {}", other),
        }
    }

    Ok(options)
}

fn option_value(args: &[String], i: usize) -> anyhow::Result<&str> {
    match args.get(i + 1) {
        Some(value) => Ok(value),
        None => bail!("Missing value for {}", args[i]),
    }
}

fn validate_command(args: &[String]) -> anyhow::Result<bool> {
    let options = parse_validate_options(args)?;

    let factory = match &options.config {
        Some(path) => {
            let config = RuleConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            RuleFactory::from_config(&config)
        }
        None => RuleFactory::new(),
    };

    let payload = read_input(&options.input)?;
    let value: serde_json::Value =
        serde_json::from_str(&payload).context("Input is not valid JSON")?;
    let mut model = LoginModel::from_json_with(&value, &factory)?;

    let valid = model.validate(options.action);
    let report = model.report();

    if options.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.summary());
        for line in report.detailed_messages() {
            println!("  {}", line);
        }
    }

    Ok(valid)
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}
