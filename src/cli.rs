use std::io::{stderr, stdin, stdout, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    print_value, read_bool, read_float, read_int, read_string, InputError, OutputFormat, Scanner,
    Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PromptTarget {
    Stderr,
    Stdout,
}

#[derive(Debug, Parser)]
pub struct BoolAction {
    /// Also accept y/yes/n/no answers
    #[arg(short, long)]
    yes_no: bool,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    #[command(alias = "str")]
    String,
    Int,
    Float,
    Bool(BoolAction),
}

/// Reads one line from STDIN and prints it as a typed value.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true, default_value = "")]
    prompt: String,
    #[arg(long, global = true, value_enum, default_value_t = PromptTarget::Stderr)]
    prompt_to: PromptTarget,
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    pub action: Action,
}

fn scan_value<R: BufRead, W: Write>(
    scanner: &mut Scanner<R, W>,
    action: &Action,
    prompt: &str,
) -> Result<Value, InputError> {
    let value = match action {
        Action::String => Value::String(scanner.read_string(prompt)?),
        Action::Int => Value::Int(scanner.read_int(prompt)?),
        Action::Float => Value::Float(scanner.read_float(prompt)?),
        Action::Bool(BoolAction { yes_no }) => Value::Bool(scanner.read_bool(prompt, *yes_no)?),
    };
    Ok(value)
}

fn read_value(action: &Action, prompt: &str) -> Result<Value, InputError> {
    let value = match action {
        Action::String => Value::String(read_string(prompt)?),
        Action::Int => Value::Int(read_int(prompt)?),
        Action::Float => Value::Float(read_float(prompt)?),
        Action::Bool(BoolAction { yes_no }) => Value::Bool(read_bool(prompt, *yes_no)?),
    };
    Ok(value)
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let Cli { prompt, prompt_to, json, action } = self;

        let value = match prompt_to {
            PromptTarget::Stderr => {
                let mut scanner = Scanner::new(stdin().lock(), stderr());
                scan_value(&mut scanner, &action, &prompt)
            }
            PromptTarget::Stdout => read_value(&action, &prompt),
        };
        let value = value.context("could not read value from STDIN")?;

        let format = match json {
            true => OutputFormat::Json,
            false => OutputFormat::Plain,
        };
        print_value(&value, format, stdout().lock()).context("could not write value to STDOUT")
    }
}
