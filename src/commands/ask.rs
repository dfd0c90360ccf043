//! Single value prompt command

use anyhow::{Context, Result};
use colored::Colorize;
use kibo::Prompter;

use crate::AskKind;

pub fn run(
    kind: AskKind,
    prompt: &str,
    min: Option<f64>,
    max: Option<f64>,
    allowed: Option<&str>,
    alphanumeric: bool,
) -> Result<()> {
    let mut prompter = Prompter::stdio();

    let answer = match kind {
        AskKind::String => prompter.read_non_empty_string(prompt, alphanumeric)?,
        AskKind::Char => prompter.read_char(prompt, allowed)?.to_string(),
        AskKind::YesNo => prompter.read_yes_no(prompt)?.to_string(),
        AskKind::Integer => {
            // Only whole numbers inside the given bounds are reachable
            let min = min.map(|m| m.ceil() as i64);
            let max = max.map(|m| m.floor() as i64);
            let value = match (min, max) {
                (Some(min), Some(max)) => prompter.read_integer_between(prompt, min, max),
                (Some(min), None) => prompter.read_integer_with_minimum(prompt, min),
                (None, Some(max)) => prompter.read_integer_with_maximum(prompt, max),
                (None, None) => prompter.read_integer(prompt),
            };
            value.context("No integer was read")?.to_string()
        }
        AskKind::Float => {
            let value = match (min, max) {
                (Some(min), Some(max)) => prompter.read_float_between(prompt, min, max),
                (Some(min), None) => prompter.read_float_with_minimum(prompt, min),
                (None, Some(max)) => prompter.read_float_with_maximum(prompt, max),
                (None, None) => prompter.read_float(prompt),
            };
            value.context("No float was read")?.to_string()
        }
    };

    println!("{} {}", "::".bright_blue(), answer.bright_white());
    Ok(())
}
