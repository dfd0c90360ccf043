//! Bounded console input
//!
//! [`Prompter`] reads typed values from a line-oriented input stream and
//! keeps asking until the answer parses and satisfies every constraint.
//! Rejected answers are explained on the output stream, then the prompt is
//! shown again. There is no attempt limit; only a closed or failing stream
//! ends the loop, as an [`InputError`].

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use tracing::{debug, trace};

use crate::error::InputError;

pub type Result<T> = std::result::Result<T, InputError>;

const ALPHANUMERIC_CHARACTERS_ERROR: &str = "Only alphanumeric characters are allowed.";
const EMPTY_STRING_ERROR: &str = "No characters were inserted.";
const ALLOWED_CHARACTERS_ERROR: &str = "The only allowed characters are: ";
const INTEGER_FORMAT_ERROR: &str =
    "The inserted data is in an incorrect format. An integer is required.";
const FLOAT_FORMAT_ERROR: &str = "The inserted data is in an incorrect format. A float is required.";

const YES_ANSWERS: &str = "yY";
const NO_ANSWERS: &str = "nN";

const ATTENTION: &str = "Attention!";

/// Format a recoverable problem the way every helper in the crate reports it.
/// The header is only colored for terminal output.
pub(crate) fn attention(message: &str, colorize: bool) -> String {
    if colorize {
        format!("{}\n{}", ATTENTION.bright_red(), message)
    } else {
        format!("{ATTENTION}\n{message}")
    }
}

fn minimum_error(bound: &str) -> String {
    format!("A value greater than or equal to {bound} is required.")
}

fn maximum_error(bound: &str) -> String {
    format!("A value less than or equal to {bound} is required.")
}

/// Numeric types the prompter knows how to read and bound-check.
trait Number: FromStr + PartialOrd + Copy {
    const FORMAT_ERROR: &'static str;

    /// Extra check after a successful parse.
    fn is_usable(&self) -> bool {
        true
    }

    /// How a bound shows up in range error messages.
    fn describe_bound(self) -> String;
}

impl Number for i64 {
    const FORMAT_ERROR: &'static str = INTEGER_FORMAT_ERROR;

    fn describe_bound(self) -> String {
        self.to_string()
    }
}

impl Number for f64 {
    const FORMAT_ERROR: &'static str = FLOAT_FORMAT_ERROR;

    // NaN compares false against every bound and would slip through them
    fn is_usable(&self) -> bool {
        !self.is_nan()
    }

    fn describe_bound(self) -> String {
        format!("{self:.2}")
    }
}

/// Reads validated values from `input`, writing prompts and errors to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    colorize: bool,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's standard input and output. Error
    /// headers are colored when stdout is a terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout()).with_color(true)
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompter over arbitrary streams, writing plain uncolored text.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            colorize: false,
        }
    }

    /// Color the error headers, subject to `colored`'s own terminal detection.
    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Stream the prompts are written to, for callers that print around them.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read a line, trimmed of surrounding whitespace. With `alphanumeric`
    /// set the line must also be non-empty and made of letters and digits only.
    pub fn read_string(&mut self, prompt: &str, alphanumeric: bool) -> Result<String> {
        loop {
            let read = self.prompt_line(prompt)?.trim().to_string();

            if !alphanumeric || is_alphanumeric(&read) {
                return Ok(read);
            }

            debug!(input = %read, "rejected non-alphanumeric input");
            self.report(ALPHANUMERIC_CHARACTERS_ERROR)?;
        }
    }

    /// Like [`read_string`](Self::read_string), but an empty answer is refused.
    pub fn read_non_empty_string(&mut self, prompt: &str, alphanumeric: bool) -> Result<String> {
        loop {
            let read = self.read_string(prompt, alphanumeric)?;

            if !read.is_empty() {
                return Ok(read);
            }

            debug!("rejected empty input");
            self.report(EMPTY_STRING_ERROR)?;
        }
    }

    /// First character of a non-empty answer, restricted to `allowed` if given.
    ///
    /// An empty `allowed` set can never be satisfied and fails at once with
    /// [`InputError::EmptyAllowedSet`].
    pub fn read_char(&mut self, prompt: &str, allowed: Option<&str>) -> Result<char> {
        if allowed.is_some_and(str::is_empty) {
            return Err(InputError::EmptyAllowedSet);
        }

        loop {
            let read = self.read_non_empty_string(prompt, false)?;
            let Some(ch) = read.chars().next() else {
                continue;
            };

            match allowed {
                Some(set) if !set.contains(ch) => {
                    debug!(%ch, allowed = set, "rejected character");
                    let listed: Vec<String> = set.chars().map(String::from).collect();
                    self.report(&format!("{ALLOWED_CHARACTERS_ERROR}{}", listed.join(", ")))?;
                }
                _ => return Ok(ch),
            }
        }
    }

    /// Ask `question` (without its question mark) and wait for `y` or `n`.
    pub fn read_yes_no(&mut self, question: &str) -> Result<bool> {
        let question = format!("{question}? [y/n] ");
        let allowed = format!("{YES_ANSWERS}{NO_ANSWERS}");

        let answer = self.read_char(&question, Some(&allowed))?;
        Ok(YES_ANSWERS.contains(answer))
    }

    pub fn read_integer(&mut self, prompt: &str) -> Result<i64> {
        self.read_number(prompt)
    }

    pub fn read_integer_with_minimum(&mut self, prompt: &str, min: i64) -> Result<i64> {
        self.read_number_within(prompt, Some(min), None)
    }

    pub fn read_integer_with_maximum(&mut self, prompt: &str, max: i64) -> Result<i64> {
        self.read_number_within(prompt, None, Some(max))
    }

    /// Integer in the inclusive range `min..=max`.
    pub fn read_integer_between(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        self.read_number_within(prompt, Some(min), Some(max))
    }

    pub fn read_float(&mut self, prompt: &str) -> Result<f64> {
        self.read_number(prompt)
    }

    pub fn read_float_with_minimum(&mut self, prompt: &str, min: f64) -> Result<f64> {
        self.read_number_within(prompt, Some(min), None)
    }

    pub fn read_float_with_maximum(&mut self, prompt: &str, max: f64) -> Result<f64> {
        self.read_number_within(prompt, None, Some(max))
    }

    /// Float in the inclusive range `min..=max`.
    pub fn read_float_between(&mut self, prompt: &str, min: f64, max: f64) -> Result<f64> {
        self.read_number_within(prompt, Some(min), Some(max))
    }

    fn read_number<T: Number>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let read = self.prompt_line(prompt)?;
            let read = read.trim();

            match read.parse::<T>() {
                Ok(value) if value.is_usable() => return Ok(value),
                _ => {
                    debug!(input = %read, "rejected malformed number");
                    self.report(T::FORMAT_ERROR)?;
                }
            }
        }
    }

    fn read_number_within<T: Number>(
        &mut self,
        prompt: &str,
        min: Option<T>,
        max: Option<T>,
    ) -> Result<T> {
        check_bounds(min, max)?;

        loop {
            let value = self.read_number::<T>(prompt)?;

            if let Some(min) = min {
                if value < min {
                    debug!(minimum = %min.describe_bound(), "rejected number below minimum");
                    self.report(&minimum_error(&min.describe_bound()))?;
                    continue;
                }
            }

            if let Some(max) = max {
                if value > max {
                    debug!(maximum = %max.describe_bound(), "rejected number above maximum");
                    self.report(&maximum_error(&max.describe_bound()))?;
                    continue;
                }
            }

            return Ok(value);
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Invalid UTF-8 is decoded lossily so it is rejected like any other
        // malformed answer instead of ending the read
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            debug!(prompt, "input stream closed while waiting for an answer");
            return Err(InputError::EndOfInput);
        }

        let line = String::from_utf8_lossy(&bytes);
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        trace!(line = %line, "read line");
        Ok(line)
    }

    fn report(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", attention(message, self.colorize))?;
        Ok(())
    }
}

/// Refuse bounds that no value can satisfy.
fn check_bounds<T: Number>(min: Option<T>, max: Option<T>) -> Result<()> {
    for bound in [min, max].into_iter().flatten() {
        if !bound.is_usable() {
            return Err(InputError::InvalidBound(bound.describe_bound()));
        }
    }

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(InputError::EmptyRange {
                min: min.describe_bound(),
                max: max.describe_bound(),
            });
        }
    }

    Ok(())
}

fn is_alphanumeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphanumeric)
}
