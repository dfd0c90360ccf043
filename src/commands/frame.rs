//! Framed text command

use anyhow::Result;
use kibo::layout;

const DEFAULT_PADDING: usize = 10;

pub fn run(text: &str, width: Option<usize>, centred: bool, vertical: bool) -> Result<()> {
    let width = width.unwrap_or_else(|| text.chars().count() + DEFAULT_PADDING);

    print!("{}", layout::frame(text, width, centred, vertical));
    Ok(())
}
