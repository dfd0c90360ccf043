//! Numbered console menus
//!
//! A [`Menu`] prints a framed title followed by its entries numbered from 1
//! and asks for the number of the chosen entry. When the exit entry is enabled
//! `0` is also accepted and always means "leave this menu".

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{InputError, MenuError};
use crate::input::{attention, Prompter};
use crate::layout;

const EXIT_ENTRY: &str = "0. Exit";
const INSERT_REQUEST: &str = "> ";
const NEGATIVE_MILLIS_ERROR: &str = "You can't have negative time.";
const FRAME_PADDING: usize = 10;
const LOADING_DOTS: usize = 3;
const LOADING_STEP_MILLIS: i64 = 1000;

#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    entries: Vec<String>,
    use_exit_entry: bool,
    centred_title: bool,
    use_vertical_frame: bool,
    frame_width: usize,
}

impl Menu {
    /// Build a menu. The frame width is computed here and never changes.
    ///
    /// Fails when there are no entries and no exit entry, since such a menu
    /// can't accept any answer.
    pub fn new(
        title: impl Into<String>,
        entries: Vec<String>,
        use_exit_entry: bool,
        centred_title: bool,
    ) -> Result<Self, MenuError> {
        let title = title.into();

        if entries.is_empty() && !use_exit_entry {
            return Err(MenuError::NoSelectableEntries(title));
        }

        let frame_width = frame_width(&title, &entries);

        Ok(Self {
            title,
            entries,
            use_exit_entry,
            centred_title,
            use_vertical_frame: false,
            frame_width,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn uses_exit_entry(&self) -> bool {
        self.use_exit_entry
    }

    pub fn centred_title(&self) -> bool {
        self.centred_title
    }

    pub fn frame_width(&self) -> usize {
        self.frame_width
    }

    pub fn use_vertical_frame(&self) -> bool {
        self.use_vertical_frame
    }

    pub fn set_use_vertical_frame(&mut self, value: bool) {
        self.use_vertical_frame = value;
    }

    /// The full menu block: framed title, numbered entries and, if enabled,
    /// the isolated exit entry.
    pub fn render(&self) -> String {
        let mut menu = layout::frame(
            &self.title,
            self.frame_width,
            self.centred_title,
            self.use_vertical_frame,
        );

        for (i, entry) in self.entries.iter().enumerate() {
            menu.push_str(&format!("{}. {}\n", i + 1, entry));
        }

        if self.use_exit_entry {
            menu.push_str(&layout::isolate(EXIT_ENTRY));
        }

        menu
    }

    /// Show the menu on stdout and read the choice from stdin.
    pub fn choose(&self) -> Result<i64, InputError> {
        self.choose_with(&mut Prompter::stdio())
    }

    /// Show the menu through `prompter` and return the validated choice.
    pub fn choose_with<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<i64, InputError> {
        writeln!(prompter.output_mut(), "{}", self.render())?;

        let min = if self.use_exit_entry { 0 } else { 1 };
        let choice = prompter.read_integer_between(INSERT_REQUEST, min, self.entries.len() as i64)?;

        debug!(menu = %self.title, choice, "menu entry chosen");
        Ok(choice)
    }
}

fn frame_width(title: &str, entries: &[String]) -> usize {
    let widest_entry = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| entry.chars().count() + layout::count_digits(i as i64 + 1) + 2)
        .max()
        .unwrap_or(0);

    title.chars().count().max(widest_entry) + FRAME_PADDING
}

/// Clear the terminal screen.
pub fn clear_console() {
    if let Err(e) = console::Term::stdout().clear_screen() {
        warn!("Failed to clear the console: {}", e);
    }
}

/// Block the current thread for `milliseconds`. Negative durations are
/// reported on stdout and return at once.
pub fn wait(milliseconds: i64) {
    let mut stdout = io::stdout();
    if let Err(e) = wait_reporting(&mut stdout, milliseconds, true) {
        warn!("Failed to write wait warning: {}", e);
    }
}

/// [`wait`], reporting a negative duration to `out` as plain text.
pub fn wait_to<W: Write>(out: &mut W, milliseconds: i64) -> io::Result<()> {
    wait_reporting(out, milliseconds, false)
}

fn wait_reporting<W: Write>(out: &mut W, milliseconds: i64, colorize: bool) -> io::Result<()> {
    if milliseconds < 0 {
        writeln!(out, "{}", attention(NEGATIVE_MILLIS_ERROR, colorize))?;
        return Ok(());
    }

    thread::sleep(Duration::from_millis(milliseconds as u64));
    Ok(())
}

/// Print `message`, add a dot each second for three seconds, then clear the
/// console.
pub fn loading_message(message: &str) {
    let mut stdout = io::stdout();
    if let Err(e) = loading_to(&mut stdout, message) {
        warn!("Failed to write loading message: {}", e);
    }

    clear_console();
}

fn loading_to<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write!(out, "{message}")?;
    out.flush()?;

    for _ in 0..LOADING_DOTS {
        wait_to(out, LOADING_STEP_MILLIS)?;
        write!(out, ".")?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Instant;

    fn entries(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn play_quit() -> Menu {
        Menu::new("Main", entries(&["Play", "Quit"]), true, false).unwrap()
    }

    fn run(menu: &Menu, input: &str) -> (Result<i64, InputError>, String) {
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        let choice = menu.choose_with(&mut prompter);
        let out = String::from_utf8(prompter.into_inner().1).unwrap();
        (choice, out)
    }

    #[test]
    fn frame_width_covers_title_and_entries() {
        // "1. Play" is 7 wide, title is 4
        assert_eq!(play_quit().frame_width(), 17);

        let menu = Menu::new("A rather long title", entries(&["x"]), false, true).unwrap();
        assert_eq!(menu.frame_width(), 29);

        let labels: Vec<String> = (0..10).map(|_| "abcd".to_string()).collect();
        let menu = Menu::new("", labels, false, false).unwrap();
        // "10. abcd" is 8 wide
        assert_eq!(menu.frame_width(), 18);
    }

    #[test]
    fn render_layout() {
        let rendered = play_quit().render();
        let rule = "-".repeat(17);
        let expected = format!("{rule}\nMain{}\n{rule}\n1. Play\n2. Quit\n\n0. Exit\n", " ".repeat(13));
        assert_eq!(rendered, expected);
    }

    #[test]
    fn render_with_vertical_frame_and_centred_title() {
        let mut menu = Menu::new("Main", entries(&["Play"]), false, true).unwrap();
        menu.set_use_vertical_frame(true);
        assert!(menu.use_vertical_frame());

        let rendered = menu.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], format!("|{}Main{}|", " ".repeat(5), " ".repeat(6)));
        assert_eq!(lines.len(), 4);
        assert!(!rendered.contains(EXIT_ENTRY));
    }

    #[test]
    fn choose_exit() {
        let (choice, out) = run(&play_quit(), "0\n");
        assert_eq!(choice.unwrap(), 0);
        assert!(out.contains("1. Play\n2. Quit\n\n0. Exit\n\n> "));
    }

    #[test]
    fn choose_retries_above_range() {
        let (choice, out) = run(&play_quit(), "5\n1\n");
        assert_eq!(choice.unwrap(), 1);
        assert_eq!(out.matches("Attention!").count(), 1);
        assert!(out.contains("A value less than or equal to 2 is required."));
    }

    #[test]
    fn zero_is_rejected_without_exit_entry() {
        let menu = Menu::new("Main", entries(&["Play", "Quit"]), false, false).unwrap();
        let (choice, out) = run(&menu, "0\n2\n");
        assert_eq!(choice.unwrap(), 2);
        assert!(out.contains("A value greater than or equal to 1 is required."));
    }

    #[test]
    fn exit_only_menu_accepts_zero() {
        let menu = Menu::new("Nothing here", Vec::new(), true, false).unwrap();
        let (choice, _) = run(&menu, "1\n0\n");
        assert_eq!(choice.unwrap(), 0);
    }

    #[test]
    fn unselectable_menu_is_rejected() {
        let err = Menu::new("Empty", Vec::new(), false, false).unwrap_err();
        assert_eq!(err, MenuError::NoSelectableEntries("Empty".to_string()));
    }

    #[test]
    fn choose_surfaces_end_of_input() {
        let (choice, _) = run(&play_quit(), "9\n");
        assert!(matches!(choice, Err(InputError::EndOfInput)));
    }

    #[test]
    fn negative_wait_returns_immediately() -> io::Result<()> {
        let mut out = Vec::new();
        let start = Instant::now();
        wait_to(&mut out, -5)?;

        assert!(start.elapsed() < Duration::from_millis(500));
        let out = String::from_utf8_lossy(&out);
        assert!(out.contains("Attention!"));
        assert!(out.contains(NEGATIVE_MILLIS_ERROR));
        Ok(())
    }

    #[test]
    fn wait_blocks_for_the_duration() -> io::Result<()> {
        let mut out = Vec::new();
        let start = Instant::now();
        wait_to(&mut out, 20)?;

        assert!(start.elapsed() >= Duration::from_millis(20));
        assert!(out.is_empty());
        Ok(())
    }
}
