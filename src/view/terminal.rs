//! Plain-terminal renderer: each surface becomes a line of text.

use std::io::IsTerminal;

use crate::client::{Gender, Prediction};
use crate::notice::{Notice, Severity};
use crate::store::SavedName;

use super::View;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer. Set `plain` to disable ANSI color.
#[derive(Debug, Default)]
pub struct TerminalView {
    pub plain: bool,
}

impl TerminalView {
    /// Renderer with color enabled only when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            plain: !std::io::stdout().is_terminal(),
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            format!("{color}{text}{RESET}")
        }
    }
}

impl View for TerminalView {
    fn show_prediction(&mut self, prediction: &Prediction) {
        match prediction.gender {
            Some(gender) => println!("Gender: {}", gender),
            None => println!("Gender: unknown"),
        }
        match prediction.probability {
            Some(p) => println!("Prob: {}", p),
            None => println!("Prob: unknown"),
        }
    }

    fn select_gender(&mut self, gender: Option<Gender>) {
        if let Some(gender) = gender {
            println!("Selected: {}", gender);
        }
    }

    fn show_saved_answer(&mut self, saved: Option<&SavedName>) {
        match saved {
            Some(entry) => println!("Saved answer: {}", entry.gender),
            None => println!("Saved answer: Nothing!"),
        }
    }

    fn show_notice(&mut self, notice: &Notice) {
        let color = match notice.severity {
            Severity::Error => RED,
            Severity::Notice => GREEN,
        };
        println!("{}", self.paint(color, &notice.message));
    }
}
