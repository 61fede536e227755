// ABOUTME: User-facing status messages on stderr for the iv binary
// ABOUTME: Prefixes errors and their hints consistently, with optional color

use owo_colors::OwoColorize;

pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.render("error:", message, Tone::Error));
    }

    /// Follow-up advice printed after an error
    pub fn hint(&self, message: &str) {
        eprintln!("{}", self.render("hint:", message, Tone::Hint));
    }

    fn render(&self, label: &str, message: &str, tone: Tone) -> String {
        if !self.use_color {
            return format!("{} {}", label, message);
        }

        let label = match tone {
            Tone::Error => label.red().bold().to_string(),
            Tone::Hint => label.dimmed().to_string(),
        };
        format!("{} {}", label, message)
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Error,
    Hint,
}
