use crate::ports::outbound::ConsoleReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};
use std::cell::RefCell;
use std::io::IsTerminal;

/// Stream the reporter writes its blocks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

impl ConsoleTarget {
    fn is_terminal(self) -> bool {
        match self {
            ConsoleTarget::Stdout => std::io::stdout().is_terminal(),
            ConsoleTarget::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

/// StyledConsoleReporter adapter rendering title, warning, error, success and
/// listing blocks
///
/// Text output goes to the configured target; the progress bar always draws
/// on stderr and disappears when the last file is processed. Colors are only
/// emitted when requested and the target is a terminal.
pub struct StyledConsoleReporter {
    target: ConsoleTarget,
    colored: bool,
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StyledConsoleReporter {
    pub fn new(target: ConsoleTarget, use_color: bool) -> Self {
        Self {
            target,
            colored: use_color && target.is_terminal(),
            progress_bar: RefCell::new(None),
        }
    }

    /// Renders a `[LABEL] message` block; continuation lines line up with the message
    fn block(&self, label: &str, message: &str, style: Style) -> String {
        let prefix = format!(" [{}] ", label);
        let indent = " ".repeat(prefix.len());

        let body = message
            .lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("{}{}", prefix, line)
                } else {
                    format!("{}{}", indent, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("\n{}\n", self.paint(&body, style))
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn emit(&self, text: &str) {
        let write = || match self.target {
            ConsoleTarget::Stdout => println!("{}", text),
            ConsoleTarget::Stderr => eprintln!("{}", text),
        };

        // Keep the bar from being overwritten by interleaved output
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(write),
            None => write(),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let style = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let pb = ProgressBar::new(total as u64).with_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StyledConsoleReporter {
    fn default() -> Self {
        Self::new(ConsoleTarget::Stdout, true)
    }
}

impl ConsoleReporter for StyledConsoleReporter {
    fn title(&self, message: &str) {
        let underline = "=".repeat(message.chars().count());
        let style = Style::new().green().bold();
        self.emit(&format!(
            "\n{}\n{}",
            self.paint(message, style),
            self.paint(&underline, style)
        ));
    }

    fn warning(&self, message: &str) {
        self.emit(&self.block("WARNING", message, Style::new().black().on_yellow()));
    }

    fn error(&self, message: &str) {
        self.finish_progress();
        self.emit(&self.block("ERROR", message, Style::new().white().on_red()));
    }

    fn success(&self, message: &str) {
        self.finish_progress();
        self.emit(&self.block("OK", message, Style::new().black().on_green()));
    }

    fn listing(&self, items: &[String]) {
        let lines: Vec<String> = items.iter().map(|item| format!(" * {}", item)).collect();
        self.emit(&lines.join("\n"));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish_progress();
        }
    }
}
