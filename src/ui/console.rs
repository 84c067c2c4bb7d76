//! Human-readable event sink
//!
//! Writes short status lines to stderr so stdout stays reserved for
//! dry-run command lines.

use crossterm::style::Stylize;
use dirsync::domain::ports::{SyncEvent, SyncEventSink};
use dirsync::domain::value_objects::{Strategy, SyncWarning};
use std::io::{self, Write};
use std::sync::Mutex;

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;
use crate::ui::theme;

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn dim(&self, text: &str) -> String {
        if self.ui.color {
            format!("{}", text.with(theme::colors::DIM))
        } else {
            text.to_string()
        }
    }

    fn render(&self, event: &SyncEvent) -> Option<String> {
        match event {
            SyncEvent::StrategySelected {
                command,
                strategy,
                steps,
                dry_run,
            } => {
                let mode = if *dry_run { ", dry run" } else { "" };
                Some(format!(
                    "{} {} using {} strategy ({} {}{})",
                    self.icon(Icon::Sync),
                    command,
                    strategy,
                    steps,
                    plural(*steps, "step", "steps"),
                    mode
                ))
            }
            SyncEvent::Warning { warning } => Some(self.render_warning(warning)),
            SyncEvent::StepStarted {
                index,
                label,
                program,
            } if self.ui.verbose > 0 => Some(format!(
                "{} [{}] {} via {}",
                self.icon(Icon::Progress),
                index + 1,
                label,
                program
            )),
            SyncEvent::StepFinished { index, label } if self.ui.verbose > 0 => Some(format!(
                "{} [{}] {}",
                self.icon(Icon::Success),
                index + 1,
                label
            )),
            SyncEvent::StepStarted { .. } | SyncEvent::StepFinished { .. } => None,
            SyncEvent::Completed {
                strategy,
                steps,
                dry_run,
            } => Some(self.render_completed(*strategy, *steps, *dry_run)),
        }
    }

    fn render_warning(&self, warning: &SyncWarning) -> String {
        let mut out = format!("{} {}", self.icon(Icon::Warning), warning.title());
        for line in warning.details() {
            out.push('\n');
            out.push_str(&format!("  {} {}", self.icon(Icon::Arrow), self.dim(&line)));
        }
        out
    }

    fn render_completed(&self, strategy: Strategy, steps: usize, dry_run: bool) -> String {
        if dry_run {
            format!(
                "{} Dry run: {} {} rendered, nothing executed",
                self.icon(Icon::Success),
                steps,
                plural(steps, "command", "commands")
            )
        } else {
            format!(
                "{} Done: {} {} finished ({})",
                self.icon(Icon::Success),
                steps,
                plural(steps, "step", "steps"),
                strategy
            )
        }
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        let Some(text) = self.render(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
