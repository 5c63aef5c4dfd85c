use std::io::{IsTerminal, stderr};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::config::Config;
use crate::types::Action;

const ACTION_BAR_TEMPLATE: &str =
    "{prefix} [{bar:40}] {pos:>3}/{len:<3} | {elapsed_precise}<{eta_precise} | {msg}";

fn ellipsize(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut shortened: String = input.chars().take(keep).collect();
    shortened.push_str("...");
    shortened
}

/// Progress over the titles of one run. Hidden when quiet or when stderr is
/// not a terminal; safe to share across worker threads.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(action: Action, total: usize, config: &Config) -> Self {
        let visible = config.quiet == 0 && stderr().is_terminal();
        let bar = ProgressBar::with_draw_target(
            Some(total as u64),
            if visible {
                ProgressDrawTarget::stderr()
            } else {
                ProgressDrawTarget::hidden()
            },
        );
        if let Ok(style) = ProgressStyle::with_template(ACTION_BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_prefix(action.label());
        Self { bar }
    }

    pub fn start_item(&self, name: &str) {
        self.bar.set_message(ellipsize(name, 40));
    }

    pub fn finish_item(&self) {
        self.bar.inc(1);
    }

    /// Print a line above the bar without tearing it.
    pub fn println(&self, line: impl AsRef<str>) {
        if self.bar.is_hidden() {
            eprintln!("{}", line.as_ref());
        } else {
            self.bar.println(line);
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsize_keeps_short_names() {
        assert_eq!(ellipsize("mslug", 40), "mslug");
        assert_eq!(ellipsize("abcdefghij", 6), "abc...");
    }

    #[test]
    fn quiet_reporter_is_hidden() {
        let config = Config {
            quiet: 1,
            ..Config::default()
        };
        let reporter = ProgressReporter::new(Action::Convert, 3, &config);
        reporter.start_item("ffight");
        reporter.finish_item();
        assert!(reporter.bar.is_hidden());
        assert_eq!(reporter.bar.position(), 1);
        reporter.finish();
    }
}
