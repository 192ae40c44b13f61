use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

use crate::language::LanguagePair;
use crate::pipeline::RunReport;

/// Console status lines and the in-place progress bar
pub struct StatusReporter {
    progress: ProgressBar,
}

impl StatusReporter {
    pub fn new() -> Self {
        let progress = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stdout());
        if let Ok(style) =
            ProgressStyle::with_template("{msg} [{bar:50.green/white}] {pos}/{len}")
        {
            progress.set_style(style.progress_chars("██░"));
        }
        progress.set_message("Translating...");

        Self { progress }
    }

    /// Print the file and direction header
    pub fn announce(&self, path: &Path, pair: &LanguagePair) {
        self.progress.suspend(|| {
            println!("File: {}", path.display().to_string().yellow().bold());
            println!("Direction: {}", pair.arrow().cyan().bold());
        });
        self.progress.tick();
    }

    pub fn progress(&self, completed: usize, total: usize) {
        self.progress.set_length(total as u64);
        self.progress.set_position(completed as u64);
    }

    /// Replace the progress bar with the success banner
    pub fn success(&self, report: &RunReport) {
        self.progress.finish_and_clear();
        println!(
            "{}",
            format!("Translated in {}", format_elapsed(report.elapsed))
                .green()
                .bold()
        );
        if report.fallback_lines > 0 {
            println!(
                "{}",
                format!(
                    "{} of {} lines left untranslated",
                    report.fallback_lines, report.translatable_lines
                )
                .yellow()
            );
        }
        if report.multiline_lines > 0 {
            println!(
                "{}",
                format!(
                    "{} translations span several lines; the layout has shifted",
                    report.multiline_lines
                )
                .yellow()
            );
        }
    }

    /// Replace the progress bar with the failure banner
    pub fn failure(&self) {
        self.progress.finish_and_clear();
        println!("{}", "Translation failed".red().bold());
    }
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Print an error in red on stderr
pub fn print_error<E: Display + ?Sized>(error: &E) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

/// Usage hint printed after argument errors
pub fn print_usage_hint() {
    eprintln!("Usage: subtrans <FILE> [FROM:TO]");
    eprintln!("Example: subtrans movie.srt en:fr  (English to French)");
    eprintln!("Default direction: en:ru");
}

/// Elapsed time rounded to whole seconds: `42s`, or `2m 5s` from a minute up
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = (elapsed.as_millis() as f64 / 1000.0).round() as u64;
    if seconds < 60 {
        format!("{}s", seconds)
    } else {
        format!("{}m {}s", seconds / 60, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(0)), "0s");
        assert_eq!(format_elapsed(Duration::from_millis(1_499)), "1s");
        assert_eq!(format_elapsed(Duration::from_millis(1_500)), "2s");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "59s");
        assert_eq!(format_elapsed(Duration::from_millis(59_600)), "1m 0s");
        assert_eq!(format_elapsed(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_elapsed(Duration::from_secs(3_725)), "62m 5s");
    }
}
