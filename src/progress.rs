use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use crate::pipeline::TranslateStats;
use crate::translator::Mode;

/// Status lines on stderr, prefixed with the elapsed run time. Stdout is left for `--stdout`.
pub struct ConsoleProgress {
    enabled: bool,
    t0: Instant,
}

impl ConsoleProgress {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            t0: Instant::now(),
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.enabled {
            self.emit(msg.as_ref());
        }
    }

    /// Always printed, even when quiet.
    pub fn warn(&self, msg: impl AsRef<str>) {
        self.emit(&format!("warning: {}", msg.as_ref()));
    }

    pub fn file_started(&self, index: usize, total: usize, input: &Path, output: &str, mode: Mode) {
        if !self.enabled {
            return;
        }
        let total = total.max(1);
        let current = (index + 1).min(total);
        self.emit(&format!(
            "{current}/{total} {} -> {output} ({} mode)",
            input.display(),
            mode.as_str()
        ));
    }

    pub fn file_done(&self, stats: &TranslateStats) {
        if !self.enabled {
            return;
        }
        let pct = if stats.lines == 0 {
            0.0
        } else {
            (stats.changed_lines as f64 / stats.lines as f64) * 100.0
        };
        self.emit(&format!(
            "  {} lines, {} rewritten ({pct:.1}%)",
            stats.lines, stats.changed_lines
        ));
    }

    fn emit(&self, line: &str) {
        let ts = fmt_elapsed(self.t0.elapsed().as_secs_f64());
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "[{ts}] {line}");
    }
}

fn fmt_elapsed(seconds: f64) -> String {
    let seconds = seconds.max(0.0) as u64;
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{h:02}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}
