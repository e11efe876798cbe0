use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};

use crate::translator::{Mode, Translator};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranslateStats {
    pub lines: usize,
    pub changed_lines: usize,
}

/// Translates line by line. Line terminators (`\n`, `\r\n`, none on the last line) are kept
/// as read, so `haupt` + newline + `(` is not joined across lines.
pub fn translate_reader<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    translator: &Translator<'_>,
    mode: Mode,
) -> anyhow::Result<TranslateStats> {
    let mut stats = TranslateStats::default();
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader
            .read_line(&mut line)
            .with_context(|| format!("read line {} (input must be utf-8)", stats.lines + 1))?;
        if n == 0 {
            break;
        }
        stats.lines += 1;
        let out = translator.translate(&line, mode);
        if out != line {
            stats.changed_lines += 1;
        }
        writer
            .write_all(out.as_bytes())
            .with_context(|| format!("write line {}", stats.lines))?;
    }
    writer.flush().context("flush output")?;
    Ok(stats)
}

/// Either the whole output is written or the destination is left untouched.
pub fn translate_file(
    input: &Path,
    output: &Path,
    translator: &Translator<'_>,
    mode: Mode,
) -> anyhow::Result<TranslateStats> {
    if same_file(input, output) {
        return Err(anyhow!("output would overwrite input: {}", output.display()));
    }
    let src = File::open(input).with_context(|| format!("open input: {}", input.display()))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let tmp = temp_path_for(output);
    let result: anyhow::Result<TranslateStats> = (|| {
        let dst =
            File::create(&tmp).with_context(|| format!("create output: {}", tmp.display()))?;
        let stats = translate_reader(BufReader::new(src), BufWriter::new(dst), translator, mode)
            .with_context(|| format!("translate {}", input.display()))?;
        std::fs::rename(&tmp, output)
            .with_context(|| format!("move {} -> {}", tmp.display(), output.display()))?;
        Ok(stats)
    })();
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

pub fn translate_to_stdout(
    input: &Path,
    translator: &Translator<'_>,
    mode: Mode,
) -> anyhow::Result<TranslateStats> {
    let src = File::open(input).with_context(|| format!("open input: {}", input.display()))?;
    let stdout = std::io::stdout();
    let out = BufWriter::new(stdout.lock());
    translate_reader(BufReader::new(src), out, translator, mode)
        .with_context(|| format!("translate {}", input.display()))
}

fn temp_path_for(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    output.with_file_name(format!(".{name}.dava-tmp"))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
