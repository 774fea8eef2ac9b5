//! Streaming rewrite of material slot blocks in a session file.
//!
//! The session file is read once, line by line. A line equal to the expected
//! header for its slot opens a block; the block's fields are collected until
//! the [`TERMINAL_KEY`] line (or the next header, or end of input) closes it.
//! A closed block is written from the preset when the preset has its header,
//! otherwise echoed from what was parsed. Both paths go through the same
//! key-order writer.
//!
//! Outside a block, a line without any `MaterialPairSlot<N>` is copied
//! verbatim. A line that mentions a slot but is not the expected header
//! (typically another project's block header) is dropped unless
//! [`RewriteOptions::keep_foreign_slot_lines`] is set.

use crate::header::{expected_header, slot_number};
use crate::keys::TERMINAL_KEY;
use crate::preset::{PresetBlock, PresetTable, load_preset};
use crate::writer::write_block;
use crate::{Error, Result};
use biome_fs::{LegacyLines, LegacyWriter, StagedFile, encoding};
use std::io::{self, Write};
use std::path::Path;

/// Rewrite behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Copy lines that mention a material slot outside any recognized block
    /// instead of dropping them.
    pub keep_foreign_slot_lines: bool,
}

/// What a rewrite did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Headers of blocks replaced from the preset, in document order.
    pub replaced: Vec<String>,
    /// Blocks without a preset entry, re-serialized from the document.
    pub echoed: usize,
    /// Lines copied verbatim.
    pub passed_through: usize,
    /// Lines consumed without output: unparseable block lines and foreign
    /// slot lines.
    pub dropped_lines: usize,
    /// Malformed lines skipped while loading the preset.
    pub preset_lines_skipped: usize,
}

impl RewriteReport {
    pub fn blocks_seen(&self) -> usize {
        self.replaced.len() + self.echoed
    }
}

#[derive(Debug)]
enum ScanState {
    NoBlockOpen,
    BlockOpen(PresetBlock),
}

struct Rewriter<'a, W: Write> {
    table: &'a PresetTable,
    project: &'a str,
    options: RewriteOptions,
    out: &'a mut LegacyWriter<W>,
    state: ScanState,
    report: RewriteReport,
}

impl<W: Write> Rewriter<'_, W> {
    fn feed(&mut self, line: &str) -> io::Result<()> {
        let slot = slot_number(line);

        if let Some(slot) = slot {
            if line == expected_header(self.project, slot) {
                if let ScanState::BlockOpen(block) =
                    std::mem::replace(&mut self.state, ScanState::NoBlockOpen)
                {
                    self.flush_block(block)?;
                }
                self.state = ScanState::BlockOpen(PresetBlock::new(line));
                return Ok(());
            }
        }

        match &mut self.state {
            ScanState::BlockOpen(block) => match line.split_once('=') {
                Some((key, value)) => {
                    let key = key.trim();
                    let terminal = key == TERMINAL_KEY;
                    block.set(key, value.trim());
                    if terminal {
                        if let ScanState::BlockOpen(block) =
                            std::mem::replace(&mut self.state, ScanState::NoBlockOpen)
                        {
                            self.flush_block(block)?;
                        }
                    }
                }
                None => self.report.dropped_lines += 1,
            },
            ScanState::NoBlockOpen => {
                if slot.is_none() || self.options.keep_foreign_slot_lines {
                    self.out.write_line(line)?;
                    self.report.passed_through += 1;
                } else {
                    tracing::debug!("Dropping foreign slot line: {}", line);
                    self.report.dropped_lines += 1;
                }
            }
        }

        Ok(())
    }

    /// Replace-or-echo.
    fn flush_block(&mut self, block: PresetBlock) -> io::Result<()> {
        match self.table.get(&block.header) {
            Some(replacement) => {
                write_block(replacement, self.out)?;
                tracing::info!("Block replaced: {}", block.header);
                self.report.replaced.push(block.header);
            }
            None => {
                write_block(&block, self.out)?;
                self.report.echoed += 1;
            }
        }
        Ok(())
    }

    fn finish(mut self) -> io::Result<RewriteReport> {
        if let ScanState::BlockOpen(block) =
            std::mem::replace(&mut self.state, ScanState::NoBlockOpen)
        {
            self.flush_block(block)?;
        }
        self.out.flush()?;
        Ok(self.report)
    }
}

/// Rewrite decoded `lines` into `out`.
///
/// `preset_lines_skipped` in the returned report is left at zero; callers
/// that loaded the table fill it in.
pub fn rewrite_lines<I, W>(
    lines: I,
    out: &mut LegacyWriter<W>,
    table: &PresetTable,
    project: &str,
    options: RewriteOptions,
) -> Result<RewriteReport>
where
    I: IntoIterator<Item = biome_fs::Result<String>>,
    W: Write,
{
    let mut rewriter = Rewriter {
        table,
        project,
        options,
        out,
        state: ScanState::NoBlockOpen,
        report: RewriteReport::default(),
    };

    for line in lines {
        rewriter.feed(&line?)?;
    }

    Ok(rewriter.finish()?)
}

/// Rewrite an in-memory document, returning the output text.
///
/// The output is produced exactly as a file rewrite would produce it
/// (Windows-1251, `\r\n`), then decoded back.
pub fn rewrite_str(
    input: &str,
    table: &PresetTable,
    project: &str,
    options: RewriteOptions,
) -> Result<(String, RewriteReport)> {
    let mut out = LegacyWriter::new(Vec::new());
    let lines = input.lines().map(|line| Ok(line.to_string()));
    let report = rewrite_lines(lines, &mut out, table, project, options)?;
    Ok((encoding::decode(&out.into_inner()), report))
}

/// Replace the blocks of the session file at `target` from the preset at
/// `preset`, in place.
///
/// The output goes to a temp file beside `target`; the original is only
/// deleted and replaced once the whole pass has succeeded. On failure the
/// temp file is discarded and `target` is untouched.
pub fn rewrite_file(
    target: &Path,
    preset: &Path,
    project: &str,
    options: RewriteOptions,
) -> Result<RewriteReport> {
    let parsed = load_preset(preset)?;

    let lines = LegacyLines::open(target)?;
    let staged = StagedFile::create(target)?;
    let temp_path = staged.temp_path().to_path_buf();
    let mut out = LegacyWriter::new(staged);

    let mut report = rewrite_lines(lines, &mut out, &parsed.value, project, options)
        .map_err(|e| match e {
            Error::Output(source) => Error::Fs(biome_fs::Error::io(&temp_path, source)),
            other => other,
        })?;
    report.preset_lines_skipped = parsed.skipped;

    out.into_inner().commit()?;

    tracing::info!(
        "Replacement completed: {} replaced, {} echoed in {}",
        report.replaced.len(),
        report.echoed,
        target.display()
    );

    Ok(report)
}
