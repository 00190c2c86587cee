use std::collections::HashSet;
use std::io::{BufRead, Write};

use tracing::{debug, trace};

use super::directive::{parse_directive, strip_line_ending};
use super::types::{Directive, FilterStats};
use crate::error::{FilterError, FilterResult};

/// Streaming conditional-inclusion filter.
///
/// One instance owns one run's state: the defined-name set, the stack of
/// open `@ifdef` conditions, and the run counters. Instances share
/// nothing, so independent runs can proceed in parallel.
pub struct ConditionalFilter {
    defines: HashSet<String>,
    stack: Vec<bool>,
    stats: FilterStats,
}

impl ConditionalFilter {
    pub fn new(defines: HashSet<String>) -> Self {
        Self {
            defines,
            stack: Vec::new(),
            stats: FilterStats::default(),
        }
    }

    /// Process one input line.
    ///
    /// Returns the stripped line when it should be emitted, `None` when it
    /// was a directive or suppressed content. The caller appends a single
    /// `\n` on emission, so output line endings are normalized.
    pub fn process_line<'a>(&mut self, raw: &'a str) -> FilterResult<Option<&'a str>> {
        self.stats.lines_read += 1;
        let line = strip_line_ending(raw);

        // Directives are interpreted before the emit gate, so nesting is
        // tracked even inside suppressed blocks.
        if let Some(directive) = parse_directive(line) {
            self.stats.directives += 1;
            match directive {
                Directive::Ifdef(name) => {
                    let value = self.defines.contains(name);
                    trace!("@ifdef {} -> {} (depth {})", name, value, self.stack.len());
                    self.stack.push(value);
                    if self.stack.len() > self.stats.max_depth {
                        self.stats.max_depth = self.stack.len();
                    }
                }
                Directive::Else => {
                    let top = self
                        .stack
                        .last_mut()
                        .ok_or(FilterError::ElseWithoutIfdef)?;
                    *top = !*top;
                    let new_top = *top;
                    trace!("@else -> {} (depth {})", new_top, self.stack.len());
                }
                Directive::Endif => {
                    if self.stack.pop().is_none() {
                        return Err(FilterError::EndifWithoutIfdef);
                    }
                    trace!("@endif (depth {})", self.stack.len());
                }
            }
            return Ok(None);
        }

        // Only the innermost open condition gates emission; an empty
        // stack always emits.
        if self.stack.last().copied().unwrap_or(true) {
            self.stats.lines_emitted += 1;
            Ok(Some(line))
        } else {
            self.stats.lines_suppressed += 1;
            Ok(None)
        }
    }

    /// Number of currently open `@ifdef` blocks.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn stats(&self) -> &FilterStats {
        &self.stats
    }

    /// End-of-input check. In strict mode any still-open block is fatal;
    /// otherwise open blocks are ignored and the run counters are returned.
    pub fn finish(self, strict: bool) -> FilterResult<FilterStats> {
        if strict && !self.stack.is_empty() {
            return Err(FilterError::UnterminatedBlocks(self.stack.len()));
        }
        Ok(self.stats)
    }
}

/// Drive a filter over a reader/writer pair.
///
/// Each emitted line is written before the next input line is read, so the
/// filter works in a pipeline over arbitrarily large inputs. Output
/// already written when an error occurs is not retracted.
pub fn filter_stream<R: BufRead, W: Write>(
    filter: &mut ConditionalFilter,
    mut input: R,
    mut output: W,
) -> FilterResult<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if let Some(text) = filter.process_line(&line)? {
            output.write_all(text.as_bytes())?;
            output.write_all(b"\n")?;
        }
    }
    output.flush()?;

    let stats = filter.stats();
    debug!(
        "filter run complete: {} lines read, {} emitted, {} suppressed, {} directives, max depth {}",
        stats.lines_read, stats.lines_emitted, stats.lines_suppressed, stats.directives, stats.max_depth
    );
    Ok(())
}
