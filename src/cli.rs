use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, FileConfig};
use crate::error::FilterResult;
use crate::filter::{filter_stream, ConditionalFilter, FilterStats};

/// Copy input to output, honoring `@ifdef NAME` / `@else` / `@endif`
/// directive lines against a set of defined names.
#[derive(Debug, Parser)]
#[command(name = "ifdef-filter", version)]
pub struct Cli {
    /// Add NAME to the defined-name set (repeatable)
    #[arg(short = 'D', value_name = "NAME")]
    pub defines: Vec<String>,

    /// JSON config file with additional defines and options
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail if @ifdef blocks are still open at end of input
    #[arg(long)]
    pub strict: bool,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Raise stderr log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input file; `-` or absent reads stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Execute one filtering run for this invocation.
    pub fn run(self) -> FilterResult<FilterStats> {
        let file_config = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        // Either source may enable strict mode.
        let strict = self.strict || file_config.strict;
        let defines = config::build_defines(&self.defines, &file_config.defines)?;

        let mut filter = ConditionalFilter::new(defines);

        let stdin = io::stdin();
        let stdout = io::stdout();
        let input: Box<dyn BufRead> = match &self.input {
            Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(File::open(path)?)),
            _ => Box::new(stdin.lock()),
        };
        let output: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(stdout.lock()),
        };

        filter_stream(&mut filter, input, output)?;
        filter.finish(strict)
    }
}
