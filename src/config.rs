use std::path::PathBuf;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::{
    cli::Cli,
    types::{Action, ZipFormat},
};

#[derive(Debug, Clone, serde::Serialize)]
pub struct Config {
    pub command: Action,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub titles: Vec<String>,
    pub zip_format: ZipFormat,
    pub overwrite: bool,
    pub pattern: Vec<usize>,
    pub split_offsets: Vec<usize>,
    pub jobs: usize,
    pub verbose: u8,
    pub quiet: u8,
    pub print_plan: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: Action::Convert,
            input: None,
            output: None,
            titles: Vec::new(),
            zip_format: ZipFormat::Torrentzip,
            overwrite: false,
            pattern: vec![1, 1],
            split_offsets: Vec::new(),
            jobs: 1,
            verbose: 0,
            quiet: 0,
            print_plan: false,
        }
    }
}

/// Parse a decimal or `0x`-prefixed hexadecimal offset.
pub fn parse_offset(text: &str) -> anyhow::Result<usize> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| anyhow::anyhow!("invalid offset {text:?}: {e}"))
}

impl Config {
    /// Verbosity after `--quiet` is applied.
    pub fn log_level(&self) -> u8 {
        if self.quiet > 0 { 0 } else { self.verbose.saturating_add(1) }
    }

    pub fn title_matcher(&self) -> anyhow::Result<Option<GlobSet>> {
        if self.titles.is_empty() {
            return Ok(None);
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.titles {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Some(builder.build()?))
    }

    fn validate_paths(&self) -> anyhow::Result<()> {
        if self.command != Action::List {
            if self.input.is_none() {
                anyhow::bail!("--input is required for the selected command");
            }
            if self.output.is_none() {
                anyhow::bail!("--output is required for the selected command");
            }
        }
        Ok(())
    }

    fn validate_command_options(&self) -> anyhow::Result<()> {
        match self.command {
            Action::Deinterleave => {
                if self.pattern.is_empty() || self.pattern.iter().any(|w| !matches!(w, 1 | 2)) {
                    anyhow::bail!("--pattern accepts unit widths of 1 or 2");
                }
            }
            Action::Slice => {
                if self.split_offsets.is_empty() {
                    anyhow::bail!("slice requires at least one --at offset");
                }
                if self.split_offsets.windows(2).any(|w| w[1] <= w[0]) {
                    anyhow::bail!("--at offsets must be strictly ascending");
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.jobs == 0 {
            anyhow::bail!("--jobs must be at least 1");
        }
        self.validate_paths()?;
        self.validate_command_options()?;
        self.title_matcher()?;
        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let split_offsets = cli
            .at
            .iter()
            .map(|s| parse_offset(s))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let config = Self {
            command: cli.command,
            input: cli.input,
            output: cli.output,
            titles: cli.title,
            zip_format: cli.zip_format,
            overwrite: cli.overwrite,
            pattern: cli.pattern,
            split_offsets,
            jobs: cli.jobs.unwrap_or(1),
            verbose: cli.verbose,
            quiet: cli.quiet,
            print_plan: cli.print_plan,
        };

        config.validate()?;

        Ok(config)
    }
}
