//! Command-line interface for fastfetch.
//!
//! There are no subcommands. A plain `fastfetch` prints the configured
//! structure; a handful of flags print reference material instead
//! (`--print-default-config`, `--list-modules`, `--help-format`).
//!
//! # Precedence
//!
//! Command-line options override the config file, which overrides the
//! built-in defaults.
//!
//! # Caching
//!
//! Any display option given on the command line (`--structure`, `--set`,
//! `--format`, `--key`, `--color`, `--separator`, `--show-errors`) makes the
//! run bypass the cache and skip saving: cached values were most likely
//! produced with other options. `--recache <BOOL>` overrides this and sets
//! both "ignore cache" and "save to cache" to the given value, so
//! `fastfetch --separator ' ' --recache false` still uses the cache.
//! Options from the config file never change caching.
//!
//! # Examples
//!
//! ```bash
//! fastfetch                                   # default output
//! fastfetch --structure OS:Kernel:Memory      # selected modules
//! fastfetch --format 'memory={1} of {2} MiB'  # custom value format
//! fastfetch --set editor=helix --structure Editor
//! fastfetch --recache                         # refresh the cache
//! ```

use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cache::CacheStore;
use crate::config::{Config, DEFAULT_CONFIG};
use crate::constants::PROGRAM_VERSION;
use crate::core::FetchError;
use crate::modules::{CollectContext, ModuleKind, parse_structure};
use crate::output::{Printer, parse_color};
use crate::pipeline::{Pipeline, RunOptions};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "fastfetch",
    about = "Show system information next to your terminal prompt",
    version,
    long_about = "fastfetch collects system information (OS, kernel, CPU, memory, batteries, ...) \
                  and prints it as key/value lines. Slow-changing values are cached between runs."
)]
pub struct Cli {
    /// Modules to show, separated by ':'
    #[arg(long, value_name = "LIST")]
    structure: Option<String>,

    /// Fixed value usable as a module name in the structure (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Custom value format for a module (repeatable)
    #[arg(long = "format", value_name = "MODULE=TEMPLATE")]
    formats: Vec<String>,

    /// Custom key format for a module (repeatable)
    #[arg(long = "key", value_name = "MODULE=TEMPLATE")]
    keys: Vec<String>,

    /// Key color, as a name or an ANSI code
    #[arg(short = 'c', long, value_name = "COLOR")]
    color: Option<String>,

    /// Text between key and value
    #[arg(short = 's', long, value_name = "TEXT", allow_hyphen_values = true)]
    separator: Option<String>,

    /// Print error lines for modules without data
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    show_errors: Option<String>,

    /// Ignore cached values (and save fresh ones) when true
    #[arg(short = 'r', long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    recache: Option<String>,

    /// Cache directory
    #[arg(long, value_name = "DIR", env = "FASTFETCH_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE", env = "FASTFETCH_CONFIG")]
    config: Option<PathBuf>,

    /// Print the default config file and exit
    #[arg(long)]
    print_default_config: bool,

    /// List all module names and exit
    #[arg(long)]
    list_modules: bool,

    /// Describe the format arguments of every module and exit
    #[arg(long)]
    help_format: bool,

    /// Log debug information to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Log only errors to stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Run the program with these arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the config file cannot be loaded, an option
    /// value is invalid, or standard output cannot be written.
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        if self.print_default_config {
            return Ok(write_stdout(DEFAULT_CONFIG)?);
        }
        if self.list_modules {
            return Ok(write_stdout(&list_modules())?);
        }
        if self.help_format {
            return Ok(write_stdout(&help_format())?);
        }

        let mut config = Config::load(self.config.as_deref())?;
        self.apply_to(&mut config)?;
        warn_unknown_modules(&config);

        let cache_dir = match &self.cache_dir {
            Some(dir) => Some(dir.clone()),
            None => config.cache_dir_path()?,
        };
        let mut store = CacheStore::resolve(cache_dir.as_deref());
        store.validate_version(PROGRAM_VERSION);
        if config.recache {
            store.set_recache(true);
        }

        let key_color = match &config.color {
            Some(color) => Some(parse_color(color).ok_or_else(|| FetchError::InvalidOption {
                option: "color".to_string(),
                value: color.clone(),
                reason: "not a color name or ANSI color code".to_string(),
            })?),
            None => None,
        };

        let styled =
            io::stdout().is_terminal() && colored::control::SHOULD_COLORIZE.should_colorize();
        tracing::debug!(
            "recache={} cache_save={} styled={}",
            store.recache(),
            config.cache_save,
            styled
        );

        let structure = parse_structure(&config.structure, &config.set);
        let printer = Printer::new(BufWriter::new(io::stdout().lock()))
            .with_separator(config.separator)
            .with_key_color(key_color)
            .with_styled(styled);
        let options = RunOptions {
            show_errors: config.show_errors,
            cache_save: config.cache_save,
            formats: config.formats,
            keys: config.keys,
        };

        let mut pipeline = Pipeline::new(printer, store, options);
        pipeline.run(&structure, &CollectContext::system());
        pipeline.into_printer().into_inner().flush().map_err(FetchError::from)?;
        Ok(())
    }

    /// Apply command-line options on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidOption`] for a `KEY=VALUE` option without
    /// `=` or with an empty key.
    pub fn apply_to(&self, config: &mut Config) -> Result<()> {
        if self.has_display_options() {
            config.recache = true;
            config.cache_save = false;
        }

        if let Some(structure) = &self.structure {
            config.structure.clone_from(structure);
        }
        if let Some(separator) = &self.separator {
            config.separator.clone_from(separator);
        }
        if let Some(color) = &self.color {
            config.color = Some(color.clone());
        }
        if let Some(show_errors) = &self.show_errors {
            config.show_errors = parse_bool(show_errors);
        }

        for (option, values, table) in [
            ("--set", &self.set, &mut config.set),
            ("--format", &self.formats, &mut config.formats),
            ("--key", &self.keys, &mut config.keys),
        ] {
            for value in values {
                let (name, text) = parse_pair(option, value)?;
                table.insert(name.to_ascii_lowercase(), text.to_string());
            }
        }

        if let Some(recache) = &self.recache {
            let recache = parse_bool(recache);
            config.recache = recache;
            config.cache_save = recache;
        }

        Ok(())
    }

    fn has_display_options(&self) -> bool {
        self.structure.is_some()
            || self.separator.is_some()
            || self.color.is_some()
            || self.show_errors.is_some()
            || !self.set.is_empty()
            || !self.formats.is_empty()
            || !self.keys.is_empty()
    }

    /// `RUST_LOG` wins over `--verbose` and `--quiet`.
    fn init_logging(&self) {
        let level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// `true`, `yes` and `1` are true, ignoring case. Everything else is false.
#[must_use]
pub fn parse_bool(value: &str) -> bool {
    let value = value.trim();
    ["true", "yes", "1"].iter().any(|t| value.eq_ignore_ascii_case(t))
}

fn parse_pair<'a>(option: &str, value: &'a str) -> Result<(&'a str, &'a str), FetchError> {
    match value.split_once('=') {
        Some((name, text)) if !name.trim().is_empty() => Ok((name.trim(), text)),
        _ => Err(FetchError::InvalidOption {
            option: option.to_string(),
            value: value.to_string(),
            reason: "expected NAME=VALUE".to_string(),
        }),
    }
}

fn warn_unknown_modules(config: &Config) {
    for (table, names) in [("formats", &config.formats), ("keys", &config.keys)] {
        for name in names.keys() {
            if ModuleKind::from_name(name).is_none() && !config.set.contains_key(name) {
                tracing::warn!("[{table}] entry '{name}' does not name a module");
            }
        }
    }
}

fn list_modules() -> String {
    ModuleKind::ALL
        .iter()
        .map(|kind| format!("{}\n", kind.name()))
        .collect()
}

fn help_format() -> String {
    let mut out = String::from(
        "Format strings take positional arguments: {} is the next one, {N} is argument N.\n\
         Use {{ and }} for literal braces. Key formats get the instance number as {}.\n",
    );
    for kind in ModuleKind::ALL {
        let names = kind.arg_names();
        if names.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}:\n", kind.name()));
        for (i, name) in names.iter().enumerate() {
            out.push_str(&format!("  {{{}}}: {name}\n", i + 1));
        }
    }
    out
}

fn write_stdout(text: &str) -> Result<(), FetchError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
