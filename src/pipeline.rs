//! The render pipeline: one pass over the structure list.
//!
//! Each data module goes through
//!
//! ```text
//! cache lookup ──hit──▶ done
//!      │ miss
//!      ▼
//! collect ──err──▶ error line, nothing cached
//!      │ ok
//!      ▼
//! print every instance ──▶ persist (cacheable modules, saving enabled,
//!                                    no failed instance)
//! ```
//!
//! Modules are handled strictly in order, one at a time, and no module is
//! printed twice in a run.

use std::collections::BTreeMap;
use std::io::Write;

use crate::cache::CacheStore;
use crate::format::FormatArg;
use crate::modules::title::collect_title;
use crate::modules::{CollectContext, ModuleKind, StructureEntry};
use crate::output::Printer;

/// Shown for structure names that match no module and no custom value.
pub const NO_IMPLEMENTATION: &str = "<no implementation provided>";

/// Per-run settings the pipeline reads.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Print error lines for modules that could not collect data
    pub show_errors: bool,
    /// Persist freshly collected cacheable modules
    pub cache_save: bool,
    /// Custom value formats, keyed by lower-case module name
    pub formats: BTreeMap<String, String>,
    /// Custom key formats, keyed by lower-case module name
    pub keys: BTreeMap<String, String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            show_errors: false,
            cache_save: true,
            formats: BTreeMap::new(),
            keys: BTreeMap::new(),
        }
    }
}

impl RunOptions {
    #[must_use]
    pub fn format_for(&self, name: &str) -> Option<&str> {
        self.formats.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    #[must_use]
    pub fn key_for(&self, name: &str) -> Option<&str> {
        self.keys.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

/// Drives printing and caching for one run.
#[derive(Debug)]
pub struct Pipeline<W: Write> {
    printer: Printer<W>,
    store: CacheStore,
    options: RunOptions,
    title_width: Option<usize>,
}

impl<W: Write> Pipeline<W> {
    pub fn new(printer: Printer<W>, store: CacheStore, options: RunOptions) -> Self {
        Self {
            printer,
            store,
            options,
            title_width: None,
        }
    }

    /// Process every entry in order.
    pub fn run(&mut self, structure: &[StructureEntry], ctx: &CollectContext) {
        for entry in structure {
            match entry {
                StructureEntry::Module(kind) => self.run_module(*kind, ctx),
                StructureEntry::Custom { key, value } => {
                    let key_format = self.options.key_for(key);
                    self.printer.print_value(key, 0, key_format, value);
                }
                StructureEntry::Unknown(name) => {
                    if self.options.show_errors {
                        self.printer.print_error(name, 0, None, None, NO_IMPLEMENTATION);
                    }
                }
            }
        }
    }

    fn run_module(&mut self, kind: ModuleKind, ctx: &CollectContext) {
        match kind {
            ModuleKind::Title => {
                let (user, host) = collect_title(ctx);
                self.title_width = Some(self.printer.print_title(&user, &host));
            }
            ModuleKind::Separator => {
                let width = self.title_width.unwrap_or_else(|| {
                    let (user, host) = collect_title(ctx);
                    user.chars().count() + 1 + host.chars().count()
                });
                self.printer.print_separator_line(width);
            }
            ModuleKind::Break => self.printer.print_break(),
            ModuleKind::Colors => self.printer.print_colors(),
            _ => self.run_data_module(kind, ctx),
        }
    }

    fn run_data_module(&mut self, kind: ModuleKind, ctx: &CollectContext) {
        let Some(collector) = kind.collector() else {
            return;
        };
        let name = kind.name();
        let format = self.options.format_for(name).map(str::to_string);
        let key_format = self.options.key_for(name).map(str::to_string);

        if kind.cacheable()
            && !self.store.recache()
            && self.print_from_cache(name, key_format.as_deref(), format.as_deref(), kind.arity())
        {
            tracing::debug!("{name} served from cache");
            return;
        }

        let instances = match collector.collect(ctx) {
            Ok(instances) => instances,
            Err(err) => {
                tracing::debug!("{name} collection failed: {err}");
                if self.options.show_errors {
                    self.printer.print_error(
                        name,
                        0,
                        key_format.as_deref(),
                        format.as_deref(),
                        &err.to_string(),
                    );
                }
                return;
            }
        };

        // a module with a failed instance is recollected next run
        let complete = instances.iter().all(|instance| instance.error.is_none());
        let mut writer = (kind.cacheable() && self.options.cache_save && complete)
            .then(|| self.store.open_write(name));

        let single = instances.len() == 1;
        for (i, instance) in instances.iter().enumerate() {
            let index = if single { 0 } else { instance_index(i) };
            if let Some(err) = &instance.error {
                tracing::debug!("{name} {index} collection failed: {err}");
                if self.options.show_errors {
                    self.printer.print_error(
                        name,
                        index,
                        key_format.as_deref(),
                        format.as_deref(),
                        &err.to_string(),
                    );
                }
                continue;
            }
            match format.as_deref() {
                Some(format) => self.printer.print_format(
                    name,
                    index,
                    key_format.as_deref(),
                    format,
                    None,
                    &instance.args,
                ),
                None => {
                    self.printer.print_value(name, index, key_format.as_deref(), &instance.value);
                }
            }
            if let Some(writer) = writer.as_mut() {
                writer.append(&instance.value, &instance.args);
            }
        }

        if let Some(writer) = writer.take() {
            writer.close();
        }
    }

    /// Print `name` from its cache files.
    ///
    /// With a custom `format` the split records are re-rendered; otherwise the
    /// stored values are printed as they are. Returns `false` on a miss, in
    /// which case nothing was printed.
    pub fn print_from_cache(
        &mut self,
        name: &str,
        key_format: Option<&str>,
        format: Option<&str>,
        arity: usize,
    ) -> bool {
        match format {
            Some(format) => {
                let Some(instances) = self.store.read_split(name, arity) else {
                    return false;
                };
                for instance in instances {
                    let args: Vec<FormatArg> =
                        instance.data.into_iter().map(FormatArg::from).collect();
                    self.printer.print_format(name, instance.index, key_format, format, None, &args);
                }
            }
            None => {
                let Some(instances) = self.store.read_values(name) else {
                    return false;
                };
                for instance in instances {
                    self.printer.print_value(name, instance.index, key_format, &instance.data);
                }
            }
        }
        true
    }

    pub fn into_printer(self) -> Printer<W> {
        self.printer
    }
}

fn instance_index(position: usize) -> u8 {
    u8::try_from(position + 1).unwrap_or(u8::MAX)
}
