use crate::{
    config::Config,
    error::LogError,
    log::{
        default_log_handler::DefaultLogHandler, log_category::Category, log_handler::LogHandler,
        log_output::LogOutput,
    },
};

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::Local;

/// A handler as stored in a dispatch slot.
pub type SharedHandler = Arc<dyn LogHandler>;

/// Emitted as a WARNING when [`Logger::log`] gets an unknown category.
pub const INVALID_CATEGORY_MSG: &str = "Invalid category provided. Message is not logged.";
/// Emitted as a WARNING when [`Logger::set_handler`] gets an unknown category.
pub const INVALID_HANDLER_CATEGORY_MSG: &str = "Invalid category provided. Handler is not set.";
/// Emitted as INFO by [`Logger::start`].
pub const STARTUP_MSG: &str = "Logger has been successfully initialized.";

/// Category-dispatching logger writing to a single output stream.
///
/// # Lifecycle
///
/// 1. [`Logger::new`] builds an uninitialized logger: no output, every slot empty.
/// 2. [`Logger::init`] attaches the output once and installs the defaults:
///    VERBOSE disabled, every other category bound to a [`DefaultLogHandler`].
/// 3. Dropping the logger (and any default handler it handed out) flushes
///    and closes the output.
///
/// The generic [`log`](Self::log) and [`set_handler`](Self::set_handler)
/// entry points do nothing until the logger is initialized. The
/// per-category functions ([`info`](Self::info) and friends) only look at
/// their slot, which is empty before initialization anyway.
pub struct Logger {
    output: Option<LogOutput>,
    initialized: bool,
    handlers: [Option<SharedHandler>; Category::COUNT],
    file_path: Option<PathBuf>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: None,
            initialized: false,
            handlers: Default::default(),
            file_path: None,
        }
    }

    /// Builds a logger already initialized on `output`.
    #[must_use]
    pub fn with_output(output: LogOutput) -> Self {
        let mut logger = Self::new();
        logger.init(Some(output));
        logger
    }

    /// Attaches `dest` as the output and installs the default handlers.
    ///
    /// Only the first call with an output has an effect. Returns whether
    /// the logger is initialized afterwards, so a repeated call reports
    /// `true` and a call with `None` on a fresh logger reports `false`.
    pub fn init(&mut self, dest: Option<LogOutput>) -> bool {
        let Some(dest) = dest else {
            return self.initialized;
        };
        if self.initialized {
            return true;
        }

        self.output = Some(dest);
        self.initialized = true;

        self.handlers[Category::Verbose.index()] = None;
        for cat in [
            Category::Info,
            Category::Warning,
            Category::Error,
            Category::Fatal,
        ] {
            self.handlers[cat.index()] = Some(self.default_handler(cat));
        }

        true
    }

    /// [`init`](Self::init), then announce the startup at INFO on success.
    pub fn start(&mut self, dest: Option<LogOutput>) -> bool {
        let ok = self.init(dest);
        if ok {
            self.info(true, STARTUP_MSG);
        }
        ok
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn output(&self) -> Option<&LogOutput> {
        self.output.as_ref()
    }

    /// Path of the log file when the logger was built by [`from_config`](Self::from_config).
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Logs `msg` under the category named `category`.
    ///
    /// The name must be the all-uppercase or all-lowercase spelling of a
    /// category. Anything else drops `msg` and logs a WARNING about it instead.
    pub fn log(&self, category: &str, msg: &str) {
        if !self.initialized {
            return;
        }

        match Category::from_name(category) {
            Some(cat) => self.emit(cat, true, msg),
            None => self.warning(true, INVALID_CATEGORY_MSG),
        }
    }

    /// Hands `msg` to the handler in `category`'s slot, if there is one.
    pub fn emit(&self, category: Category, condition: bool, msg: &str) {
        if let Some(handler) = &self.handlers[category.index()] {
            handler.handle(condition, msg);
        }
    }

    pub fn verbose(&self, condition: bool, msg: &str) {
        self.emit(Category::Verbose, condition, msg);
    }

    pub fn info(&self, condition: bool, msg: &str) {
        self.emit(Category::Info, condition, msg);
    }

    pub fn warning(&self, condition: bool, msg: &str) {
        self.emit(Category::Warning, condition, msg);
    }

    pub fn error(&self, condition: bool, msg: &str) {
        self.emit(Category::Error, condition, msg);
    }

    pub fn fatal(&self, condition: bool, msg: &str) {
        self.emit(Category::Fatal, condition, msg);
    }

    /// Replaces the handler of the category named `category`; `None` disables it.
    ///
    /// Returns `false` and logs a WARNING when the name is not a category or
    /// the logger is not initialized. That WARNING goes through the WARNING
    /// slot like any other, so it is silent if WARNING is disabled.
    pub fn set_handler(&mut self, category: &str, handler: Option<SharedHandler>) -> bool {
        let matched = if self.initialized {
            Category::from_name(category)
        } else {
            None
        };

        match matched {
            Some(cat) => {
                self.handlers[cat.index()] = handler;
                true
            }
            None => {
                self.warning(true, INVALID_HANDLER_CATEGORY_MSG);
                false
            }
        }
    }

    /// Typed form of [`set_handler`](Self::set_handler).
    ///
    /// Returns `false` without touching the slot when the logger is not initialized.
    pub fn set_category_handler(
        &mut self,
        category: Category,
        handler: Option<SharedHandler>,
    ) -> bool {
        if !self.initialized {
            return false;
        }
        self.handlers[category.index()] = handler;
        true
    }

    #[must_use]
    pub fn handler(&self, category: Category) -> Option<&SharedHandler> {
        self.handlers[category.index()].as_ref()
    }

    #[must_use]
    pub fn is_enabled(&self, category: Category) -> bool {
        self.handlers[category.index()].is_some()
    }

    /// The stock handler for `category`, writing to this logger's output.
    ///
    /// This is how a disabled category, VERBOSE included, gets switched back on:
    ///
    /// ```
    /// use catlog::log::{log_category::Category, log_output::LogOutput, logger::Logger};
    ///
    /// let mut logger = Logger::with_output(LogOutput::new(std::io::sink()));
    /// let verbose = logger.default_handler(Category::Verbose);
    /// assert!(logger.set_handler("verbose", Some(verbose)));
    /// ```
    #[must_use]
    pub fn default_handler(&self, category: Category) -> SharedHandler {
        Arc::new(DefaultLogHandler::new(category, self.output.clone()))
    }

    /// Flushes the output and releases this logger's hold on it.
    pub fn close(self) {
        if let Some(output) = &self.output {
            output.flush();
        }
    }

    /// Opens a log file as described by the `[Logging]` section of `config`.
    ///
    /// Keys:
    /// * `log_path` - directory for the file; `~` is expanded. Defaults to a
    ///   `logs/` directory next to the executable.
    /// * `log_filename` - defaults to `<YYYYMMDD_HHMMSS>-pid<pid>.log`.
    /// * `announce` - when on, the startup message is logged at INFO.
    ///
    /// Both path keys may also be given as globals, above any section; the
    /// `[Logging]` value wins when both are set.
    ///
    /// The `[Categories]` section switches the stock handler of a category
    /// on or off, e.g. `verbose = on`.
    ///
    /// # Errors
    ///
    /// * [`LogError::Io`] - the directory or the file cannot be created.
    /// * [`LogError::BadValue`] - a switch is neither on nor off.
    /// * [`LogError::InvalidCategory`] - `[Categories]` names an unknown category.
    pub fn from_config(config: &Config) -> Result<Self, LogError> {
        let dir = config
            .get_non_empty_or_global("Logging", "log_path")
            .map_or_else(|| exe_dir_fallback_cwd().join("logs"), expand_path);

        fs::create_dir_all(&dir).map_err(|source| LogError::Io {
            path: dir.clone(),
            source,
        })?;

        let fname = config
            .get_non_empty_or_global("Logging", "log_filename")
            .map_or_else(default_file_name, str::to_owned);
        let file_path = dir.join(fname);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .map_err(|source| LogError::Io {
                path: file_path.clone(),
                source,
            })?;

        let mut logger = Self::with_output(LogOutput::new(file));
        logger.file_path = Some(file_path);
        logger.apply_switches(config)?;

        if config.get_switch("Logging", "announce")?.unwrap_or(false) {
            logger.info(true, STARTUP_MSG);
        }

        Ok(logger)
    }

    fn apply_switches(&mut self, config: &Config) -> Result<(), LogError> {
        for (key, _) in config.section("Categories") {
            let cat: Category = key.parse()?;
            if let Some(on) = config.get_switch("Categories", key)? {
                let handler = on.then(|| self.default_handler(cat));
                self.set_category_handler(cat, handler);
            }
        }
        Ok(())
    }
}

/// `<YYYYMMDD_HHMMSS>-pid<pid>.log`, in local time.
fn default_file_name() -> String {
    format!(
        "{}-pid{}.log",
        Local::now().format("%Y%m%d_%H%M%S"),
        std::process::id()
    )
}

/// Locates the directory of the executable, or falls back to the current
/// working directory on error.
fn exe_dir_fallback_cwd() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
