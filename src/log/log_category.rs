use std::{fmt, str::FromStr};

/// The fixed set of severity categories a [`Logger`](crate::log::logger::Logger) dispatches on.
///
/// A category is named either by its all-uppercase or its all-lowercase
/// spelling; any other casing is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Chatty diagnostics. Disabled by default.
    Verbose,
    /// Progress of the application at a coarse-grained level.
    Info,
    /// Potentially harmful situations.
    Warning,
    /// Failures the application can recover from.
    Error,
    /// Failures the application cannot recover from.
    Fatal,
}

impl Category {
    /// Number of dispatch slots a logger carries.
    pub const COUNT: usize = 5;

    /// Every category, in dispatch-table order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Verbose,
        Category::Info,
        Category::Warning,
        Category::Error,
        Category::Fatal,
    ];

    /// Canonical uppercase spelling, also used as the label in formatted lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Verbose => "VERBOSE",
            Category::Info => "INFO",
            Category::Warning => "WARNING",
            Category::Error => "ERROR",
            Category::Fatal => "FATAL",
        }
    }

    #[must_use]
    pub const fn lowercase(self) -> &'static str {
        match self {
            Category::Verbose => "verbose",
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Error => "error",
            Category::Fatal => "fatal",
        }
    }

    /// Slot index in the dispatch table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Matches `name` against both canonical spellings of every category.
    ///
    /// ```
    /// use catlog::log::log_category::Category;
    ///
    /// assert_eq!(Category::from_name("info"), Some(Category::Info));
    /// assert_eq!(Category::from_name("Info"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|cat| name == cat.label() || name == cat.lowercase())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned by [`Category::from_str`] when the name matches no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError {
    pub name: String,
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid log category: {:?}", self.name)
    }
}

impl std::error::Error for CategoryParseError {}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CategoryParseError { name: s.to_owned() })
    }
}
