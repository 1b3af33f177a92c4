use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::LogError;

/// INI-style settings: `key = value` pairs, optionally grouped under `[Section]` headers.
///
/// Lines starting with `#` are comments. Keys before the first header are globals.
#[derive(Debug)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim().to_string();
                let value = line[pos + 1..].trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    pub fn empty() -> Self {
        Self {
            globals: HashMap::new(),
            sections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    /// Section value, falling back to the global of the same key. Empty values count as absent.
    #[must_use]
    pub fn get_non_empty_or_global(&self, section: &str, key: &str) -> Option<&str> {
        self.get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
    }

    /// All keys of `section` with their values, in no particular order.
    pub fn section(&self, section: &str) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .get(section)
            .into_iter()
            .flat_map(|sec| sec.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Reads an on/off switch. Absent keys yield `Ok(None)`.
    pub fn get_switch(&self, section: &str, key: &str) -> Result<Option<bool>, LogError> {
        self.get_non_empty(section, key)
            .map(|value| {
                parse_switch(value).ok_or_else(|| LogError::BadValue {
                    section: section.to_owned(),
                    key: key.to_owned(),
                    value: value.to_owned(),
                })
            })
            .transpose()
    }
}

pub(crate) fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    const SAMPLE: &str = r#"
# top-level values
app = "demo"

[Logging]
log_path = ~/logs
log_filename =
announce = yes

[Categories]
verbose = on
info = OFF
"#;

    #[test]
    fn parses_globals_and_sections() {
        let cfg = Config::parse(SAMPLE);
        assert_eq!(cfg.get_global("app"), Some("demo"));
        assert_eq!(cfg.get("Logging", "log_path"), Some("~/logs"));
        assert_eq!(cfg.get("Logging", "log_filename"), Some(""));
        assert_eq!(cfg.get_non_empty("Logging", "log_filename"), None);
        assert_eq!(cfg.get("Missing", "log_path"), None);
    }

    #[test]
    fn globals_back_up_section_values() {
        let cfg = Config::parse(
            "log_path = /global\nlog_filename = g.log\n[Logging]\nlog_path = /local\nlog_filename =\n",
        );
        assert_eq!(cfg.get_non_empty_or_global("Logging", "log_path"), Some("/local"));
        assert_eq!(cfg.get_non_empty_or_global("Logging", "log_filename"), Some("g.log"));
        assert_eq!(cfg.get_non_empty_or_global("Logging", "announce"), None);
    }

    #[test]
    fn switches() {
        let cfg = Config::parse(SAMPLE);
        assert_eq!(cfg.get_switch("Logging", "announce").unwrap(), Some(true));
        assert_eq!(cfg.get_switch("Categories", "info").unwrap(), Some(false));
        assert_eq!(cfg.get_switch("Categories", "fatal").unwrap(), None);

        let bad = Config::parse("[Categories]\nerror = sometimes\n");
        assert!(matches!(
            bad.get_switch("Categories", "error"),
            Err(LogError::BadValue { .. })
        ));
    }

    #[test]
    fn section_iterates_entries() {
        let cfg = Config::parse(SAMPLE);
        let mut keys: Vec<_> = cfg.section("Categories").map(|(k, _)| k).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["info", "verbose"]);
        assert_eq!(cfg.section("Nope").count(), 0);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/definitely/not/here.ini").unwrap_err();
        assert!(matches!(err, LogError::Io { .. }));
    }
}
