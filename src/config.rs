//! Allow-list configuration for the unused-result check
//!
//! Two comma-separated lists drive the check: qualified names of package-level
//! functions, and unqualified names of `func() string` methods. Both come from
//! CLI flags or an optional `.unusedresult.toml` project file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default qualified function names whose results must be used.
pub const DEFAULT_FUNCS: &str = "errors.New,fmt.Errorf,fmt.Sprintf,fmt.Sprint,sort.Reverse";

/// Default names of `func() string` methods whose results must be used.
pub const DEFAULT_STRING_METHODS: &str = "Error,String";

/// Name of the optional project configuration file.
pub const CONFIG_FILE_NAME: &str = ".unusedresult.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A list contained a zero-length entry (stray leading, trailing, or
    /// doubled comma). Refusing it here keeps an empty string out of the sets.
    #[error("empty entry in {list} list: {raw:?}")]
    EmptyListEntry { list: &'static str, raw: String },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk shape of `.unusedresult.toml`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    /// Comma-separated qualified function names.
    funcs: Option<String>,
    /// Comma-separated method names.
    string_methods: Option<String>,
}

/// The two allow-lists, parsed into sets. Immutable after construction;
/// membership tests are exact string equality.
#[derive(Debug, Clone)]
pub struct UnusedResultConfig {
    funcs: HashSet<String>,
    string_methods: HashSet<String>,
}

impl UnusedResultConfig {
    /// Build from the two raw comma-separated lists.
    pub fn from_lists(funcs: &str, string_methods: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            funcs: parse_list(funcs, "functions")?,
            string_methods: parse_list(string_methods, "string-methods")?,
        })
    }

    /// Build from the documented defaults.
    pub fn defaults() -> Self {
        Self::from_lists(DEFAULT_FUNCS, DEFAULT_STRING_METHODS)
            .unwrap_or_else(|_| unreachable!("default lists are well-formed"))
    }

    /// Load lists from a `.unusedresult.toml` file, falling back to the
    /// defaults for any list the file omits.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_lists(
            file.funcs.as_deref().unwrap_or(DEFAULT_FUNCS),
            file.string_methods.as_deref().unwrap_or(DEFAULT_STRING_METHODS),
        )
    }

    /// Look for `.unusedresult.toml` in the project root; defaults if absent.
    pub fn from_default_locations(root: &Path) -> Result<Self, ConfigError> {
        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(&candidate)
        } else {
            Ok(Self::defaults())
        }
    }

    /// Is this qualified function name configured as must-use?
    pub fn is_unused_func(&self, qualified_name: &str) -> bool {
        self.funcs.contains(qualified_name)
    }

    /// Is this method name configured as must-use?
    pub fn is_unused_string_method(&self, name: &str) -> bool {
        self.string_methods.contains(name)
    }

    pub fn func_count(&self) -> usize {
        self.funcs.len()
    }

    pub fn method_count(&self) -> usize {
        self.string_methods.len()
    }
}

/// Split one comma-separated list into a set. An empty input yields an empty
/// set; a zero-length entry is a configuration error.
fn parse_list(raw: &str, list: &'static str) -> Result<HashSet<String>, ConfigError> {
    let mut set = HashSet::new();
    if raw.is_empty() {
        return Ok(set);
    }
    for name in raw.split(',') {
        if name.is_empty() {
            return Err(ConfigError::EmptyListEntry {
                list,
                raw: raw.to_string(),
            });
        }
        set.insert(name.to_string());
    }
    Ok(set)
}
