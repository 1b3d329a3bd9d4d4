use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

/// A single string or a list of strings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany {
    /// One value.
    One(String),
    /// Several values.
    Many(Vec<String>),
}

impl OneOrMany {
    /// Iterates over the contained values.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        };
        values.iter().map(String::as_str)
    }
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// The `directories` field.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum Directories {
    /// `"lib"` or `["lib", "src"]`.
    Paths(OneOrMany),
    /// npm's `{ "lib": "lib", "doc": "docs" }` form; only the values are used.
    Named(BTreeMap<String, String>),
}

impl Directories {
    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Paths(paths) => Box::new(paths.iter()),
            Self::Named(map) => Box::new(map.values().map(String::as_str)),
        }
    }
}

/// The `workspaces` field.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum Workspaces {
    /// `["packages/*"]`.
    Patterns(OneOrMany),
    /// `{ "packages": ["packages/*"], "nohoist": [...] }`.
    Config {
        /// Workspace package globs.
        #[serde(default)]
        packages: Vec<String>,
    },
}

impl Workspaces {
    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Patterns(patterns) => Box::new(patterns.iter()),
            Self::Config { packages } => Box::new(packages.iter().map(String::as_str)),
        }
    }
}

/// Inclusion-relevant fields of a `package.json`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Manifest {
    files: Option<OneOrMany>,
    directories: Option<Directories>,
    main: Option<Value>,
    bin: Option<Value>,
    workspaces: Option<Workspaces>,
}

impl Manifest {
    /// Decodes a manifest from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Paths declared in `files`.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().flat_map(|files| files.iter())
    }

    /// Paths declared in `directories`.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.directories
            .iter()
            .flat_map(|directories| directories.iter())
    }

    /// The `main` entry point, when it is a string.
    #[must_use]
    pub fn main(&self) -> Option<&str> {
        self.main.as_ref().and_then(Value::as_str)
    }

    /// Executable paths declared in `bin`.
    ///
    /// A string is a single path; an object contributes its string values.
    #[must_use]
    pub fn bins(&self) -> Vec<&str> {
        match &self.bin {
            Some(Value::String(path)) => vec![path.as_str()],
            Some(Value::Object(map)) => map.values().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Workspace globs declared in `workspaces`.
    pub fn workspaces(&self) -> impl Iterator<Item = &str> {
        self.workspaces
            .iter()
            .flat_map(|workspaces| workspaces.iter())
    }

    /// Returns `true` when no field declares any path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files().next().is_none()
            && self.directories().next().is_none()
            && self.main().is_none()
            && self.bins().is_empty()
            && self.workspaces().next().is_none()
    }
}

impl FromStr for Manifest {
    type Err = serde_json::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(text)
    }
}
