//! Typed model for YAML program specification files.
//!
//! The schema is deliberately forgiving: every field defaults when absent,
//! unknown keys are ignored, and free-text fields accept either a scalar or
//! a list (see [`TextList`]). Structures are decoded once per input file and
//! read-only from then on.

mod load;
mod text;

pub use load::{load_file, resolve_patterns, SpecFile};
pub use text::TextList;

use serde::Deserialize;

/// Root of one specification file: an ordered list of modules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgSpec {
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// A named group of features, rendered as one heading with a trailing page
/// break.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One documented program within a module; the unit of rendering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: TextList,
    #[serde(default)]
    pub name: TextList,
    #[serde(default)]
    pub mode: TextList,
    #[serde(default)]
    pub desc: TextList,
    #[serde(default)]
    pub env: Env,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub screens: Vec<Screen>,
    #[serde(default)]
    pub input: Vec<Input>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub others: Others,
}

/// Build environment of a program: where the sources live and what language
/// they are written in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Env {
    #[serde(default)]
    pub sources: TextList,
    #[serde(default, rename = "langs")]
    pub languages: TextList,
}

impl Env {
    pub fn is_blank(&self) -> bool {
        self.sources.is_blank() && self.languages.is_blank()
    }
}

/// A table or file the program touches, with how it is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub name: TextList,
    #[serde(default)]
    pub usage: TextList,
}

/// A screen the program presents, optionally with a captured image.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Screen {
    #[serde(default)]
    pub id: TextList,
    #[serde(default)]
    pub name: TextList,
    #[serde(default)]
    pub image: ScreenImage,
}

/// Screen capture reference. The file path is relative to the directory of
/// the specification file that names it; width is the display width in
/// points, 0 meaning "use the default".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenImage {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub width: u32,
}

impl ScreenImage {
    pub fn is_present(&self) -> bool {
        !self.file.trim().is_empty()
    }
}

/// One input block: a named form or feed with its fields and rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub name: TextList,
    #[serde(default)]
    pub fields: TextList,
    #[serde(default, rename = "cons")]
    pub constraints: TextList,
    #[serde(default)]
    pub remarks: TextList,
}

/// One program parameter row for the fixed five-column parameter table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub field: TextList,
    #[serde(default)]
    pub data: TextList,
    #[serde(default)]
    pub io: TextList,
    #[serde(default)]
    pub remarks: TextList,
}

/// A named behavior scenario with its Gherkin-style description lines.
///
/// Description lines stay raw strings: keyword extraction happens at render
/// time, and a malformed `desc` list is a decode error rather than a silent
/// drop, since scenarios are the part authors edit most.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: TextList,
    #[serde(default)]
    pub desc: Vec<String>,
}

/// Trailing free-form sections rendered after everything else.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Others {
    #[serde(default)]
    pub reference: TextList,
    #[serde(default)]
    pub limits: TextList,
    #[serde(default)]
    pub remarks: TextList,
}

impl Others {
    /// Label/value pairs in render order. The fixed list replaces any need
    /// to scan fields dynamically.
    pub fn entries(&self) -> [(&'static str, &TextList); 3] {
        [
            ("External Reference", &self.reference),
            ("Program Limits", &self.limits),
            ("Remarks", &self.remarks),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_blank())
    }
}
