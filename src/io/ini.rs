//! Minimal INI reader for editor configuration files
//!
//! Understands `[Section]` headers, `key=value` pairs, `;` and `#` comments and
//! blank lines. Keys repeated within a section resolve to the last value, the
//! way the game's own parser treats them.

use crate::io::error::{CliffError, Result, config_error};
use std::path::Path;

/// One `[Section]` with its entries in file order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    /// Create an empty section
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Section name without brackets
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value for a key, later duplicates winning
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value for a key that must be present and non-empty
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming this section when the key is
    /// missing or blank
    pub fn require(&self, key: &'static str) -> Result<&str> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            Some(_) => Err(config_error(&self.name, key, &"value is empty")),
            None => Err(config_error(&self.name, key, &"required key is missing")),
        }
    }

    /// Values in file order, duplicates already resolved
    pub fn values(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        let mut values = Vec::new();
        for (key, _) in &self.entries {
            if seen.contains(&key.as_str()) {
                continue;
            }
            seen.push(key.as_str());
            if let Some(value) = self.get(key) {
                values.push(value);
            }
        }
        values
    }

    /// Append an entry
    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.push((key.to_string(), value.to_string()));
    }
}

/// Parsed INI document
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: Vec<IniSection>,
}

impl IniFile {
    /// Parse INI text
    ///
    /// Sections appearing more than once are merged into the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unterminated header or for a
    /// key-value pair outside any section
    pub fn parse(text: &str) -> Result<Self> {
        let mut file = Self::default();
        let mut current: Option<usize> = None;

        for (line_number, raw_line) in text.lines().enumerate() {
            let line = strip_comment(raw_line).trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header.strip_suffix(']').ok_or_else(|| {
                    config_error(
                        header,
                        "header",
                        &format!("line {}: missing closing ']'", line_number + 1),
                    )
                })?;
                current = Some(file.section_index_or_insert(name.trim()));
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                // Lines without '=' carry no data
                continue;
            };

            let section = current
                .and_then(|index| file.sections.get_mut(index))
                .ok_or_else(|| {
                    config_error(
                        "<root>",
                        "entry",
                        &format!("line {}: '{}' is outside any section", line_number + 1, key.trim()),
                    )
                })?;
            section.insert(key.trim(), value.trim());
        }

        Ok(file)
    }

    /// Read and parse an INI file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliffError::FileSystem {
            path: path.to_path_buf(),
            operation: "read configuration",
            source: e,
        })?;
        Self::parse(&text)
    }

    /// Look up a section by name
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Look up a section that must exist
    ///
    /// # Errors
    ///
    /// Returns [`CliffError::MissingSection`] when absent
    pub fn require_section(&self, name: &str) -> Result<&IniSection> {
        self.section(name).ok_or_else(|| CliffError::MissingSection {
            section: name.to_string(),
        })
    }

    /// All sections in file order
    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    fn section_index_or_insert(&mut self, name: &str) -> usize {
        if let Some(index) = self.sections.iter().position(|s| s.name == name) {
            return index;
        }
        self.sections.push(IniSection::new(name));
        self.sections.len() - 1
    }
}

fn strip_comment(line: &str) -> &str {
    line.find([';', '#']).map_or(line, |index| line.get(..index).unwrap_or(line))
}
