//! Cliff types and the editor-wide cliff catalog

use crate::algorithm::search::{SearchConfig, SearchOutcome, SearchRequest, find_path};
use crate::catalog::tile::CliffTile;
use crate::io::configuration::CLIFF_TYPES_SECTION;
use crate::io::error::{CliffError, Result, config_error};
use crate::io::ini::IniFile;
use std::path::Path;

/// A named family of cliff tiles valid in a set of theaters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliffType {
    name: String,
    allowed_theaters: Vec<String>,
    tiles: Vec<CliffTile>,
}

impl CliffType {
    /// Build a cliff type from already loaded tiles
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no theater or no tile is given
    pub fn new(name: &str, allowed_theaters: Vec<String>, tiles: Vec<CliffTile>) -> Result<Self> {
        if allowed_theaters.is_empty() {
            return Err(config_error(
                name,
                "AllowedTheaters",
                &"at least one theater is required",
            ));
        }
        if tiles.is_empty() {
            return Err(config_error(
                name,
                "Tiles",
                &format!("no tile sections found, expected [{name}.0]"),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            allowed_theaters,
            tiles,
        })
    }

    /// Load a cliff type and its numbered tile sections
    ///
    /// Tiles are read from `[<section>.0]`, `[<section>.1]` and so on until
    /// the first missing index.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is missing, a required key is absent,
    /// or any tile section is malformed
    pub fn from_ini_section(ini: &IniFile, section_name: &str) -> Result<Self> {
        let section = ini.require_section(section_name)?;

        let name = section.get("Name").unwrap_or(section_name);
        let allowed_theaters: Vec<String> = section
            .require("AllowedTheaters")?
            .split(',')
            .map(str::trim)
            .filter(|theater| !theater.is_empty())
            .map(str::to_string)
            .collect();

        let mut tiles = Vec::new();
        while let Some(tile_section) = ini.section(&format!("{section_name}.{}", tiles.len())) {
            tiles.push(CliffTile::from_ini_section(tiles.len(), tile_section)?);
        }

        if tiles.is_empty() {
            return Err(config_error(
                section_name,
                "Tiles",
                &format!("no tile sections found, expected [{section_name}.0]"),
            ));
        }

        Self::new(name, allowed_theaters, tiles)
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Theaters this cliff type may be placed in
    pub fn allowed_theaters(&self) -> &[String] {
        &self.allowed_theaters
    }

    /// Every tile of this type in catalog order
    pub fn tiles(&self) -> &[CliffTile] {
        &self.tiles
    }

    /// Test theater eligibility, ignoring case
    pub fn allows_theater(&self, theater: &str) -> bool {
        self.allowed_theaters
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(theater))
    }

    /// Search for a chain of this type's tiles in the active theater
    ///
    /// # Errors
    ///
    /// Returns [`CliffError::TheaterMismatch`] if this type is not available in
    /// `theater`. Failing to find a path is reported through the outcome.
    pub fn find_path(
        &self,
        theater: &str,
        request: &SearchRequest,
        config: &SearchConfig,
    ) -> Result<SearchOutcome<'_>> {
        if !self.allows_theater(theater) {
            return Err(CliffError::TheaterMismatch {
                cliff_type: self.name.clone(),
                theater: theater.to_string(),
            });
        }
        Ok(find_path(request, &self.tiles, config))
    }
}

/// Every cliff type known to the editor
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliffCatalog {
    cliff_types: Vec<CliffType>,
}

impl CliffCatalog {
    /// Wrap already loaded cliff types
    pub const fn new(cliff_types: Vec<CliffType>) -> Self {
        Self { cliff_types }
    }

    /// Load every cliff type listed in the `[CliffTypes]` section
    ///
    /// # Errors
    ///
    /// Returns the first configuration error encountered; a partially valid
    /// catalog is never returned
    pub fn from_ini(ini: &IniFile) -> Result<Self> {
        let listing = ini.require_section(CLIFF_TYPES_SECTION)?;
        let cliff_types = listing
            .values()
            .into_iter()
            .map(|section_name| CliffType::from_ini_section(ini, section_name))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = cliff_types.len(), "loaded cliff catalog");
        Ok(Self::new(cliff_types))
    }

    /// Read and load a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any record is malformed
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_ini(&IniFile::load(path)?)
    }

    /// All cliff types in catalog order
    pub fn cliff_types(&self) -> &[CliffType] {
        &self.cliff_types
    }

    /// Find a cliff type by display name, ignoring case
    ///
    /// # Errors
    ///
    /// Returns [`CliffError::UnknownCliffType`] when no type matches
    pub fn get(&self, name: &str) -> Result<&CliffType> {
        self.cliff_types
            .iter()
            .find(|cliff_type| cliff_type.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CliffError::UnknownCliffType {
                name: name.to_string(),
            })
    }

    /// Cliff types available in a theater
    pub fn for_theater<'a>(&'a self, theater: &'a str) -> impl Iterator<Item = &'a CliffType> {
        self.cliff_types
            .iter()
            .filter(move |cliff_type| cliff_type.allows_theater(theater))
    }
}
