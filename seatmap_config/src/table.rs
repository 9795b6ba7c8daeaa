// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, RoomConfig, RoomId};

/// Source of per-room settings.
///
/// Hosts that keep room settings elsewhere implement this directly; `()`
/// returns the defaults for every room.
pub trait RoomConfigLookup {
    /// Settings for `room`.
    fn room_config(&self, room: RoomId) -> RoomConfig;
}

impl RoomConfigLookup for () {
    fn room_config(&self, _room: RoomId) -> RoomConfig {
        RoomConfig::default()
    }
}

/// Default settings plus per-room overrides.
///
/// The TOML form has an optional `[default]` table and any number of
/// `[[room]]` entries. Each entry needs an `id` and inherits every setting it
/// does not name from `[default]`:
///
/// ```toml
/// [default]
/// seat_bounds_margin = 30
///
/// [[room]]
/// id = 4
/// zoom_after_scale = 1.25
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomConfigTable {
    default: RoomConfig,
    rooms: HashMap<RoomId, RoomConfig>,
}

/// Raw document shape; room tables stay untyped until merged over `[default]`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDocument {
    #[serde(default)]
    default: toml::Table,
    #[serde(default)]
    room: Vec<toml::Table>,
}

#[derive(Serialize)]
struct RoomEntry<'a> {
    id: RoomId,
    #[serde(flatten)]
    config: &'a RoomConfig,
}

#[derive(Serialize)]
struct TableDocument<'a> {
    default: &'a RoomConfig,
    room: Vec<RoomEntry<'a>>,
}

impl RoomConfigTable {
    /// Creates a table with `default` and no overrides.
    #[must_use]
    pub fn new(default: RoomConfig) -> Self {
        Self {
            default,
            rooms: HashMap::new(),
        }
    }

    /// Parses and validates a table from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let document: TomlDocument = toml::from_str(source)?;
        let default: RoomConfig = toml::Value::Table(document.default.clone()).try_into()?;
        default.validate()?;

        let mut table = Self::new(default);
        for (index, mut entry) in document.room.into_iter().enumerate() {
            let id: RoomId = entry
                .remove("id")
                .ok_or(ConfigError::MissingRoomId(index))?
                .try_into()?;
            let mut fields = document.default.clone();
            fields.extend(entry);
            let config: RoomConfig = toml::Value::Table(fields).try_into()?;
            config
                .validate()
                .map_err(|source| ConfigError::InvalidRoom {
                    room: id,
                    source: Box::new(source),
                })?;
            if table.rooms.insert(id, config).is_some() {
                return Err(ConfigError::DuplicateRoom(id));
            }
        }
        Ok(table)
    }

    /// Reads a table from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Writes the table as TOML, rooms in id order, every setting spelled out.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let mut room: Vec<RoomEntry<'_>> = self
            .rooms
            .iter()
            .map(|(&id, config)| RoomEntry { id, config })
            .collect();
        room.sort_by_key(|entry| entry.id);
        Ok(toml::to_string(&TableDocument {
            default: &self.default,
            room,
        })?)
    }

    /// Settings used for rooms without an override.
    #[must_use]
    pub fn default_config(&self) -> &RoomConfig {
        &self.default
    }

    /// Settings for `room`, falling back to the default.
    #[must_use]
    pub fn get(&self, room: RoomId) -> &RoomConfig {
        self.rooms.get(&room).unwrap_or(&self.default)
    }

    /// Returns `true` if `room` has its own settings.
    #[must_use]
    pub fn has_override(&self, room: RoomId) -> bool {
        self.rooms.contains_key(&room)
    }

    /// Validates `config` and stores it as the override for `room`,
    /// returning the previous override.
    pub fn insert(
        &mut self,
        room: RoomId,
        config: RoomConfig,
    ) -> Result<Option<RoomConfig>, ConfigError> {
        config
            .validate()
            .map_err(|source| ConfigError::InvalidRoom {
                room,
                source: Box::new(source),
            })?;
        Ok(self.rooms.insert(room, config))
    }

    /// Number of rooms with their own settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no room has its own settings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl RoomConfigLookup for RoomConfigTable {
    fn room_config(&self, room: RoomId) -> RoomConfig {
        *self.get(room)
    }
}
