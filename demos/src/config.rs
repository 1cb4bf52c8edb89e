// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use log::warn;
use vestli_json::{decode, Decoded, Value};

use crate::Error;

pub const DEFAULT_HEAD_FONT_SIZE: i32 = 48;
pub const DEFAULT_ROW_FONT_SIZE: i32 = 56;

/// A stop polled for departures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Transit API stop identifier.
    pub id: String,
    /// Departures closer than this many seconds are not shown.
    pub min_time: u32,
}

/// Board settings read from the JSON configuration file.
///
/// ```json
/// {
///   "FontPath": "/usr/share/fonts/truetype/DejaVuSans.ttf",
///   "HeadFontSize": 48,
///   "RowFontSize": 56,
///   "MarginLeft": 10,
///   "OdinMode": false,
///   "Stations": [{"ID": "3010200", "MinTime": 120}]
/// }
/// ```
///
/// Keys whose value has the wrong type are ignored, as are unknown keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub font_path: String,
    pub head_font_size: i32,
    pub row_font_size: i32,
    pub margin_left: i32,
    /// Show whole minutes only, instead of `mm:ss`.
    pub odin_mode: bool,
    pub stations: Vec<Station>,
}

impl Config {
    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = std::fs::read(path)?;
        Self::from_slice(&text)
    }

    /// Parses configuration text. A truncated document is used as far as it
    /// goes, with a warning.
    pub fn from_slice(text: &[u8]) -> Result<Self, Error> {
        let value = match decode(text)? {
            Decoded::Complete(value) => value,
            Decoded::Partial(value) => {
                warn!("configuration is truncated; using the part that parsed");
                value
            }
        };
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let nodes = value.as_object().ok_or(Error::NotAnObject)?;

        let mut font_path = None;
        let mut config = Config {
            font_path: String::new(),
            head_font_size: DEFAULT_HEAD_FONT_SIZE,
            row_font_size: DEFAULT_ROW_FONT_SIZE,
            margin_left: 0,
            odin_mode: false,
            stations: Vec::new(),
        };

        for node in nodes {
            let value = &node.value;
            match (node.name.as_slice(), value) {
                (b"FontPath", Value::String(_)) => {
                    let path = value.as_str().ok_or(Error::FontPathNotUtf8)?;
                    font_path = Some(path.to_owned());
                }
                (b"HeadFontSize", Value::Number(n)) => config.head_font_size = *n as i32,
                (b"RowFontSize", Value::Number(n)) => config.row_font_size = *n as i32,
                (b"MarginLeft", Value::Number(n)) => config.margin_left = *n as i32,
                (b"OdinMode", Value::Boolean(b)) => config.odin_mode = *b,
                (b"Stations", Value::Array(items)) => {
                    for item in items {
                        let index = config.stations.len();
                        config.stations.push(parse_station(item, index)?);
                    }
                }
                _ => {}
            }
        }

        config.font_path = font_path
            .filter(|p| !p.is_empty())
            .ok_or(Error::MissingFontPath)?;
        Ok(config)
    }

    pub fn head_line_height(&self) -> i32 {
        self.head_font_size * 12 / 10
    }

    pub fn row_line_height(&self) -> i32 {
        self.row_font_size * 12 / 10
    }
}

fn parse_station(value: &Value, index: usize) -> Result<Station, Error> {
    if value.as_object().is_none() {
        return Err(Error::StationNotAnObject(index));
    }
    let id = value
        .get("ID")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or(Error::MissingStationId(index))?;
    let min_time = value.get("MinTime").and_then(Value::as_f64).unwrap_or(0.0);

    Ok(Station {
        id: id.to_owned(),
        min_time: min_time as u32,
    })
}
