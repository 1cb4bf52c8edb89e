// SPDX-License-Identifier: Apache-2.0

//! Departure-board data on top of `vestli-json`: the board configuration file
//! and the departures in a real-time transit response.

mod config;
pub use config::{Config, Station, DEFAULT_HEAD_FONT_SIZE, DEFAULT_ROW_FONT_SIZE};

mod departure;
pub use departure::{
    departures_from_slice, departures_from_value, format_countdown, parse_dotnet_date, row_color,
    sort_by_arrival, split_by_direction, Departure, Rgb, EASTBOUND, WESTBOUND,
};

mod error;
pub use error::Error;
