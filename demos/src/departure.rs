// SPDX-License-Identifier: Apache-2.0

use log::{debug, warn};
use vestli_json::{decode, Decoded, Value};

/// Direction code of eastbound departures in the real-time feed.
pub const EASTBOUND: i32 = 1;
/// Direction code of westbound departures.
pub const WESTBOUND: i32 = 2;

/// One expected departure from a station.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Departure {
    pub line: String,
    pub direction: i32,
    pub destination: String,
    /// Expected arrival, Unix seconds.
    pub arrival: i64,
    pub station_id: String,
}

impl Departure {
    /// Whether there is still time to reach this departure.
    pub fn is_reachable(&self, now: i64, min_time: u32) -> bool {
        self.arrival - now >= i64::from(min_time)
    }
}

/// Extracts departures from a real-time response body.
///
/// A body that is not JSON means no data this cycle and yields an empty list.
/// A truncated body yields the departures that parsed.
pub fn departures_from_slice(body: &[u8], station_id: &str, max: usize) -> Vec<Departure> {
    match decode(body) {
        Ok(Decoded::Complete(value)) => departures_from_value(&value, station_id, max),
        Ok(Decoded::Partial(value)) => {
            debug!("real-time response for {station_id} is truncated");
            departures_from_value(&value, station_id, max)
        }
        Err(err) => {
            warn!("no departures for {station_id}: {err}");
            Vec::new()
        }
    }
}

/// Reads at most `max` departures from the decoded response, which is an
/// array of objects with `LineRef`, `DirectionRef`, `DestinationName` and
/// `ExpectedArrivalTime` string fields. Missing or mistyped fields keep their
/// defaults.
pub fn departures_from_value(value: &Value, station_id: &str, max: usize) -> Vec<Departure> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .take(max)
        .map(|item| {
            let mut departure = Departure {
                station_id: station_id.to_owned(),
                ..Departure::default()
            };
            for node in item.as_object().unwrap_or_default() {
                let Some(text) = node.value.as_str() else {
                    continue;
                };
                match node.name.as_slice() {
                    b"DestinationName" => departure.destination = text.to_owned(),
                    b"DirectionRef" => {
                        departure.direction = i32::try_from(parse_c_long(text)).unwrap_or(0);
                    }
                    b"LineRef" => departure.line = text.to_owned(),
                    b"ExpectedArrivalTime" => {
                        departure.arrival = parse_dotnet_date(text).unwrap_or(0);
                    }
                    _ => {}
                }
            }
            departure
        })
        .collect()
}

/// Parses a `/Date(<millis>+<zone>)/` timestamp into Unix seconds.
///
/// The zone suffix is informational; the millisecond count is already UTC.
pub fn parse_dotnet_date(text: &str) -> Option<i64> {
    let inner = text.strip_prefix("/Date(")?;
    let millis = leading_int(inner);
    let digits = inner.strip_prefix(['-', '+']).unwrap_or(inner);
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(millis / 1000)
}

/// Orders departures by expected arrival. Equal times keep their order.
pub fn sort_by_arrival(departures: &mut [Departure]) {
    departures.sort_by_key(|d| d.arrival);
}

/// Splits departures into eastbound and westbound lists, dropping any other
/// direction code.
pub fn split_by_direction(departures: &[Departure]) -> (Vec<Departure>, Vec<Departure>) {
    let pick = |direction: i32| -> Vec<Departure> {
        departures
            .iter()
            .filter(|d| d.direction == direction)
            .cloned()
            .collect()
    };
    (pick(EASTBOUND), pick(WESTBOUND))
}

/// Time left until departure as shown on a board row: `mm:ss`, or whole
/// minutes in Odin mode.
pub fn format_countdown(seconds: i64, odin_mode: bool) -> String {
    let seconds = seconds.max(0);
    if odin_mode {
        format!("{} min", seconds / 60)
    } else {
        format!("{:2}:{:02}", seconds / 60, seconds % 60)
    }
}

/// Color of a board row: red when the departure is `min_time` seconds away,
/// shading through yellow to green at four times `min_time` and beyond.
pub fn row_color(seconds_left: i64, min_time: u32) -> Rgb {
    let min_time = i64::from(min_time);
    let max_time = 3 * min_time;
    let dt = (seconds_left - min_time).max(0);

    let mut hue = 1.0 / 3.0;
    if dt < max_time {
        hue *= dt as f64 / max_time as f64;
    }

    let (r, g) = if hue < 1.0 / 6.0 {
        (1.0, hue * 6.0)
    } else {
        (1.0 - (hue - 1.0 / 6.0) * 6.0, 1.0)
    };
    Rgb {
        r: (255.0 * r) as u8,
        g: (255.0 * g) as u8,
        b: 0,
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Integer with C base prefixes: `0x`/`0X` hex, leading `0` octal, decimal
/// otherwise. Reads the longest valid digit run; 0 if there is none.
fn parse_c_long(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) if hex.starts_with(|c: char| c.is_ascii_hexdigit()) => (16, hex),
        _ if rest.starts_with('0') => (8, rest),
        _ => (10, rest),
    };
    let value = digits
        .chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(d))
        });
    if negative {
        -value
    } else {
        value
    }
}

/// Integer value of the leading decimal digits (with optional sign), 0 if none.
fn leading_int(text: &str) -> i64 {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative {
        -value
    } else {
        value
    }
}
