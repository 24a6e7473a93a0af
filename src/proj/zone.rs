//! Zone designators.
//!
//! A zone string is a zone number followed by one letter. Two grammars share
//! that shape: a latitude band letter (C..X, no I or O), e.g. "55H", and an
//! explicit hemisphere letter, e.g. "55S". "55S" is therefore band S (north of
//! the equator) in the first grammar and the southern hemisphere in the second.

use std::fmt;
use std::str::FromStr;

use crate::error::GeoError;

/// Latitude band letters from south to north, each 8° tall starting at -80°.
const BAND_LETTERS: [char; 20] = [
    'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V',
    'W', 'X',
];

/// Band letter returned for latitudes outside the UTM limits.
pub const OUT_OF_RANGE_BAND: char = 'Z';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere implied by a latitude band letter: bands N and above are north.
    pub fn from_band_letter(letter: char) -> Self {
        if letter.to_ascii_uppercase() >= 'N' {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    /// Hemisphere given as a literal 'N' or 'S'.
    pub fn from_ns_letter(letter: char) -> Result<Self, GeoError> {
        match letter.to_ascii_uppercase() {
            'N' => Ok(Hemisphere::North),
            'S' => Ok(Hemisphere::South),
            other => Err(GeoError::InvalidZone(format!(
                "hemisphere must be N or S, got {other}"
            ))),
        }
    }

    pub fn of_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    pub fn is_north(self) -> bool {
        self == Hemisphere::North
    }
}

/// A parsed zone designator: zone number plus its letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridZone {
    pub number: i32,
    pub letter: char,
}

impl GridZone {
    /// Hemisphere under the band-letter grammar.
    pub fn band_hemisphere(&self) -> Hemisphere {
        Hemisphere::from_band_letter(self.letter)
    }

    /// Hemisphere under the N/S grammar.
    pub fn ns_hemisphere(&self) -> Result<Hemisphere, GeoError> {
        Hemisphere::from_ns_letter(self.letter)
    }
}

impl FromStr for GridZone {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_zone(s)? {
            (number, Some(letter)) => Ok(GridZone { number, letter }),
            (_, None) => Err(GeoError::InvalidZone(s.to_string())),
        }
    }
}

impl fmt::Display for GridZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.letter)
    }
}

/// Zone number of a zone string; the letter, if any, is ignored.
pub fn parse_zone_number(s: &str) -> Result<i32, GeoError> {
    split_zone(s).map(|(number, _)| number)
}

fn split_zone(s: &str) -> Result<(i32, Option<char>), GeoError> {
    let invalid = || GeoError::InvalidZone(s.to_string());

    let trimmed = s.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits_end == 0 {
        return Err(invalid());
    }
    let number = trimmed[..digits_end].parse::<i32>().map_err(|_| invalid())?;

    let mut rest = trimmed[digits_end..].trim_start().chars();
    let letter = match rest.next() {
        None => None,
        Some(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        Some(_) => return Err(invalid()),
    };
    if rest.next().is_some() {
        return Err(invalid());
    }
    Ok((number, letter))
}

/// Latitude band letter for `latitude` (degrees), or [`OUT_OF_RANGE_BAND`]
/// outside [-80, 84].
pub fn utm_letter_designator(latitude: f64) -> char {
    if !(-80.0..=84.0).contains(&latitude) {
        return OUT_OF_RANGE_BAND;
    }
    // Band X is 12° tall and includes 84° itself.
    let index = (((latitude + 80.0) / 8.0).floor() as usize).min(BAND_LETTERS.len() - 1);
    BAND_LETTERS[index]
}

/// Position of a band letter counted from the north (X = 0 .. C = 19).
pub fn utm_letter_number(letter: char) -> Option<u8> {
    BAND_LETTERS
        .iter()
        .rev()
        .position(|&c| c == letter.to_ascii_uppercase())
        .map(|i| i as u8)
}

/// Southern latitude bound of a band (degrees), e.g. 'H' = -40.
pub fn utm_band_bound(letter: char) -> Option<i32> {
    BAND_LETTERS
        .iter()
        .position(|&c| c == letter.to_ascii_uppercase())
        .map(|i| -80 + 8 * i as i32)
}

/// Zone number overrides of the standard UTM numbering: the Norway bulge
/// and the Svalbard zones. `longitude` must already be normalised.
pub fn utm_zone_exception(latitude: f64, longitude: f64) -> Option<i32> {
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return Some(32);
    }
    if (72.0..84.0).contains(&latitude) {
        return match longitude {
            lon if (0.0..9.0).contains(&lon) => Some(31),
            lon if (9.0..21.0).contains(&lon) => Some(33),
            lon if (21.0..33.0).contains(&lon) => Some(35),
            lon if (33.0..42.0).contains(&lon) => Some(37),
            _ => None,
        };
    }
    None
}
