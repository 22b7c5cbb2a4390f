//! Zodiac Mapper: ecliptic longitude → sign and degree within sign.
//!
//! The tropical ecliptic is divided into 12 equal signs of 30 degrees,
//! starting from Aries at the vernal equinox.

use std::fmt::{Display, Formatter};

use natal_frames::normalize_deg;
use serde::Serialize;

/// Width of one sign, degrees.
pub const SIGN_SPAN_DEG: f64 = 30.0;

/// The 12 tropical zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Classical modality (quadruplicity) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign for a 0-based index; wraps modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Ecliptic longitude where the sign begins.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * SIGN_SPAN_DEG
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds split of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds [0, 60), may carry a fraction.
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:02.0}″", self.degrees, self.minutes, self.seconds.floor())
    }
}

/// Split decimal degrees into degrees, minutes and seconds. Sign is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let remainder = (d - degrees) * 60.0;
    let minutes = remainder.floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (remainder - minutes) * 60.0,
    }
}

/// A longitude expressed as sign plus degree within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPlacement {
    pub sign: ZodiacSign,
    pub sign_index: u8,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    pub sign_name: &'static str,
    pub sign_glyph: &'static str,
}

impl ZodiacPlacement {
    pub fn dms(&self) -> Dms {
        deg_to_dms(self.degree_in_sign)
    }
}

impl Display for ZodiacPlacement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.dms(), self.sign_name)
    }
}

/// Place a longitude in the zodiac.
///
/// Any finite longitude is accepted and wrapped first, so `-10` lands in
/// Pisces at 20° and `360` in Aries at 0°.
pub fn placement(longitude_deg: f64) -> ZodiacPlacement {
    let lon = normalize_deg(longitude_deg);
    let mut index = ((lon / SIGN_SPAN_DEG).floor() as u8).min(11);
    let mut degree_in_sign = lon - f64::from(index) * SIGN_SPAN_DEG;
    // The quotient can round up onto a sign boundary just below it.
    if degree_in_sign < 0.0 {
        index -= 1;
        degree_in_sign += SIGN_SPAN_DEG;
    }
    let sign = ZodiacSign::from_index(index);
    ZodiacPlacement {
        sign,
        sign_index: index,
        degree_in_sign,
        sign_name: sign.name(),
        sign_glyph: sign.glyph(),
    }
}
