//! # Frame rates
//!
//! Video frame rates in Hz. NTSC derived rates are the nominal rate scaled by `1000/1001`.
use enum_map::{Enum, EnumMap};
use num_traits::One;
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::number_types::rational::Rational64;

/// A clock rate in Hz.
pub type Rate = Rational64;

/// Well-known video frame rates.
///
/// The numeric id of a variant is its position in this list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum, EnumIter, EnumString, FromRepr, IntoStaticStr, strum::Display)]
#[repr(u8)]
pub enum FrameRate {
    /// Cinema film, 24 frames per second.
    #[strum(to_string = "film_24p", serialize = "24p")]
    Film,
    /// Film transferred to NTSC, 23.976 frames per second.
    #[strum(to_string = "film_ntsc_23.976p", serialize = "23.976p")]
    FilmNtsc,
    /// PAL, 25 frames or 50 fields per second.
    #[strum(to_string = "pal_25p_50i", serialize = "25p", serialize = "50i")]
    Pal,
    /// NTSC, 29.97 frames or 59.94 fields per second.
    #[strum(to_string = "ntsc_30p_60i", serialize = "29.97p", serialize = "59.94i")]
    Ntsc,
    /// Progressive 30 frames per second.
    #[strum(to_string = "30p")]
    Progressive30,
    /// Progressive PAL, 50 frames per second.
    #[strum(to_string = "pal_50p", serialize = "50p")]
    PalProgressive,
    /// Progressive NTSC, 59.94 frames per second.
    #[strum(to_string = "ntsc_60p", serialize = "59.94p")]
    NtscProgressive,
    /// Progressive 60 frames per second.
    #[strum(to_string = "60p")]
    Progressive60,
}

impl FrameRate {
    /// The exact rate, already simplified.
    pub fn rate(self) -> Rate {
        match self {
            FrameRate::Film => Rate::new(24, 1),
            FrameRate::FilmNtsc => Rate::new(24000, 1001),
            FrameRate::Pal => Rate::new(25, 1),
            FrameRate::Ntsc => Rate::new(30000, 1001),
            FrameRate::Progressive30 => Rate::new(30, 1),
            FrameRate::PalProgressive => Rate::new(50, 1),
            FrameRate::NtscProgressive => Rate::new(60000, 1001),
            FrameRate::Progressive60 => Rate::new(60, 1),
        }
    }

    /// Numeric id, stable across releases as long as variants are only appended.
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl From<FrameRate> for Rate {
    fn from(kind: FrameRate) -> Self {
        kind.rate()
    }
}

/// All named rates.
pub fn rate_table() -> EnumMap<FrameRate, Rate> {
    EnumMap::from_fn(FrameRate::rate)
}

/// Look up a rate by its name, such as `"ntsc_30p_60i"` or `"25p"`.
///
/// # Return value
///
/// The named rate, or `1/1` if the name is not known.
pub fn rate_by_name(name: &str) -> Rate {
    match name.parse::<FrameRate>() {
        Ok(kind) => kind.rate(),
        Err(_) => {
            log::debug!("Unknown frame rate name {name:?}, using 1/1");
            Rate::one()
        },
    }
}

/// Look up a rate by its numeric id.
///
/// # Return value
///
/// The rate with that id, or `1/1` if there is no such rate.
pub fn rate_by_id(id: u8) -> Rate {
    match FrameRate::from_repr(id) {
        Some(kind) => kind.rate(),
        None => {
            log::debug!("Unknown frame rate id {id}, using 1/1");
            Rate::one()
        },
    }
}
