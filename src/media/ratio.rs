//! # Aspect ratios
//!
//! Screen aspect ratios, width over height.
use enum_map::{Enum, EnumMap};
use num_traits::One;
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::number_types::rational::Rational32;

/// A screen aspect ratio, width over height.
pub type Ratio = Rational32;

/// Common display aspect ratios.
///
/// The numeric id of a variant is its position in this list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum, EnumIter, EnumString, FromRepr, IntoStaticStr, strum::Display)]
#[repr(u8)]
pub enum AspectRatio {
    /// Square, as used by social media video.
    #[strum(to_string = "1:1")]
    Square,
    /// Early computer monitors.
    #[strum(to_string = "5:4")]
    Classic,
    /// Standard definition television.
    #[strum(to_string = "4:3")]
    Standard,
    /// 35mm photography.
    #[strum(to_string = "3:2")]
    Photo,
    /// Wide computer displays, stored as `8/5`.
    #[strum(to_string = "16:10")]
    Wide,
    /// High definition television.
    #[strum(to_string = "16:9")]
    Widescreen,
    /// Ultra wide displays.
    #[strum(to_string = "21:9")]
    UltraWide,
}

impl AspectRatio {
    /// The ratio as a fraction.
    ///
    /// `21:9` is kept in its marketing form rather than as `7/3`; it compares equal to `7/3`.
    pub fn ratio(self) -> Ratio {
        match self {
            AspectRatio::Square => Ratio::new(1, 1),
            AspectRatio::Classic => Ratio::new(5, 4),
            AspectRatio::Standard => Ratio::new(4, 3),
            AspectRatio::Photo => Ratio::new(3, 2),
            AspectRatio::Wide => Ratio::new(8, 5),
            AspectRatio::Widescreen => Ratio::new(16, 9),
            AspectRatio::UltraWide => Ratio::new(21, 9),
        }
    }

    /// Numeric id, stable across releases as long as variants are only appended.
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl From<AspectRatio> for Ratio {
    fn from(kind: AspectRatio) -> Self {
        kind.ratio()
    }
}

/// All named ratios.
pub fn ratio_table() -> EnumMap<AspectRatio, Ratio> {
    EnumMap::from_fn(AspectRatio::ratio)
}

/// Look up a ratio by its name, such as `"16:9"`.
///
/// # Return value
///
/// The named ratio, or `1/1` if the name is not known.
pub fn ratio_by_name(name: &str) -> Ratio {
    match name.parse::<AspectRatio>() {
        Ok(kind) => kind.ratio(),
        Err(_) => {
            log::debug!("Unknown aspect ratio name {name:?}, using 1/1");
            Ratio::one()
        },
    }
}

/// Look up a ratio by its numeric id.
///
/// # Return value
///
/// The ratio with that id, or `1/1` if there is no such ratio.
pub fn ratio_by_id(id: u8) -> Ratio {
    match AspectRatio::from_repr(id) {
        Some(kind) => kind.ratio(),
        None => {
            log::debug!("Unknown aspect ratio id {id}, using 1/1");
            Ratio::one()
        },
    }
}
