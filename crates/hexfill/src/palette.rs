//! The fixed game palette and the shading math derived from it.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// An RGB value used for rendering. Never part of the wire contract; the
/// service only ever speaks palette hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates an RGB value from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Adjusts every channel by `delta`, clamping at the channel bounds.
    ///
    /// Negative deltas darken, positive deltas lighten. The renderers use
    /// this to derive cell and swatch edge shades from the owner color.
    pub fn shade(self, delta: i16) -> Self {
        let adjust = |channel: u8| (i32::from(channel) + i32::from(delta)).clamp(0, 255) as u8;
        Self {
            r: adjust(self.r),
            g: adjust(self.g),
            b: adjust(self.b),
        }
    }
}

/// A territory color from the fixed game palette.
///
/// The palette is closed: the service only ever produces these six values,
/// and anything else in a snapshot is rejected as malformed. [`Color::White`]
/// doubles as the unclaimed value for cells no player has absorbed yet.
///
/// Each entry bundles its wire encoding, display RGB, grid letter and key
/// binding, so the client never derives capabilities from color strings at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Color {
    /// `#ff0000`, key `1`.
    Red,
    /// `#ffff00`, key `2`.
    Yellow,
    /// `#00ff00`, key `3`.
    Green,
    /// `#0000ff`, key `4`.
    Blue,
    /// `#ff00ff`, key `5`.
    Magenta,
    /// `#ffffff`, key `6`. Also the neutral value of an unclaimed cell.
    White,
}

impl Color {
    /// The wire form: a lowercase `#rrggbb` string.
    pub const fn wire(self) -> &'static str {
        match self {
            Self::Red => "#ff0000",
            Self::Yellow => "#ffff00",
            Self::Green => "#00ff00",
            Self::Blue => "#0000ff",
            Self::Magenta => "#ff00ff",
            Self::White => "#ffffff",
        }
    }

    /// The RGB value this color renders as.
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => Rgb::new(0xff, 0x00, 0x00),
            Self::Yellow => Rgb::new(0xff, 0xff, 0x00),
            Self::Green => Rgb::new(0x00, 0xff, 0x00),
            Self::Blue => Rgb::new(0x00, 0x00, 0xff),
            Self::Magenta => Rgb::new(0xff, 0x00, 0xff),
            Self::White => Rgb::new(0xff, 0xff, 0xff),
        }
    }

    /// Single-letter label used by text renderings of the board.
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Magenta => 'M',
            Self::White => 'W',
        }
    }

    /// The selection key bound to this color.
    pub const fn key(self) -> char {
        match self {
            Self::Red => '1',
            Self::Yellow => '2',
            Self::Green => '3',
            Self::Blue => '4',
            Self::Magenta => '5',
            Self::White => '6',
        }
    }

    /// Resolves a selection key back to its color.
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Red),
            '2' => Some(Self::Yellow),
            '3' => Some(Self::Green),
            '4' => Some(Self::Blue),
            '5' => Some(Self::Magenta),
            '6' => Some(Self::White),
            _ => None,
        }
    }

    /// Parses the wire form, accepting any ASCII case.
    pub fn from_wire(value: &str) -> Result<Self, UnknownColor> {
        match value.to_ascii_lowercase().as_str() {
            "#ff0000" => Ok(Self::Red),
            "#ffff00" => Ok(Self::Yellow),
            "#00ff00" => Ok(Self::Green),
            "#0000ff" => Ok(Self::Blue),
            "#ff00ff" => Ok(Self::Magenta),
            "#ffffff" => Ok(Self::White),
            _ => Err(UnknownColor {
                value: value.to_string(),
            }),
        }
    }
}

/// Unclaimed cells carry white until a player absorbs them.
impl Default for Color {
    fn default() -> Self {
        Self::White
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire())
    }
}

impl std::str::FromStr for Color {
    type Err = UnknownColor;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_wire(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.wire().to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = UnknownColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_wire(&value)
    }
}

/// A snapshot carried a color string outside the palette.
#[derive(Debug, Clone, Display, Error)]
#[display("unknown palette color {value:?}")]
pub struct UnknownColor {
    /// The offending wire value.
    pub value: String,
}
