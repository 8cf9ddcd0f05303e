use fnv::FnvHashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("colour must start with '#': {0:?}")]
    MissingHash(String),
    #[error("colour must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in colour {0:?}")]
    BadDigit(String),
}

pub const GYM_ROOMS: &[(&str, &str, &str, &str)] = &[
    ("lobby", "Lobby", "🏢", "#f5c16c"),
    ("women-locker", "Women Locker Room", "🚪", "#8faadc"),
    ("men-locker", "Men Locker Room", "🚪", "#8faadc"),
    ("pool", "Swimming Pool", "🏊", "#4da3ff"),
    ("golf", "Golf Court", "⛳", "#7cc576"),
    ("boxing", "Boxing Room", "🥊", "#e57373"),
    ("stretching", "Stretching Room", "🧘", "#ba68c8"),
    ("weight", "Weight Room", "🏋️", "#7cc576"),
];

/// 8-bit sRGB colour used for legend swatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::BadDigit(s.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorError::BadLength(s.to_string())),
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: Rgb,
}

impl Room {
    pub fn new(id: &str, name: &str, icon: &str, color: Rgb) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color,
        }
    }
}

/// Immutable room list handed to the legend and the registry.
///
/// Duplicate ids are allowed in the list itself; consumers that need one
/// entry per room go through [`RoomCatalog::unique`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Build from `(id, name, icon, "#rrggbb")` rows.
    pub fn from_table(rows: &[(&str, &str, &str, &str)]) -> Result<Self, ColorError> {
        let rooms = rows
            .iter()
            .map(|&(id, name, icon, color)| {
                Rgb::from_hex(color).map(|c| Room::new(id, name, icon, c))
            })
            .collect::<Result<Vec<_>, ColorError>>()?;
        Ok(Self::new(rooms))
    }

    /// The rooms of the gym floor plan shipped with the page.
    pub fn gym() -> Result<Self, ColorError> {
        Self::from_table(GYM_ROOMS)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// First room declared with `id`.
    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// One room per id in declaration order; the first declaration wins.
    pub fn unique(&self) -> Vec<&Room> {
        let mut seen = FnvHashSet::default();
        self.rooms
            .iter()
            .filter(|r| seen.insert(r.id.as_str()))
            .collect()
    }
}
