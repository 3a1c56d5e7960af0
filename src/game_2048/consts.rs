use crate::utils::prelude::*;

pub const DEFAULT_SIZE: usize = 4;
pub const MAX_PIECE: u32 = 2048;

// A compass direction to tilt toward.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Side {
    /// Gets the sides in clockwise order, starting from north.
    pub fn all() -> [Side; 4] {
        [Side::North, Side::East, Side::South, Side::West]
    }

    /// Notates the side.
    pub fn notate(&self) -> String {
        match self {
            Side::North => "north",
            Side::East  => "east",
            Side::South => "south",
            Side::West  => "west",
        }.into()
    }

    /// The side whose perspective undoes this one.
    pub fn inverse(&self) -> Side {
        match self {
            Side::East => Side::West,
            Side::West => Side::East,
            _          => *self,
        }
    }
}

impl std::str::FromStr for Side {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" | "up"    => Ok(Side::North),
            "east"  | "e" | "right" => Ok(Side::East),
            "south" | "s" | "down"  => Ok(Side::South),
            "west"  | "w" | "left"  => Ok(Side::West),
            _                       => Err(anyhow!("invalid notation {s} for side")),
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notate())
    }
}
