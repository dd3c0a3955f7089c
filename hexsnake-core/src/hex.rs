//! Hex grid coordinates and directions (axial, flat-topped)

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Third cube coordinate (q + r + s == 0)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Distance between two hexes
    pub fn distance_to(&self, other: Hex) -> u32 {
        hex_distance(*self, other)
    }

    /// Distance from center (0,0)
    pub fn distance_to_center(&self) -> u32 {
        hex_distance(*self, Hex::ORIGIN)
    }

    /// Get neighbor in direction
    pub fn neighbor(&self, direction: Direction) -> Hex {
        *self + direction
    }

    /// All six neighbors, in `Direction::ALL` order
    pub fn neighbors(&self) -> [Hex; 6] {
        neighbors(*self)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl Add<Direction> for Hex {
    type Output = Hex;

    fn add(self, direction: Direction) -> Hex {
        let (dq, dr) = direction.offset();
        Hex::new(self.q + dq, self.r + dr)
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, other: Hex) -> Hex {
        Hex::new(self.q + other.q, self.r + other.r)
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, other: Hex) -> Hex {
        Hex::new(self.q - other.q, self.r - other.r)
    }
}

/// Grid distance: the largest of the three cube-coordinate differences
pub fn hex_distance(a: Hex, b: Hex) -> u32 {
    let dq = (a.q - b.q).unsigned_abs();
    let dr = (a.r - b.r).unsigned_abs();
    let ds = ((a.q + a.r) - (b.q + b.r)).unsigned_abs();
    dq.max(dr).max(ds)
}

/// The six cells adjacent to `hex`
pub fn neighbors(hex: Hex) -> [Hex; 6] {
    Direction::ALL.map(|dir| hex + dir)
}

/// Board dimension as a coordinate, saturating at `i32::MAX`
pub(crate) fn span(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Every hex within `radius` steps of `center` (inclusive), row by row
pub fn hexes_in_range(center: Hex, radius: u32) -> impl Iterator<Item = Hex> {
    let radius = span(radius);
    (-radius..=radius).flat_map(move |dq| {
        let lo = (-radius).max(-dq - radius);
        let hi = radius.min(-dq + radius);
        (lo..=hi).map(move |dr| Hex::new(center.q + dq, center.r + dr))
    })
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=SE, 1=S, 2=SW, 3=NW, 4=N, 5=NE (screen space, y down)
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // NW
    (0, -1),  // N
    (1, -1),  // NE
];

/// One of the six unit steps on a flat-topped hex grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    SouthEast = 0,
    South = 1,
    SouthWest = 2,
    NorthWest = 3,
    North = 4,
    NorthEast = 5,
}

impl Direction {
    /// Clockwise on screen, starting at `SouthEast`
    pub const ALL: [Direction; 6] = [
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    /// Axial offset (dq, dr)
    pub const fn offset(self) -> (i32, i32) {
        DIRECTIONS[self as usize]
    }

    pub fn from_offset(dq: i32, dr: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.offset() == (dq, dr))
    }

    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self {
        self.opposite()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
            Direction::North => "N",
            Direction::NorthEast => "NE",
        };
        f.write_str(name)
    }
}
