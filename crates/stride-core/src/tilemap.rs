//! The [`TileMap`] traversability snapshot.
//!
//! A `TileMap` is an immutable row-major grid of open/blocked tiles. It is
//! built once from caller data (copied, never borrowed) and then only read,
//! so a single map can back any number of concurrent searches.

use std::error::Error;
use std::fmt;

use crate::geom::Point;

/// Errors from [`TileMap`] constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Width or height is zero or negative.
    BadDimensions { width: i32, height: i32 },
    /// The tile slice does not hold exactly `width * height` entries.
    SizeMismatch { expected: usize, actual: usize },
    /// The map text contains no rows.
    EmptyMap,
    /// Row `row` (0-based) has a different length than the first row.
    RaggedRow { row: usize, expected: usize, actual: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::BadDimensions { width, height } => {
                write!(f, "bad map dimensions {width}x{height}")
            }
            MapError::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} tiles, got {actual}")
            }
            MapError::EmptyMap => write!(f, "map text contains no rows"),
            MapError::RaggedRow {
                row,
                expected,
                actual,
            } => {
                write!(f, "row {row} has {actual} tiles, expected {expected}")
            }
        }
    }
}

impl Error for MapError {}

/// An immutable snapshot of a rectangular traversability map.
///
/// Tiles are stored row-major; a tile value of 0 is blocked and any nonzero
/// value is open. A cell's linear index `x + y * width` is its identity key
/// throughout the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<u8>,
}

impl TileMap {
    /// Build a map from a row-major byte slice (0 = blocked, nonzero = open).
    ///
    /// The slice is copied so the snapshot stays valid independently of the
    /// caller's buffer.
    pub fn from_bytes(width: i32, height: i32, tiles: &[u8]) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::BadDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles: tiles.to_vec(),
        })
    }

    /// Parse an ASCII map literal: `#` is blocked, any other character open.
    ///
    /// Rows are the non-empty lines of `text` (surrounding whitespace
    /// trimmed) and must all have the same length.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(MapError::EmptyMap);
        }
        let width = rows[0].chars().count();
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
            tiles.extend(line.chars().map(|c| if c == '#' { 0u8 } else { 1u8 }));
        }
        Self::from_bytes(width as i32, rows.len() as i32, &tiles)
    }

    /// Width of the map.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the map.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the map has no tiles. Never true for a constructed map,
    /// since dimensions are validated to be positive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies within the map bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is an in-bounds open tile.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.tiles[i] != 0)
    }

    /// Linear index of `p` (`x + y * width`), or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize + p.y as usize * self.width as usize)
    }

    /// Convert a linear index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Number of open tiles in the map.
    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_validates_dimensions() {
        assert_eq!(
            TileMap::from_bytes(0, 3, &[]),
            Err(MapError::BadDimensions {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            TileMap::from_bytes(-1, 3, &[]),
            Err(MapError::BadDimensions {
                width: -1,
                height: 3
            })
        );
    }

    #[test]
    fn from_bytes_validates_length() {
        let err = TileMap::from_bytes(3, 2, &[1, 1, 1, 1]).unwrap_err();
        assert_eq!(
            err,
            MapError::SizeMismatch {
                expected: 6,
                actual: 4
            }
        );
    }

    #[test]
    fn from_bytes_copies_tiles() {
        let mut bytes = vec![1u8, 0, 1, 1];
        let map = TileMap::from_bytes(2, 2, &bytes).unwrap();
        bytes[0] = 0;
        // The snapshot is unaffected by later caller writes.
        assert!(map.is_open(Point::new(0, 0)));
        assert!(!map.is_open(Point::new(1, 0)));
    }

    #[test]
    fn idx_and_point_round_trip() {
        let map = TileMap::from_bytes(4, 3, &[1; 12]).unwrap();
        for i in 0..map.len() {
            let p = map.point(i);
            assert_eq!(map.idx(p), Some(i));
        }
        assert_eq!(map.idx(Point::new(4, 0)), None);
        assert_eq!(map.idx(Point::new(0, 3)), None);
        assert_eq!(map.idx(Point::new(-1, 0)), None);
    }

    #[test]
    fn is_open_false_out_of_bounds() {
        let map = TileMap::from_bytes(2, 2, &[1; 4]).unwrap();
        assert!(!map.is_open(Point::new(2, 0)));
        assert!(!map.is_open(Point::new(0, -1)));
    }

    #[test]
    fn parse_simple_map() {
        let map = TileMap::parse(
            "
            .#.
            ...
            ",
        )
        .unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert!(!map.is_open(Point::new(1, 0)));
        assert!(map.is_open(Point::new(1, 1)));
        assert_eq!(map.open_count(), 5);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = TileMap::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(TileMap::parse("  \n "), Err(MapError::EmptyMap));
    }

    #[test]
    fn error_display() {
        let err = MapError::SizeMismatch {
            expected: 6,
            actual: 4,
        };
        assert_eq!(err.to_string(), "expected 6 tiles, got 4");
    }
}
