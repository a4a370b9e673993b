use crate::utils::math::{floor_div, wrap_offset};
use crate::world::chunk::CHUNK_SIZE;
use glam::IVec2;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord(pub IVec2);

impl PartialOrd for ChunkCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChunkCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0.x.cmp(&other.0.x) {
            Ordering::Equal => self.0.y.cmp(&other.0.y),
            ord => ord,
        }
    }
}

impl ChunkCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    /// World cell of this chunk's local origin (0, 0).
    pub fn origin(&self) -> IVec2 {
        self.0 * CHUNK_SIZE as i32
    }
}

impl From<IVec2> for ChunkCoord {
    fn from(vec: IVec2) -> Self {
        Self(vec)
    }
}

impl From<ChunkCoord> for IVec2 {
    fn from(coord: ChunkCoord) -> Self {
        coord.0
    }
}

/// A world cell split into the chunk holding it and the offset inside that chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalPos {
    pub chunk: ChunkCoord,
    pub x: usize,
    pub y: usize,
}

impl LocalPos {
    /// Floor-division decomposition: `-1` lands in chunk `-1` at offset 15,
    /// never in chunk 0.
    pub fn from_world(x: i32, y: i32) -> Self {
        let size = CHUNK_SIZE as i32;
        Self {
            chunk: ChunkCoord::new(floor_div(x, size), floor_div(y, size)),
            x: wrap_offset(x, size) as usize,
            y: wrap_offset(y, size) as usize,
        }
    }

    pub fn to_world(&self) -> IVec2 {
        self.chunk.origin() + IVec2::new(self.x as i32, self.y as i32)
    }
}

/// Inclusive rectangle of chunk coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRect {
    pub min: ChunkCoord,
    pub max: ChunkCoord,
}

impl ChunkRect {
    pub fn new(min: ChunkCoord, max: ChunkCoord) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        coord.x() >= self.min.x()
            && coord.x() <= self.max.x()
            && coord.y() >= self.min.y()
            && coord.y() <= self.max.y()
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let w = (self.max.x() - self.min.x() + 1) as usize;
        let h = (self.max.y() - self.min.y() + 1) as usize;
        w * h
    }

    pub fn is_empty(&self) -> bool {
        self.max.x() < self.min.x() || self.max.y() < self.min.y()
    }

    /// Chunk coordinates in x-major order.
    pub fn iter(&self) -> impl Iterator<Item = ChunkCoord> {
        let (min, max) = (self.min, self.max);
        (min.x()..=max.x()).flat_map(move |x| (min.y()..=max.y()).map(move |y| ChunkCoord::new(x, y)))
    }

    /// World rows covered by the rectangle, top to bottom.
    pub fn row_span(&self) -> (i32, i32) {
        let size = CHUNK_SIZE as i32;
        (self.min.y() * size, (self.max.y() + 1) * size - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_recompose_lossless() {
        for x in -70..70 {
            for y in [-33, -17, -16, -1, 0, 1, 15, 16, 47] {
                let local = LocalPos::from_world(x, y);
                assert!(local.x < CHUNK_SIZE);
                assert!(local.y < CHUNK_SIZE);
                assert_eq!(local.to_world(), IVec2::new(x, y));
            }
        }
    }

    #[test]
    fn test_negative_coordinates_are_contiguous() {
        let a = LocalPos::from_world(-1, 0);
        assert_eq!(a.chunk, ChunkCoord::new(-1, 0));
        assert_eq!(a.x, 15);

        let b = LocalPos::from_world(-16, -17);
        assert_eq!(b.chunk, ChunkCoord::new(-1, -2));
        assert_eq!((b.x, b.y), (0, 15));
    }

    #[test]
    fn test_rect_iteration() {
        let rect = ChunkRect::new(ChunkCoord::new(-1, -1), ChunkCoord::new(1, 0));
        assert_eq!(rect.len(), 6);
        assert_eq!(rect.iter().count(), 6);
        assert!(rect.contains(ChunkCoord::new(-1, 0)));
        assert!(!rect.contains(ChunkCoord::new(2, 0)));
        assert_eq!(rect.row_span(), (-16, 15));
    }

    #[test]
    fn test_chunk_coord_ordering() {
        let mut coords = vec![ChunkCoord::new(1, 0), ChunkCoord::new(-1, 5), ChunkCoord::new(-1, 2)];
        coords.sort();
        assert_eq!(coords[0], ChunkCoord::new(-1, 2));
        assert_eq!(coords[2], ChunkCoord::new(1, 0));
    }
}
