use crate::config::GameConfig;

use super::Position;

/// Square playfield of `tile_count × tile_count` tiles.
///
/// Fixed for the duration of a run; a new grid is computed at each run start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    tile_count: u32,
}

impl Grid {
    /// Creates a grid, clamping the side length to
    /// `[GameConfig::MIN_TILE_COUNT, GameConfig::MAX_TILE_COUNT]`.
    pub fn new(tile_count: u32) -> Self {
        Self {
            tile_count: tile_count.clamp(GameConfig::MIN_TILE_COUNT, GameConfig::MAX_TILE_COUNT),
        }
    }

    /// Derives the grid from the width of the drawing area.
    pub fn from_viewport(viewport_width: u32, tile_size: u32) -> Self {
        Self::new(viewport_width / tile_size.max(1))
    }

    pub fn tile_count(&self) -> u32 {
        self.tile_count
    }

    /// Index of the last row/column.
    pub fn max_coord(&self) -> i32 {
        self.tile_count as i32 - 1
    }

    pub fn area(&self) -> usize {
        (self.tile_count * self.tile_count) as usize
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.tile_count as i32).contains(&position.x)
            && (0..self.tile_count as i32).contains(&position.y)
    }

    pub fn clamp(&self, position: Position) -> Position {
        Position::new(
            position.x.clamp(0, self.max_coord()),
            position.y.clamp(0, self.max_coord()),
        )
    }

    /// Tile at fraction `num / den` of the side on both axes.
    pub fn fraction(&self, num: u32, den: u32) -> Position {
        let coord = (self.tile_count * num / den) as i32;
        Position::new(coord, coord)
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Position; 4] {
        let max = self.max_coord();
        [
            Position::new(0, 0),
            Position::new(max, 0),
            Position::new(0, max),
            Position::new(max, max),
        ]
    }

    /// The corner with the largest Manhattan distance from `from`.
    /// Ties resolve to the earliest corner in [`Grid::corners`] order.
    pub fn farthest_corner(&self, from: Position) -> Position {
        let mut best = self.corners()[0];
        for corner in self.corners() {
            if corner.manhattan(from) > best.manhattan(from) {
                best = corner;
            }
        }
        best
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Position> + '_ {
        let side = self.tile_count as i32;
        (0..side).flat_map(move |y| (0..side).map(move |x| Position::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GameConfig::MIN_TILE_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_width_is_floored_into_tiles() {
        assert_eq!(Grid::from_viewport(419, 20).tile_count(), 20);
        assert_eq!(Grid::from_viewport(80, 2).tile_count(), 40);
    }

    #[test]
    fn tiny_and_huge_viewports_are_clamped() {
        assert_eq!(Grid::from_viewport(10, 20).tile_count(), GameConfig::MIN_TILE_COUNT);
        assert_eq!(Grid::from_viewport(10_000, 1).tile_count(), GameConfig::MAX_TILE_COUNT);
    }

    #[test]
    fn clamp_keeps_positions_inside() {
        let grid = Grid::new(20);
        assert_eq!(grid.clamp(Position::new(-1, 25)), Position::new(0, 19));
        assert!(grid.contains(Position::new(19, 0)));
        assert!(!grid.contains(Position::new(20, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
    }

    #[test]
    fn farthest_corner_is_opposite_quadrant() {
        let grid = Grid::new(20);
        assert_eq!(grid.farthest_corner(Position::new(2, 3)), Position::new(19, 19));
        assert_eq!(grid.farthest_corner(Position::new(18, 1)), Position::new(0, 19));
        // Exact center of an odd grid ties towards the first listed corner.
        let odd = Grid::new(21);
        assert_eq!(odd.farthest_corner(Position::new(10, 10)), Position::new(0, 0));
    }

    #[test]
    fn tiles_cover_the_whole_area() {
        let grid = Grid::new(5);
        assert_eq!(grid.tiles().count(), grid.area());
        assert_eq!(grid.tiles().next(), Some(Position::new(0, 0)));
        assert_eq!(grid.tiles().last(), Some(Position::new(4, 4)));
    }
}
