//! 2D rotation and reflection utilities.
//!
//! Every piece gets 12 orientations: the 4 quarter turns, each taken as-is,
//! mirrored left/right and mirrored top/bottom. Symmetric pieces produce
//! repeated orientations; they are kept so the search visits the same
//! sequence of candidates regardless of a piece's symmetry.

use crate::pieces::{Coord, Transformation};

/// Number of orientations generated per piece.
pub const NUM_TRANSFORMATIONS: usize = 12;

/// One quarter turn: `(r, c) -> (c, -r)`.
#[inline]
pub const fn rotate_quarter(coord: Coord) -> Coord {
    Coord::new(coord.col, -coord.row)
}

/// Reflections applied after each rotation, in emission order.
///
/// - 0: unchanged
/// - 1: mirror across the vertical axis (`c -> -c`)
/// - 2: mirror across the horizontal axis (`r -> -r`)
pub const REFLECTIONS: [fn(Coord) -> Coord; 3] = [
    |coord| coord,
    |coord| Coord::new(coord.row, -coord.col),
    |coord| Coord::new(-coord.row, coord.col),
];

/// Applies `quarter_turns` rotations to every cell.
fn rotate(shape: &[Coord], quarter_turns: usize) -> Vec<Coord> {
    shape
        .iter()
        .map(|&coord| (0..quarter_turns).fold(coord, |c, _| rotate_quarter(c)))
        .collect()
}

/// Generates all 12 orientations of a shape, in generation order.
///
/// For each rotation count 0..4 this emits the rotated shape, then its two
/// reflections. Each result is normalized independently. `shape` need not be
/// normalized itself.
pub fn all_transformations(shape: &[Coord]) -> Vec<Transformation> {
    let mut transformations = Vec::with_capacity(NUM_TRANSFORMATIONS);

    for quarter_turns in 0..4 {
        let rotated = rotate(shape, quarter_turns);
        for reflect in REFLECTIONS {
            let reflected = rotated.iter().map(|&coord| reflect(coord)).collect();
            transformations.push(Transformation::from_normalized(normalize_to_origin(
                reflected,
            )));
        }
    }

    transformations
}

/// Translates cells so the minimum row and column are both zero.
///
/// An empty input is returned unchanged.
pub fn normalize_to_origin(mut coords: Vec<Coord>) -> Vec<Coord> {
    let (Some(min_row), Some(min_col)) = (
        coords.iter().map(|c| c.row).min(),
        coords.iter().map(|c| c.col).min(),
    ) else {
        return coords;
    };

    for coord in &mut coords {
        coord.row -= min_row;
        coord.col -= min_col;
    }

    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::parse_shape;

    fn cells(t: &Transformation) -> Vec<(i32, i32)> {
        t.cells().iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn test_always_twelve_normalized_transformations() {
        let shapes = [
            parse_shape('X', &["X"]),
            parse_shape('L', &["L", "L", "LL"]),
            parse_shape('T', &["TTT", " T"]),
            parse_shape('Z', &["  ZZ", " ZZ", "  Z"]),
        ];

        for shape in &shapes {
            let transformations = all_transformations(shape);
            assert_eq!(transformations.len(), NUM_TRANSFORMATIONS);
            for t in &transformations {
                assert_eq!(t.area(), shape.len());
                assert_eq!(t.cells().iter().map(|c| c.row).min(), Some(0));
                assert_eq!(t.cells().iter().map(|c| c.col).min(), Some(0));
            }
        }
    }

    #[test]
    fn test_square_keeps_duplicate_orientations() {
        let square = parse_shape('O', &["OO", "OO"]);
        let transformations = all_transformations(&square);
        assert_eq!(transformations.len(), NUM_TRANSFORMATIONS);
        assert!(transformations.iter().all(|t| *t == transformations[0]));
    }

    #[test]
    fn test_generation_order() {
        // L-tromino: (0,0) (0,1) (1,0)
        let shape = parse_shape('A', &["AA", "A"]);
        let transformations = all_transformations(&shape);

        // rotation 0: as-is, mirrored left/right, mirrored top/bottom
        assert_eq!(cells(&transformations[0]), vec![(0, 0), (0, 1), (1, 0)]);
        assert_eq!(cells(&transformations[1]), vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(cells(&transformations[2]), vec![(0, 0), (1, 0), (1, 1)]);
        // one quarter turn
        assert_eq!(cells(&transformations[3]), vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_origin_not_always_covered() {
        let shape = parse_shape('B', &["B", "BB"]);
        let transformations = all_transformations(&shape);
        assert!(transformations
            .iter()
            .any(|t| !t.contains(Coord::new(0, 0))));
    }

    #[test]
    fn test_four_quarter_turns_is_identity() {
        let coord = Coord::new(2, -5);
        let back = (0..4).fold(coord, |c, _| rotate_quarter(c));
        assert_eq!(back, coord);
    }

    #[test]
    fn test_normalize_handles_negative_offsets() {
        let normalized = normalize_to_origin(vec![Coord::new(-2, 3), Coord::new(1, -1)]);
        assert_eq!(normalized, vec![Coord::new(0, 4), Coord::new(3, 0)]);
        assert!(normalize_to_origin(Vec::new()).is_empty());
    }
}
