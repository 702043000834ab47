//! 3D view of a solved board using kiss3d.
//!
//! The board is laid out as a single layer of cubes in the XY plane.

use kiss3d::prelude::*;
use rustc_hash::FxHashMap;

use tiler::grid::Board;
use tiler::render::{ColorMap, PALETTE_SIZE};

/// Display colors matching the terminal palette, by slot.
const PALETTE: [(f32, f32, f32); PALETTE_SIZE] = [
    (1.0, 0.2, 0.2), // red
    (0.2, 1.0, 0.2), // green
    (1.0, 1.0, 0.2), // yellow
    (0.2, 0.2, 1.0), // blue
    (1.0, 0.2, 1.0), // magenta
    (0.2, 1.0, 1.0), // cyan
    (0.9, 0.9, 0.9), // white
];

fn symbol_color(colors: &ColorMap, symbol: char) -> Color {
    let (r, g, b) = PALETTE[colors.slot(symbol).unwrap_or(PALETTE_SIZE - 1)];
    Color::new(r, g, b, 1.0)
}

/// A rendered board cell.
struct RenderedCube {
    node: SceneNode3d,
    /// Position when not exploded.
    base_position: Vec3,
    symbol: char,
}

/// Builds one cube per filled cell.
///
/// Column maps to X, row maps to -Y so row 0 is at the top, and the board is
/// centered on the origin. Returns the cubes and each piece's centroid.
fn build_scene(
    scene: &mut SceneNode3d,
    board: &Board,
    colors: &ColorMap,
) -> (Vec<RenderedCube>, FxHashMap<char, Vec3>) {
    /// Slightly under 1.0 so neighboring cubes show a gap.
    const CUBE_SIZE: f32 = 0.9;

    let center = board_center(board);
    let mut sums: FxHashMap<char, (Vec3, f32)> = FxHashMap::default();
    let mut rendered_cubes = Vec::new();

    for (row, cells) in board.iter_rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let Some(symbol) = *cell else {
                continue;
            };
            let base_position = Vec3::new(col as f32, -(row as f32), 0.0) - center;
            let node = scene
                .add_cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
                .set_color(symbol_color(colors, symbol))
                .set_position(base_position);

            let entry = sums.entry(symbol).or_insert((Vec3::ZERO, 0.0));
            entry.0 += base_position;
            entry.1 += 1.0;

            rendered_cubes.push(RenderedCube {
                node,
                base_position,
                symbol,
            });
        }
    }

    let centroids = sums
        .into_iter()
        .map(|(symbol, (sum, count))| (symbol, sum / count))
        .collect();

    (rendered_cubes, centroids)
}

fn board_center(board: &Board) -> Vec3 {
    Vec3::new(
        board.cols().saturating_sub(1) as f32 / 2.0,
        -(board.rows().saturating_sub(1) as f32) / 2.0,
        0.0,
    )
}

/// Shows the board in an interactive window until it is closed.
pub fn display(board: &Board, colors: &ColorMap) {
    pollster::block_on(display_async(board, colors));
}

async fn display_async(board: &Board, colors: &ColorMap) {
    /// Explosion change per keypress.
    const EXPLOSION_SPEED: f32 = 0.05;

    let mut window = Window::new(&format!(
        "{}x{} board - [Up/Down] explode, [R] reset",
        board.rows(),
        board.cols()
    ))
    .await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(board.rows().max(board.cols()) as f32 * 2.0 + 4.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 10.0));

    let (mut rendered_cubes, piece_centroids) = build_scene(&mut scene, board, colors);

    // 0.0 = compact, higher spreads pieces away from the center
    let mut explosion_amount: f32 = 0.0;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Up => explosion_amount += EXPLOSION_SPEED,
                        Key::Down => {
                            explosion_amount = (explosion_amount - EXPLOSION_SPEED).max(0.0)
                        }
                        Key::R => explosion_amount = 0.0,
                        _ => {}
                    }
                }
            }
        }

        for cube in &mut rendered_cubes {
            let direction = piece_centroids
                .get(&cube.symbol)
                .map_or(Vec3::ZERO, |centroid| centroid.normalize_or_zero());
            cube.node
                .set_position(cube.base_position + direction * explosion_amount * 2.0);
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
