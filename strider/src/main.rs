//! Thin demo driver: runs the pathfinder over two sample maps and prints
//! the results. All the interesting work happens in `stride-paths`.

use std::process::ExitCode;

use stride_core::{Point, TileMap};
use stride_paths::PathFinder;

const SPIRAL: &str = "
    ..........
    .########.
    .#......#.
    .######.#.
    .#....#.#.
    .#.#.#..#.
    .#.#.#..#.
    ...#....#.
    .#.####.#.
    ..........
";

fn run_query(name: &str, map: &TileMap, start: Point, target: Point) {
    let mut finder = PathFinder::new(map.width(), map.height());
    let mut out = vec![0i32; map.len()];
    let steps = finder.find_path(map, start, target, &mut out);

    println!("{name}: {start} -> {target}");
    if steps < 0 {
        println!("  no path");
        return;
    }

    let taken = &out[..steps as usize];
    println!("  {steps} steps: {taken:?}");
    print_map(map, start, taken);
}

/// Render the map with the path overlaid: `@` start, `x` target, `*` steps.
fn print_map(map: &TileMap, start: Point, steps: &[i32]) {
    let path: Vec<Point> = steps.iter().map(|&i| map.point(i as usize)).collect();
    for y in 0..map.height() {
        print!("  ");
        for x in 0..map.width() {
            let p = Point::new(x, y);
            let c = if p == start {
                '@'
            } else if path.last() == Some(&p) {
                'x'
            } else if path.contains(&p) {
                '*'
            } else if map.is_open(p) {
                '.'
            } else {
                '#'
            };
            print!("{c}");
        }
        println!();
    }
}

fn main() -> ExitCode {
    let spiral = match TileMap::parse(SPIRAL) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("bad demo map: {e}");
            return ExitCode::FAILURE;
        }
    };
    run_query("spiral corridor", &spiral, Point::new(0, 0), Point::new(2, 2));

    println!();

    // Two open regions with no route between them.
    let blocked = match TileMap::from_bytes(3, 3, &[0, 0, 1, 0, 1, 1, 1, 0, 1]) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("bad demo map: {e}");
            return ExitCode::FAILURE;
        }
    };
    run_query("split regions", &blocked, Point::new(2, 0), Point::new(0, 2));

    ExitCode::SUCCESS
}
