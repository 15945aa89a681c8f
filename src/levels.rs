//! Hand-drawn dungeon levels.

use engine::{Result, Terrain};

/// Levels from top to bottom. Down stairs on a level line up with the up
/// stairs on the level below.
const LEVELS: [&str; 3] = [
    "
    ########################################
    #........#...............#.............#
    #........#...............#.............#
    #........#......####.....#.....#####...#
    #..............#....#..........#...#...#
    #........#.....#....#....#.....#.>.#...#
    #####.####.....#....#....#.....#...#...#
    #........#......#..#.....#.....##.##...#
    #........#...............#.............#
    #........####.#######.####.............#
    #........#.............................#
    #...................#..........#####...#
    #........#..........#..........#.......#
    ########################################",
    "
    ########################################
    #.............#........................#
    #.............#.......######...........#
    #....######...#.......#....#...........#
    #....#....#...........#....#...........#
    #....#.>..#...#.......#..........<.....#
    #....#....#...#.......#....#...........#
    #....##.###...#.......######...........#
    #.............#........................#
    #######.#######......###########.#######
    #..................#...................#
    #..................#...................#
    #......................................#
    ########################################",
    "
    ########################################
    #..............................#.......#
    #.....###########..............#.......#
    #.....#.........#..............#.......#
    #.....#..#####..#..............#.......#
    #.....#<.#...#..#..............#.......#
    #.....#..#...#..#..............#.......#
    #.....#......#.........................#
    #.....########.#####...........#.......#
    #..............#...............#.......#
    #..............#...............#########
    #..............#.......................#
    #......................................#
    ########################################",
];

pub fn terrain() -> Result<Terrain> {
    Terrain::from_ascii(&LEVELS)
}
