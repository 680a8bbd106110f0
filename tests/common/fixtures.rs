//! Module layouts of reference symbols, one string per row, `#` dark.

/// `HELLO`, version 1-M, mask 0.
pub const HELLO: &[&str] = &[
    "#######..#.##.#######",
    "#.....#.#...#.#.....#",
    "#.###.#..#..#.#.###.#",
    "#.###.#.......#.###.#",
    "#.###.#.#..##.#.###.#",
    "#.....#..#.#..#.....#",
    "#######.#.#.#.#######",
    ".....................",
    "#.#.#.#..##.#...#..#.",
    "##..##..##.#.#.#....#",
    "####.#######.###.#...",
    "####.#.#.#.###.#####.",
    "..##.#####.#.###..#.#",
    "........#.#...#...#.#",
    "#######..##.#...#.#..",
    "#.....#..##...#...###",
    "#.###.#.##..#.#.#.#.#",
    "#.###.#....#.#.#.#.#.",
    "#.###.#.####.###..#.#",
    "#.....#...####.###.##",
    "#######.##.#.###..#.#",
];

/// `WORLD`, version 1-M, mask 2.
pub const WORLD: &[&str] = &[
    "#######..###..#######",
    "#.....#....##.#.....#",
    "#.###.#.##....#.###.#",
    "#.###.#.#.###.#.###.#",
    "#.###.#.#.###.#.###.#",
    "#.....#.#.#.#.#.....#",
    "#######.#.#.#.#######",
    "........#####........",
    "#.#####..##.#.#####..",
    "##.##..#.#..#..#.....",
    ".###..##.###.#..###.#",
    "#.##....##.....##..##",
    "..#.#.##..##.#..#...#",
    "........#.#####....#.",
    "#######..#..#.##..###",
    "#.....#.#######..##.#",
    "#.###.#.#.#.#..#.....",
    "#.###.#.#...#..#.....",
    "#.###.#.#.##.#..#.#..",
    "#.....#..#.....##.#.#",
    "#######.#.##.#..#.#..",
];

/// `HELLO WORLD`, version 2-Q, mask 3.
pub const HELLO_WORLD_V2: &[&str] = &[
    "#######...###..##.#######",
    "#.....#.#...#.##..#.....#",
    "#.###.#.########..#.###.#",
    "#.###.#.........#.#.###.#",
    "#.###.#..#.###....#.###.#",
    "#.....#...#.#.#...#.....#",
    "#######.#.#.#.#.#.#######",
    "..........#.###..........",
    ".###.##...##.##.#.....##.",
    "###.#..#.####..##.###.#.#",
    "##.#.##..#.##.##.#...#.##",
    ".#...#...###.###.#..#.###",
    ".#.##.#...##....#.#....##",
    "....##.###..........##..#",
    ".##.#.#.....##...###.#..#",
    "#...##..#..###.#...#.#..#",
    "..#.###.#..##.#.#####.##.",
    "........###.#.#.#...##.##",
    "#######...###..##.#.#....",
    "#.....#.##.#.#.##...###..",
    "#.###.#....#.#.######.##.",
    "#.###.#.#.#.######.##...#",
    "#.###.#.##.#...###..#..#.",
    "#.....#.##.....##..#.#..#",
    "#######..##.#.##.###....#",
];

/// `Grüße, Welt`, version 1-L, mask 4.
pub const GREETING_UTF8: &[&str] = &[
    "#######.#####.#######",
    "#.....#.#.#.#.#.....#",
    "#.###.#.#.....#.###.#",
    "#.###.#.####..#.###.#",
    "#.###.#.....#.#.###.#",
    "#.....#.##.#..#.....#",
    "#######.#.#.#.#######",
    ".........####........",
    "##..###..#.#...#.####",
    ".#####..##..#...#.#..",
    "##.#..#..#.#...#####.",
    "#####..#..##....#.###",
    "#...#.##..####.#..#.#",
    "........#..#.##.#.###",
    "#######..##.....#.##.",
    "#.....#.#.##.#...###.",
    "#.###.#.#.##..####...",
    "#.###.#..##...##.#.##",
    "#.###.#..#...###.#...",
    "#.....#.###..#....#..",
    "#######.##.###....#.#",
];

/// `0123456789012`, version 1-H, mask 6.
pub const DIGITS: &[&str] = &[
    "#######..#.##.#######",
    "#.....#..##...#.....#",
    "#.###.#.#.#.#.#.###.#",
    "#.###.#.#.#.#.#.###.#",
    "#.###.#...#...#.###.#",
    "#.....#..###..#.....#",
    "#######.#.#.#.#######",
    ".........###.........",
    "...##.##...##....##..",
    "...#.....#####..###.#",
    "..#.#.#####.#...#.##.",
    "#..##.....#.......#..",
    "#...#.#.#..##....#.##",
    "........#..#..#..####",
    "#######.##.##.###....",
    "#.....#...#.#...#..#.",
    "#.###.#.#.....####..#",
    "#.###.#.##.#.##.#.#..",
    "#.###.#..#.###..##.##",
    "#.....#..###.#.#.#..#",
    "#######...#...###..#.",
];

/// `https://example.com/qr/reveal?v=7&ecc=M`, version 7-M, mask 1.
pub const URL_V7: &[&str] = &[
    "#######.#.####.#..######.##.#.####..#.#######",
    "#.....#..#....#.####.#.#.#....####.#..#.....#",
    "#.###.#.##.#...###.#####...#######.#..#.###.#",
    "#.###.#....####.###.##....####.##..##.#.###.#",
    "#.###.#..#..#.#####.#####..#.###.####.#.###.#",
    "#.....#.###.........#...#..###.###....#.....#",
    "#######.#.#.#.#.#.#.#.#.#.#.#.#.#.#.#.#######",
    "............###..#.##...###.####.#...........",
    "#.#...##..#.#...#########..###.##.###..#..#.#",
    "####...#.#.##....#...##..#.#.###.#.##..######",
    ".#..#.#..###.......###.......####..#...##.#.#",
    "##......#...##.##..####.#..#.....####..#.....",
    "####.##.#.#.####.###.##...###.#..#.##..##..#.",
    "###..#.#..###.#..####..#...#....###..#.#...#.",
    "...####.##..##..#...#.###.###.#..##.##.##.###",
    "...##.....##..##..#....#.##..#..#..##......#.",
    "#.###.#.#..#..###...#.####....#.#.##..#...###",
    "#..#.....#.##.##.....#...##.#......#....###..",
    "##.####....####..####.#..##..#.##.#...#..#...",
    "##.#...#......####.###..#..#.###.######.###.#",
    "##.########.#..##########.####.###.########..",
    "..#.#...#..###.###.##...#..#.###.##.#...##.##",
    ".#..#.#.#.#.#####...#.#.#.#########.#.#.#####",
    "###.#...#.....###.###...#...#.....###...##..#",
    "#.#.#######.#.#....######.#.#.#..########...#",
    "#....#.##.###.#.#..#######.##...##.##.##.#..#",
    "#######.##.##..###.#..........#..#......#...#",
    "##..#...##..####.##.#.##.##..###.......#...##",
    "..###.#....#...#...#.....#...#.##.##.#...#..#",
    "##.###.######...#......####.####......##.##..",
    "##..####....######.#.##.###..####.########...",
    "###..#.#...#..###....#.....#.######.#.#..##.#",
    "#.#...#.#.#....#.######.#.####..##.#.######..",
    "#.#.#...######.#....##.....#.#.#.##.#####..#.",
    "....#.#.##.##...##..#..##.####...##.####..###",
    ".####......#..#..#.##.#####........#.####..#.",
    "#..##.###..#.##..#..######....#...#######.###",
    "........#.####.#..###...###.#...#..##...##.##",
    "#######.####.##.#####.#.###...#...#.#.#.###.#",
    "#.....#....#..#.#...#...#...####...##...##.##",
    "#.###.#..#...##..#.#######..##.##.#.#####....",
    "#.###.#...#####.####.##.#..#####.#.#.###.#..#",
    "#.###.#.#.######...####..#.#######.###.###.##",
    "#.....#..#####.#....##.#...#.....###.###.#...",
    "#######.######.#..#.##.##.###.#..#.#######..#",
];
