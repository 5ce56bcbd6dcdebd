/// Neighbour offsets as `(d_col, d_row)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),  // up
    (0, 1),   // down
    (1, 0),   // right
    (-1, 0),  // left
    (-1, -1), // up-left
    (1, -1),  // up-right
    (-1, 1),  // down-left
    (1, 1),   // down-right
];
