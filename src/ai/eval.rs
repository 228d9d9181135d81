use crate::board::{BOARD_SIZE, Board, Cell, Side};

const PARITY_WEIGHT: f64 = 10.0;
const CORNER_WEIGHT: f64 = 801.724;
const CLOSENESS_WEIGHT: f64 = 382.026;
const MOBILITY_WEIGHT: f64 = 78.922;
const FRONTIER_WEIGHT: f64 = 74.396;
const SQUARE_WEIGHT: f64 = 10.0;

/// Positional value of each square. Corners dominate; the squares next to
/// an open corner are poisoned.
const SQUARE_VALUES: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [20, -3, 11, 8, 8, 11, -3, 20],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [20, -3, 11, 8, 8, 11, -3, 20],
];

const NEIGHBOR_STEPS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Each corner with the three squares beside it. The closeness term only
/// counts them while the corner itself is still empty.
const CORNER_ZONES: [((usize, usize), [(usize, usize); 3]); 4] = [
    ((0, 0), [(0, 1), (1, 1), (1, 0)]),
    ((0, 7), [(0, 6), (1, 6), (1, 7)]),
    ((7, 0), [(7, 1), (6, 1), (6, 0)]),
    ((7, 7), [(6, 7), (6, 6), (7, 6)]),
];

/// Static positional score of `board` from `side`'s point of view.
///
/// Six calibrated terms: piece parity, the disc-square table, corner
/// occupancy, closeness to open corners, mobility and frontier exposure.
/// The weights are a tuned set and must not be adjusted independently.
pub fn evaluate(board: &Board, side: Side) -> f64 {
    let own = side.cell();
    let opp = side.opponent().cell();

    let mut own_discs = 0i32;
    let mut opp_discs = 0i32;
    let mut own_frontier = 0i32;
    let mut opp_frontier = 0i32;
    let mut square_sum = 0.0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let cell = board.cell(row, col);
            if cell == own {
                square_sum += f64::from(SQUARE_VALUES[row][col]);
                own_discs += 1;
            } else if cell == opp {
                square_sum -= f64::from(SQUARE_VALUES[row][col]);
                opp_discs += 1;
            }
            if cell != Cell::Empty && has_empty_neighbor(board, row, col) {
                if cell == own {
                    own_frontier += 1;
                } else {
                    opp_frontier += 1;
                }
            }
        }
    }

    let parity = ratio_term(own_discs, opp_discs);
    // Exposed discs are a liability, so the frontier term is inverted.
    let frontier = -ratio_term(own_frontier, opp_frontier);

    let mut own_corners = 0i32;
    let mut opp_corners = 0i32;
    let mut own_close = 0i32;
    let mut opp_close = 0i32;
    for ((corner_row, corner_col), zone) in CORNER_ZONES {
        let corner = board.cell(corner_row, corner_col);
        if corner == own {
            own_corners += 1;
        } else if corner == opp {
            opp_corners += 1;
        } else {
            for (row, col) in zone {
                let cell = board.cell(row, col);
                if cell == own {
                    own_close += 1;
                } else if cell == opp {
                    opp_close += 1;
                }
            }
        }
    }
    let corners = 25.0 * f64::from(own_corners - opp_corners);
    let closeness = -12.5 * f64::from(own_close - opp_close);

    let mobility = ratio_term(board.mobility(side) as i32, board.mobility(side.opponent()) as i32);

    PARITY_WEIGHT * parity
        + CORNER_WEIGHT * corners
        + CLOSENESS_WEIGHT * closeness
        + MOBILITY_WEIGHT * mobility
        + FRONTIER_WEIGHT * frontier
        + SQUARE_WEIGHT * square_sum
}

/// Signed percentage difference with the leading count in the numerator;
/// 0 on a tie or when both counts are zero.
fn ratio_term(own: i32, opp: i32) -> f64 {
    if own > opp {
        (100.0 * f64::from(own)) / f64::from(own + opp)
    } else if own < opp {
        -(100.0 * f64::from(opp)) / f64::from(own + opp)
    } else {
        0.0
    }
}

fn has_empty_neighbor(board: &Board, row: usize, col: usize) -> bool {
    NEIGHBOR_STEPS.iter().any(|&(dr, dc)| {
        let r = row as isize + dr;
        let c = col as isize + dc;
        (0..BOARD_SIZE as isize).contains(&r)
            && (0..BOARD_SIZE as isize).contains(&c)
            && board.cell(r as usize, c as usize) == Cell::Empty
    })
}
