//! Board behavior through the public API

use tetrad::core::{Board, Piece};
use tetrad::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.filled_count(), 0);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_get_set_bounds() {
    let mut board = Board::new();
    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_collides_walls_floor_and_blocks() {
    let mut board = Board::new();
    assert!(!board.collides(&[(0, 0), (9, 19)]));
    assert!(board.collides(&[(-1, 5)]));
    assert!(board.collides(&[(10, 5)]));
    assert!(board.collides(&[(3, 20)]));

    // Above the top edge is open space.
    assert!(!board.collides(&[(4, -2), (4, -1)]));

    board.set(4, 7, Some(PieceKind::S));
    assert!(board.collides(&[(4, 7)]));
    assert!(!board.collides(&[(4, 6)]));
}

#[test]
fn test_lock_commits_piece_cells() {
    let mut board = Board::new();
    let piece = Piece {
        kind: PieceKind::O,
        rotation: Rotation::North,
        x: 0,
        y: 18,
    };
    assert_eq!(board.lock(&piece), 0);
    for (x, y) in piece.cells() {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_lock_drops_cells_above_grid() {
    let mut board = Board::new();
    let piece = Piece {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: 0,
        y: -2,
    };
    board.lock(&piece);
    // East I covers rows -2..=1 in column 2; only rows 0 and 1 land.
    assert_eq!(board.filled_count(), 2);
    assert!(board.is_occupied(2, 0));
    assert!(board.is_occupied(2, 1));
}

#[test]
fn test_clear_full_rows_compacts_downward() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(3, 18, Some(PieceKind::T));
    fill_row(&mut board, 17, PieceKind::L);
    board.set(7, 16, Some(PieceKind::J));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(7, 18), Some(Some(PieceKind::J)));
    assert_eq!(board.filled_count(), 2);
    for y in 0..18 {
        assert!(board.row(y).iter().all(Option::is_none), "row {y}");
    }
}

#[test]
fn test_no_full_rows_is_noop() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::Z));
    let before = board.clone();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_top_out_watches_two_rows() {
    let mut board = Board::new();
    board.set(5, 2, Some(PieceKind::T));
    assert!(!board.top_out());
    board.set(5, 1, Some(PieceKind::T));
    assert!(board.top_out());

    board.clear();
    board.set(0, 0, Some(PieceKind::I));
    assert!(board.top_out());
}

#[test]
fn test_u8_grid_uses_piece_codes() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::L));
    board.set(9, 0, Some(PieceKind::I));
    let mut grid = [[0u8; 10]; 20];
    board.write_u8_grid(&mut grid);
    assert_eq!(grid[19][0], PieceKind::L.code());
    assert_eq!(grid[0][9], PieceKind::I.code());
    assert_eq!(grid.iter().flatten().filter(|&&c| c != 0).count(), 2);
}
