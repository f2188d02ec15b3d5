//! Shape and kick tables

use std::collections::HashSet;

use tetrad::core::catalog::{kick_table, spawn_offsets};
use tetrad::core::{kicks, offsets, Piece, RandomBag};
use tetrad::types::{PieceKind, Rotation, BOARD_WIDTH, SPAWN_X};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_every_shape_has_four_distinct_cells_in_a_4x4_box() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            let shape = offsets(kind, rotation);
            let unique: HashSet<_> = shape.iter().collect();
            assert_eq!(unique.len(), 4, "{kind:?} {rotation:?}");
            for (dx, dy) in shape {
                assert!((0..4).contains(&dx) && (0..4).contains(&dy));
            }
        }
    }
}

#[test]
fn test_spawn_orientation_is_north() {
    for kind in PieceKind::ALL {
        assert_eq!(spawn_offsets(kind), offsets(kind, Rotation::North));
    }
}

#[test]
fn test_spawned_pieces_fit_inside_walls() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.x, SPAWN_X);
        for (x, _) in piece.cells() {
            assert!((0..BOARD_WIDTH as i8).contains(&x), "{kind:?}");
        }
    }
}

#[test]
fn test_square_is_rotation_invariant_and_never_kicks() {
    for rotation in ROTATIONS {
        assert_eq!(offsets(PieceKind::O, rotation), offsets(PieceKind::O, Rotation::North));
        assert!(kicks(PieceKind::O, rotation, rotation.rotate_cw()).is_empty());
    }
    assert!(kick_table(PieceKind::O).is_none());
}

#[test]
fn test_quarter_turns_have_five_candidates_starting_in_place() {
    for kind in PieceKind::ALL.into_iter().filter(|k| *k != PieceKind::O) {
        for from in ROTATIONS {
            for to in [from.rotate_cw(), from.rotate_ccw()] {
                let list = kicks(kind, from, to);
                assert_eq!(list.len(), 5);
                assert_eq!(list[0], (0, 0));
            }
        }
    }
}

#[test]
fn test_half_turn_tries_only_in_place() {
    assert_eq!(
        kicks(PieceKind::T, Rotation::North, Rotation::South),
        &[(0, 0)]
    );
    assert_eq!(kicks(PieceKind::I, Rotation::East, Rotation::East), &[(0, 0)]);
}

#[test]
fn test_jlstz_share_a_table_and_i_differs() {
    let t = kicks(PieceKind::T, Rotation::North, Rotation::East);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::Z] {
        assert_eq!(kicks(kind, Rotation::North, Rotation::East), t);
    }
    assert_eq!(t, &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)]);
    assert_eq!(
        kicks(PieceKind::I, Rotation::North, Rotation::East),
        &[(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)]
    );
}

#[test]
fn test_bag_groups_of_seven_are_permutations() {
    for seed in [1, 42, 12345, u32::MAX] {
        let mut bag = RandomBag::new(seed);
        for _ in 0..10 {
            let mut group: Vec<PieceKind> = (0..7).map(|_| bag.next()).collect();
            group.sort();
            assert_eq!(group, PieceKind::ALL.to_vec(), "seed {seed}");
        }
    }
}

#[test]
fn test_bag_is_deterministic_per_seed() {
    let mut a = RandomBag::new(99);
    let mut b = RandomBag::new(99);
    for _ in 0..50 {
        assert_eq!(a.next(), b.next());
    }
}
