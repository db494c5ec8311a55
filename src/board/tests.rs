use super::*;
use std::str::FromStr;

#[test]
fn new_board_matches_starting_fen() {
    let from_new = Board::new();
    let from_fen =
        Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(from_new.zobrist, from_fen.zobrist);
    assert_eq!(from_new.pawn_zobrist, from_fen.pawn_zobrist);
    assert_eq!(from_new.occ_all, from_fen.occ_all);
}

#[test]
fn validate_detects_overlap() {
    let mut board = Board::new();
    let pawns = board.bb(Color::White, Piece::Pawn);
    board.set_bb(Color::White, Piece::Knight, pawns);
    assert!(board.validate().is_err());
}

#[test]
fn repetition_count_tracks_history() {
    let board = Board::new();
    let mut b = board.clone();
    b.history.push(board.zobrist);
    b.history.push(board.zobrist);
    assert_eq!(b.repetition_count(), 3);
    assert!(b.is_threefold());
}

#[test]
fn king_square_finds_correct_square() {
    let board = Board::new();
    assert_eq!(board.king_square(Color::White), Square::from_algebraic("e1").unwrap());
    assert_eq!(board.king_square(Color::Black), Square::from_algebraic("e8").unwrap());
}

#[test]
fn pawn_zobrist_unaffected_by_non_pawn_moves() {
    let mut board = Board::new();
    let before = board.pawn_zobrist;
    let knights = board.bb(Color::White, Piece::Knight);
    board.set_bb(Color::White, Piece::Knight, knights & !(1u64 << 1)); // remove knight on b1
    assert_eq!(board.pawn_zobrist, before);
}
