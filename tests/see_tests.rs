use vantage::board::{Board, Piece};
use vantage::moves::magic::loader::load_magic_tables;
use vantage::moves::types::Move;
use vantage::search::see::SeeExt;
use vantage::square::Square;
use std::str::FromStr;

use vantage::moves::magic::MagicTables;

// Helper now returns (Move, MagicTables) so we can reuse tables in test assertions
fn find_move(board: &mut Board, from_str: &str, to_str: &str) -> (Move, MagicTables) {
    find_move_promo(board, from_str, to_str, None)
}

// Same as find_move, but disambiguates promotion moves sharing a from/to by
// the promotion piece (underpromotions generate as separate moves).
fn find_move_promo(
    board: &mut Board,
    from_str: &str,
    to_str: &str,
    promotion: Option<Piece>,
) -> (Move, MagicTables) {
    let mut moves = Vec::new();
    let mut scratch = Vec::new();

    let tables = load_magic_tables();
    vantage::moves::execute::generate_legal(board, &tables, &mut moves, &mut scratch);

    let from = Square::from_str(from_str).unwrap();
    let to = Square::from_str(to_str).unwrap();

    let m = *moves
        .iter()
        .find(|m| m.from == from && m.to == to && (promotion.is_none() || m.promotion == promotion))
        .expect(&format!(
            "Move {}{} not found or illegal in pos: {}",
            from_str,
            to_str,
            board.to_fen()
        ));

    (m, tables)
}

#[test]
fn test_see_exchange_losing() {
    // White Rook takes protected Pawn. (100 - 500 = -400)
    // FIX: Replaced deep King with a Black Rook on d8 which actually defends d4
    let fen = "3r4/8/8/8/3p4/8/8/3RK3 w - - 0 1";
    let mut board = Board::from_str(fen).expect("Invalid FEN");

    let (m, tables) = find_move(&mut board, "d1", "d4");

    // R(d1)xP(d4) [+100] -> R(d8)xR(d4) [-500]. Net -400.
    assert!(
        board.static_exchange_eval(m, 0, &tables) < 0,
        "RxP (protected by Rook) should be bad"
    );
}

#[test]
fn test_see_exchange_winning_battery() {
    // White Battery (Q+R) attacks a8.
    // 1. QxR (+500), 2. KxQ (-900), 3. RxQ (+900). Net: +500.
    let fen = "r6k/8/8/8/8/8/Q7/R6K w - - 0 1";
    let mut board = Board::from_str(fen).unwrap();

    let (m, tables) = find_move(&mut board, "a2", "a8");

    assert!(
        board.static_exchange_eval(m, 0, &tables) >= 0,
        "Battery capture should be good"
    );
}

#[test]
fn test_see_pruning_threshold() {
    // Knight takes protected Pawn (+100 - 320 = -220).
    // FIX: Moved Black King to e5 so it protects d4
    let fen = "8/8/8/4k3/3p4/8/4N3/3K4 w - - 0 1";
    let mut board = Board::from_str(fen).unwrap();

    let (m, tables) = find_move(&mut board, "e2", "d4");

    // N(e2)xP(d4) [+100] -> K(e5)xN(d4) [-320]. Net -220.
    let see = board.static_exchange_eval(m, 0, &tables);
    assert_eq!(see, -220, "NxP should lose a knight-for-pawn exchange");
    assert!(see < 0, "NxP should be bad at threshold 0");

    // If we accept losing material (threshold -300), it's still good enough
    // since -220 > -300; the same raw value is compared against a looser bound.
    assert!(
        see >= -300,
        "NxP should be 'good' if we accept losing material"
    );
}

#[test]
fn test_see_en_passant_capture() {
    // White pawn on e5, Black pawn moves d7-d5. White captures e5xd6 e.p.
    // The victim (Black pawn) is on d5, but the move is to d6.
    // SEE must correctly identify the victim on d5.
    let fen = "rnbqkbnr/ppppp1pp/8/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 1";
    let mut board = Board::from_str(fen).unwrap();

    // e5 -> f6 (en passant)
    let (m, tables) = find_move(&mut board, "e5", "f6");

    // Pawn (100) captures Pawn (100). Score should be >= 0.
    // If buggy, it sees "capture to empty square" and returns 0.
    assert!(board.static_exchange_eval(m, 0, &tables) >= 0);
}

#[test]
fn test_see_promotion_capture() {
    // White pawn on a7 captures rook on b8 and promotes to Queen.
    // Gain: Rook (500) + Queen_Diff (800) = Huge.
    let fen = "1r6/P7/8/8/8/8/8/K7 w - - 0 1";
    let mut board = Board::from_str(fen).unwrap();

    // a7 -> b8 (promotion capture)
    // Note: You might need to adjust find_move to handle promotion flags if your parser needs it
    let (m, tables) = find_move(&mut board, "a7", "b8");

    // Even with a huge threshold, this should pass
    assert!(board.static_exchange_eval(m, 1000, &tables) >= 0);
}

// --- P8 boundary scenarios: SEE must match these exact values. ---

#[test]
fn test_see_p8_s1_knight_takes_defended_pawn() {
    let fen = "1k1r3q/1ppn3p/p4b2/4p3/8/P2N2P1/1PP1R1BP/2K1Q3 w - -";
    let mut board = Board::from_str(fen).expect("Invalid FEN");
    let (m, tables) = find_move(&mut board, "d3", "e5");
    assert_eq!(board.static_exchange_eval(m, 0, &tables), -220);
}

#[test]
fn test_see_p8_s2_rook_takes_pawn() {
    let fen = "1k1r4/1pp4p/p7/4p3/8/P5P1/1PP4P/2K1R3 w - -";
    let mut board = Board::from_str(fen).expect("Invalid FEN");
    let (m, tables) = find_move(&mut board, "e1", "e5");
    assert_eq!(board.static_exchange_eval(m, 0, &tables), 100);
}

#[test]
fn test_see_p8_s3_queen_takes_defended_knight() {
    let fen = "5q1k/8/8/8/RRQ2nrr/8/8/K7 w - -";
    let mut board = Board::from_str(fen).expect("Invalid FEN");
    let (m, tables) = find_move(&mut board, "c4", "f4");
    assert_eq!(board.static_exchange_eval(m, 0, &tables), -580);
}

#[test]
fn test_see_p8_s4_knight_takes_pawn() {
    let fen = "k6q/3n1n2/3b4/4p3/3P1P2/3N1N2/8/K7 w - -";
    let mut board = Board::from_str(fen).expect("Invalid FEN");
    let (m, tables) = find_move(&mut board, "d3", "e5");
    assert_eq!(board.static_exchange_eval(m, 0, &tables), 100);
}

#[test]
fn test_see_p8_s5_pawn_promotes_capturing_rook() {
    let fen = "r3k2r/1ppn3p/2q1q1n1/4P3/2q1Pp2/6R1/pbp2PPP/1R2R1K1 b kq e3 0 1";
    let mut board = Board::from_str(fen).expect("Invalid FEN");
    let (m, tables) = find_move_promo(&mut board, "a2", "b1", Some(Piece::Queen));
    assert_eq!(board.static_exchange_eval(m, 0, &tables), 500);
}
