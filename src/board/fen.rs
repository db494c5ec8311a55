//! Forsyth-Edwards Notation parsing and emission.

use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Board, Color, Piece};
use crate::square::Square;

impl Board {
    /// Populate `self` from a FEN string. Resets all state first, so this can
    /// be called on a fresh or reused `Board`.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(format!(
                "invalid FEN: expected at least 4 fields, got {}",
                fields.len()
            ));
        }

        let mut board = Board::new_empty();
        board.history.clear();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(format!(
                "invalid FEN: expected 8 ranks, got {}",
                ranks.len()
            ));
        }

        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top as u8;
            let mut file: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file += skip as u8;
                    if file > 8 {
                        return Err(format!("invalid FEN: rank '{rank_str}' overflows 8 files"));
                    }
                } else {
                    if file >= 8 {
                        return Err(format!("invalid FEN: rank '{rank_str}' overflows 8 files"));
                    }
                    let (piece, color) = CHAR_TO_PC[ch as usize]
                        .ok_or_else(|| format!("invalid FEN: unknown piece glyph '{ch}'"))?;
                    let sq = Square::from_file_rank(file, rank);
                    let bb = board.bb(color, piece) | (1u64 << sq.index());
                    board.set_bb(color, piece, bb);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(format!(
                    "invalid FEN: rank '{rank_str}' has {file} files, expected 8"
                ));
            }
        }

        board.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("invalid FEN: bad side to move '{other}'")),
        };

        board.castling_rights = 0;
        if fields[2] != "-" {
            for ch in fields[2].chars() {
                board.castling_rights |= match ch {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("invalid FEN: bad castling glyph '{other}'")),
                };
            }
        }

        board.en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(fields[3])
                    .ok_or_else(|| format!("invalid FEN: bad en passant square '{}'", fields[3]))?,
            )
        };

        board.halfmove_clock = fields
            .get(4)
            .unwrap_or(&"0")
            .parse()
            .map_err(|_| "invalid FEN: bad halfmove clock".to_string())?;

        board.fullmove_number = fields
            .get(5)
            .unwrap_or(&"1")
            .parse()
            .map_err(|_| "invalid FEN: bad fullmove number".to_string())?;
        if board.fullmove_number == 0 {
            return Err("invalid FEN: fullmove number must be at least 1".to_string());
        }

        board.refresh_zobrist();
        board.refresh_pawn_zobrist();

        *self = board;
        Ok(())
    }

    /// Emit the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        let mut s = String::with_capacity(64);

        for rank_from_top in 0..8u8 {
            let rank = 7 - rank_from_top;
            let mut empty_run = 0u8;
            for file in 0..8u8 {
                let sq = Square::from_file_rank(file, rank);
                match self.piece_at(sq) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            s.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        let idx = (color as usize) * 6 + (piece as usize);
                        s.push(PC_TO_CHAR[idx]);
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                s.push((b'0' + empty_run) as char);
            }
            if rank_from_top != 7 {
                s.push('/');
            }
        }

        s.push(' ');
        s.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        s.push(' ');
        if self.castling_rights == 0 {
            s.push('-');
        } else {
            if self.castling_rights & CASTLE_WK != 0 {
                s.push('K');
            }
            if self.castling_rights & CASTLE_WQ != 0 {
                s.push('Q');
            }
            if self.castling_rights & CASTLE_BK != 0 {
                s.push('k');
            }
            if self.castling_rights & CASTLE_BQ != 0 {
                s.push('q');
            }
        }

        s.push(' ');
        match self.en_passant {
            Some(sq) => s.push_str(&sq.to_string()),
            None => s.push('-'),
        }

        s.push(' ');
        s.push_str(&self.halfmove_clock.to_string());
        s.push(' ');
        s.push_str(&self.fullmove_number.to_string());

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn start_position_round_trips() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let board = Board::from_str(start).unwrap();
        assert_eq!(board.to_fen(), start);
    }

    #[test]
    fn en_passant_square_round_trips() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let board = Board::from_str(fen).unwrap();
        assert_eq!(board.en_passant, Square::from_algebraic("d6"));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn rejects_short_rank() {
        let mut board = Board::new_empty();
        let err = board.set_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1");
        assert!(err.is_err());
    }

    #[test]
    fn rejects_bad_piece_count_field() {
        let mut board = Board::new_empty();
        let err = board.set_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(err.is_err());
    }

    #[test]
    fn zobrist_matches_full_recompute_after_parse() {
        let board = Board::from_str("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(board.zobrist, board.compute_zobrist_full());
        assert_eq!(board.pawn_zobrist, board.compute_pawn_zobrist_full());
    }
}
