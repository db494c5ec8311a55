pub mod context;
pub mod eval;
pub mod ordering;
pub mod pawn_tt;
pub mod pesto;
pub mod picker;
pub mod see;
pub mod tt;
