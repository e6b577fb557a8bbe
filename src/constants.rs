// --- Piece values ---
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;

// Antichess: the king can be captured, so it carries material.
pub const ANTICHESS_PAWN_VALUE: i32 = 100;
pub const ANTICHESS_KNIGHT_VALUE: i32 = 300;
pub const ANTICHESS_BISHOP_VALUE: i32 = 300;
pub const ANTICHESS_ROOK_VALUE: i32 = 500;
pub const ANTICHESS_QUEEN_VALUE: i32 = 900;
pub const ANTICHESS_KING_VALUE: i32 = 300;

// Positional Evaluation
pub const CENTER_BONUS: i32 = 12;
pub const PAWN_ADVANCE_WEIGHT: i32 = 5;
pub const KNIGHT_CENTER_BONUS: i32 = 15;
pub const MOBILITY_BONUS: i32 = 8;
pub const IN_CHECK_PENALTY: i32 = 120;

// Antichess Evaluation
pub const ANTI_MATERIAL_WEIGHT: i32 = 1;
pub const ANTI_PIECE_COUNT_BONUS: i32 = 80;
pub const ANTI_MOBILITY_PENALTY: i32 = 5;
pub const ANTI_CAPTURE_BONUS: i32 = 20;
pub const ANTI_EXPOSURE_BONUS: i32 = 8;

// Search
pub const MATE_SCORE: i32 = 100_000;
pub const INFINITY: i32 = 1_000_000;

// Time management (seconds)
pub const DEFAULT_TIME_FRACTION: f64 = 1.0 / 40.0;
pub const MIN_TIME_BUDGET: f64 = 0.05;
pub const CRITICAL_TIME: f64 = 1.0;
pub const LOW_TIME: f64 = 3.0;
pub const MEDIUM_TIME: f64 = 5.0;
pub const LOW_TIME_DEPTH_CAP: u8 = 1;
pub const MEDIUM_TIME_DEPTH_CAP: u8 = 2;

// Match Settings
pub const DEFAULT_MAX_PLIES: usize = 400;
