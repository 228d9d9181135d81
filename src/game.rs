use log::debug;

use crate::ai::search::{self, Strategist};
use crate::board::{BOARD_SIZE, Board, Cell, Side};
use crate::types::{Difficulty, GameResult, GameState, Position};

/// The shell's player always runs the dark discs; the engine answers with
/// the light ones.
pub const HUMAN_SIDE: Side = Side::Dark;
pub const ENGINE_SIDE: Side = Side::Light;

pub trait MoveSelector: Send + Sync {
    fn select_move(&mut self, board: &Board, side: Side, difficulty: Difficulty)
    -> Option<Position>;
}

impl MoveSelector for Strategist {
    fn select_move(
        &mut self,
        board: &Board,
        side: Side,
        difficulty: Difficulty,
    ) -> Option<Position> {
        self.choose_move(board, side, difficulty)
    }
}

/// One game session. Owns the single live board; the engine's pure
/// functions borrow it per call and never retain it.
pub struct GameInstance {
    board: Board,
    pub current_side: Side,
    pub difficulty: Difficulty,
    pub is_game_over: bool,
    pub is_pass: bool,
    pub flipped: Vec<Position>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(difficulty: Difficulty, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            current_side: HUMAN_SIDE,
            difficulty,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            selector,
        }
    }

    pub fn new_with_default_selector(difficulty: Difficulty) -> Self {
        Self::new(difficulty, Box::new(Strategist::new()))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Resets the board to the four-disc seed layout; difficulty and
    /// selector are kept.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.current_side = HUMAN_SIDE;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        debug!("new game at {:?}", self.difficulty);
    }

    /// Switching levels starts a fresh game, as in the level menu.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.new_game();
    }

    /// Human move at (row, col).
    pub fn place(&mut self, row: u8, col: u8) -> Result<(), String> {
        if self.is_game_over {
            return Err("game is already over".to_string());
        }
        if self.current_side != HUMAN_SIDE {
            return Err("it is not the player's turn".to_string());
        }
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err("row/col out of range".to_string());
        }

        self.apply_move(row as usize, col as usize, HUMAN_SIDE)
    }

    /// Runs the difficulty policy for the engine side and executes the
    /// chosen move.
    pub fn do_ai_move(&mut self) -> Result<(), String> {
        if self.is_game_over {
            return Err("game is already over".to_string());
        }
        if self.current_side != ENGINE_SIDE {
            return Err("it is not the engine's turn".to_string());
        }
        if self.board.legal_moves(ENGINE_SIDE).is_empty() {
            return Err("engine has no legal moves".to_string());
        }

        let selected = self
            .selector
            .select_move(&self.board, ENGINE_SIDE, self.difficulty)
            .ok_or_else(|| "engine could not select a move".to_string())?;

        self.apply_move(selected.row as usize, selected.col as usize, ENGINE_SIDE)
    }

    /// Forced pass for the side to move. A pass is a normal game
    /// condition, not an error.
    pub fn pass(&mut self) {
        self.is_pass = true;
        self.flipped.clear();
        self.current_side = self.current_side.opponent();
    }

    /// Called by the shell when neither side can move.
    pub fn end_game(&mut self) {
        self.is_game_over = true;
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        !self.board.legal_moves(self.current_side).is_empty()
    }

    pub fn legal_moves_for_current(&self) -> Vec<Position> {
        self.board.legal_moves(self.current_side)
    }

    /// Depth-2 suggestion for the side to move.
    pub fn hint(&self) -> Option<Position> {
        search::hint(&self.board, self.current_side)
    }

    pub fn to_game_state(&self) -> GameState {
        let (dark_count, light_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_side: self.current_side.code(),
            dark_count,
            light_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (dark_count, light_count) = self.board.count();
        GameResult {
            winner: if dark_count > light_count {
                Side::Dark.code()
            } else if light_count > dark_count {
                Side::Light.code()
            } else {
                0
            },
            dark_count,
            light_count,
        }
    }

    fn apply_move(&mut self, row: usize, col: usize, side: Side) -> Result<(), String> {
        if self.board.cell(row, col) != Cell::Empty || !self.board.is_legal(row, col, side) {
            return Err("illegal move".to_string());
        }

        self.flipped = self.board.captures(row, col, side);
        self.board.apply_move(row, col, side);
        self.is_pass = false;
        self.current_side = side.opponent();

        if self.board.is_terminal() {
            self.end_game();
            debug!("game over: {:?}", self.to_game_result());
        }

        Ok(())
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_side: Side) {
        self.board = board;
        self.current_side = current_side;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMoveSelector {
        mv: Position,
    }

    impl MoveSelector for FixedMoveSelector {
        fn select_move(
            &mut self,
            _board: &Board,
            _side: Side,
            _difficulty: Difficulty,
        ) -> Option<Position> {
            Some(self.mv)
        }
    }

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn board_from(rows: [&str; BOARD_SIZE]) -> Board {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                cells[r][c] = match ch {
                    'D' => Cell::Dark,
                    'L' => Cell::Light,
                    _ => Cell::Empty,
                };
            }
        }
        Board::from_cells(cells)
    }

    #[test]
    fn initial_state_is_correct() {
        let game = GameInstance::new_with_default_selector(Difficulty::Expert);
        let state = game.to_game_state();

        assert_eq!(state.current_side, Side::Dark.code());
        assert_eq!(state.dark_count, 2);
        assert_eq!(state.light_count, 2);
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert!(state.flipped.is_empty());
        assert_eq!(game.legal_moves_for_current().len(), 4);
    }

    #[test]
    fn illegal_player_move_returns_error() {
        let mut game = GameInstance::new_with_default_selector(Difficulty::Beginner);
        let before = *game.board();

        let err = game.place(0, 0).unwrap_err();

        assert!(err.contains("illegal move"));
        assert_eq!(*game.board(), before);
        assert_eq!(game.current_side, HUMAN_SIDE);
    }

    #[test]
    fn out_of_range_move_is_rejected_before_the_board_is_touched() {
        let mut game = GameInstance::new_with_default_selector(Difficulty::Beginner);

        let err = game.place(8, 0).unwrap_err();

        assert!(err.contains("out of range"));
    }

    #[test]
    fn opening_move_reports_the_single_flip_and_hands_over_the_turn() {
        let mut game = GameInstance::new_with_default_selector(Difficulty::Beginner);

        game.place(2, 3).unwrap();
        let state = game.to_game_state();

        assert_eq!(state.flipped, vec![pos(3, 3)]);
        assert_eq!(state.dark_count, 4);
        assert_eq!(state.light_count, 1);
        assert_eq!(state.current_side, Side::Light.code());
        assert!(!state.is_pass);
    }

    #[test]
    fn engine_refuses_to_move_out_of_turn() {
        let mut game = GameInstance::new_with_default_selector(Difficulty::Beginner);

        let err = game.do_ai_move().unwrap_err();

        assert!(err.contains("not the engine's turn"));
    }

    #[test]
    fn engine_rejects_an_illegal_selector_choice() {
        let mut game = GameInstance::new(
            Difficulty::Beginner,
            Box::new(FixedMoveSelector { mv: pos(0, 0) }),
        );
        game.place(2, 3).unwrap();

        let err = game.do_ai_move().unwrap_err();

        assert!(err.contains("illegal move"));
    }

    #[test]
    fn engine_move_is_applied_and_returns_the_turn() {
        let mut game = GameInstance::new(
            Difficulty::Intermediate,
            Box::new(Strategist::with_seed(3)),
        );
        game.place(2, 3).unwrap();

        game.do_ai_move().unwrap();
        let state = game.to_game_state();

        assert_eq!(state.current_side, Side::Dark.code());
        assert!(!state.flipped.is_empty());
        assert_eq!(state.dark_count + state.light_count, 6);
    }

    #[test]
    fn pass_switches_turn_without_flips() {
        let mut game = GameInstance::new_with_default_selector(Difficulty::Beginner);
        let board = board_from([
            "LD......", "........", "........", "........", "........", "........", "........",
            "........",
        ]);
        game.set_board_for_test(board, Side::Dark);

        assert!(!game.has_legal_moves_for_current());
        game.pass();

        assert_eq!(game.current_side, Side::Light);
        assert!(game.is_pass);
        assert!(game.flipped.is_empty());
        assert!(!game.is_game_over);
        assert!(game.has_legal_moves_for_current());
    }

    #[test]
    fn both_sides_stuck_ends_the_game() {
        let mut game = GameInstance::new_with_default_selector(Difficulty::Beginner);
        let board = board_from([
            "D.D.....", "........", "D.D.....", "........", "........", "........", "........",
            ".......L",
        ]);
        game.set_board_for_test(board, Side::Dark);

        assert!(!game.has_legal_moves_for_current());
        game.pass();
        assert!(!game.has_legal_moves_for_current());

        game.end_game();
        assert!(game.is_game_over);
    }

    #[test]
    fn capturing_the_last_opposing_disc_ends_the_game() {
        let mut game = GameInstance::new_with_default_selector(Difficulty::Beginner);
        let board = board_from([
            "DL......", "........", "........", "........", "........", "........", "........",
            "........",
        ]);
        game.set_board_for_test(board, Side::Dark);

        game.place(0, 2).unwrap();
        let state = game.to_game_state();

        assert!(state.is_game_over);
        assert_eq!(state.dark_count, 3);
        assert_eq!(state.light_count, 0);
        assert_eq!(game.to_game_result().winner, Side::Dark.code());
    }

    #[test]
    fn hint_suggests_a_legal_move_for_the_side_to_move() {
        let game = GameInstance::new_with_default_selector(Difficulty::Expert);

        let suggestion = game.hint().unwrap();

        assert!(game.legal_moves_for_current().contains(&suggestion));
        assert_eq!(
            Some(suggestion),
            search::hint(game.board(), Side::Dark)
        );
    }

    #[test]
    fn changing_difficulty_starts_a_new_game() {
        let mut game = GameInstance::new_with_default_selector(Difficulty::Beginner);
        game.place(2, 3).unwrap();

        game.set_difficulty(Difficulty::Expert);
        let state = game.to_game_state();

        assert_eq!(game.difficulty, Difficulty::Expert);
        assert_eq!(state.dark_count, 2);
        assert_eq!(state.light_count, 2);
        assert_eq!(state.current_side, Side::Dark.code());
    }

    #[test]
    fn drawn_full_board_reports_no_winner() {
        let mut game = GameInstance::new_with_default_selector(Difficulty::Beginner);
        let mut cells = [[Cell::Dark; BOARD_SIZE]; BOARD_SIZE];
        for row in 0..BOARD_SIZE / 2 {
            for col in 0..BOARD_SIZE {
                cells[row][col] = Cell::Light;
            }
        }
        game.set_board_for_test(Board::from_cells(cells), Side::Dark);

        let result = game.to_game_result();

        assert_eq!(result.winner, 0);
        assert_eq!(result.dark_count, 32);
        assert_eq!(result.light_count, 32);
    }
}
