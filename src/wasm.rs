//! WASM boundary for the presentation shell. All payloads cross as
//! serde-converted values of the `types` structs.

use wasm_bindgen::prelude::*;

use crate::game::GameInstance;
use crate::types::Difficulty;

#[wasm_bindgen]
pub struct Game {
    inner: GameInstance,
}

#[wasm_bindgen]
impl Game {
    /// `level`: 1=beginner, 2=intermediate, 3=expert.
    #[wasm_bindgen(constructor)]
    pub fn new(level: u8) -> Self {
        Self {
            inner: GameInstance::new_with_default_selector(Difficulty::from_level(level)),
        }
    }

    pub fn reset(&mut self) {
        self.inner.new_game();
    }

    pub fn set_level(&mut self, level: u8) {
        self.inner.set_difficulty(Difficulty::from_level(level));
    }

    /// Human move; returns the updated game state.
    pub fn place(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        self.inner.place(row, col).map_err(to_js_error)?;
        self.state()
    }

    /// One engine reply; returns the updated game state.
    pub fn ai_move(&mut self) -> Result<JsValue, JsValue> {
        self.inner.do_ai_move().map_err(to_js_error)?;
        self.state()
    }

    /// Forced pass for the side to move.
    pub fn pass(&mut self) -> Result<JsValue, JsValue> {
        self.inner.pass();
        self.state()
    }

    pub fn end_game(&mut self) {
        self.inner.end_game();
    }

    pub fn has_moves(&self) -> bool {
        self.inner.has_legal_moves_for_current()
    }

    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.legal_moves_for_current()).map_err(Into::into)
    }

    pub fn hint(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.hint()).map_err(Into::into)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_state()).map_err(Into::into)
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_result()).map_err(Into::into)
    }
}

fn to_js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}
