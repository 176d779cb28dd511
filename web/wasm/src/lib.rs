use chrono::DateTime;
use hilo::{Card, Game, GameOptions, Generator, Hand};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmEngine {
    generator: Generator,
}

#[wasm_bindgen]
impl WasmEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            generator: Generator::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.generator = Generator::new(GameOptions::default(), seed as u64);
    }

    /// Deals a new game. `now_ms` is the caller's clock in Unix milliseconds.
    pub fn new_game(&self, now_ms: f64) -> Result<JsValue, JsValue> {
        let now = DateTime::from_timestamp_millis(now_ms as i64)
            .ok_or_else(|| JsValue::from_str("invalid request: timestamp out of range"))?;
        let game: Game = self.generator.new_game_at(now);
        to_js_value(&game)
    }

    /// Scores a hand sent as `{ cards: [{ kind, value }, ...] }`.
    pub fn play_hand(&self, request: JsValue) -> Result<JsValue, JsValue> {
        let request: PlayHandRequest = serde_wasm_bindgen::from_value(request)
            .map_err(|err| JsValue::from_str(&format!("invalid request: {err}")))?;

        let Some(cards) = request.cards else {
            return Err(JsValue::from_str("invalid request: missing hand"));
        };
        let hand = Hand::new(cards);
        if hand.is_empty() {
            return Err(JsValue::from_str("invalid request: no cards in hand"));
        }

        let scores = hand
            .evaluate_with(self.generator.options())
            .map_err(js_err)?;
        to_js_value(&PlayHandResponse {
            score_counter: scores,
        })
    }
}

#[derive(Deserialize)]
struct PlayHandRequest {
    cards: Option<Vec<Card>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayHandResponse {
    score_counter: Vec<f32>,
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
