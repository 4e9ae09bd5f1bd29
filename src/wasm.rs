//! WebAssembly bindings for the engine.
//!
//! This module provides JavaScript-friendly wrappers around [`Engine`] so a
//! browser front end can drive the grid and read back its state.

use wasm_bindgen::prelude::*;
use crate::{Coord, Engine, EngineConfig};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly engine wrapper.
#[wasm_bindgen]
pub struct WasmEngine {
    engine: Engine,
}

#[wasm_bindgen]
impl WasmEngine {
    /// Create an engine with a randomly populated grid.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(&EngineConfig::default()),
        }
    }

    /// Create an engine whose grid is reproducible from `seed`.
    #[wasm_bindgen]
    pub fn with_seed(seed: u64) -> Self {
        let config = EngineConfig { seed: Some(seed), ..EngineConfig::default() };
        Self {
            engine: Engine::new(&config),
        }
    }

    /// Execute an operation. Returns the description that was logged.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn execute(
        &mut self,
        op: &str,
        x1: i32, y1: i32, z1: i32,
        x2: i32, y2: i32, z2: i32,
        rx: i32, ry: i32, rz: i32,
    ) -> Result<String, JsError> {
        let desc = self.engine
            .step_named(
                op,
                Coord::new(x1, y1, z1),
                Coord::new(x2, y2, z2),
                Coord::new(rx, ry, rz),
            )
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(desc.to_string())
    }

    /// Read one cell.
    #[wasm_bindgen]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<u8, JsError> {
        self.engine.grid()
            .get(Coord::new(x, y, z))
            .map(|t| t.to_u8())
            .map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// Write one cell (value reduced mod 3).
    #[wasm_bindgen]
    pub fn set(&mut self, x: i32, y: i32, z: i32, value: i32) -> Result<(), JsError> {
        self.engine.grid_mut()
            .set(Coord::new(x, y, z), value as i64)
            .map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// Advance one cell 0 → 1 → 2 → 0. Returns the new value.
    #[wasm_bindgen]
    pub fn cycle_cell(&mut self, x: i32, y: i32, z: i32) -> Result<u8, JsError> {
        self.engine
            .cycle_cell(Coord::new(x, y, z))
            .map(|t| t.to_u8())
            .map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// Repopulate the grid at random and clear the log.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// All 64 cells in linear order (`x + 4y + 16z`).
    #[wasm_bindgen]
    pub fn cells(&self) -> Vec<u8> {
        self.engine.grid().cells().iter().map(|t| t.to_u8()).collect()
    }

    /// The grid as a nested `[z][y][x]` JSON array.
    #[wasm_bindgen]
    pub fn grid_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self.engine.grid())
            .map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// The operation log, oldest first.
    #[wasm_bindgen]
    pub fn log(&self) -> js_sys::Array {
        self.engine.log().iter().map(JsValue::from_str).collect()
    }

    /// Successful steps since creation or the last reset.
    #[wasm_bindgen]
    pub fn steps(&self) -> u64 {
        self.engine.steps()
    }
}

impl Default for WasmEngine {
    fn default() -> Self {
        Self::new()
    }
}
