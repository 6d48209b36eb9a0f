use crate::{Emulator, SCREEN_HEIGHT, SCREEN_WIDTH};
use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

/// Canvas-backed host bindings for browser frontends.
#[wasm_bindgen]
pub struct EmuWasm {
    emulator: Emulator,
    ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl EmuWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<EmuWasm, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no #canvas element"))?;
        let canvas: HtmlCanvasElement = canvas
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("#canvas is not a canvas"))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected context type"))?;

        Ok(EmuWasm {
            emulator: Emulator::new(),
            ctx,
        })
    }

    /// Run one display frame's worth of instructions plus a timer tick.
    #[wasm_bindgen]
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.emulator
            .step_frame()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn set_clock(&mut self, hz: u32) {
        self.emulator.set_cpu_hz(hz);
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.emulator.reset();
    }

    #[wasm_bindgen]
    pub fn sound_active(&self) -> bool {
        self.emulator.sound_active()
    }

    #[wasm_bindgen]
    pub fn set_key(&mut self, evt: KeyboardEvent, pressed: bool) {
        if let Some(idx) = key2btn(&evt.key()) {
            self.emulator.set_key(idx, pressed);
        }
    }

    #[wasm_bindgen]
    pub fn load_rom(&mut self, data: Uint8Array) -> Result<(), JsValue> {
        self.emulator
            .load_rom(&data.to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn draw_screen(&mut self, scale: usize) {
        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(
            0.0,
            0.0,
            (SCREEN_WIDTH * scale) as f64,
            (SCREEN_HEIGHT * scale) as f64,
        );
        self.ctx.set_fill_style_str("white");
        for (i, lit) in self.emulator.frame_buffer().pixels().iter().enumerate() {
            if *lit {
                let x = i % SCREEN_WIDTH;
                let y = i / SCREEN_WIDTH;
                self.ctx.fill_rect(
                    (x * scale) as f64,
                    (y * scale) as f64,
                    scale as f64,
                    scale as f64,
                );
            }
        }
    }
}

fn key2btn(key: &str) -> Option<usize> {
    match key {
        "1" => Some(0x1),
        "2" => Some(0x2),
        "3" => Some(0x3),
        "4" => Some(0xC),
        "q" => Some(0x4),
        "w" => Some(0x5),
        "e" => Some(0x6),
        "r" => Some(0xD),
        "a" => Some(0x7),
        "s" => Some(0x8),
        "d" => Some(0x9),
        "f" => Some(0xE),
        "z" => Some(0xA),
        "x" => Some(0x0),
        "c" => Some(0xB),
        "v" => Some(0xF),
        _ => None,
    }
}
