//! Distance Game - the most isolated player wins
//!
//! Ranks named players on a 50x50 field by the distance to their nearest
//! neighbor and displays:
//! - Scatter plot: players, winner highlighted, nearest-neighbor circles
//! - Standings table: rank, name, position, distance to nearest

pub mod core;
pub mod scatter;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod app;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod theme;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::GameApp;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        let web_options = eframe::WebOptions::default();

        wasm_bindgen_futures::spawn_local(async {
            let canvas = web_sys::window()
                .expect("no window")
                .document()
                .expect("no document")
                .get_element_by_id("canvas")
                .expect("no canvas element")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("not a canvas element");

            eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(|cc| Ok(Box::new(GameApp::new(cc)))),
                )
                .await
                .expect("Failed to start eframe");
        });
    }
}
