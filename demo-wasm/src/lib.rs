use splashy::{FixedTimestep, Simulator};
use wasm_bindgen::prelude::*;

// ---- Water Demo ----

/// Canvas-facing wrapper: the page owns drawing, this owns the water.
#[wasm_bindgen]
pub struct WaterDemo {
    water: Simulator<f32, u32>,
    clock: FixedTimestep<f32>,
    splash_width: f32,
}

#[wasm_bindgen]
impl WaterDemo {
    /// `colour` is packed `0xRRGGBBAA`; it is handed back untouched for the
    /// page's fill style.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, joints: usize, surface_height: f32, colour: u32) -> Result<WaterDemo, JsValue> {
        let water = Simulator::new(width, joints, surface_height, colour)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WaterDemo {
            water,
            clock: FixedTimestep::new(1.0 / 120.0),
            splash_width: 0.0,
        })
    }

    /// Single raw update; most pages want `advance` instead.
    pub fn update(&mut self, dt: f32) {
        self.water.update(dt);
    }

    /// Feed one animation frame's elapsed seconds through the fixed step.
    /// Returns how many updates ran.
    pub fn advance(&mut self, frame_dt: f32) -> usize {
        self.clock.advance(&mut self.water, frame_dt)
    }

    pub fn splash(&mut self, x: f32, force: f32) {
        self.water.splash_with_width(x, force, self.splash_width);
    }

    pub fn splash_with_width(&mut self, x: f32, force: f32, width: f32) {
        self.water.splash_with_width(x, force, width);
    }

    pub fn set_splash_width(&mut self, width: f32) {
        self.splash_width = width;
    }

    /// Returns flat [x0, y0, x1, y1, ...] surface points, left to right.
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.water.len() * 2);
        for p in self.water.points() {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Closed outline for a filled body of water: the surface curve, then
    /// down to `bottom` at the right edge and back along it to the left.
    pub fn fill_polygon(&self, bottom: f32) -> Vec<f32> {
        let mut out = self.positions();
        out.reserve(4);
        out.extend_from_slice(&[self.water.width(), bottom, 0.0, bottom]);
        out
    }

    pub fn colour(&self) -> u32 {
        *self.water.fill()
    }

    pub fn set_colour(&mut self, colour: u32) {
        self.water.set_fill(colour);
    }

    pub fn set_tension(&mut self, tension: f32) {
        self.water.config.tension = tension;
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.water.config.damping = damping;
    }

    pub fn set_spread(&mut self, spread: f32) {
        self.water.config.spread = spread;
    }

    pub fn set_surface_height(&mut self, surface_height: f32) {
        self.water.set_surface_height(surface_height);
    }

    pub fn reset_to_defaults(&mut self) {
        self.water.reset_to_defaults();
        self.clock.reset();
    }

    pub fn joint_count(&self) -> usize {
        self.water.len()
    }

    pub fn is_settled(&self) -> bool {
        self.water.is_settled(0.01, 0.01)
    }
}
