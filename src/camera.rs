use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec2,
    pub zoom: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self { position: Vec2::ZERO, zoom: 1.0 }
    }
}

impl CameraPose {
    pub fn new(position: Vec2, zoom: f32) -> Self {
        Self { position, zoom }
    }

    // Pan scales inversely with zoom so a drag covers the same on-screen
    // distance at any magnification.
    pub fn apply_drag(&mut self, delta: Vec2, multiplier: f32) {
        let zoom = self.zoom.max(f32::EPSILON);
        self.position += delta * multiplier / zoom;
    }

    pub fn set_zoom(&mut self, zoom: f32, limits: (f32, f32)) {
        self.zoom = zoom.clamp(limits.0, limits.1);
    }
}
