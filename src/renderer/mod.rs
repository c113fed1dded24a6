//! Rendering collaborator interface
//!
//! The crate never draws. It builds a [`Scene`] per frame and hands it to
//! whatever implements [`Renderer`].

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use crate::settings::parse_hex_color;
pub use scene::{Label, Scene, SceneBuilder};
pub use vertex::Vertex;

/// Consumes one scene per simulated frame
pub trait Renderer {
    fn present(&mut self, scene: &Scene);
}

/// Renderer that draws nothing and keeps the latest scene (headless runs)
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub last_scene: Option<Scene>,
}

impl Renderer for HeadlessRenderer {
    fn present(&mut self, scene: &Scene) {
        self.frames += 1;
        self.last_scene = Some(scene.clone());
    }
}
