pub mod analysis;
pub mod color;
pub mod instrument;
pub mod presets;
pub mod rack;
pub mod scene;
