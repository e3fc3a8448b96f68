pub mod shapes;
pub mod vec2;
