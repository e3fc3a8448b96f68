pub mod enemy;
pub mod entity;
pub mod error;
pub mod manager;
pub mod pool;
pub mod projectile;
pub mod spawner;
pub mod world;

pub use error::EntityError;
pub use manager::EntityManager;
pub use world::{CooldownSource, Steering, TickInput, TickReport, World};
