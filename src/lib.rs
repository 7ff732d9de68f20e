pub mod audio;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod input;
pub mod pool;
pub mod render;
pub mod score;
pub mod swarm;
pub mod timer;
