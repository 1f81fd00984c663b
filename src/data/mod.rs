pub mod obstacles;

pub use obstacles::load_obstacles;
