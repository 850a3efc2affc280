// src/achievement/mod.rs

//! XP accumulation, levels and day/week windows.

pub mod level;
pub mod record;
pub mod window;

pub use level::Level;
pub use record::AchievementRecord;
pub use window::{WindowCounter, next_boundary_after};
