#![forbid(unsafe_code)]

pub mod badges;
pub mod curriculum;
pub mod model;
pub mod paging;
pub mod quiz;
pub mod streak;
pub mod time;

pub use time::Clock;
