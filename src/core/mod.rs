pub mod generator;
pub mod renderer;

pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
