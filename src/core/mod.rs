pub mod menu;
pub mod roster;

pub use crate::domain::model::Student;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
