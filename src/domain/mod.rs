pub mod announcement;
pub mod teacher;

pub use announcement::*;
pub use teacher::*;
