pub mod clipboard;
pub mod contracts;
pub mod viewport;

pub use clipboard::*;
pub use contracts::*;
pub use viewport::*;
