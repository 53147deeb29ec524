pub mod actions;
pub mod config;
pub mod content;
pub mod labels;
pub mod reducer;
pub mod state;
pub mod store;
pub mod view;

pub use actions::*;
pub use labels::*;
pub use reducer::*;
pub use state::*;
pub use store::*;
