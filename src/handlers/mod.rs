pub mod fallback;
pub mod health;
pub mod status;

pub use fallback::*;
pub use health::*;
pub use status::*;
