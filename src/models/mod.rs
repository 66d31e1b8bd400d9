pub mod api_response;
pub mod error;
pub mod health;
pub mod status;

pub use api_response::*;
pub use error::*;
pub use health::*;
pub use status::*;
