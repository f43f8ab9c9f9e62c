pub mod config;
pub mod error;

// CGM domain modules
pub mod case;
pub mod forms;
pub mod permissions;
pub mod role;
pub mod view_state;

pub use config::*;
pub use error::*;

pub use case::*;
pub use forms::*;
pub use permissions::*;
pub use role::*;
pub use view_state::*;
