// Standalone components (no primitives)
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod form;
pub mod input;
pub mod page_header;
pub mod sheet;
pub mod skeleton;
pub mod tabs;
pub mod textarea;

// Primitive wrappers
pub mod toast;

pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use form::*;
pub use input::*;
pub use page_header::*;
pub use sheet::*;
pub use skeleton::*;
pub use tabs::*;
pub use textarea::*;
pub use toast::*;
