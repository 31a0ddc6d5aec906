pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{format_hours, mask_secret};
pub use path::sanitize_folder_name;
