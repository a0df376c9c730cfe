pub mod format;

pub use format::format_date;
pub use format::format_datetime;
pub use format::format_file_size;
pub use format::truncate_string;
pub use format::truncate_string_with;
