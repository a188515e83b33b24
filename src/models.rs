pub mod display_format;
pub mod format;
pub mod video;

pub use display_format::DisplayFormat;
pub use format::{FormatKind, GroupKey, RawFormat};
pub use video::{InfoResponse, VideoInfo};
