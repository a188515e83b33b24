pub mod base;
pub mod download_video;
pub mod get_video_info;

pub use base::Interactor;
pub use download_video::{DownloadVideo, DownloadVideoInput, DownloadedFile};
pub use get_video_info::{GetVideoInfo, GetVideoInfoInput};
