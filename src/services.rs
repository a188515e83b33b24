pub mod provider;
pub mod ytdl;

#[cfg(test)]
pub mod fake;

pub use provider::VideoInfoProvider;
pub use ytdl::YtDlp;
