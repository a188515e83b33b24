mod fs;
mod shutdown;
mod startup;
mod url;

pub use fs::{find_downloaded_file, sanitize_filename};
pub use shutdown::shutdown_signal;
pub use startup::on_startup;
pub use self::url::parse_url;
