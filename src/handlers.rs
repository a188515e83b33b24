mod download;
mod health;
mod info;

pub use download::download;
pub use health::health;
pub use info::info;
