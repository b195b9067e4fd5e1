pub mod clock;
pub mod host;
pub mod input;

pub use host::HostFeed;
