//! Page components for the Guide Directory.

mod directory;

pub use directory::Directory;
