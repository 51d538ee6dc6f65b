pub mod assets;
pub mod clock;
pub mod version;
