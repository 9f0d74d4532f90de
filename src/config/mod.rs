pub mod loader;
pub mod repos;
pub mod settings;
