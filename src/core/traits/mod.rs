pub mod loader;
pub mod provider;
pub mod remote;
