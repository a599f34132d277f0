pub mod providers;
pub mod remote;
pub mod runtime;
