pub mod host_resolver;
