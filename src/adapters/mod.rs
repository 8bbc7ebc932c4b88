// Adapters layer: concrete implementations for the filesystem and the WMS server.

pub mod discovery;
pub mod http;
pub mod storage;
