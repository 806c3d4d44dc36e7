// Landing page served at the root path, outside the versioned API prefix

pub mod handler;
pub mod routes;
