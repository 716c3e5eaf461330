// Entry points for the embedding view layer.

pub mod fragment_api;
pub mod simple;
