// Fragment sources — the network side of a load.

pub mod http_source;
pub mod traits;
