// Fragment loader — binds a URL to the reactive text content a view layer renders.

pub mod fragment;
