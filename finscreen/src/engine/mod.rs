pub mod backoff;
mod fetch;
mod merge;
mod quote;
mod screen;
pub mod util;
