pub mod fetch;

pub use fetch::{FetchRaw, Locator, UrlFetcher};
