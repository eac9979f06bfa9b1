mod dexscreener;
mod fetcher;
mod store;

pub use dexscreener::{DexScreenerClient, FetchError, PriceProvider};
pub use fetcher::{FetchJob, FetchOutcome, PriceFetcher};
pub use store::PairStore;
