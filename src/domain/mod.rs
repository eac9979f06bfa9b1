mod address;
mod pair;

pub use address::{AddressError, PairAddress};
pub use pair::{AddError, Pair, PairQuote, PairUpdate, UNKNOWN_PRICE, WatchList};
