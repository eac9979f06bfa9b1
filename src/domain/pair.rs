use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::address::{AddressError, PairAddress};

/// Placeholder shown when the API omits a price field.
pub const UNKNOWN_PRICE: &str = "N/A";

/// One tracked trading pair. The persisted record plus the transient
/// fetch state (`loading` never hits disk).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub id: String,
    pub name: String,
    pub address: PairAddress,
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub price_native: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(skip)]
    pub loading: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl Pair {
    /// New pair with empty metadata. Ids are millisecond timestamps,
    /// unique enough for a hand-curated watch-list.
    pub fn new(name: String, address: PairAddress) -> Self {
        Self {
            id: Utc::now().timestamp_millis().to_string(),
            name,
            address,
            price_usd: None,
            price_native: None,
            image_url: None,
            url: None,
            loading: false,
            error: None,
        }
    }
}

/// The success payload of one price fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PairQuote {
    pub price_usd: String,
    pub price_native: String,
    pub image_url: Option<String>,
    pub url: Option<String>,
}

/// Why an add was rejected. `Display` strings are shown inline in the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    #[error("Name is required")]
    EmptyName,
    #[error("Pair address is required")]
    EmptyAddress,
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),
    #[error("That address is already in the list")]
    DuplicateAddress,
}

/// Every way the list can change. All mutation funnels through
/// [`WatchList::apply`] so state transitions stay testable in one place.
#[derive(Debug, Clone)]
pub enum PairUpdate {
    Add(Pair),
    Remove {
        id: String,
    },
    FetchStarted {
        id: String,
    },
    /// Settlement of a fetch, success or failure. Unknown ids are
    /// ignored (the pair may have been removed while the fetch was in
    /// flight).
    FetchSettled {
        id: String,
        outcome: Result<PairQuote, String>,
    },
}

/// The in-memory pair list. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct WatchList {
    pairs: Vec<Pair>,
}

impl WatchList {
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Pair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Pair> {
        self.pairs.iter_mut().find(|p| p.id == id)
    }

    /// Validate a prospective entry without mutating the list. Returns
    /// the ready-to-insert `Pair` on success.
    pub fn validate_new(&self, name: &str, address: &str) -> Result<Pair, AddError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AddError::EmptyName);
        }
        let address = address.trim();
        if address.is_empty() {
            return Err(AddError::EmptyAddress);
        }
        let address = PairAddress::parse(address)?;
        if self.pairs.iter().any(|p| p.address.matches(&address)) {
            return Err(AddError::DuplicateAddress);
        }
        let mut pair = Pair::new(name.to_owned(), address);
        // Rapid adds can land in the same millisecond.
        while self.get(&pair.id).is_some() {
            pair.id.push('0');
        }
        Ok(pair)
    }

    /// The single mutation entry point. Returns true when the list
    /// changed (callers persist on change).
    pub fn apply(&mut self, update: PairUpdate) -> bool {
        match update {
            PairUpdate::Add(pair) => {
                self.pairs.push(pair);
                true
            }
            PairUpdate::Remove { id } => {
                let before = self.pairs.len();
                self.pairs.retain(|p| p.id != id);
                self.pairs.len() != before
            }
            PairUpdate::FetchStarted { id } => match self.get_mut(&id) {
                Some(pair) => {
                    pair.loading = true;
                    pair.error = None;
                    true
                }
                None => false,
            },
            PairUpdate::FetchSettled { id, outcome } => match self.get_mut(&id) {
                Some(pair) => {
                    match outcome {
                        Ok(quote) => {
                            pair.price_usd = Some(quote.price_usd);
                            pair.price_native = Some(quote.price_native);
                            pair.image_url = quote.image_url;
                            pair.url = quote.url;
                            pair.error = None;
                        }
                        Err(message) => {
                            // Keep last-known-good prices; only the error changes.
                            pair.error = Some(message);
                        }
                    }
                    pair.loading = false;
                    true
                }
                None => false,
            },
        }
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}
