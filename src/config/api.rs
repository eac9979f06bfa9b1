/// REST constraints for the DexScreener public API: endpoint, request
/// timeout, and fan-out cap for batch refreshes.
pub struct DexScreenerConfig {
    /// Base URL up to (not including) the chain segment.
    pub base_url: &'static str,
    /// Chain identifier appended between base URL and pair address.
    pub chain_id: &'static str,
    pub timeout_ms: u64,
    pub concurrent_fetch_tasks: usize,
}

pub const DEXSCREENER: DexScreenerConfig = DexScreenerConfig {
    base_url: "https://api.dexscreener.com/latest/dex/pairs",
    chain_id: "pulsechain",
    timeout_ms: 10_000,
    concurrent_fetch_tasks: 6,
};
