use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use tokio::runtime::Runtime;
use tokio::sync::Semaphore;

use crate::config::DEXSCREENER;
use crate::data::dexscreener::PriceProvider;
use crate::domain::{PairAddress, PairQuote};

/// One fetch request. Carries the address so the worker never touches
/// the shared list.
#[derive(Debug, Clone)]
pub struct FetchJob {
    pub pair_id: String,
    pub address: PairAddress,
}

/// Settlement of one job, success or failure. Errors are pre-stringified
/// for direct storage on the pair.
#[derive(Debug)]
pub struct FetchOutcome {
    pub pair_id: String,
    pub result: Result<PairQuote, String>,
}

/// UI-side handle to the background fetch worker.
///
/// Jobs fan out as tokio tasks capped by a semaphore and each reports
/// its settlement independently, so one slow request delays only its
/// own pair rather than the whole batch. The UI thread drains results
/// every frame via [`PriceFetcher::poll`].
pub struct PriceFetcher {
    job_tx: Sender<FetchJob>,
    result_rx: Receiver<FetchOutcome>,
    in_flight: usize,
}

impl PriceFetcher {
    pub fn spawn(provider: Arc<dyn PriceProvider>) -> Self {
        let (job_tx, job_rx) = channel::<FetchJob>();
        let (result_tx, result_rx) = channel::<FetchOutcome>();
        spawn_fetch_thread(job_rx, result_tx, provider);
        Self {
            job_tx,
            result_rx,
            in_flight: 0,
        }
    }

    pub fn request(&mut self, job: FetchJob) {
        self.in_flight += 1;
        if self.job_tx.send(job).is_err() {
            log::error!("Fetch worker is gone; dropping job");
            self.in_flight -= 1;
        }
    }

    /// Drain settled outcomes without blocking the UI thread.
    pub fn poll(&mut self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.result_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            outcomes.push(outcome);
        }
        outcomes
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

/// Spawns the background thread that owns the tokio runtime. The loop
/// exits when the job sender (the `PriceFetcher`) is dropped.
fn spawn_fetch_thread(
    rx: Receiver<FetchJob>,
    tx: Sender<FetchOutcome>,
    provider: Arc<dyn PriceProvider>,
) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to start fetch runtime: {e}");
                return;
            }
        };
        rt.block_on(async move {
            let limiter = Arc::new(Semaphore::new(DEXSCREENER.concurrent_fetch_tasks));
            while let Ok(job) = rx.recv() {
                let limiter = limiter.clone();
                let tx = tx.clone();
                let provider = provider.clone();
                tokio::spawn(async move {
                    let Ok(_permit) = limiter.acquire_owned().await else {
                        return;
                    };
                    let result = provider
                        .fetch_pair(&job.address)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(FetchOutcome {
                        pair_id: job.pair_id,
                        result,
                    });
                });
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dexscreener::FetchError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::{Duration, Instant};

    struct MockProvider {
        /// Address -> (delay, canned outcome)
        responses: HashMap<String, (Duration, Result<PairQuote, u16>)>,
    }

    #[async_trait]
    impl PriceProvider for MockProvider {
        async fn fetch_pair(&self, address: &PairAddress) -> Result<PairQuote, FetchError> {
            let (delay, outcome) = self
                .responses
                .get(&address.as_str().to_ascii_lowercase())
                .cloned()
                .unwrap_or((Duration::ZERO, Err(500)));
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            outcome.map_err(FetchError::Status)
        }
    }

    fn addr(last_byte: u8) -> PairAddress {
        PairAddress::parse(&format!("0x{}{:02x}", "00".repeat(19), last_byte)).unwrap()
    }

    fn quote(price: &str) -> PairQuote {
        PairQuote {
            price_usd: price.to_owned(),
            price_native: "1".to_owned(),
            image_url: None,
            url: None,
        }
    }

    fn poll_until(fetcher: &mut PriceFetcher, count: usize) -> Vec<FetchOutcome> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut outcomes = Vec::new();
        while outcomes.len() < count && Instant::now() < deadline {
            outcomes.extend(fetcher.poll());
            thread::sleep(Duration::from_millis(10));
        }
        outcomes
    }

    #[test]
    fn every_job_settles_independently() {
        let mut responses = HashMap::new();
        responses.insert(addr(1).as_str().to_owned(), (Duration::ZERO, Ok(quote("1"))));
        responses.insert(addr(2).as_str().to_owned(), (Duration::ZERO, Err(404)));
        responses.insert(addr(3).as_str().to_owned(), (Duration::ZERO, Ok(quote("3"))));

        let mut fetcher = PriceFetcher::spawn(Arc::new(MockProvider { responses }));
        for (id, address) in [("a", addr(1)), ("b", addr(2)), ("c", addr(3))] {
            fetcher.request(FetchJob {
                pair_id: id.to_owned(),
                address,
            });
        }
        assert_eq!(fetcher.in_flight(), 3);
        assert!(fetcher.is_busy());

        let outcomes = poll_until(&mut fetcher, 3);
        assert_eq!(outcomes.len(), 3);
        assert!(!fetcher.is_busy());

        let failed = outcomes.iter().find(|o| o.pair_id == "b").unwrap();
        assert!(failed.result.as_ref().unwrap_err().contains("404"));
        let ok = outcomes.iter().find(|o| o.pair_id == "a").unwrap();
        assert_eq!(ok.result.as_ref().unwrap().price_usd, "1");
    }

    #[test]
    fn slow_job_does_not_block_fast_ones() {
        let mut responses = HashMap::new();
        responses.insert(
            addr(1).as_str().to_owned(),
            (Duration::from_millis(500), Ok(quote("slow"))),
        );
        responses.insert(addr(2).as_str().to_owned(), (Duration::ZERO, Ok(quote("fast"))));

        let mut fetcher = PriceFetcher::spawn(Arc::new(MockProvider { responses }));
        fetcher.request(FetchJob {
            pair_id: "slow".to_owned(),
            address: addr(1),
        });
        fetcher.request(FetchJob {
            pair_id: "fast".to_owned(),
            address: addr(2),
        });

        let mut outcomes = poll_until(&mut fetcher, 1);
        assert_eq!(outcomes[0].pair_id, "fast");

        let need = 2 - outcomes.len();
        outcomes.extend(poll_until(&mut fetcher, need));
        assert_eq!(outcomes.last().unwrap().pair_id, "slow");
        assert!(!fetcher.is_busy());
    }
}
