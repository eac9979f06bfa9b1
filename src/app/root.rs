use std::mem;
use std::sync::Arc;
use std::time::Duration;

use eframe::{Frame, Storage, egui::Context};
use serde::{Deserialize, Serialize};

use crate::Cli;
use crate::app::screens::ScreenView;
use crate::app::state::Screen;
use crate::config::Theme;
use crate::data::{DexScreenerClient, FetchJob, PairStore, PriceFetcher};
use crate::domain::{PairUpdate, WatchList};
use crate::ui::apply_theme;

/// How soon to repaint while fetches are in flight, so settlements
/// arriving on the worker channel show up promptly.
const FETCH_POLL_INTERVAL: Duration = Duration::from_millis(150);

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    /// Persists across sessions (and across a pair list clear).
    pub(crate) theme: Theme,
    #[serde(skip)]
    pub(crate) watchlist: WatchList,
    #[serde(skip)]
    pub(crate) store: PairStore,
    #[serde(skip)]
    fetcher: Option<PriceFetcher>,
    #[serde(skip)]
    screen: Screen,
}

impl Default for App {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            watchlist: WatchList::default(),
            store: PairStore::default(),
            fetcher: None,
            screen: Screen::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        egui_extras::install_image_loaders(&cc.egui_ctx);

        app.store = PairStore::new(&args.resolve_data_dir());
        app.watchlist = WatchList::new(app.store.load());
        app.fetcher = Some(PriceFetcher::spawn(Arc::new(DexScreenerClient::new())));

        if !args.no_auto_refresh {
            app.refresh_all();
        }

        app
    }

    /// Validate, insert, persist, and kick off a fetch for the new pair
    /// only. The form shows the error on rejection.
    pub(crate) fn submit_new_pair(&mut self, name: &str, address: &str) -> Result<(), crate::domain::AddError> {
        let pair = self.watchlist.validate_new(name, address)?;
        let id = pair.id.clone();
        self.watchlist.apply(PairUpdate::Add(pair));
        self.store.save(self.watchlist.pairs());
        self.request_fetch(&id);
        Ok(())
    }

    pub(crate) fn remove_pair(&mut self, id: &str) {
        if self.watchlist.apply(PairUpdate::Remove { id: id.to_owned() }) {
            self.store.save(self.watchlist.pairs());
        }
    }

    pub(crate) fn clear_all_pairs(&mut self) {
        self.watchlist.clear();
        self.store.clear();
    }

    /// Queue a fetch for one pair. A no-op when the id is gone already.
    pub(crate) fn request_fetch(&mut self, id: &str) {
        let Some(pair) = self.watchlist.get(id) else {
            return;
        };
        let job = FetchJob {
            pair_id: pair.id.clone(),
            address: pair.address.clone(),
        };
        self.watchlist.apply(PairUpdate::FetchStarted {
            id: id.to_owned(),
        });
        if let Some(fetcher) = self.fetcher.as_mut() {
            fetcher.request(job);
        }
    }

    pub(crate) fn refresh_all(&mut self) {
        let ids: Vec<String> = self.watchlist.pairs().iter().map(|p| p.id.clone()).collect();
        for id in ids {
            self.request_fetch(&id);
        }
    }

    pub(crate) fn is_refreshing(&self) -> bool {
        self.fetcher.as_ref().is_some_and(|f| f.is_busy())
    }

    /// Apply settled fetches. Settlements and store writes both happen
    /// here on the UI thread, so saves never interleave.
    fn drain_fetch_results(&mut self) {
        let Some(fetcher) = self.fetcher.as_mut() else {
            return;
        };
        let outcomes = fetcher.poll();
        if outcomes.is_empty() {
            return;
        }
        let mut changed = false;
        for outcome in outcomes {
            changed |= self.watchlist.apply(PairUpdate::FetchSettled {
                id: outcome.pair_id,
                outcome: outcome.result,
            });
        }
        if changed {
            self.store.save(self.watchlist.pairs());
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        apply_theme(ctx, self.theme);
        self.drain_fetch_results();

        let current = mem::take(&mut self.screen);
        self.screen = match current {
            Screen::Popup(mut s) => s.tick(self, ctx),
            Screen::Settings(mut s) => s.tick(self, ctx),
        };

        if self.is_refreshing() {
            ctx.request_repaint_after(FETCH_POLL_INTERVAL);
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
