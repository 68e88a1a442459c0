//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_feed, FeedConfig};
use crate::controller::{FetchObserver, FetchState, PaginatedFetchController};
use crate::error::{Error, Result};
use crate::giphy::GifItem;
use crate::page::PageRequest;
use std::ops::Range;
use std::sync::Arc;
use tracing::{debug, info};

/// Observer that reports controller transitions through structured logging
#[derive(Debug, Default)]
pub struct TraceObserver;

impl FetchObserver for TraceObserver {
    fn on_state_changed(&self, state: FetchState) {
        info!(%state, "fetch state changed");
    }

    fn on_items_appended(&self, range: Range<usize>) {
        debug!(start = range.start, end = range.end, "items appended");
    }

    fn on_items_replaced(&self, count: usize) {
        debug!(count, "items replaced");
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check => self.check().await,
            Commands::Read {
                max_pages,
                page_size,
            } => self.read(*max_pages, *page_size).await,
            Commands::Validate => self.validate(),
        }
    }

    /// Load the feed definition
    fn load_feed(&self) -> Result<FeedConfig> {
        let path = self
            .cli
            .feed
            .as_ref()
            .ok_or_else(|| Error::config("Feed file not specified (use -f flag)"))?;
        load_feed(path)
    }

    /// Probe the feed with a one-item request
    async fn check(&self) -> Result<()> {
        let config = self.load_feed()?;
        let fetcher = config.build_fetcher()?;

        use crate::controller::PageFetcher;
        match fetcher.fetch_page(PageRequest::new(0, 1)?).await {
            Ok(page) => {
                println!("OK: feed '{}' reachable ({} item probe)", config.name, page.items.len());
                Ok(())
            }
            Err(e) => {
                println!("FAILED: {e}");
                Err(e)
            }
        }
    }

    /// Page through the feed, printing item URLs
    async fn read(&self, max_pages: usize, page_size: Option<u64>) -> Result<()> {
        let config = self.load_feed()?;
        let fetcher = Arc::new(config.build_fetcher()?);
        let page_size = page_size.unwrap_or(config.page_size);

        let controller = PaginatedFetchController::<GifItem>::new(
            fetcher,
            Arc::new(TraceObserver),
            page_size,
        )?;

        controller.load_initial().await?;
        let mut pages = 1;

        while controller.fetch_state().await == FetchState::Idle {
            if max_pages > 0 && pages >= max_pages {
                debug!(pages, "page budget reached");
                break;
            }
            controller.load_more().await?;
            pages += 1;
        }

        let items = controller.items().await;
        info!(
            items = items.len(),
            pages,
            state = %controller.fetch_state().await,
            "read complete"
        );
        for item in &items {
            println!("{}", item.url);
        }
        Ok(())
    }

    /// Validate the feed definition without touching the network
    fn validate(&self) -> Result<()> {
        let config = self.load_feed()?;
        config.validate()?;
        println!("OK: feed '{}' is valid", config.name);
        Ok(())
    }
}
