//! 远程目录数据源
//!
//! 对外只发起一次 GET，返回 JSON 数组

use std::future::Future;
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use reqwest::Client;

use crate::error::{Result, TaproomError};
use crate::models::Beer;

pub const DEFAULT_ENDPOINT: &str = "https://api.sampleapis.com/beers/ale";

/// 目录数据源
pub trait BeerSource: Send + Sync {
    fn fetch_beers(&self) -> impl Future<Output = Result<Vec<Beer>>> + Send;
}

/// 基于 HTTP 的数据源
#[derive(Debug, Clone)]
pub struct HttpBeerSource {
    client: Client,
    endpoint: String,
}

impl HttpBeerSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl BeerSource for HttpBeerSource {
    async fn fetch_beers(&self) -> Result<Vec<Beer>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(TaproomError::Status { status });
        }

        let beers: Vec<Beer> = response.json().await?;
        tracing::info!("Fetched {} beers", beers.len());
        Ok(beers)
    }
}

/// 在后台线程发起拉取，结果通过 channel 交回 UI 线程
pub fn spawn_fetch<S>(source: S) -> io::Result<Receiver<Result<Vec<Beer>>>>
where
    S: BeerSource + 'static,
{
    let (tx, rx) = mpsc::channel();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("catalog-fetch".to_string())
        .spawn(move || {
            let outcome = runtime.block_on(source.fetch_beers());
            if tx.send(outcome).is_err() {
                tracing::debug!("UI exited before the catalog fetch finished");
            }
        })?;

    Ok(rx)
}
