pub mod api;
pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod logger;
pub mod models;
pub mod terminal;
pub mod ui;

pub use api::{BeerSource, HttpBeerSource};
pub use catalog::{CatalogStore, FetchState};
pub use config::{CliArgs, Settings};
pub use coordinator::Coordinator;
pub use error::{Result, TaproomError};
pub use models::{Beer, BeerId};
pub use ui::Surface;
