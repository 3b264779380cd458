pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::MenuConfig;
pub use crate::core::{
    demo::{DemoEngine, OutputFormat},
    menu::{build_chain, summary, BaseItem, Modifier},
    notifier::{AdminSystem, Kiosk, Notifier},
};
pub use domain::model::{BaseSpec, ItemSummary, ModifierSpec, PriceFormat};
pub use domain::ports::{LineSink, PricedItem, Publisher, Subscriber};
pub use utils::error::{KioskError, Result};
pub use utils::sink::{MemorySink, StdoutSink};
