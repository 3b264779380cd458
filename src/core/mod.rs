pub mod demo;
pub mod menu;
pub mod notifier;

pub use crate::domain::model::{BaseSpec, ItemSummary, ModifierSpec, PriceFormat};
pub use crate::domain::ports::{LineSink, PricedItem, Publisher, Subscriber};
pub use crate::utils::error::Result;
