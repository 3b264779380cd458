use crate::domain::model::{BaseSpec, ItemSummary, ModifierSpec, PriceFormat};
use crate::domain::ports::PricedItem;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_non_negative_amount};

#[derive(Debug, Clone, PartialEq)]
pub struct BaseItem {
    description: String,
    cost: f64,
}

impl BaseItem {
    pub fn new(description: impl Into<String>, cost: f64) -> Result<Self> {
        let description = description.into();
        validate_non_negative_amount("base.cost", cost)?;
        Ok(Self { description, cost })
    }

    pub fn from_spec(spec: &BaseSpec) -> Result<Self> {
        Self::new(spec.description.clone(), spec.cost)
    }
}

impl PricedItem for BaseItem {
    fn own_description(&self) -> &str {
        &self.description
    }

    fn own_cost(&self) -> f64 {
        self.cost
    }
}

/// Wraps exactly one item and adds a suffix and a cost delta to it.
pub struct Modifier {
    inner: Box<dyn PricedItem>,
    suffix: String,
    delta: f64,
}

impl Modifier {
    /// Takes ownership of `inner`. The delta may be negative but must be finite.
    pub fn wrap(
        inner: Box<dyn PricedItem>,
        suffix: impl Into<String>,
        delta: f64,
    ) -> Result<Self> {
        let suffix = suffix.into();
        validate_finite("modifier.delta", delta)?;
        Ok(Self {
            inner,
            suffix,
            delta,
        })
    }

    pub fn from_spec(inner: Box<dyn PricedItem>, spec: &ModifierSpec) -> Result<Self> {
        Self::wrap(inner, spec.suffix.clone(), spec.delta)
    }

    pub fn inner(&self) -> &dyn PricedItem {
        self.inner.as_ref()
    }
}

impl PricedItem for Modifier {
    fn own_description(&self) -> &str {
        &self.suffix
    }

    fn own_cost(&self) -> f64 {
        self.delta
    }

    fn wrapped(&self) -> Option<&dyn PricedItem> {
        Some(self.inner.as_ref())
    }

    fn detach_wrapped(&mut self) -> Option<Box<dyn PricedItem>> {
        Some(std::mem::replace(&mut self.inner, Box::new(Detached)))
    }
}

impl Drop for Modifier {
    fn drop(&mut self) {
        let mut next = self.detach_wrapped();
        while let Some(mut item) = next {
            next = item.detach_wrapped();
        }
    }
}

// Zero-sized stand-in left behind by `detach_wrapped`; boxing it does not allocate.
struct Detached;

impl PricedItem for Detached {
    fn own_description(&self) -> &str {
        ""
    }

    fn own_cost(&self) -> f64 {
        0.0
    }
}

pub fn summary(item: &dyn PricedItem, format: PriceFormat) -> ItemSummary {
    let description = item.describe();
    let cost = item.cost();
    let display = format!("{} - {}", description, format.format(cost));
    ItemSummary {
        description,
        cost,
        display,
    }
}

/// Wraps `base` with each modifier in turn, calling `on_step` with the base
/// and then with every intermediate chain. Returns the outermost item.
pub fn build_chain<F>(
    base: &BaseSpec,
    modifiers: &[ModifierSpec],
    mut on_step: F,
) -> Result<Box<dyn PricedItem>>
where
    F: FnMut(&dyn PricedItem) -> Result<()>,
{
    let mut item: Box<dyn PricedItem> = Box::new(BaseItem::from_spec(base)?);
    on_step(item.as_ref())?;

    for spec in modifiers {
        item = Box::new(Modifier::from_spec(item, spec)?);
        tracing::debug!("Applied '{}' (chain depth {})", spec.suffix, item.depth());
        on_step(item.as_ref())?;
    }

    Ok(item)
}
