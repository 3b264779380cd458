use crate::utils::error::Result;
use std::sync::Arc;

/// Separator placed between chain segments by [`PricedItem::describe`].
pub const DESCRIPTION_DELIMITER: &str = ", ";

/// Receives a zero-argument notification from a [`Publisher`].
pub trait Subscriber: Send + Sync {
    /// Human-readable name, used only for output and error reports.
    fn label(&self) -> &str;

    fn on_notify(&self) -> Result<()>;
}

pub trait Publisher {
    fn attach(&mut self, subscriber: Arc<dyn Subscriber>);

    /// Removes the first occurrence of `subscriber` by reference.
    /// Returns `false` when it was not attached.
    fn detach(&mut self, subscriber: &Arc<dyn Subscriber>) -> bool;

    /// Delivers to every attached subscriber in attachment order and stops at
    /// the first failure.
    fn notify_all(&self) -> Result<()>;
}

/// A described, priced entity that may wrap another one.
///
/// Implementors supply their own segment through `own_description` and
/// `own_cost`; `describe` and `cost` walk the chain in a loop, innermost
/// segment first, so depth is not limited by the stack.
pub trait PricedItem: Send + Sync {
    fn own_description(&self) -> &str;

    fn own_cost(&self) -> f64;

    fn wrapped(&self) -> Option<&dyn PricedItem> {
        None
    }

    /// Moves the wrapped item out, leaving the node inert. Used to tear a
    /// chain down iteratively.
    fn detach_wrapped(&mut self) -> Option<Box<dyn PricedItem>> {
        None
    }

    fn describe(&self) -> String {
        let mut segments = vec![self.own_description()];
        let mut next = self.wrapped();
        while let Some(item) = next {
            segments.push(item.own_description());
            next = item.wrapped();
        }
        segments.reverse();
        segments.join(DESCRIPTION_DELIMITER)
    }

    fn cost(&self) -> f64 {
        let mut amounts = vec![self.own_cost()];
        let mut next = self.wrapped();
        while let Some(item) = next {
            amounts.push(item.own_cost());
            next = item.wrapped();
        }
        amounts.iter().rev().sum()
    }

    /// Number of wrappers between this node and the base item.
    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut next = self.wrapped();
        while let Some(item) = next {
            depth += 1;
            next = item.wrapped();
        }
        depth
    }
}

/// Line-oriented output destination.
pub trait LineSink: Send + Sync {
    fn emit(&self, line: &str) -> Result<()>;
}
