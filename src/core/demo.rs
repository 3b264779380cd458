use crate::config::MenuConfig;
use crate::core::menu::{build_chain, summary};
use crate::core::notifier::{AdminSystem, Kiosk};
use crate::domain::model::{ItemSummary, PriceFormat};
use crate::domain::ports::{LineSink, Publisher};
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runs the kiosk scenario: one product update broadcast to the kiosks,
/// then the menu chain printed after every wrap step.
pub struct DemoEngine {
    sink: Arc<dyn LineSink>,
    menu: MenuConfig,
    kiosks: Vec<String>,
    price_format: PriceFormat,
    output_format: OutputFormat,
}

impl DemoEngine {
    pub fn new(sink: Arc<dyn LineSink>, menu: MenuConfig, kiosks: Vec<String>) -> Self {
        Self {
            sink,
            menu,
            kiosks,
            price_format: PriceFormat::default(),
            output_format: OutputFormat::Text,
        }
    }

    pub fn with_price_format(mut self, price_format: PriceFormat) -> Self {
        self.price_format = price_format;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn run(&self) -> Result<Vec<ItemSummary>> {
        tracing::info!("Starting kiosk demo with {} kiosk(s)", self.kiosks.len());

        self.broadcast_update()?;
        let steps = self.price_menu()?;

        tracing::info!("Kiosk demo completed, {} menu step(s) printed", steps.len());
        Ok(steps)
    }

    fn broadcast_update(&self) -> Result<()> {
        let mut admin = AdminSystem::new(Arc::clone(&self.sink));
        for name in &self.kiosks {
            admin.attach(Arc::new(Kiosk::new(name.clone(), Arc::clone(&self.sink))));
        }
        admin.update_product_info()
    }

    fn price_menu(&self) -> Result<Vec<ItemSummary>> {
        let mut steps = Vec::with_capacity(self.menu.modifiers.len() + 1);
        build_chain(&self.menu.base, &self.menu.modifiers, |item| {
            let step = summary(item, self.price_format);
            match self.output_format {
                OutputFormat::Text => self.sink.emit(&step.display)?,
                OutputFormat::Json => self.sink.emit(&serde_json::to_string(&step)?)?,
            }
            steps.push(step);
            Ok(())
        })?;
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ModifierSpec;
    use crate::utils::sink::MemorySink;

    #[test]
    fn test_default_run_produces_golden_output() {
        let sink = Arc::new(MemorySink::new());
        let engine = DemoEngine::new(
            sink.clone(),
            MenuConfig::default(),
            vec!["Kiosk 1".to_string(), "Kiosk 2".to_string()],
        );

        let steps = engine.run().unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "Product information updated.",
                "Kiosk 1 received product update.",
                "Kiosk 2 received product update.",
                "Basic Drink - $5.0",
                "Basic Drink, Extra Sugar - $5.5",
                "Basic Drink, Extra Sugar, Extra Topping - $6.5",
            ]
        );
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].cost, 6.5);
    }

    #[test]
    fn test_json_output() {
        let sink = Arc::new(MemorySink::new());
        let mut menu = MenuConfig::default();
        menu.modifiers = vec![ModifierSpec {
            suffix: "Oat Milk".to_string(),
            delta: 0.75,
        }];
        let engine = DemoEngine::new(sink.clone(), menu, vec![])
            .with_output_format(OutputFormat::Json)
            .with_price_format(PriceFormat::new(2));

        engine.run().unwrap();

        let lines = sink.lines();
        assert_eq!(lines[0], "Product information updated.");
        let last: serde_json::Value = serde_json::from_str(&lines[2]).unwrap();
        assert_eq!(last["description"], "Basic Drink, Oat Milk");
        assert_eq!(last["cost"], 5.75);
        assert_eq!(last["display"], "Basic Drink, Oat Milk - $5.75");
    }
}
