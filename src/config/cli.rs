use crate::core::demo::OutputFormat;
use crate::domain::model::PriceFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "kiosk-patterns")]
#[command(about = "Broadcasts a product update to kiosks and prices a customised drink")]
pub struct CliConfig {
    /// TOML menu file; the built-in Basic Drink menu is used when omitted
    #[arg(long)]
    pub menu: Option<String>,

    #[arg(long, value_delimiter = ',', default_values = ["Kiosk 1", "Kiosk 2"])]
    pub kiosks: Vec<String>,

    /// Fixed decimal places for prices; by default cents are shown and one
    /// trailing zero is dropped
    #[arg(long)]
    pub precision: Option<u8>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn price_format(&self) -> PriceFormat {
        self.precision
            .map(PriceFormat::new)
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.into()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision {
            validate_range("precision", precision, 0, PriceFormat::MAX_DECIMALS)?;
        }
        for name in &self.kiosks {
            validate_non_empty_string("kiosks", name)?;
        }
        if let Some(menu) = &self.menu {
            validate_non_empty_string("menu", menu)?;
        }
        Ok(())
    }
}
