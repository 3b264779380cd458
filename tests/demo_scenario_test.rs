use anyhow::Result;
use kiosk_patterns::utils::validation::Validate;
use kiosk_patterns::{
    BaseSpec, DemoEngine, MemorySink, MenuConfig, ModifierSpec, OutputFormat, PriceFormat,
};
use std::sync::Arc;
use tempfile::TempDir;

fn default_kiosks() -> Vec<String> {
    vec!["Kiosk 1".to_string(), "Kiosk 2".to_string()]
}

#[test]
fn test_golden_output() -> Result<()> {
    let sink = Arc::new(MemorySink::new());
    DemoEngine::new(sink.clone(), MenuConfig::default(), default_kiosks()).run()?;

    let expected = "\
Product information updated.
Kiosk 1 received product update.
Kiosk 2 received product update.
Basic Drink - $5.0
Basic Drink, Extra Sugar - $5.5
Basic Drink, Extra Sugar, Extra Topping - $6.5";
    assert_eq!(sink.lines().join("\n"), expected);
    Ok(())
}

#[test]
fn test_menu_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let menu_path = temp_dir.path().join("menu.toml");
    std::fs::write(
        &menu_path,
        r#"
[base]
description = "Flat White"
cost = 4.0

[[modifiers]]
suffix = "Extra Shot"
delta = 0.8

[[modifiers]]
suffix = "Member Discount"
delta = -0.5
"#,
    )?;

    let menu = MenuConfig::from_file(&menu_path)?;
    menu.validate()?;

    let sink = Arc::new(MemorySink::new());
    let steps = DemoEngine::new(sink.clone(), menu, vec!["Counter".to_string()])
        .with_price_format(PriceFormat::new(2))
        .run()?;

    assert_eq!(
        sink.lines(),
        vec![
            "Product information updated.",
            "Counter received product update.",
            "Flat White - $4.00",
            "Flat White, Extra Shot - $4.80",
            "Flat White, Extra Shot, Member Discount - $4.30",
        ]
    );
    assert_eq!(steps.len(), 3);
    Ok(())
}

#[test]
fn test_default_format_prints_cents() -> Result<()> {
    let mut menu = MenuConfig::default();
    menu.modifiers = vec![ModifierSpec {
        suffix: "Lid".to_string(),
        delta: 0.25,
    }];

    let sink = Arc::new(MemorySink::new());
    DemoEngine::new(sink.clone(), menu, vec![]).run()?;

    assert_eq!(
        sink.lines(),
        vec![
            "Product information updated.",
            "Basic Drink - $5.0",
            "Basic Drink, Lid - $5.25",
        ]
    );
    Ok(())
}

#[test]
fn test_zero_total_prints_unsigned() -> Result<()> {
    let menu = MenuConfig {
        base: BaseSpec {
            description: "Water".to_string(),
            cost: 0.3,
        },
        modifiers: vec![
            ModifierSpec {
                suffix: "Voucher".to_string(),
                delta: -0.1,
            },
            ModifierSpec {
                suffix: "Refill".to_string(),
                delta: -0.2,
            },
        ],
    };

    let sink = Arc::new(MemorySink::new());
    let steps = DemoEngine::new(sink.clone(), menu, vec![]).run()?;

    // Float error leaves the total a hair below zero.
    assert!(steps[2].cost < 0.0);
    assert_eq!(sink.lines()[3], "Water, Voucher, Refill - $0.0");
    Ok(())
}

#[test]
fn test_missing_menu_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = MenuConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_no_kiosks_still_prices_menu() -> Result<()> {
    let sink = Arc::new(MemorySink::new());
    DemoEngine::new(sink.clone(), MenuConfig::default(), vec![])
        .with_output_format(OutputFormat::Text)
        .run()?;

    let lines = sink.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Product information updated.");
    assert_eq!(lines[1], "Basic Drink - $5.0");
    Ok(())
}

#[test]
fn test_invalid_menu_fails_after_broadcast() {
    let mut menu = MenuConfig::default();
    menu.base.cost = -5.0;

    let sink = Arc::new(MemorySink::new());
    let result = DemoEngine::new(sink.clone(), menu, default_kiosks()).run();

    assert!(result.is_err());
    // The update broadcast runs before the menu is priced.
    assert_eq!(sink.lines().len(), 3);
}
