use analytics::PeRatio;
use anyhow::Context;
use chrono::Utc;
use clap::{CommandFactory, Parser};
use configuration::ReferenceTable;
use core_types::TradeSide;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::io::{self, Write};
use store::TradeStore;
use tracing_subscriber::EnvFilter;

/// Super-simple stock market utility for the Global Beverage Corporation
/// Exchange: per-stock valuation plus aggregates over a local trade log.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stock symbol to compute the dividend yield for (prompts for a price).
    #[arg(long, value_name = "SYMBOL")]
    dividend: Option<String>,

    /// Stock symbol to compute the P/E ratio for (prompts for a price).
    #[arg(long, value_name = "SYMBOL")]
    ratio: Option<String>,

    /// Stock symbol to record a trade for (prompts for side, price, quantity).
    #[arg(long, value_name = "SYMBOL")]
    trade: Option<String>,

    /// Volume-weighted stock price over trades in the past 15 minutes.
    #[arg(long)]
    vwsp: bool,

    /// All-share index: geometric mean of all recorded trade prices.
    #[arg(long)]
    geo: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = configuration::load_settings()?;
    let table = ReferenceTable::gbce();
    let trade_store = TradeStore::open(&settings.store.path);

    // Exactly one operation per invocation; the first matching flag in this
    // fixed priority order wins.
    if let Some(symbol) = cli.dividend.as_deref() {
        handle_dividend(&table, symbol)
    } else if let Some(symbol) = cli.ratio.as_deref() {
        handle_ratio(&table, symbol)
    } else if let Some(symbol) = cli.trade.as_deref() {
        handle_trade(&trade_store, symbol)
    } else if cli.vwsp {
        handle_vwsp(&trade_store)
    } else if cli.geo {
        handle_geo(&trade_store)
    } else {
        Cli::command().print_help()?;
        Ok(())
    }
}

fn handle_dividend(table: &ReferenceTable, symbol: &str) -> anyhow::Result<()> {
    let descriptor = table.get(symbol)?;
    let price = prompt_decimal("Enter price")?;

    let dividend_yield = analytics::dividend_yield(descriptor, price)?;
    println!("Dividend yield:");
    println!("{dividend_yield}");
    Ok(())
}

fn handle_ratio(table: &ReferenceTable, symbol: &str) -> anyhow::Result<()> {
    let descriptor = table.get(symbol)?;
    let price = prompt_decimal("Enter price")?;

    let pe_ratio = analytics::pe_ratio(descriptor, price)?;
    if matches!(pe_ratio, PeRatio::UndefinedZeroDividend) {
        tracing::debug!(symbol = %descriptor.symbol, "P/E ratio undefined for zero dividend.");
    }
    println!("P/E Ratio:");
    println!("{pe_ratio}");
    Ok(())
}

fn handle_trade(trade_store: &TradeStore, symbol: &str) -> anyhow::Result<()> {
    let side: TradeSide = prompt("Enter 'buy' or 'sell'")?.parse()?;
    let price = prompt_decimal("Enter price")?;
    let quantity = prompt_decimal("Enter quantity")?;

    // Stored as integers; fractional input is truncated, as the store's
    // schema only carries whole units.
    let price = price
        .trunc()
        .to_i64()
        .context("price is out of the storable range")?;
    let quantity = quantity
        .trunc()
        .to_i64()
        .context("quantity is out of the storable range")?;

    trade_store.record_trade(symbol, quantity, side, price)?;
    println!("Trade recorded");
    Ok(())
}

fn handle_vwsp(trade_store: &TradeStore) -> anyhow::Result<()> {
    let trades = trade_store.load()?;
    let vwsp = analytics::volume_weighted_price(&trades, Utc::now());
    println!("Volume weighted stock price:");
    println!("{vwsp}");
    Ok(())
}

fn handle_geo(trade_store: &TradeStore) -> anyhow::Result<()> {
    let trades = trade_store.load()?;
    let mean = analytics::geometric_mean(&trades)?;
    println!("Geometric mean:");
    println!("{mean}");
    Ok(())
}

/// Reads one trimmed line from stdin after printing a prompt label.
fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn prompt_decimal(label: &str) -> anyhow::Result<Decimal> {
    let raw = prompt(label)?;
    raw.parse::<Decimal>()
        .with_context(|| format!("'{raw}' is not a valid number"))
}
