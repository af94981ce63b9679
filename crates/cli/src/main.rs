//! Command-line statement printer.
//!
//! Loads a play catalog and an invoice from JSON files and prints the
//! rendered statement to stdout. The billing engine itself stays IO-free;
//! this binary is the collaborator that feeds it already-parsed data.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use playbill_billing::{Invoice, Statement, Tariff};
use playbill_catalog::Catalog;

fn main() -> Result<()> {
    playbill_observability::init();

    let mut args = std::env::args_os().skip(1);
    let (plays_path, invoice_path) = match (args.next(), args.next(), args.next()) {
        (Some(plays), Some(invoice), None) => (PathBuf::from(plays), PathBuf::from(invoice)),
        _ => bail!("usage: playbill <plays.json> <invoice.json>"),
    };

    let catalog: Catalog = read_json(&plays_path)?;
    let invoice: Invoice = read_json(&invoice_path)?;
    tracing::info!(
        customer = %invoice.customer,
        plays = catalog.len(),
        performances = invoice.performances.len(),
        "computing statement"
    );

    let statement = Statement::compute(&invoice, &catalog, &Tariff::default())?;
    print!("{}", statement.render());
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}
