//! Interactive terminal frontend for the purchase panel.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use till_cart::{Checkout, CheckoutEvent, CheckoutId};
use till_core::{AggregateId, DomainError};
use till_events::{Event, Subscription};
use till_panel::{PurchasePanel, format_price, seed};

#[derive(Parser)]
#[command(name = "till", about = "Point-of-sale purchase panel", version)]
struct Cli {
    /// Catalog seed file (JSON array of {name, unit_price, quantity});
    /// defaults to a built-in demo catalog.
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    till_observability::init();
    let cli = Cli::parse();

    let checkout = Checkout::new(CheckoutId::new(AggregateId::new()));
    let mut panel = PurchasePanel::new(checkout);
    let events = panel.subscribe();

    let items = match &cli.catalog {
        Some(path) => seed::load(path)?,
        None => seed::demo(),
    };
    for item in items {
        panel.register_item(&item.name, item.unit_price, item.quantity)?;
    }

    loop {
        drain_events(&events);
        render(&panel);

        let names = panel.item_names();
        let mut choices = names.clone();
        choices.push("Commit sale".to_string());
        choices.push("Cancel sale".to_string());
        choices.push("Quit".to_string());

        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Name")
            .items(&choices)
            .default(0)
            .interact()?;

        if picked < names.len() {
            add_flow(&mut panel, &names[picked])?;
        } else if picked == names.len() {
            match panel.commit_sale() {
                Ok(total) => println!(
                    "{} total {}",
                    "sale committed:".green().bold(),
                    format_price(total)
                ),
                Err(err) => warn(&err),
            }
        } else if picked == names.len() + 1 {
            match panel.cancel_sale() {
                Ok(()) => println!("{}", "sale cancelled, stock restored".yellow()),
                Err(err) => warn(&err),
            }
        } else {
            break;
        }
    }

    drain_events(&events);
    Ok(())
}

/// Selection → prefilled dialog → quantity entry → add.
fn add_flow(panel: &mut PurchasePanel, name: &str) -> Result<()> {
    panel.select_item(name);
    let dialog = panel.dialog().clone();
    println!("Bar code: {}   Price: {}", dialog.bar_code, dialog.price);

    let quantity: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Amount")
        .default(dialog.quantity_text)
        .interact_text()?;
    panel.set_quantity_text(&quantity);

    match panel.add_item() {
        Ok(()) => println!("{} {} x {}", "added:".green(), quantity.trim(), name),
        Err(err) => warn(&err),
    }
    Ok(())
}

/// Every domain failure is reported here and goes no further.
fn warn(err: &DomainError) {
    println!("{} {err}", "warning:".yellow().bold());
}

fn render(panel: &PurchasePanel) {
    let checkout = panel.checkout();

    println!();
    println!("{}", "Warehouse".bold());
    for item in checkout.catalog().iter() {
        println!(
            "  {:<20} {:>8} {:>6} in stock",
            item.name(),
            format_price(item.unit_price()),
            item.quantity()
        );
    }

    println!("{}", "Shopping cart".bold());
    if checkout.cart().is_empty() {
        println!("  (empty)");
    } else {
        for line in checkout.cart().lines() {
            println!(
                "  {:<20} {:>8} x {:<4} = {}",
                line.name,
                format_price(line.unit_price),
                line.quantity,
                format_price(line.line_total())
            );
        }
        println!(
            "  {:<20} {:>8}",
            "Total",
            format_price(checkout.cart().total_cents())
        );
    }
    println!();
}

fn drain_events(events: &Subscription<CheckoutEvent>) {
    while let Ok(ev) = events.try_recv() {
        tracing::info!(event_type = ev.event_type(), "checkout event");
    }
}
