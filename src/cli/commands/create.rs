//! Create command - Open a new opportunity

use std::path::Path;

use chrono::NaiveDate;

use crate::errors::{OppflowError, Result};
use crate::fs::{next_opportunity_id, write_opportunity};
use crate::schemas::{LineItem, Opportunity};

use super::open_store;

/// Options accepted by `oppflow create`
#[derive(Debug, Default)]
pub struct CreateOptions {
    pub salesperson: Option<String>,
    pub remarks: Option<String>,
    pub close_date: Option<String>,
    /// Raw `<product>:<quantity>:<unit price>` specs
    pub line_items: Vec<String>,
}

/// Parse a `<product>:<quantity>:<unit price>` line item.
///
/// The product name may itself contain colons; quantity and price are
/// taken from the last two fields.
pub fn parse_line_item(raw: &str) -> Result<LineItem> {
    let invalid = |reason: &str| {
        OppflowError::InvalidInput(format!("invalid line item {:?}: {}", raw, reason))
    };

    let mut fields = raw.rsplitn(3, ':');
    let (Some(price), Some(quantity), Some(product)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid("expected <product>:<quantity>:<unit price>"));
    };

    let product = product.trim();
    if product.is_empty() {
        return Err(invalid("product must not be empty"));
    }
    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| invalid("quantity must be a whole number"))?;
    let unit_price: f64 = price
        .trim()
        .parse()
        .map_err(|_| invalid("unit price must be a number"))?;
    if !unit_price.is_finite() || unit_price < 0.0 {
        return Err(invalid("unit price must be zero or more"));
    }

    Ok(LineItem::new(product, quantity, unit_price))
}

/// Create a new opportunity in the Open status and return its ID
pub async fn run(
    cwd: Option<&Path>,
    customer: &str,
    options: CreateOptions,
    dry_run: bool,
) -> Result<String> {
    if customer.trim().is_empty() {
        return Err(OppflowError::InvalidInput("customer must not be empty".to_string()));
    }

    let close_date = options
        .close_date
        .as_deref()
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                OppflowError::InvalidInput(format!("invalid close date {:?}: {}", raw, e))
            })
        })
        .transpose()?;

    let line_items = options
        .line_items
        .iter()
        .map(|raw| parse_line_item(raw))
        .collect::<Result<Vec<_>>>()?;

    let (root, config) = open_store(cwd)?;
    let id = next_opportunity_id(&root, &config.id_prefix)?;

    let opportunity = Opportunity::new(id.clone(), customer.trim().to_string())
        .with_salesperson(options.salesperson.or(config.default_salesperson))
        .with_remarks(options.remarks)
        .with_expected_close_date(close_date);
    let opportunity = line_items.into_iter().fold(opportunity, Opportunity::with_line_item);

    if dry_run {
        tracing::info!("[DRY RUN] would create {} for {}", id, opportunity.customer);
        return Ok(id);
    }

    write_opportunity(&root, &opportunity)?;
    tracing::info!(id = %id, customer = %opportunity.customer, "created opportunity");
    println!("Created {} ({})", id, opportunity.status_label());
    Ok(id)
}
