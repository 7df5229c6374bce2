//! `greeny cart` — add to, inspect, and edit the persistent cart.

use std::io::Write;
use std::path::Path;

use clap::{Args, Subcommand};
use serde::Serialize;

use greeny_core::cart::item::CartLineItem;
use greeny_core::cart::store::CartStore;
use greeny_core::draft::{DraftError, ModalState, ProductDetails, BUNDLE_CHOICE_SLOTS};
use greeny_core::money::format_amount;
use greeny_core::render::{header_label, preview_request, render_cart};
use greeny_core::storage::FileStore;

use crate::output::{render, render_error, CliError, OutputMode};

#[derive(Args, Debug)]
pub struct CartArgs {
    #[command(subcommand)]
    pub action: CartAction,
}

#[derive(Subcommand, Debug)]
pub enum CartAction {
    /// Add a product to the cart (merges with an identical line).
    Add(AddArgs),
    /// Show the cart contents and totals.
    List(ListArgs),
    /// Increase the quantity of the line at INDEX by one.
    Increase { index: usize },
    /// Decrease the quantity of the line at INDEX by one (removes at zero).
    Decrease { index: usize },
    /// Remove the line at INDEX.
    Remove { index: usize },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Product id. Ids 905-907 are bundle deals and need three --choice values.
    #[arg(long)]
    pub id: u32,

    /// Product name.
    #[arg(long)]
    pub name: String,

    /// Unit price.
    #[arg(long)]
    pub price: f64,

    /// Product description (display only).
    #[arg(long, default_value = "")]
    pub description: String,

    /// Product image reference.
    #[arg(long, default_value = "")]
    pub image: String,

    /// Quantity to add.
    #[arg(long, default_value_t = 1)]
    pub qty: u32,

    /// Bundle sub-choice, repeat three times for bundle deals.
    #[arg(long = "choice")]
    pub choices: Vec<String>,

    /// Free-text special request.
    #[arg(long, default_value = "")]
    pub note: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit the HTML cart projection instead of text.
    #[arg(long)]
    pub html: bool,
}

/// Build the cart line from the add arguments via a selection draft.
/// Any draft-level failure aborts before the cart is touched.
fn build_line_item(add: &AddArgs) -> Result<CartLineItem, DraftError> {
    let mut modal = ModalState::new();
    modal.open(ProductDetails {
        id: add.id,
        name: add.name.clone(),
        description: add.description.clone(),
        unit_price: add.price,
        image_ref: add.image.clone(),
    });
    // open() starts at quantity 1
    modal.change_quantity(i64::from(add.qty) - 1)?;
    if !add.note.is_empty() {
        modal.set_note(&add.note)?;
    }
    for (slot, value) in add.choices.iter().enumerate() {
        modal.set_choice(slot, value)?;
    }
    modal.commit()
}

/// The HTML projection, serialized whole in JSON mode.
#[derive(Debug, Serialize)]
struct HtmlReport {
    html: String,
    header: String,
    subtotal: String,
    badge: String,
}

/// Serializable cart summary shared by every cart subcommand's JSON output.
#[derive(Debug, Serialize)]
struct CartReport {
    items: Vec<CartLineItem>,
    subtotal: f64,
    item_count: u64,
}

impl CartReport {
    fn from_store(cart: &CartStore<FileStore>) -> Self {
        Self {
            items: cart.items().to_vec(),
            subtotal: cart.subtotal(),
            item_count: cart.item_count(),
        }
    }
}

fn write_cart_lines(cart: &CartReport, w: &mut dyn Write) -> std::io::Result<()> {
    if cart.items.is_empty() {
        writeln!(w, "Your cart is empty!")?;
        return Ok(());
    }
    for (index, item) in cart.items.iter().enumerate() {
        writeln!(
            w,
            "[{index}] {} x{} — {}",
            item.name,
            item.quantity,
            format_amount(item.line_total)
        )?;
        if !item.special_request.is_empty() {
            writeln!(w, "    {}", preview_request(&item.special_request))?;
        }
    }
    writeln!(w, "{}", header_label(cart.item_count))?;
    writeln!(w, "Subtotal: {}", format_amount(cart.subtotal))?;
    Ok(())
}

pub fn run_cart(args: &CartArgs, output: OutputMode, data_dir: &Path) -> anyhow::Result<()> {
    let mut cart = CartStore::load(FileStore::new(data_dir));

    match &args.action {
        CartAction::Add(add) => {
            if add.choices.len() > BUNDLE_CHOICE_SLOTS {
                let err = CliError::new(format!(
                    "a bundle takes at most {BUNDLE_CHOICE_SLOTS} choices"
                ));
                render_error(output, &err)?;
                anyhow::bail!("{}", err.error);
            }
            let item = match build_line_item(add) {
                Ok(item) => item,
                Err(e) => {
                    render_error(output, &CliError::new(e.to_string()))?;
                    anyhow::bail!("{e}");
                }
            };
            tracing::debug!(id = item.item_id, qty = item.quantity, "committing draft to cart");
            cart.add_or_merge(item);

            render(output, &CartReport::from_store(&cart), |report, w| {
                writeln!(w, "Added to cart.")?;
                write_cart_lines(report, w)
            })
        }
        CartAction::List(list) => {
            if list.html {
                let view = render_cart(&cart);
                let report = HtmlReport {
                    html: view.body_html,
                    header: view.header_label,
                    subtotal: view.subtotal_label,
                    badge: view.badge,
                };
                return render(output, &report, |report, w| {
                    writeln!(w, "{}", report.html)?;
                    writeln!(w, "<!-- {} | subtotal {} -->", report.header, report.subtotal)
                });
            }
            render(output, &CartReport::from_store(&cart), |report, w| {
                write_cart_lines(report, w)
            })
        }
        CartAction::Increase { index } => {
            cart.adjust_quantity(*index, 1);
            render(output, &CartReport::from_store(&cart), write_cart_lines)
        }
        CartAction::Decrease { index } => {
            cart.adjust_quantity(*index, -1);
            render(output, &CartReport::from_store(&cart), write_cart_lines)
        }
        CartAction::Remove { index } => {
            cart.remove(*index);
            render(output, &CartReport::from_store(&cart), write_cart_lines)
        }
    }
}
