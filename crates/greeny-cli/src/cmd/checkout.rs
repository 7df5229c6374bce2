//! `greeny checkout` — run the checkout gate.

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use greeny_core::cart::store::CartStore;
use greeny_core::checkout::{attempt_checkout, Decision, REGISTRATION_PAGE};
use greeny_core::storage::FileStore;
use greeny_core::user::session_present;

use crate::output::{render, render_error, CliError, OutputMode};

#[derive(Args, Debug)]
pub struct CheckoutArgs {}

#[derive(Debug, Serialize)]
struct CheckoutReport {
    decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_page: Option<&'static str>,
}

pub fn run_checkout(
    _args: &CheckoutArgs,
    output: OutputMode,
    data_dir: &Path,
) -> anyhow::Result<()> {
    let cart = CartStore::load(FileStore::new(data_dir));
    let session = session_present(cart.storage());

    let decision = match attempt_checkout(&cart, session) {
        Ok(d) => d,
        Err(e) => {
            render_error(output, &CliError::new(e.to_string()))?;
            anyhow::bail!("{e}");
        }
    };

    let report = CheckoutReport {
        decision,
        next_page: match decision {
            Decision::ProceedToPayment => None,
            Decision::RequireRegistration => Some(REGISTRATION_PAGE),
        },
    };

    render(output, &report, |report, w| match report.decision {
        Decision::ProceedToPayment => {
            writeln!(w, "Welcome back! Proceeding to Payment & Shipping.")
        }
        Decision::RequireRegistration => {
            writeln!(w, "To complete your order, please create an account.")?;
            writeln!(w, "Next: {REGISTRATION_PAGE}")
        }
    })
}
