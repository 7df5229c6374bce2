//! `greeny contact` — validate and submit a contact message.

use std::io::Write;

use clap::Args;

use greeny_core::contact::ContactForm;

use crate::output::{render, render_error, CliError, OutputMode};

#[derive(Args, Debug)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub subject: String,

    /// Message body, at least 10 characters.
    #[arg(long)]
    pub message: String,
}

pub fn run_contact(args: &ContactArgs, output: OutputMode) -> anyhow::Result<()> {
    let form = ContactForm {
        name: args.name.clone(),
        email: args.email.clone(),
        subject: args.subject.clone(),
        message: args.message.clone(),
    };

    let message = match form.submit() {
        Ok(m) => m,
        Err(e) => {
            let details = e.errors.iter().map(ToString::to_string).collect();
            render_error(
                output,
                &CliError::with_details("Please fix the following errors", details),
            )?;
            anyhow::bail!("contact form invalid");
        }
    };

    render(output, &message, |message, w| {
        writeln!(w, "Message Sent Successfully!")?;
        writeln!(
            w,
            "Thank you for contacting Greeny Store, {}! We will respond within 24 hours.",
            message.name
        )
    })
}
