//! `greeny register` — create the stored user profile.

use std::io::Write;
use std::path::Path;

use clap::Args;

use greeny_core::storage::FileStore;
use greeny_core::user::{register, RegisterError, RegistrationForm};

use crate::output::{render, render_error, CliError, OutputMode};

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub full_name: String,

    #[arg(long)]
    pub email: String,

    /// Phone number, 10-15 digits (separators allowed).
    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub postal_code: String,

    /// At least 8 characters with uppercase, lowercase, and a digit.
    /// Only validated; never stored.
    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub confirm_password: String,

    /// Subscribe to the newsletter.
    #[arg(long)]
    pub newsletter: bool,

    /// Agree to the Terms & Conditions (required).
    #[arg(long)]
    pub accept_terms: bool,
}

impl RegisterArgs {
    fn to_form(&self) -> RegistrationForm {
        RegistrationForm {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            newsletter: self.newsletter,
            accepted_terms: self.accept_terms,
        }
    }
}

pub fn run_register(args: &RegisterArgs, output: OutputMode, data_dir: &Path) -> anyhow::Result<()> {
    let mut storage = FileStore::new(data_dir);

    let profile = match register(&args.to_form(), &mut storage) {
        Ok(profile) => profile,
        Err(RegisterError::Invalid { errors }) => {
            let details = errors.iter().map(ToString::to_string).collect();
            render_error(
                output,
                &CliError::with_details("Please fix the following errors", details),
            )?;
            anyhow::bail!("registration form invalid");
        }
        Err(e @ RegisterError::Storage(_)) => {
            render_error(output, &CliError::new(e.to_string()))?;
            anyhow::bail!("{e}");
        }
    };

    render(output, &profile, |profile, w| {
        writeln!(w, "Registration Successful!")?;
        writeln!(w, "Welcome to Greeny Store, {}!", profile.full_name)
    })
}
