//! `greeny catalog` — list the bundle-deal choice menus.

use std::io::Write;

use clap::{Args, ValueEnum};
use serde::Serialize;

use greeny_core::catalog::BundleFamily;

use crate::output::{render, OutputMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    Smoothie,
    Juice,
    Detox,
}

impl From<FamilyArg> for BundleFamily {
    fn from(value: FamilyArg) -> Self {
        match value {
            FamilyArg::Smoothie => Self::Smoothie,
            FamilyArg::Juice => Self::FreshJuice,
            FamilyArg::Detox => Self::DetoxEnergy,
        }
    }
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Restrict output to one bundle family.
    #[arg(long)]
    pub family: Option<FamilyArg>,
}

#[derive(Debug, Serialize)]
struct FamilyReport {
    family: &'static str,
    choices: Vec<ChoiceReport>,
}

#[derive(Debug, Serialize)]
struct ChoiceReport {
    value: &'static str,
    label: &'static str,
}

fn family_report(family: BundleFamily) -> FamilyReport {
    FamilyReport {
        family: family.as_str(),
        choices: family
            .choices()
            .iter()
            .map(|c| ChoiceReport {
                value: c.value,
                label: c.label,
            })
            .collect(),
    }
}

pub fn run_catalog(args: &CatalogArgs, output: OutputMode) -> anyhow::Result<()> {
    let families: Vec<BundleFamily> = match args.family {
        Some(f) => vec![f.into()],
        None => vec![
            BundleFamily::Smoothie,
            BundleFamily::FreshJuice,
            BundleFamily::DetoxEnergy,
        ],
    };

    let reports: Vec<FamilyReport> = families.into_iter().map(family_report).collect();
    render(output, &reports, |reports, w| {
        for report in reports {
            writeln!(w, "{}:", report.family)?;
            for choice in &report.choices {
                writeln!(w, "  {} — {}", choice.value, choice.label)?;
            }
        }
        Ok(())
    })
}
