//! Subcommands. Output goes to any `Write` so tests can capture it.

use anyhow::{bail, Context};
use clap::{Subcommand, ValueEnum};
use dash_core::nav::nav_items;
use dash_data::dataset::DatasetKind;
use dash_data::pie::{self, PALETTE};
use dash_data::{loader, Dataset};
use std::io::Write;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the sidebar routes with their icon and accent color
    Routes,

    /// Print an embedded dataset
    Data {
        /// Dataset name, e.g. category-distribution
        dataset: Dataset,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Show the pie slices (share, angles, color) of a category dataset
    Breakdown {
        dataset: Dataset,
    },

    /// List the dataset names accepted by `data` and `breakdown`
    Datasets,
}

pub fn run(command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Routes => routes(out),
        Command::Data { dataset, format } => data(dataset, format, out),
        Command::Breakdown { dataset } => breakdown(dataset, out),
        Command::Datasets => {
            for dataset in Dataset::ALL {
                writeln!(out, "{}", dataset)?;
            }
            Ok(())
        }
    }
}

fn routes(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{:<12} {:<10} {:<14} COLOR", "PATH", "LABEL", "ICON")?;
    for item in nav_items() {
        writeln!(
            out,
            "{:<12} {:<10} {:<14} {}",
            item.path, item.label, item.icon.name(), item.accent_color
        )?;
    }
    Ok(())
}

fn data(dataset: Dataset, format: Format, out: &mut impl Write) -> anyhow::Result<()> {
    log::debug!("printing {} as {:?}", dataset, format);
    match format {
        Format::Csv => {
            // Parse first so a broken fixture fails here rather than downstream
            loader::load_json(dataset).with_context(|| format!("loading {}", dataset))?;
            out.write_all(dataset.csv().as_bytes())?;
        }
        Format::Json => {
            let value = loader::load_json(dataset).with_context(|| format!("loading {}", dataset))?;
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn breakdown(dataset: Dataset, out: &mut impl Write) -> anyhow::Result<()> {
    if dataset.kind() != DatasetKind::Categories {
        bail!("{} is not a category dataset", dataset);
    }
    let data = loader::load_categories(dataset).with_context(|| format!("loading {}", dataset))?;
    let slices = pie::layout(&data, &PALETTE);
    if slices.is_empty() {
        writeln!(out, "{}: no data to display", dataset)?;
        return Ok(());
    }

    writeln!(out, "total: {}", pie::total(&data))?;
    for slice in &slices {
        writeln!(
            out,
            "{:<20} {:>10} {:>4}%  {:>6.3}..{:<6.3} {}",
            slice.name, slice.value, slice.percent, slice.start_angle, slice.end_angle, slice.color
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(command: Command) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        run(command, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn routes_lists_every_page() {
        let text = output(Command::Routes).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().any(|l| l.starts_with("/sales") && l.ends_with("#10b981")));
    }

    #[test]
    fn data_as_json() {
        let text = output(Command::Data {
            dataset: Dataset::CategoryDistribution,
            format: Format::Json,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "Electronics");
        assert_eq!(value[0]["value"], 4500.0);
    }

    #[test]
    fn data_as_csv_is_the_fixture() {
        let text = output(Command::Data {
            dataset: Dataset::Orders,
            format: Format::Csv,
        })
        .unwrap();
        assert_eq!(text, Dataset::Orders.csv());
    }

    #[test]
    fn breakdown_shows_shares() {
        let text = output(Command::Breakdown {
            dataset: Dataset::CategoryDistribution,
        })
        .unwrap();
        assert!(text.starts_with("total: 14500"));
        assert!(text.contains("Electronics"));
        assert!(text.contains("31%"));
        assert!(text.contains("#6366F1"));
    }

    #[test]
    fn breakdown_rejects_series() {
        let err = output(Command::Breakdown {
            dataset: Dataset::SalesTrend,
        })
        .unwrap_err();
        assert!(err.to_string().contains("not a category dataset"));
    }

    #[test]
    fn dataset_names_parse() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.name().parse::<Dataset>().unwrap(), dataset);
        }
    }
}
