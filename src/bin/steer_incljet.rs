// src/bin/steer_incljet.rs

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::info;

use sptools_steering::{Gen, Graph, Plot, Steering};

/// |y| bin edges of the 2012 inclusive jet measurement, indexed 1-based
const ETA_BINS: [(f64, f64); 6] = [
    (0.0, 0.5),
    (0.5, 1.0),
    (1.0, 1.5),
    (1.5, 2.0),
    (2.0, 2.5),
    (2.5, 3.0),
];

/// Systematic groupings shown as separate plot sections
const SYST_GROUPS: [&str; 3] = ["JES_Zjet", "JER", "Others"];

/// Generate one inclusive-jet steering file per eta bin and jet radius
#[derive(Parser)]
#[command(name = "steer-incljet")]
#[command(author, version, about = "Generate an inclusive-jet steering file for one eta bin", long_about = None)]
struct Cli {
    /// Eta bin index, 1-based
    ieta: usize,

    /// Jet radius parameter, e.g. 4 or 6
    radius: u32,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    // incomplete arguments are a usage hint and a clean exit, not a failure;
    // anything else (malformed values, --help, --version) stays with clap
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            println!("usage: steer-incljet <ieta> <radius>");
            println!("  ieta    eta bin index, 1 to {}", ETA_BINS.len());
            println!("  radius  jet radius parameter, e.g. 4");
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    stderrlog::new()
        .verbosity(cli.verbose as usize + 1)
        .init()?;

    if cli.ieta == 0 || cli.ieta > ETA_BINS.len() {
        bail!("eta bin index {} out of range 1..={}", cli.ieta, ETA_BINS.len());
    }
    let (eta_min, eta_max) = ETA_BINS[cli.ieta - 1];

    let path = format!("steering_incljet_eta{}_r{:02}.txt", cli.ieta, cli.radius);
    let mut out = BufWriter::new(File::create(&path)?);

    Gen::default().write(&mut out)?;
    writeln!(out)?;

    let mut graph = Graph::default();
    graph.match_binning = false;
    graph.apply_grid_corr = false;
    graph.show_systematics_as_lines = 5.0;
    graph.show_total_systematics = 1.0;
    graph.calculate_chi2 = 1.0;
    graph.x_legend = 0.45;
    graph.y_legend = 0.90;
    graph.x_info_legend = 0.25;
    graph.y_info_legend = 0.40;
    graph.y_ratio_min = 0.5;
    graph.y_ratio_max = 1.5;
    graph.write(&mut out)?;

    for (index, group) in SYST_GROUPS.iter().enumerate() {
        writeln!(out)?;
        let mut plot = Plot::new(index);
        plot.plot_type = "data".to_string();
        plot.pdf_directory = "PDF".to_string();
        plot.data_directory = "Data/jet/atlas/incljets2012".to_string();
        plot.data_steering_files = format!(
            "atlas_2012_jet_antiktr{:02}_incljetpt_eta{}_comb.txt",
            cli.radius, cli.ieta
        );
        plot.desc = format!(
            "data_syst_groups_comb_{}_R{}_ETA{}",
            group, cli.radius, cli.ieta
        );
        plot.contain_systematic_group = (*group).to_string();
        plot.data_cut_xmin = 100.0;
        plot.data_cut_xmax = 400.0;
        plot.display_style = "ratio".to_string();
        plot.overlay_style = "data".to_string();
        plot.ratio_title = "Systematic uncertainties".to_string();
        plot.push_ratio("data / !data", "data_0 / data_0")?;
        plot.write(&mut out)?;
    }

    out.flush()?;
    info!("wrote {path} for {eta_min} <= |y| < {eta_max}");
    Ok(())
}
