use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use class_hierarchy::writer;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Translates a hierarchy given in indented tree-form into a list of parent-child tuples.",
    long_about = None
)]
struct Args {
    /// The input file specifying the hierarchy in indented tree format.
    hierarchy_file: PathBuf,
    /// Text file associating existing labels with the names of their nodes in the hierarchy,
    /// one `<label> <name>` per line. These labels will be maintained.
    class_names: Option<PathBuf>,
    /// Output file containing parent-child tuples.
    #[arg(long, default_value = "cub.parent-child.txt")]
    out: PathBuf,
    /// Output file associating numerical class labels with their original names.
    #[arg(long, alias = "out_names", default_value = "class_names.txt")]
    out_names: PathBuf,
    /// If given, a plot of the hierarchy is written to this file. Image formats
    /// (svg, png, pdf) require the Graphviz `dot` program, otherwise DOT source is written.
    #[arg(long)]
    plot: Option<PathBuf>,
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    debug!("Debug logging ON...");

    let initial_labels = match &args.class_names {
        Some(path) => class_hierarchy::read_initial_labels(path)
            .with_context(|| format!("Could not read initial labels from {}", path.display()))?,
        None => Vec::new(),
    };

    info!("Parsing hierarchy...");
    let hierarchy = class_hierarchy::parse_hierarchy_file(&args.hierarchy_file).with_context(|| {
        format!("Could not parse hierarchy {}", args.hierarchy_file.display())
    })?;

    if let Some(plot) = &args.plot {
        writer::render_file(plot, &hierarchy)
            .with_context(|| format!("Could not plot hierarchy to {}", plot.display()))?;
    }

    let (encoded, labels) = class_hierarchy::encode(&hierarchy, &initial_labels);
    info!(
        "Encoded {} classes ({} initial) with {} parent-child tuples",
        labels.num_labels(),
        initial_labels.len(),
        encoded.num_edges()
    );

    writer::write_edges_file(&args.out, &encoded)
        .with_context(|| format!("Could not write {}", args.out.display()))?;
    writer::write_names_file(&args.out_names, &labels)
        .with_context(|| format!("Could not write {}", args.out_names.display()))?;
    info!(
        "Wrote {} and {}",
        args.out.display(),
        args.out_names.display()
    );

    Ok(())
}
