use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use xmlmap::{AdapterConfig, Error, Tree};

mod plan;

#[derive(Parser)]
#[command(author, version, about = "Map the sample study plan to XML", long_about = None)]
struct Args {
    /// Output file path; the document is printed to stdout if absent
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sort children by element name
    #[arg(long)]
    sort: bool,

    /// Remove children with the same name and attribute values
    #[arg(long)]
    dedupe: bool,

    /// Rename elements, as `old=new`
    #[arg(long = "rename", value_name = "OLD=NEW", value_parser = parse_pair)]
    renames: Vec<(String, String)>,

    /// Set an attribute on every element, as `name=value`
    #[arg(long = "default-attribute", value_name = "NAME=VALUE", value_parser = parse_pair)]
    default_attributes: Vec<(String, String)>,

    /// Render the mapped tree without normalizing it
    #[arg(long)]
    no_adapt: bool,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected `key=value`, got `{}`", s)),
    }
}

impl Args {
    fn adapter_config(&self) -> AdapterConfig {
        let mut config = AdapterConfig::default()
            .with_sort_children_by_name(self.sort)
            .with_remove_duplicates(self.dedupe)
            .with_tag_rename("componenteavaliacao", "componente");
        for (old, new) in &self.renames {
            config = config.with_tag_rename(old, new);
        }
        for (name, value) in &self.default_attributes {
            config = config.with_default_attribute(name, value);
        }
        config
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = Args::parse();

    let mut tree = Tree::new();
    let root = tree.map(&plan::sample())?;
    if !args.no_adapt {
        tree.normalize(root, &args.adapter_config());
    }

    match &args.output {
        Some(path) => {
            tree.write_to_file(root, path)?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", tree.to_document_string(root)),
    }
    Ok(())
}
