use anyhow::Result;
use clap::{Parser, Subcommand};
use folder_hub::config::Config;
use folder_hub_core::{snapshot, Driver, Folder, FolderDriver};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "folder-hub")]
#[command(about = "Query and move folders in a multi-tenant hierarchy")]
struct Cli {
    /// Snapshot file (defaults to FOLDER_HUB_DATA or sample.json)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every folder of an organization
    List {
        #[arg(short, long)]
        org: Uuid,
    },

    /// List all descendants of a folder
    Children {
        #[arg(short, long)]
        org: Uuid,

        #[arg(short, long)]
        name: String,
    },

    /// Move a folder and its subtree beneath another folder
    Move {
        #[arg(short, long)]
        name: String,

        /// Destination folder name
        #[arg(short, long)]
        to: String,

        /// Replace the snapshot file with the result
        #[arg(short, long)]
        write: bool,
    },

    /// Start the HTTP API
    Serve {
        /// Listen address (defaults to FOLDER_HUB_ADDR or 127.0.0.1:3000)
        #[arg(short, long)]
        addr: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let addr = match &cli.command {
        Commands::Serve { addr } => addr.clone(),
        _ => None,
    };
    let config = Config::from_env().with_overrides(cli.data, addr);
    let driver = Driver::new(snapshot::load_snapshot(&config.data_path)?);

    match cli.command {
        Commands::List { org } => print_json(&driver.get_folders_by_org_id(org))?,
        Commands::Children { org, name } => {
            print_json(&driver.get_all_child_folders(org, &name)?)?;
        }
        Commands::Move { name, to, write } => {
            let folders = driver.move_folder(&name, &to)?;
            if write {
                snapshot::save_snapshot(&config.data_path, &folders)?;
                info!("Moved '{}' under '{}' in {}", name, to, config.data_path.display());
            } else {
                print_json(&folders)?;
            }
        }
        Commands::Serve { .. } => {
            info!("Serving {} folders from {}", driver.folders().len(), config.data_path.display());
            folder_hub::serve(&config.listen_addr, Arc::new(driver)).await?;
        }
    }

    Ok(())
}

fn print_json(folders: &[Folder]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(folders)?);
    Ok(())
}
