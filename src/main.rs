//! clipvault: append web clips into structured Markdown notes.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use clipvault::config::Config;
use clipvault::entry::ClipEntry;
use clipvault::error::{ClipError, ClipResult};
use clipvault::slug;
use clipvault::storage::FsVault;
use clipvault::writer::ClipWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipvault")]
#[command(about = "Append web clips into structured Markdown notes", long_about = None)]
struct Args {
    /// Vault directory to write into
    #[arg(value_name = "VAULT")]
    vault: PathBuf,

    /// Page title
    #[arg(long, default_value = "")]
    title: String,

    /// Source URL
    #[arg(long, default_value = "")]
    url: String,

    /// Highlighted page content
    #[arg(long)]
    highlight: Option<String>,

    /// Free-text comment
    #[arg(long)]
    comment: Option<String>,

    /// Page description
    #[arg(long)]
    description: Option<String>,

    /// Load the clip entry from a JSON file instead of flags
    #[arg(long, value_name = "FILE")]
    entry_json: Option<PathBuf>,

    /// Host name for per-site storage (defaults to the URL's host)
    #[arg(long)]
    host: Option<String>,

    /// Write into this note instead of per-site storage
    #[arg(long, value_name = "PATH")]
    note: Option<String>,

    /// Target heading inside the note
    #[arg(long)]
    heading: Option<String>,

    /// Heading level for the target heading
    #[arg(long)]
    level: Option<usize>,
}

fn main() -> ClipResult<()> {
    env_logger::init();
    let args = Args::parse();
    let mut cfg = Config::load();

    // Override config with command line args
    if let Some(heading) = &args.heading {
        cfg.heading.clone_from(heading);
    }
    if let Some(level) = args.level {
        cfg.heading_level = level;
    }

    let entry = load_entry(&args)?;
    let mut vault = FsVault::new(&args.vault);
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    if let Some(note) = &args.note {
        let heading = (!cfg.heading.is_empty()).then(|| cfg.heading.clone());
        writer.clip_to_note(note, &entry, heading.as_deref())?;
        println!("{note}");
    } else {
        let host = args
            .host
            .clone()
            .or_else(|| slug::host_of_url(&entry.url))
            .unwrap_or_else(|| entry.url.clone());
        let reference = writer.clip(&host, &entry)?;
        println!("{reference}");
    }

    Ok(())
}

fn load_entry(args: &Args) -> ClipResult<ClipEntry> {
    if let Some(path) = &args.entry_json {
        let text = std::fs::read_to_string(path)
            .map_err(|err| ClipError::storage(path.display().to_string(), err))?;
        Ok(serde_json::from_str(&text)?)
    } else {
        Ok(ClipEntry {
            title: args.title.clone(),
            url: args.url.clone(),
            highlighted_content: args.highlight.clone(),
            comments: args.comment.clone(),
            description: args.description.clone(),
        })
    }
}
