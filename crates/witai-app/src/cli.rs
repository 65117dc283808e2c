use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Witai: manage the writing assistant's custom CSS.
#[derive(Parser, Debug)]
#[command(name = "witai", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Persistent store file override.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Log filter override (e.g. `witai=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate CSS and apply it as the custom style.
    Apply {
        /// CSS file to read. Reads stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Print a preset stylesheet (dark, colorful, minimal).
    Preset {
        name: String,

        /// Submit the preset instead of printing it.
        #[arg(long)]
        apply: bool,
    },

    /// Remove the custom style.
    Reset,

    /// Print the persisted custom CSS.
    Show,

    /// Print the document's style elements, or a script that applies them.
    Render {
        #[arg(long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,
    },

    /// Print the effective configuration as JSON.
    Config,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// `<style>` elements for a document head.
    Html,
    /// JavaScript for a webview.
    Js,
}

pub fn parse() -> Args {
    Args::parse()
}
