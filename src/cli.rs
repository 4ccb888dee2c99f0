//! Command line interface

use std::path::PathBuf;

use clap::Parser;

/// A searchable bookmark picker: filter the marked lines of a document,
/// jump to one, or clear them.
///
/// On a confirmed jump the target is printed to stdout as FILE:LINE.
#[derive(Parser, Debug)]
#[command(name = "goto-marker", version, about, long_about = None)]
pub struct Cli {
    /// Document to pick markers from
    #[arg(value_name = "FILE", required_unless_present = "no_document")]
    pub file: Option<PathBuf>,

    /// Marked line (1-based, repeatable)
    #[arg(short = 'm', long = "marker", value_name = "LINE")]
    pub markers: Vec<usize>,

    /// Initial filter text
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Theme id override for this session (e.g. "dark", "light")
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Open with no valid document (shows an empty list)
    #[arg(long)]
    pub no_document: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 720)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 500)]
    pub height: u32,
}
