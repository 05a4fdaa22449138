use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use myfs::ListMode;

#[derive(Parser)]
pub struct Cli {
    /// Image file backing the volume, created if missing
    #[arg(long, short, default_value = "myfs.img")]
    pub image: PathBuf,

    /// Minimum image size in KiB; a smaller image is grown to it
    #[arg(long, short, default_value_t = 64)]
    pub size: u64,

    /// Re-format the volume even if a valid one is found
    #[arg(long)]
    pub format: bool,

    /// How `ls` selects entries
    #[arg(long, value_enum, default_value_t = ListModeArg::Legacy)]
    pub list_mode: ListModeArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListModeArg {
    /// List every entry on the volume, whatever the path
    Legacy,
    /// List only the entries directly under the path
    Filtered,
}

impl From<ListModeArg> for ListMode {
    fn from(arg: ListModeArg) -> Self {
        match arg {
            ListModeArg::Legacy => ListMode::Legacy,
            ListModeArg::Filtered => ListMode::Filtered,
        }
    }
}
