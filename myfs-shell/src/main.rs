mod block_file;
mod cli;
mod shell;

use std::fs::OpenOptions;
use std::io;

use clap::Parser;
use myfs::{MyFileSystem, VolumeState};
use typed_bytesize::ByteSizeIec;

pub use self::{block_file::BlockFile, cli::Cli};

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let disk_size = ByteSizeIec::kib(cli.size).0;
    let fd = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&cli.image)?;
    if fd.metadata()?.len() < disk_size {
        fd.set_len(disk_size)?;
    }
    log::info!("image={:?} size={}", cli.image, fd.metadata()?.len());

    let block_file = BlockFile::new(fd)?;
    let mut fs = MyFileSystem::open(block_file)
        .map_err(|e| io::Error::other(e.to_string()))?
        .with_list_mode(cli.list_mode.into());

    if fs.initial_state() == VolumeState::Uninitialized {
        println!("Did not find myfs instance on blkdev");
        println!("Creating...");
        println!("Finished!");
    } else if cli.format {
        fs.format().map_err(|e| io::Error::other(e.to_string()))?;
        println!("Formatted {:?}", cli.image);
    }

    shell::run(&mut fs, io::stdin().lock(), io::stdout().lock())
}
