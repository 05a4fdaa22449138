#![allow(dead_code)]

use block_dev::RamDisk;
use myfs::{MIN_DEVICE_SIZE, MyFileSystem};

pub type Fs = MyFileSystem<RamDisk>;

/// 在全零的设备上打开（并因此格式化）一个卷
pub fn fresh() -> Fs {
    MyFileSystem::open(RamDisk::new(MIN_DEVICE_SIZE)).unwrap()
}

pub fn content_slot(fs: &Fs, inode_number: u32) -> Vec<u8> {
    let start = Fs::content_pos(inode_number).unwrap();
    fs.device().snapshot()[start..start + myfs::CONTENT_SLOT_SIZE].to_vec()
}
