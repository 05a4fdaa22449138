use enumflags2::BitFlags;

use super::EntryFlag;
use crate::{Error, Result};

#[derive(Debug, Default, Clone)]
#[repr(C)]
pub struct DiskInode {
    /// 内容的逻辑长度，不用usize是为了严控布局
    pub size: u32,
    flags: u8,
    _reserved: [u8; 3],
}

impl DiskInode {
    #[inline]
    pub fn new(size: u32, flags: BitFlags<EntryFlag>) -> Self {
        Self {
            size,
            flags: flags.bits(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        BitFlags::<EntryFlag>::from_bits_truncate(self.flags).contains(EntryFlag::Directory)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// 长度放不进`u32`时报错，inode 保持不变
    pub fn resize(&mut self, size: usize) -> Result<()> {
        self.size = u32::try_from(size).map_err(|_| Error::ContentTooLarge(size))?;
        Ok(())
    }
}
