use alloc::borrow::Cow;
use alloc::string::String;

use enumflags2::BitFlags;

use super::EntryFlag;

/// 名字缓冲区的容量，名字可以占满而不留`\0`
pub const NAME_CAP: usize = 27;

/// 目录项：把一个名字映射到一个 inode 编号
#[derive(Debug, Default, Clone)]
#[repr(C)]
pub struct DirEntry {
    inode_number: u32,
    flags: u8,
    /// 首字节为`\0`表示此槽未使用
    name: [u8; NAME_CAP],
}

impl DirEntry {
    /// 超出[`NAME_CAP`]的部分被直接截掉
    pub fn new(name: &str, inode_number: u32, flags: BitFlags<EntryFlag>) -> Self {
        let bytes = name.as_bytes();
        let len = bytes.len().min(NAME_CAP);
        let mut name = [0; NAME_CAP];
        name[..len].copy_from_slice(&bytes[..len]);

        Self {
            inode_number,
            flags: flags.bits(),
            name,
        }
    }

    #[inline]
    pub fn inode_number(&self) -> u32 {
        self.inode_number
    }

    #[inline]
    pub fn flags(&self) -> BitFlags<EntryFlag> {
        BitFlags::from_bits_truncate(self.flags)
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags().contains(EntryFlag::Directory)
    }

    #[inline]
    pub fn is_unused(&self) -> bool {
        self.name[0] == 0
    }

    /// 名字的有效字节：到第一个`\0`为止，没有`\0`则是整个缓冲区
    pub fn name_bytes(&self) -> &[u8] {
        let len = self
            .name
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(NAME_CAP);
        &self.name[..len]
    }

    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.name_bytes())
    }

    /// 精确、区分大小写地比较路径
    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        self.name_bytes() == path.as_bytes()
    }
}
