//! # 磁盘数据结构层
//!
//! myfs 的磁盘布局，各区域大小固定、按 inode 编号线性寻址：
//! 超级块 | 目录项区域 | 索引节点区域 | 内容区域
//!
//! 目录项`n`、索引节点`n`与内容槽`n`一一对应，编号即下标。

mod super_block;
pub use super_block::SuperBlock;

mod dir_entry;
pub use dir_entry::{DirEntry, NAME_CAP};

mod inode;
pub use inode::DiskInode;

use core::{mem, ptr, slice};

use enumflags2::bitflags;

/// 目录项与索引节点共用的类型标志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[bitflags]
#[repr(u8)]
pub enum EntryFlag {
    Directory = 0b0000_0001,
}

/// 按原始字节在设备上存取的磁盘结构。
///
/// # Safety
///
/// 实现者必须是`#[repr(C)]`、没有填充字节、且任意位模式都合法的结构，
/// 因为设备上可能是任何内容。
pub unsafe trait Record: Default + Sized {
    const SIZE: usize = mem::size_of::<Self>();

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(ptr::from_ref(self).cast(), Self::SIZE) }
    }

    #[inline]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        unsafe { slice::from_raw_parts_mut(ptr::from_mut(self).cast(), Self::SIZE) }
    }
}

unsafe impl Record for SuperBlock {}
unsafe impl Record for DirEntry {}
unsafe impl Record for DiskInode {}
