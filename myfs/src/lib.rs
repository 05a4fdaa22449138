#![cfg_attr(not(test), no_std)]

extern crate alloc;

/* myfs 的整体架构，自上而下 */

// 文件系统层：路径查找、创建、读写内容、列目录
mod fs;

// 磁盘数据结构层：超级块、目录项、索引节点
mod layout;

mod error;
mod path;

use core::mem;

pub use block_dev::BlockDevice;

pub use self::{
    error::{Error, Result},
    fs::{ListMode, MyFileSystem, Stat, StatKind, VolumeState},
    layout::{DirEntry, DiskInode, EntryFlag, SuperBlock, NAME_CAP},
};

pub const MAGIC: [u8; 4] = *b"MYFS";
pub const CURRENT_VERSION: u32 = 1;

pub const HEADER_SIZE: usize = mem::size_of::<SuperBlock>();
pub const DIR_ENTRY_SIZE: usize = mem::size_of::<DirEntry>();
pub const INODE_SIZE: usize = mem::size_of::<DiskInode>();

/// 目录项区域大小
pub const DIR_REGION_SIZE: usize = 1024;
/// 索引节点区域大小
pub const INODE_REGION_SIZE: usize = 1024;
/// 每个索引节点独占的内容槽大小
pub const CONTENT_SLOT_SIZE: usize = 1024;

pub const DIR_CAPACITY: usize = DIR_REGION_SIZE / DIR_ENTRY_SIZE;
pub const INODE_CAPACITY: usize = INODE_REGION_SIZE / INODE_SIZE;
/// 目录项区域比索引节点区域先耗尽，可用的 inode 数取两者较小者
pub const MAX_INODES: usize = if DIR_CAPACITY < INODE_CAPACITY {
    DIR_CAPACITY
} else {
    INODE_CAPACITY
};

pub const DIR_REGION_START: usize = HEADER_SIZE;
pub const INODE_REGION_START: usize = DIR_REGION_START + DIR_REGION_SIZE;
pub const CONTENT_REGION_START: usize = INODE_REGION_START + INODE_REGION_SIZE;

/// 容纳全部区域所需的最小设备容量
pub const MIN_DEVICE_SIZE: usize = CONTENT_REGION_START + MAX_INODES * CONTENT_SLOT_SIZE;
