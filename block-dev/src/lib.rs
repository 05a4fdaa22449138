//! # 块设备接口层
//!
//! 块设备是一段容量固定、按**字节偏移**读写的线性存储空间，
//! 它不知道文件的存在；[`BlockDevice`] 就是对它的抽象，
//! 实现了此特质的类型称为**块设备驱动**。
//!
//! 文件系统只通过块设备驱动读写块设备。

#![no_std]

extern crate alloc;

mod error;
mod ram_disk;

use core::any::Any;

pub use self::{error::DeviceError, ram_disk::RamDisk};

/// 块设备驱动特质
pub trait BlockDevice: Send + Sync + Any {
    /// 设备的总容量（字节）
    fn capacity(&self) -> usize;

    /// 从`offset`处读满`buf`
    fn read(&self, offset: usize, buf: &mut [u8]) -> Result<(), DeviceError>;

    /// 将`buf`整个写到`offset`处
    fn write(&self, offset: usize, buf: &[u8]) -> Result<(), DeviceError>;
}
