use alloc::vec;
use alloc::vec::Vec;

use spin::Mutex;

use crate::{BlockDevice, DeviceError};

/// 内存上的块设备，初始全零
#[derive(Debug)]
pub struct RamDisk {
    data: Mutex<Vec<u8>>,
}

impl RamDisk {
    pub fn new(capacity: usize) -> Self {
        Self::from_bytes(vec![0; capacity])
    }

    /// 以现成的字节作为设备内容，容量即`bytes.len()`
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            data: Mutex::new(bytes),
        }
    }

    /// 复制出整个设备的当前内容
    pub fn snapshot(&self) -> Vec<u8> {
        self.data.lock().clone()
    }
}

impl BlockDevice for RamDisk {
    #[inline]
    fn capacity(&self) -> usize {
        self.data.lock().len()
    }

    fn read(&self, offset: usize, buf: &mut [u8]) -> Result<(), DeviceError> {
        let data = self.data.lock();
        DeviceError::check(offset, buf.len(), data.len())?;
        buf.copy_from_slice(&data[offset..offset + buf.len()]);
        Ok(())
    }

    fn write(&self, offset: usize, buf: &[u8]) -> Result<(), DeviceError> {
        let mut data = self.data.lock();
        DeviceError::check(offset, buf.len(), data.len())?;
        data[offset..offset + buf.len()].copy_from_slice(buf);
        Ok(())
    }
}
