use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

use block_dev::{BlockDevice, DeviceError};
use send_wrapper::SendWrapper;

/// 以宿主机上的镜像文件作为块设备，容量即打开时的文件长度
#[derive(Debug)]
pub struct BlockFile {
    inner: SendWrapper<RefCell<File>>,
    capacity: usize,
}

impl BlockFile {
    pub fn new(fd: File) -> io::Result<Self> {
        let capacity = fd.metadata()?.len() as usize;
        Ok(Self {
            inner: SendWrapper::new(RefCell::new(fd)),
            capacity,
        })
    }

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> io::Result<()> {
        let mut file = self.inner.borrow_mut();
        file.seek(SeekFrom::Start(offset as u64))?;
        file.read_exact(buf)
    }

    fn write_at(&self, offset: usize, buf: &[u8]) -> io::Result<()> {
        let mut file = self.inner.borrow_mut();
        file.seek(SeekFrom::Start(offset as u64))?;
        file.write_all(buf)
    }
}

impl BlockDevice for BlockFile {
    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn read(&self, offset: usize, buf: &mut [u8]) -> Result<(), DeviceError> {
        DeviceError::check(offset, buf.len(), self.capacity)?;
        self.read_at(offset, buf).map_err(|e| {
            log::error!("reading {} bytes at {offset}: {e}", buf.len());
            DeviceError::Io
        })
    }

    fn write(&self, offset: usize, buf: &[u8]) -> Result<(), DeviceError> {
        DeviceError::check(offset, buf.len(), self.capacity)?;
        self.write_at(offset, buf).map_err(|e| {
            log::error!("writing {} bytes at {offset}: {e}", buf.len());
            DeviceError::Io
        })
    }
}
