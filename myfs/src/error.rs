use block_dev::DeviceError;
use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[display(fmt = "File not found")]
    NotFound,
    #[display(fmt = "Path is a directory, not a file")]
    IsADirectory,
    #[display(fmt = "Path is not a directory")]
    NotADirectory,
    #[display(fmt = "not implemented")]
    NotImplemented,
    /// inode 编号超出了各区域的容量
    #[display(fmt = "inode {} is out of range", _0)]
    InodeOutOfRange(u32),
    #[display(fmt = "content of {} bytes is too large", _0)]
    ContentTooLarge(usize),
    #[display(fmt = "Did not find myfs instance on blkdev")]
    Unformatted,
    #[display(fmt = "block device of {} bytes is too small", _0)]
    DeviceTooSmall(usize),
    #[display(fmt = "block device error: {}", _0)]
    Device(DeviceError),
}

impl From<DeviceError> for Error {
    fn from(err: DeviceError) -> Self {
        Self::Device(err)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
