use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// 访问范围越过了设备容量
    OutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },
    /// 底层存储读写失败
    Io,
}

impl DeviceError {
    /// 检查`[offset, offset + len)`是否落在容量之内
    pub fn check(offset: usize, len: usize, capacity: usize) -> Result<(), Self> {
        match offset.checked_add(len) {
            Some(end) if end <= capacity => Ok(()),
            _ => Err(Self::OutOfBounds {
                offset,
                len,
                capacity,
            }),
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                offset,
                len,
                capacity,
            } => write!(
                f,
                "access of {len} bytes at offset {offset} exceeds capacity {capacity}"
            ),
            Self::Io => f.write_str("I/O error"),
        }
    }
}
