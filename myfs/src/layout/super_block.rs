use crate::{CURRENT_VERSION, MAGIC};

/// 超级块：提供文件系统合法性校验
#[derive(Debug, Default, Clone)]
#[repr(C)]
pub struct SuperBlock {
    /// 魔数："MYFS"
    magic: [u8; 4],
    pub version: u32,
}

impl SuperBlock {
    #[inline]
    pub fn new() -> Self {
        Self {
            magic: MAGIC,
            version: CURRENT_VERSION,
        }
    }

    /// 魔数与版本都一致才算已格式化
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.magic == MAGIC && self.version == CURRENT_VERSION
    }
}
