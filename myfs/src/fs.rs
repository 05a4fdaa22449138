//! # 文件系统层
//!
//! 把路径翻译成对块设备的读写。命名空间是扁平的：路径只是名字，
//! 不做逐级解析；分配不维护计数器，每次都重新数一遍已用的目录项。

use alloc::string::String;
use alloc::vec::Vec;

use block_dev::{BlockDevice, DeviceError};
use enumflags2::BitFlags;

use crate::error::{Error, Result};
use crate::layout::{DirEntry, DiskInode, EntryFlag, Record, SuperBlock};
use crate::path::Path;
use crate::{
    CONTENT_REGION_START, CONTENT_SLOT_SIZE, DIR_CAPACITY, DIR_ENTRY_SIZE, DIR_REGION_START,
    INODE_REGION_START, INODE_SIZE, MAX_INODES, MIN_DEVICE_SIZE,
};

/// 打开设备时从超级块判断出的卷状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeState {
    /// 魔数或版本不符
    Uninitialized,
    Ready,
}

/// `list_dir`的筛选方式
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// 只检查0号目录项是目录，然后列出全部已用目录项，忽略路径参数
    #[default]
    Legacy,
    /// 只列出父路径等于参数的目录项
    Filtered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    File,
    Directory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub inode: u32,
    pub kind: StatKind,
    /// 内容长度（字节）
    pub size: usize,
}

/// 独占一个块设备的文件系统实例。
///
/// 同一设备上同时存在多个实例是未定义的。
#[derive(Debug)]
pub struct MyFileSystem<D> {
    device: D,
    initial_state: VolumeState,
    list_mode: ListMode,
}

impl<D: BlockDevice> MyFileSystem<D> {
    /// 读取超级块，判断设备上是否已有 myfs 卷
    pub fn probe(device: &D) -> Result<VolumeState> {
        let mut super_block = SuperBlock::default();
        device.read(0, super_block.as_bytes_mut())?;

        Ok(if super_block.is_valid() {
            VolumeState::Ready
        } else {
            VolumeState::Uninitialized
        })
    }

    /// 打开设备上的卷，没有合法的卷时**格式化整个设备**
    pub fn open(device: D) -> Result<Self> {
        let mut fs = Self::with_state(device)?;
        if fs.initial_state == VolumeState::Uninitialized {
            log::warn!("did not find myfs instance on blkdev, formatting");
            fs.format()?;
        }
        Ok(fs)
    }

    /// 打开设备上已有的卷，不做格式化
    pub fn load(device: D) -> Result<Self> {
        let fs = Self::with_state(device)?;
        match fs.initial_state {
            VolumeState::Ready => Ok(fs),
            VolumeState::Uninitialized => Err(Error::Unformatted),
        }
    }

    fn with_state(device: D) -> Result<Self> {
        let capacity = device.capacity();
        if capacity < MIN_DEVICE_SIZE {
            return Err(Error::DeviceTooSmall(capacity));
        }

        let initial_state = Self::probe(&device)?;
        log::debug!("opened device: capacity={capacity} state={initial_state:?}");

        Ok(Self {
            device,
            initial_state,
            list_mode: ListMode::default(),
        })
    }

    pub fn with_list_mode(mut self, list_mode: ListMode) -> Self {
        self.list_mode = list_mode;
        self
    }

    #[inline]
    pub fn list_mode(&self) -> ListMode {
        self.list_mode
    }

    /// 打开时卷的状态；为[`VolumeState::Uninitialized`]说明已被重新格式化
    #[inline]
    pub fn initial_state(&self) -> VolumeState {
        self.initial_state
    }

    #[inline]
    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn into_inner(self) -> D {
        self.device
    }

    /// 写入超级块与根目录（0号目录项与0号 inode）。
    ///
    /// 其余区域不清零，残留数据只靠名字首字节判定为未使用。
    pub fn format(&mut self) -> Result<()> {
        self.write_record(0, &SuperBlock::new())?;

        let root = DirEntry::new("/", 0, EntryFlag::Directory.into());
        self.write_record(Self::dir_entry_pos(0)?, &root)?;

        let root_inode = DiskInode::new(DIR_ENTRY_SIZE as u32, EntryFlag::Directory.into());
        self.write_record(Self::inode_pos(0)?, &root_inode)?;

        log::info!("formatted myfs volume");
        Ok(())
    }

    /// 以下一个未用编号创建目录项与大小为0的 inode，返回其编号。
    ///
    /// 不检查重名（旧项会遮住新项），也不检查父目录。
    pub fn create(&mut self, path: &str, is_directory: bool) -> Result<u32> {
        let inode_number = self.next_inode()?;
        let flags: BitFlags<EntryFlag> = if is_directory {
            EntryFlag::Directory.into()
        } else {
            BitFlags::empty()
        };

        let entry = DirEntry::new(path, inode_number, flags);
        self.write_record(Self::dir_entry_pos(inode_number)?, &entry)?;
        self.write_record(Self::inode_pos(inode_number)?, &DiskInode::new(0, flags))?;

        log::debug!("create: path={path:?} inode={inode_number} dir={is_directory}");
        Ok(inode_number)
    }

    /// 线性扫描已用目录项，返回第一个名字与`path`相同的项
    pub fn find_entry(&self, path: &str) -> Result<DirEntry> {
        for i in 0..self.next_inode()? {
            let entry = self.read_dir_entry(i)?;
            if entry.matches(path) {
                return Ok(entry);
            }
        }
        Err(Error::NotFound)
    }

    /// 名字首字节非零的目录项个数，同时也是下一个可分配的 inode 编号。
    ///
    /// 只在编号从不跳跃、也从不删除时成立。
    pub fn next_inode(&self) -> Result<u32> {
        let mut count = 0;
        for i in 0..DIR_CAPACITY as u32 {
            if !self.read_dir_entry(i)?.is_unused() {
                count += 1;
            }
        }
        Ok(count)
    }

    /// 读出文件内容的原始字节
    pub fn read_content(&self, path: &str) -> Result<Vec<u8>> {
        let entry = self.find_file(path)?;
        let inode: DiskInode = self.read_record(Self::inode_pos(entry.inode_number())?)?;

        let mut content = alloc::vec![0; inode.size()];
        self.device
            .read(Self::content_pos(entry.inode_number())?, &mut content)?;
        Ok(content)
    }

    /// 以文本读出文件内容：截断到第一个`\0`，非法 UTF-8 以替换字符代替
    pub fn get_content(&self, path: &str) -> Result<String> {
        let content = self.read_content(path)?;
        let len = content.iter().position(|&c| c == 0).unwrap_or(content.len());
        Ok(String::from_utf8_lossy(&content[..len]).into_owned())
    }

    /// 用`content`替换文件内容。
    ///
    /// 不检查内容槽容量：超长的内容会写进下一个槽；
    /// 变短时旧内容的尾部留在槽中，只是不再被读到。
    pub fn set_content(&mut self, path: &str, content: impl AsRef<[u8]>) -> Result<()> {
        let content = content.as_ref();
        let entry = self.find_file(path)?;
        let inode_number = entry.inode_number();

        let inode_pos = Self::inode_pos(inode_number)?;
        let content_pos = Self::content_pos(inode_number)?;
        let mut inode: DiskInode = self.read_record(inode_pos)?;
        inode.resize(content.len())?;
        // 写 inode 之前确认内容能整个落在设备上，失败时卷保持原样
        DeviceError::check(content_pos, content.len(), self.device.capacity())?;

        if content.len() > CONTENT_SLOT_SIZE {
            log::warn!(
                "content of {path:?} ({} bytes) overflows slot {inode_number} into the next one",
                content.len()
            );
        }
        self.write_record(inode_pos, &inode)?;
        self.device.write(content_pos, content)?;

        log::debug!("set_content: path={path:?} size={}", content.len());
        Ok(())
    }

    /// 列出目录项，筛选方式见[`ListMode`]
    pub fn list_dir(&self, path: &str) -> Result<Vec<DirEntry>> {
        match self.list_mode {
            ListMode::Legacy => {
                if !self.read_dir_entry(0)?.is_dir() {
                    return Err(Error::NotADirectory);
                }
                self.live_entries()
            }
            ListMode::Filtered => {
                if !self.find_entry(path)?.is_dir() {
                    return Err(Error::NotADirectory);
                }
                let mut entries = self.live_entries()?;
                entries.retain(|entry| entry.name().parent() == Some(path));
                Ok(entries)
            }
        }
    }

    pub fn stat(&self, path: &str) -> Result<Stat> {
        let entry = self.find_entry(path)?;
        let inode: DiskInode = self.read_record(Self::inode_pos(entry.inode_number())?)?;

        Ok(Stat {
            inode: entry.inode_number(),
            kind: if entry.is_dir() {
                StatKind::Directory
            } else {
                StatKind::File
            },
            size: inode.size(),
        })
    }

    /// 删除需要空闲表或位图来回收编号，目前不支持
    pub fn remove(&mut self, path: &str) -> Result<()> {
        log::debug!("remove: path={path:?} is not supported");
        Err(Error::NotImplemented)
    }
}

/* 寻址：编号即下标，越界直接报错 */
impl<D: BlockDevice> MyFileSystem<D> {
    pub fn dir_entry_pos(inode_number: u32) -> Result<usize> {
        Self::check_inode(inode_number)?;
        Ok(DIR_REGION_START + inode_number as usize * DIR_ENTRY_SIZE)
    }

    pub fn inode_pos(inode_number: u32) -> Result<usize> {
        Self::check_inode(inode_number)?;
        Ok(INODE_REGION_START + inode_number as usize * INODE_SIZE)
    }

    pub fn content_pos(inode_number: u32) -> Result<usize> {
        Self::check_inode(inode_number)?;
        Ok(CONTENT_REGION_START + inode_number as usize * CONTENT_SLOT_SIZE)
    }

    #[inline]
    fn check_inode(inode_number: u32) -> Result<()> {
        if inode_number as usize >= MAX_INODES {
            return Err(Error::InodeOutOfRange(inode_number));
        }
        Ok(())
    }
}

impl<D: BlockDevice> MyFileSystem<D> {
    fn find_file(&self, path: &str) -> Result<DirEntry> {
        let entry = self.find_entry(path)?;
        if entry.is_dir() {
            return Err(Error::IsADirectory);
        }
        Ok(entry)
    }

    fn live_entries(&self) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for i in 0..self.next_inode()? {
            let entry = self.read_dir_entry(i)?;
            if !entry.is_unused() {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    #[inline]
    fn read_dir_entry(&self, inode_number: u32) -> Result<DirEntry> {
        let entry: DirEntry = self.read_record(Self::dir_entry_pos(inode_number)?)?;
        log::trace!("dir entry {inode_number}: {entry:?}");
        Ok(entry)
    }

    fn read_record<T: Record>(&self, offset: usize) -> Result<T> {
        let mut record = T::default();
        self.device.read(offset, record.as_bytes_mut())?;
        Ok(record)
    }

    fn write_record<T: Record>(&self, offset: usize, record: &T) -> Result<()> {
        self.device.write(offset, record.as_bytes())?;
        Ok(())
    }
}
