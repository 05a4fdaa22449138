pub trait Path {
    /// 返回路径去掉最后一项后的部分。
    ///
    /// 命名空间是扁平的，这里只做字符串切分：
    /// 不含`/`或只有一层的名字，其父目录视作根目录`/`；
    /// 根目录自身没有父目录。
    fn parent(&self) -> Option<&Self>;
}

impl Path for str {
    fn parent(&self) -> Option<&Self> {
        if self == "/" {
            return None;
        }

        match self.trim_end_matches('/').rsplit_once('/') {
            Some(("", _)) | None => Some("/"),
            Some((parent, _)) => Some(parent),
        }
    }
}
