#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Unknown,
    Directory,
    Regular,
    Device,
    Fifo,
    Socket,
}

impl EntryKind {
    /// Classify an entry from its host mode bits.
    pub fn from_mode(mode: libc::mode_t) -> Self {
        match mode & libc::S_IFMT {
            libc::S_IFDIR => EntryKind::Directory,
            libc::S_IFREG => EntryKind::Regular,
            libc::S_IFBLK | libc::S_IFCHR => EntryKind::Device,
            libc::S_IFIFO => EntryKind::Fifo,
            libc::S_IFSOCK => EntryKind::Socket,
            _ => EntryKind::Unknown,
        }
    }

    /// Small integer code printed on the `type:` line.
    pub fn code(&self) -> u32 {
        match self {
            EntryKind::Unknown   => 0,
            EntryKind::Directory => 1,
            EntryKind::Regular   => 2,
            EntryKind::Device    => 3,
            EntryKind::Fifo      => 4,
            EntryKind::Socket    => 5,
        }
    }
}

/// Point-in-time metadata snapshot for one filesystem entry.
///
/// Built once by the query against an open handle, printed, discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStatus {
    pub kind:     EntryKind,
    pub dev:      u64,
    pub ino:      u64,
    pub nlink:    u64,
    pub size:     u64,
    pub checksum: u32,
}
