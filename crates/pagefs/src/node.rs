use indexmap::IndexMap;

/// Type of node (file or directory)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// A single node in the volume tree.
///
/// Directories keep their children in insertion order, matching the
/// traversal order consumers observe through `read_dir` and glob.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File { content: Vec<u8> },
    Directory { children: IndexMap<String, Node> },
}

/// On-demand snapshot of a node's type and size.
/// Never cached beyond the call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub entry_type: EntryType,
    pub size: u64,
}

impl Node {
    pub fn new_file(content: Vec<u8>) -> Self {
        Node::File { content }
    }

    pub fn new_dir() -> Self {
        Node::Directory {
            children: IndexMap::new(),
        }
    }

    pub fn entry_type(&self) -> EntryType {
        match self {
            Node::File { .. } => EntryType::File,
            Node::Directory { .. } => EntryType::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn content(&self) -> Option<&[u8]> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut IndexMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub fn stat(&self) -> Stat {
        let size = match self {
            Node::File { content } => content.len() as u64,
            Node::Directory { .. } => 0,
        };
        Stat {
            entry_type: self.entry_type(),
            size,
        }
    }
}

impl Stat {
    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}
