//! 文件树数据模型（纯值语义）
//!
//! 节点按值持有子节点，不存父指针；编辑操作重建根到目标的路径，
//! 其余子树按值带入新树，调用方持有的旧树不受影响。

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub type Result<T> = std::result::Result<T, TreeError>;

/// 节点 ID：毫秒时间戳 + 进程内计数器，创建后不变，永不复用
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    pub timestamp: u64,
    pub counter: u16,
}

impl NodeId {
    pub fn new() -> Self {
        static COUNTER: std::sync::atomic::AtomicU16 = std::sync::atomic::AtomicU16::new(0);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Self { timestamp, counter }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:x}:{:04x})", self.timestamp, self.counter)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}:{:04x}", self.timestamp, self.counter)
    }
}

/// 节点类型
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    File,
    Folder,
}

/// 文件树操作错误
#[derive(Debug)]
pub enum TreeError {
    EmptyName,
    NameExists,
    NotAFolder,
    NodeNotFound,
    RemoveRoot,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::EmptyName => write!(f, "name is empty"),
            TreeError::NameExists => write!(f, "name already exists in parent"),
            TreeError::NotAFolder => write!(f, "target is not a folder"),
            TreeError::NodeNotFound => write!(f, "no node with the given id"),
            TreeError::RemoveRoot => write!(f, "cannot remove the root node"),
        }
    }
}

impl std::error::Error for TreeError {}

/// 树节点：名称 + 类型 + 子节点序列（仅文件夹有值）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: CompactString,
    pub kind: NodeKind,
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// 新建文件节点（分配新 id，无子节点序列）
    pub fn new_file(name: impl Into<CompactString>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            kind: NodeKind::File,
            children: None,
        }
    }

    /// 新建文件夹节点（分配新 id，子节点序列为空）
    pub fn new_folder(name: impl Into<CompactString>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            kind: NodeKind::Folder,
            children: Some(Vec::new()),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// 按 id 深度优先查找节点
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.as_deref()?.iter().find_map(|c| c.find(id))
    }

    /// 查找 id 对应节点的父节点（模型不存父指针，按需计算）
    pub fn find_parent(&self, id: NodeId) -> Option<&Node> {
        let children = self.children.as_deref()?;
        if children.iter().any(|c| c.id == id) {
            return Some(self);
        }
        children.iter().find_map(|c| c.find_parent(id))
    }

    /// 从根到目标节点的名称路径（"/" 连接，含根名）
    pub fn path_to(&self, id: NodeId) -> Option<String> {
        if self.id == id {
            return Some(self.name.to_string());
        }
        for child in self.children.as_deref()? {
            if let Some(rest) = child.path_to(id) {
                return Some(format!("{}/{}", self.name, rest));
            }
        }
        None
    }

    /// 校验整棵树 id 唯一；重建逻辑出错时最先暴露在这里
    pub fn ids_unique(&self) -> bool {
        let mut seen = FxHashSet::default();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if !seen.insert(node.id) {
                return false;
            }
            if let Some(children) = &node.children {
                stack.extend(children.iter());
            }
        }
        true
    }
}
