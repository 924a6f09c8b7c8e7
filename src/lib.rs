//! ztree - 内存文件树引擎
//!
//! 模块结构：
//! - node: 数据模型（Node, NodeId, NodeKind, TreeError）与按 id 查找
//! - edit: 结构编辑（insert / delete / rename，纯函数，返回新树）
//! - view: 派生视图（展示排序、重名检查、扁平化）

pub mod edit;
pub mod node;
pub mod view;

pub use node::{Node, NodeId, NodeKind, Result, TreeError};
pub use view::{compare, has_duplicate_name, Row};
