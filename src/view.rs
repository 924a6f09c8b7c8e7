//! 文件树派生视图：重名检查、展示排序、扁平化
//!
//! 排序只作用于展示；底层存储顺序（最近插入在前）从不被改写。

use compact_str::CompactString;
use std::cmp::Ordering;

use crate::node::{Node, NodeId, NodeKind};

/// 同级重名检查（大小写不敏感、忽略首尾空白）
///
/// `exclude` 用于重命名场景：跳过目标自身，允许改回当前名字。
pub fn has_duplicate_name(siblings: &[Node], candidate: &str, exclude: Option<NodeId>) -> bool {
    let want = candidate.trim().to_lowercase();
    siblings
        .iter()
        .filter(|n| exclude != Some(n.id))
        .any(|n| n.name.trim().to_lowercase() == want)
}

/// 展示用比较器：文件夹在前，同类内按名称升序（大小写不敏感）
pub fn compare(a: &Node, b: &Node) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// 渲染用的扁平化行结构
#[derive(Debug, Clone)]
pub struct Row {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub is_folder: bool,
}

impl Node {
    /// 单个文件夹直接子节点的展示顺序
    pub fn sorted_children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.children.as_deref().unwrap_or(&[]).iter().collect();
        out.sort_by(|a, b| compare(a, b));
        out
    }

    /// 将整棵树按展示顺序拍扁（不含根节点本身）
    pub fn flatten(&self) -> Vec<Row> {
        let mut result = Vec::new();
        let mut stack: Vec<(&Node, u16)> = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            if node.id != self.id {
                result.push(Row {
                    id: node.id,
                    depth,
                    name: node.name.clone(),
                    is_folder: node.kind == NodeKind::Folder,
                });
            }
            // 逆序入栈，弹出时恢复展示顺序
            for child in node.sorted_children().into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "../tests/unit/view.rs"]
mod tests;
