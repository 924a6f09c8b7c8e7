//! 文件树结构编辑（insert / delete / rename）
//!
//! 每个操作都是 (树, 参数) -> 新树 的纯函数：
//! 命中路径上的祖先全部重建，未触及的子树按值带入，
//! 校验失败时直接返回错误，原树在任何路径上都不被改动。

use crate::node::{Node, NodeId, NodeKind, Result, TreeError};
use crate::view::has_duplicate_name;

impl Node {
    /// 在目标文件夹下新建子节点，新节点排在子序列最前
    ///
    /// 展示顺序由 view 层另行派生，这里只维护"最近插入在前"的存储顺序。
    pub fn insert(&self, parent: NodeId, name: &str, kind: NodeKind) -> Result<Node> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TreeError::EmptyName);
        }
        // 只读预检：目标必须存在、必须是文件夹、同级无重名
        let target = self.find(parent).ok_or(TreeError::NodeNotFound)?;
        let siblings = target.children.as_deref().ok_or(TreeError::NotAFolder)?;
        if has_duplicate_name(siblings, name, None) {
            return Err(TreeError::NameExists);
        }

        let child = match kind {
            NodeKind::File => Node::new_file(name),
            NodeKind::Folder => Node::new_folder(name),
        };
        tracing::debug!(parent = %parent, child = %child.id, name, "insert node");
        Ok(insert_below(self, parent, &child))
    }

    /// 删除节点及其整个子树
    ///
    /// 删除不存在的 id 是幂等空操作；删除根节点被拒绝。
    pub fn delete(&self, id: NodeId) -> Result<Node> {
        if id == self.id {
            return Err(TreeError::RemoveRoot);
        }
        tracing::debug!(id = %id, "delete node");
        Ok(without(self, id))
    }

    /// 重命名节点，id 不存在时返回结构相同的新树
    pub fn rename(&self, id: NodeId, new_name: &str) -> Result<Node> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(TreeError::EmptyName);
        }
        // 根节点没有同级，跳过查重直接改名
        if id != self.id {
            match self.find_parent(id) {
                Some(parent) => {
                    let siblings = parent.children.as_deref().unwrap_or(&[]);
                    // 排除自身，允许改回当前名字
                    if has_duplicate_name(siblings, new_name, Some(id)) {
                        return Err(TreeError::NameExists);
                    }
                }
                None => return Ok(self.clone()),
            }
        }
        tracing::debug!(id = %id, new_name, "rename node");
        Ok(renamed(self, id, new_name))
    }
}

fn insert_below(node: &Node, parent: NodeId, child: &Node) -> Node {
    let children = node.children.as_ref().map(|items| {
        if node.id == parent {
            let mut rebuilt = Vec::with_capacity(items.len() + 1);
            rebuilt.push(child.clone());
            rebuilt.extend(items.iter().cloned());
            rebuilt
        } else {
            items.iter().map(|c| insert_below(c, parent, child)).collect()
        }
    });
    Node {
        id: node.id,
        name: node.name.clone(),
        kind: node.kind,
        children,
    }
}

fn without(node: &Node, id: NodeId) -> Node {
    Node {
        id: node.id,
        name: node.name.clone(),
        kind: node.kind,
        children: node.children.as_ref().map(|items| {
            items
                .iter()
                .filter(|c| c.id != id)
                .map(|c| without(c, id))
                .collect()
        }),
    }
}

fn renamed(node: &Node, id: NodeId, new_name: &str) -> Node {
    if node.id == id {
        return Node {
            id: node.id,
            name: new_name.into(),
            kind: node.kind,
            children: node.children.clone(),
        };
    }
    Node {
        id: node.id,
        name: node.name.clone(),
        kind: node.kind,
        children: node
            .children
            .as_ref()
            .map(|items| items.iter().map(|c| renamed(c, id, new_name)).collect()),
    }
}
