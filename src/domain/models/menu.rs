use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::shared::constants::{PathConstants, MENU_TREE_VERSION};
use crate::shared::errors::{AppError, Result};

/// One navigable entry, or a group when it has children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    pub key: String,
    pub label: String,
    /// Icon name handed to the renderer as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
    /// Kept in the tree but not rendered
    #[serde(default)]
    pub hidden: bool,
}

impl MenuNode {
    pub fn leaf(key: &str, label: &str, icon: &str, link_target: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: Some(icon.to_string()),
            children: None,
            link_target: Some(link_target.to_string()),
            hidden: false,
        }
    }

    pub fn group(key: &str, label: &str, icon: &str, children: Vec<MenuNode>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: Some(icon.to_string()),
            children: Some(children),
            link_target: None,
            hidden: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    pub fn children(&self) -> &[MenuNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// A path prefix that expands one group when the current path starts with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTrigger {
    pub prefix: String,
    pub group_key: String,
}

/// Static, versioned sidebar definition.
///
/// Built once at startup and never mutated. Every way of building one
/// (including plain serde deserialization) checks key uniqueness and
/// trigger targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MenuTreeDef")]
pub struct MenuTree {
    version: u32,
    items: Vec<MenuNode>,
    group_triggers: Vec<GroupTrigger>,
}

/// Unchecked wire form of [`MenuTree`]
#[derive(Deserialize)]
struct MenuTreeDef {
    version: u32,
    items: Vec<MenuNode>,
    #[serde(default)]
    group_triggers: Vec<GroupTrigger>,
}

impl TryFrom<MenuTreeDef> for MenuTree {
    type Error = AppError;

    fn try_from(def: MenuTreeDef) -> Result<Self> {
        let tree = Self {
            version: def.version,
            items: def.items,
            group_triggers: def.group_triggers,
        };
        tree.validate()?;
        Ok(tree)
    }
}

impl MenuTree {
    pub fn new(items: Vec<MenuNode>, group_triggers: Vec<GroupTrigger>) -> Result<Self> {
        let tree = Self {
            version: MENU_TREE_VERSION,
            items,
            group_triggers,
        };
        tree.validate()?;
        Ok(tree)
    }

    /// Parse and validate; validation failures keep their own error kind
    pub fn from_json(json: &str) -> Result<Self> {
        let def: MenuTreeDef = serde_json::from_str(json)?;
        Self::try_from(def)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Top-level entries in display order
    pub fn items(&self) -> &[MenuNode] {
        &self.items
    }

    pub fn group_triggers(&self) -> &[GroupTrigger] {
        &self.group_triggers
    }

    /// The dashboard sidebar shipped with the UI
    pub fn builtin() -> Self {
        let tree = Self {
            version: MENU_TREE_VERSION,
            items: vec![
                MenuNode::leaf("modules", "Applications", "appstore-add", PathConstants::MODULES),
                MenuNode::leaf("templates", "Templates", "snippets", PathConstants::TEMPLATES),
                MenuNode::leaf("nodes", "Nodes", "hdd", PathConstants::NODES).hidden(),
                MenuNode::leaf("helm", "Helm releases", "helm", PathConstants::HELM_RELEASES)
                    .hidden(),
                MenuNode::group(
                    "addons",
                    "Addons",
                    "api",
                    vec![MenuNode::leaf(
                        "addons-mcp",
                        "MCP server",
                        "robot",
                        PathConstants::ADDONS_MCP_SERVER,
                    )],
                )
                .hidden(),
            ],
            group_triggers: vec![GroupTrigger {
                prefix: PathConstants::ADDONS_MCP_SERVER.to_string(),
                group_key: "addons".to_string(),
            }],
        };
        debug_assert!(tree.validate().is_ok(), "built-in menu tree is invalid");
        tree
    }

    fn validate(&self) -> Result<()> {
        if self.version != MENU_TREE_VERSION {
            return Err(AppError::InvalidConfiguration(format!(
                "unsupported menu tree version {} (expected {})",
                self.version, MENU_TREE_VERSION
            )));
        }

        let mut seen = HashSet::new();
        for node in self.iter() {
            if !seen.insert(node.key.as_str()) {
                return Err(AppError::DuplicateMenuKey(node.key.clone()));
            }
        }

        for trigger in &self.group_triggers {
            if !self.is_group_key(&trigger.group_key) {
                return Err(AppError::InvalidConfiguration(format!(
                    "group trigger '{}' targets '{}', which is not a menu group",
                    trigger.prefix, trigger.group_key
                )));
            }
        }

        Ok(())
    }

    /// Depth-first walk over every node, hidden ones included
    pub fn iter(&self) -> impl Iterator<Item = &MenuNode> {
        let mut stack: Vec<&MenuNode> = self.items.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }

    pub fn find(&self, key: &str) -> Option<&MenuNode> {
        self.iter().find(|node| node.key == key)
    }

    pub fn is_group_key(&self, key: &str) -> bool {
        self.find(key).is_some_and(MenuNode::is_group)
    }

    /// Group opened by `path`: longest matching prefix, first declared on ties
    pub fn group_for_path(&self, path: &str) -> Option<&str> {
        let mut best: Option<&GroupTrigger> = None;
        for trigger in &self.group_triggers {
            if !path.starts_with(trigger.prefix.as_str()) {
                continue;
            }
            if best.is_none_or(|b| trigger.prefix.len() > b.prefix.len()) {
                best = Some(trigger);
            }
        }
        best.map(|trigger| trigger.group_key.as_str())
    }
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::builtin()
    }
}
