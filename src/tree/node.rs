//! Defines the inner representation of the fitted decision tree.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::error::PredictError;
use crate::sample::{Label, Record};
use super::split_rule::{LR, SplitRule};


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that has exactly two children.
    Branch(BranchNode),

    /// A node that has no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of a decision tree.
/// Each `BranchNode` holds a splitting rule and two children:
/// `left` is taken when the rule's test matches, `right` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) rule: SplitRule,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


impl BranchNode {
    /// Returns the splitting rule of this branch.
    #[inline]
    pub fn rule(&self) -> &SplitRule {
        &self.rule
    }


    /// Returns the child taken when the rule matches.
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }


    /// Returns the child taken when the rule does not match.
    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }
}


/// Represents the leaf nodes of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: Label,
}


impl LeafNode {
    /// Returns the label this leaf predicts.
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }
}


impl Node {
    #[inline]
    pub(super) fn branch(rule: SplitRule, left: Node, right: Node) -> Self {
        Self::Branch(BranchNode {
            rule,
            left: Box::new(left),
            right: Box::new(right),
        })
    }


    #[inline]
    pub(super) fn leaf(label: Label) -> Self {
        Self::Leaf(LeafNode { label })
    }


    /// Descend from `self` to a leaf, following each branch's rule
    /// against `record`, and return the leaf's label.
    pub fn label_for<'a>(&'a self, record: &Record)
        -> Result<&'a Label, PredictError>
    {
        match self {
            Node::Leaf(leaf) => Ok(&leaf.label),
            Node::Branch(branch) => match branch.rule.split(record)? {
                LR::Left => branch.left.label_for(record),
                LR::Right => branch.right.label_for(record),
            },
        }
    }


    /// Counts the branch nodes of the subtree rooted at `self`.
    pub fn branch_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(branch) => {
                1 + branch.left.branch_count() + branch.right.branch_count()
            },
        }
    }


    /// Counts the leaf nodes of the subtree rooted at `self`.
    /// For any binary tree, `leaf_count() == branch_count() + 1`.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(branch) => {
                branch.left.leaf_count() + branch.right.leaf_count()
            },
        }
    }


    /// The canonical textual rendering: a branch prints its question,
    /// then the no-match subtree, then an `otherwise:` marker and the
    /// match subtree; a leaf prints its label. The traversal order is
    /// fixed so dumps are reproducible.
    pub(super) fn write_indented(
        &self,
        f: &mut fmt::Formatter<'_>,
        depth: usize,
    ) -> fmt::Result
    {
        let pad = "  ".repeat(depth);
        match self {
            Node::Leaf(leaf) => writeln!(f, "{pad}{}", leaf.label),
            Node::Branch(branch) => {
                writeln!(f, "{pad}{} ?", branch.rule)?;
                branch.right.write_indented(f, depth + 1)?;
                writeln!(f, "{pad}otherwise:")?;
                branch.left.write_indented(f, depth + 1)
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(branch) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{} ?\" ];\n",
                    branch.rule,
                );

                let (l_info, next_id) = branch.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = branch.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1,
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id,
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{}\", \
                     shape = box, \
                     ];\n",
                    leaf.label,
                );

                (vec![info], id + 1)
            },
        }
    }
}
