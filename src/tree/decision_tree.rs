//! Defines the fitted decision tree model.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::classifier::Classifier;
use crate::error::{ModelIoError, PredictError};
use crate::sample::{Label, Record};
use super::node::Node;


/// A fitted CART decision tree.
///
/// The tree exclusively owns its root [`Node`] and is immutable once
/// built; it also remembers the label domain seen during fit, in the
/// global tie-break ordering. Build one with
/// [`TreeBuilder`](crate::TreeBuilder), then reuse it for any number
/// of predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
    labels: Vec<Label>,
}


impl DecisionTree {
    #[inline]
    pub(crate) fn from_parts(root: Node, labels: Vec<Label>) -> Self {
        Self { root, labels }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Counts the decision nodes of the tree.
    #[inline]
    pub fn branch_count(&self) -> usize {
        self.root.branch_count()
    }


    /// Counts the leaves of the tree.
    /// Always equals `branch_count() + 1`.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }


    /// Write the current decision tree to a graphviz dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>,
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }


    /// Write the model to a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> Result<(), ModelIoError>
        where P: AsRef<Path>,
    {
        let file = File::create(&path)
            .map_err(|source| ModelIoError::Write {
                path: path.as_ref().to_path_buf(),
                source,
            })?;
        serde_json::to_writer(BufWriter::new(file), self)
            .map_err(|source| ModelIoError::Serialize { source })
    }


    /// Read a model back from a JSON file written by
    /// [`to_json_file`](DecisionTree::to_json_file).
    pub fn from_json_file<P>(path: P) -> Result<Self, ModelIoError>
        where P: AsRef<Path>,
    {
        let file = File::open(&path)
            .map_err(|source| ModelIoError::Read {
                path: path.as_ref().to_path_buf(),
                source,
            })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| ModelIoError::Deserialize { source })
    }
}


impl Classifier for DecisionTree {
    fn predict(&self, record: &Record) -> Result<Label, PredictError> {
        self.root.label_for(record).cloned()
    }


    fn labels(&self) -> &[Label] {
        &self.labels[..]
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_indented(f, 0)
    }
}
