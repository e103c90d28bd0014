//! Random-forest regression.
//!
//! Trees use the flat parallel-array layout common to tree learners: node `i`
//! is a leaf when `children_left[i] == -1`, otherwise a sample goes left when
//! `x[feature[i]] <= threshold[i]`. Leaf predictions live in `value[i]`.
//!
//! ```json
//! {
//!   "n_features": 14,
//!   "trees": [
//!     {
//!       "children_left":  [1, -1, -1],
//!       "children_right": [2, -1, -1],
//!       "feature":        [6, -2, -2],
//!       "threshold":      [0.5, -2.0, -2.0],
//!       "value":          [100.0, 50.0, 150.0]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::Regressor;

/// Child index marking a leaf.
pub const LEAF: i64 = -1;

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TreeArrays", into = "TreeArrays")]
pub struct RegressionTree {
    nodes: TreeArrays,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TreeArrays {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    value: Vec<f64>,
}

impl RegressionTree {
    pub fn new(
        children_left: Vec<i64>,
        children_right: Vec<i64>,
        feature: Vec<i64>,
        threshold: Vec<f64>,
        value: Vec<f64>,
    ) -> Result<Self, EngineError> {
        Self::try_from(TreeArrays { children_left, children_right, feature, threshold, value })
    }

    /// A single-leaf tree.
    pub fn constant(value: f64) -> Result<Self, EngineError> {
        Self::new(vec![LEAF], vec![LEAF], vec![-2], vec![-2.0], vec![value])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.value.len()
    }

    /// Largest feature index any split reads, if the tree splits at all.
    pub fn max_feature(&self) -> Option<usize> {
        let n = &self.nodes;
        (0..self.node_count())
            .filter(|&i| n.children_left[i] != LEAF)
            .map(|i| n.feature[i] as usize)
            .max()
    }

    /// Leaf value for `x`. `x` must be at least `max_feature() + 1` wide.
    fn evaluate(&self, x: &[f64]) -> f64 {
        let n = &self.nodes;
        let mut node = 0usize;
        // Children always point forward, so this terminates.
        while n.children_left[node] != LEAF {
            node = if x[n.feature[node] as usize] <= n.threshold[node] {
                n.children_left[node] as usize
            } else {
                n.children_right[node] as usize
            };
        }
        n.value[node]
    }
}

impl TryFrom<TreeArrays> for RegressionTree {
    type Error = EngineError;

    fn try_from(nodes: TreeArrays) -> Result<Self, Self::Error> {
        let count = nodes.value.len();
        if count == 0 {
            return Err(EngineError::InvalidModel("tree has no nodes".into()));
        }
        let lengths = [
            nodes.children_left.len(),
            nodes.children_right.len(),
            nodes.feature.len(),
            nodes.threshold.len(),
        ];
        if lengths.iter().any(|&len| len != count) {
            return Err(EngineError::InvalidModel(format!(
                "node arrays differ in length (value has {count})"
            )));
        }

        for i in 0..count {
            let (left, right) = (nodes.children_left[i], nodes.children_right[i]);
            if left == LEAF || right == LEAF {
                if left != right {
                    return Err(EngineError::InvalidModel(format!(
                        "node {i}: exactly one child is a leaf marker"
                    )));
                }
                if !nodes.value[i].is_finite() {
                    return Err(EngineError::InvalidModel(format!("node {i}: leaf value is not finite")));
                }
                continue;
            }
            for child in [left, right] {
                if child <= i as i64 || child >= count as i64 {
                    return Err(EngineError::InvalidModel(format!(
                        "node {i}: child {child} out of range"
                    )));
                }
            }
            if nodes.feature[i] < 0 {
                return Err(EngineError::InvalidModel(format!(
                    "node {i}: split on negative feature {}",
                    nodes.feature[i]
                )));
            }
            if !nodes.threshold[i].is_finite() {
                return Err(EngineError::InvalidModel(format!("node {i}: threshold is not finite")));
            }
        }

        Ok(Self { nodes })
    }
}

impl From<RegressionTree> for TreeArrays {
    fn from(tree: RegressionTree) -> Self {
        tree.nodes
    }
}

// ---------------------------------------------------------------------------
// Forest
// ---------------------------------------------------------------------------

/// Mean of its trees' predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ForestRepr", into = "ForestRepr")]
pub struct RandomForest {
    n_features: usize,
    trees: Vec<RegressionTree>,
}

#[derive(Serialize, Deserialize)]
struct ForestRepr {
    n_features: usize,
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    pub fn new(n_features: usize, trees: Vec<RegressionTree>) -> Result<Self, EngineError> {
        if trees.is_empty() {
            return Err(EngineError::InvalidModel("forest has no trees".into()));
        }
        for (t, tree) in trees.iter().enumerate() {
            if let Some(f) = tree.max_feature() {
                if f >= n_features {
                    return Err(EngineError::InvalidModel(format!(
                        "tree {t}: splits on feature {f}, model has {n_features}"
                    )));
                }
            }
        }
        Ok(Self { n_features, trees })
    }

    pub fn trees(&self) -> &[RegressionTree] {
        &self.trees
    }
}

impl TryFrom<ForestRepr> for RandomForest {
    type Error = EngineError;

    fn try_from(repr: ForestRepr) -> Result<Self, Self::Error> {
        Self::new(repr.n_features, repr.trees)
    }
}

impl From<RandomForest> for ForestRepr {
    fn from(forest: RandomForest) -> Self {
        Self { n_features: forest.n_features, trees: forest.trees }
    }
}

impl Regressor for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<f64, EngineError> {
        if features.len() != self.n_features {
            return Err(EngineError::FeatureCountMismatch {
                expected: self.n_features,
                got: features.len(),
            });
        }
        let sum: f64 = self.trees.iter().map(|t| t.evaluate(features)).sum();
        let mean = sum / self.trees.len() as f64;
        if !mean.is_finite() {
            return Err(EngineError::NonFinite(mean));
        }
        Ok(mean)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
