//! # Decision Tree Estimators
//!
//! File: cli/src/model/tree.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Decision trees are stored in the artifact as parallel arrays, one entry per
//! node, in the layout tree exporters commonly use:
//!
//! | array            | internal node          | leaf  |
//! |------------------|------------------------|-------|
//! | `feature`        | column index (0..3)    | any   |
//! | `threshold`      | split value            | any   |
//! | `children_left`  | node index             | `-1`  |
//! | `children_right` | node index             | `-1`  |
//! | `class`          | any                    | 0 / 1 |
//!
//! A row goes left when `row[feature] <= threshold`. Every child index must be
//! greater than its parent's, so traversal always reaches a leaf.
//!
//! A random forest is a list of such trees combined by majority vote; a tie
//! resolves to `NoFlood`.
//!
use super::FloodLabel;
use crate::weather::FEATURE_COUNT;
use serde::Deserialize;

const LEAF: i64 = -1;

/// Raw tree arrays as they appear in the artifact.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeParams {
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub class: Vec<i64>,
}

/// Raw forest parameters as they appear in the artifact.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForestParams {
    pub trees: Vec<TreeParams>,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(FloodLabel),
}

/// A validated binary decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Validates raw arrays and builds the tree.
    ///
    /// Returns a human-readable description of the first problem found.
    pub fn from_params(params: TreeParams) -> Result<Self, String> {
        let n = params.feature.len();
        if n == 0 {
            return Err("decision tree has no nodes".into());
        }
        let lengths = [
            params.threshold.len(),
            params.children_left.len(),
            params.children_right.len(),
            params.class.len(),
        ];
        if lengths.iter().any(|&len| len != n) {
            return Err(format!(
                "decision tree arrays differ in length (feature: {}, threshold: {}, children_left: {}, children_right: {}, class: {})",
                n, lengths[0], lengths[1], lengths[2], lengths[3]
            ));
        }

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            let (left, right) = (params.children_left[i], params.children_right[i]);
            if left == LEAF && right == LEAF {
                let label = FloodLabel::from_class(params.class[i]).ok_or_else(|| {
                    format!(
                        "leaf node {} has class {} (expected 0 or 1)",
                        i, params.class[i]
                    )
                })?;
                nodes.push(Node::Leaf(label));
                continue;
            }

            let feature = usize::try_from(params.feature[i])
                .ok()
                .filter(|&f| f < FEATURE_COUNT)
                .ok_or_else(|| {
                    format!(
                        "node {} splits on feature {} (expected 0..{})",
                        i, params.feature[i], FEATURE_COUNT
                    )
                })?;
            let threshold = params.threshold[i];
            if !threshold.is_finite() {
                return Err(format!("node {} has a non-finite threshold", i));
            }
            let left = child_index(i, left, n)?;
            let right = child_index(i, right, n)?;
            nodes.push(Node::Split {
                feature,
                threshold,
                left,
                right,
            });
        }
        Ok(Self { nodes })
    }

    /// Classifies one row.
    pub fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> FloodLabel {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf(label) => return *label,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

fn child_index(parent: usize, child: i64, n: usize) -> Result<usize, String> {
    usize::try_from(child)
        .ok()
        .filter(|&c| c > parent && c < n)
        .ok_or_else(|| {
            format!(
                "node {} has child index {} (must be greater than {} and less than {})",
                parent, child, parent, n
            )
        })
}

/// A majority-vote ensemble of decision trees.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn from_params(params: ForestParams) -> Result<Self, String> {
        if params.trees.is_empty() {
            return Err("random forest has no trees".into());
        }
        let trees = params
            .trees
            .into_iter()
            .enumerate()
            .map(|(i, tree)| DecisionTree::from_params(tree).map_err(|e| format!("tree {}: {}", i, e)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { trees })
    }

    /// Classifies one row by majority vote.
    pub fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> FloodLabel {
        let flood_votes = self
            .trees
            .iter()
            .filter(|tree| tree.predict_row(row) == FloodLabel::FloodLikely)
            .count();
        if flood_votes * 2 > self.trees.len() {
            FloodLabel::FloodLikely
        } else {
            FloodLabel::NoFlood
        }
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// rainfall <= 100 → no flood, otherwise flood.
    fn stump(threshold: f64) -> TreeParams {
        TreeParams {
            feature: vec![0, -2, -2],
            threshold: vec![threshold, -2.0, -2.0],
            children_left: vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            class: vec![-1, 0, 1],
        }
    }

    #[test]
    fn test_stump_predicts_on_both_sides_of_threshold() {
        let tree = DecisionTree::from_params(stump(100.0)).unwrap();
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.predict_row(&[50.0, 30.0, 70.0]), FloodLabel::NoFlood);
        assert_eq!(tree.predict_row(&[100.0, 30.0, 70.0]), FloodLabel::NoFlood);
        assert_eq!(tree.predict_row(&[100.1, 30.0, 70.0]), FloodLabel::FloodLikely);
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = DecisionTree::from_params(TreeParams {
            feature: vec![-2],
            threshold: vec![-2.0],
            children_left: vec![-1],
            children_right: vec![-1],
            class: vec![1],
        })
        .unwrap();
        assert_eq!(tree.predict_row(&[0.0, 0.0, 0.0]), FloodLabel::FloodLikely);
    }

    #[test]
    fn test_rejects_empty_and_ragged_arrays() {
        let empty = TreeParams {
            feature: vec![],
            threshold: vec![],
            children_left: vec![],
            children_right: vec![],
            class: vec![],
        };
        assert!(DecisionTree::from_params(empty).unwrap_err().contains("no nodes"));

        let mut ragged = stump(1.0);
        ragged.class.pop();
        assert!(DecisionTree::from_params(ragged)
            .unwrap_err()
            .contains("differ in length"));
    }

    #[test]
    fn test_rejects_backward_child_index() {
        let mut cyclic = stump(1.0);
        cyclic.children_left[0] = 0;
        assert!(DecisionTree::from_params(cyclic)
            .unwrap_err()
            .contains("child index 0"));

        let mut out_of_range = stump(1.0);
        out_of_range.children_right[0] = 7;
        assert!(DecisionTree::from_params(out_of_range).is_err());
    }

    #[test]
    fn test_rejects_bad_feature_and_leaf_class() {
        let mut bad_feature = stump(1.0);
        bad_feature.feature[0] = 3;
        assert!(DecisionTree::from_params(bad_feature)
            .unwrap_err()
            .contains("feature 3"));

        let mut bad_class = stump(1.0);
        bad_class.class[2] = 2;
        assert!(DecisionTree::from_params(bad_class)
            .unwrap_err()
            .contains("class 2"));
    }

    #[test]
    fn test_forest_majority_vote_and_tie() {
        let forest = RandomForest::from_params(ForestParams {
            trees: vec![stump(10.0), stump(20.0), stump(30.0)],
        })
        .unwrap();
        assert_eq!(forest.tree_count(), 3);
        assert_eq!(forest.predict_row(&[5.0, 0.0, 0.0]), FloodLabel::NoFlood);
        assert_eq!(forest.predict_row(&[25.0, 0.0, 0.0]), FloodLabel::FloodLikely);

        let tied = RandomForest::from_params(ForestParams {
            trees: vec![stump(10.0), stump(20.0)],
        })
        .unwrap();
        assert_eq!(tied.predict_row(&[15.0, 0.0, 0.0]), FloodLabel::NoFlood);
    }

    #[test]
    fn test_empty_forest_rejected() {
        let err = RandomForest::from_params(ForestParams { trees: vec![] }).unwrap_err();
        assert!(err.contains("no trees"));
    }
}
