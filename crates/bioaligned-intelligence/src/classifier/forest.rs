// ABOUTME: Random forest classifier evaluated from flattened decision trees
// ABOUTME: Averages normalized leaf class distributions across all trees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Trees are stored as flat node arrays, root at index 0. Every child index
//! must be greater than its parent's index, which rules out cycles and keeps
//! traversal a bounded forward walk.

use super::{normalize, ClassProbabilities, IntensityClassifier};
use crate::errors::{ArtifactError, InferenceError};
use bioaligned_core::constants::model::{CLASS_COUNT, FEATURE_COUNT};
use bioaligned_core::models::FeatureRow;
use serde::{Deserialize, Serialize};

const ARTIFACT: &str = "random_forest";

/// A node of a flattened decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Go `left` when `features[feature] <= threshold`, else `right`
    Split {
        /// Feature column tested
        feature: usize,
        /// Split threshold (on scaled values)
        threshold: f64,
        /// Index of the left child
        left: usize,
        /// Index of the right child
        right: usize,
    },
    /// Terminal node holding per-class sample counts or weights
    Leaf {
        /// Class distribution `[Low, Moderate, High]`
        value: Vec<f64>,
    },
}

/// One fitted decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Flattened nodes, root first
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn validate(&self, tree: usize) -> Result<(), ArtifactError> {
        if self.nodes.is_empty() {
            return Err(ArtifactError::invalid(ARTIFACT, format!("tree {tree} has no nodes")));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(ArtifactError::invalid(
                            ARTIFACT,
                            format!("tree {tree} node {index} splits on unknown feature {feature}"),
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(ArtifactError::invalid(
                            ARTIFACT,
                            format!("tree {tree} node {index} has a non-finite threshold"),
                        ));
                    }
                    for child in [*left, *right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(ArtifactError::invalid(
                                ARTIFACT,
                                format!("tree {tree} node {index} has invalid child {child}"),
                            ));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != CLASS_COUNT {
                        return Err(ArtifactError::shape(
                            ARTIFACT,
                            "leaf class values",
                            CLASS_COUNT,
                            value.len(),
                        ));
                    }
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0)
                        || value.iter().sum::<f64>() <= 0.0
                    {
                        return Err(ArtifactError::invalid(
                            ARTIFACT,
                            format!("tree {tree} leaf {index} has an invalid class distribution"),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Normalized class distribution of the leaf this row lands in
    fn leaf_distribution(&self, features: &FeatureRow) -> Result<ClassProbabilities, InferenceError> {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().unwrap_or(f64::NAN);
                    index = if value <= *threshold { *left } else { *right };
                }
                Some(TreeNode::Leaf { value }) => {
                    let mut scores = [0.0; CLASS_COUNT];
                    for (score, v) in scores.iter_mut().zip(value) {
                        *score = *v;
                    }
                    return normalize(scores);
                }
                None => {
                    return Err(InferenceError::NonFinite {
                        stage: "classifier",
                        column: index,
                    })
                }
            }
        }
    }
}

/// Fitted random forest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    /// Member trees
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Check every tree's structure
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] for an empty forest or the first malformed tree.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.trees.is_empty() {
            return Err(ArtifactError::invalid(ARTIFACT, "forest has no trees"));
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(index, tree)| tree.validate(index))
    }
}

impl IntensityClassifier for RandomForest {
    fn predict_proba(&self, features: &FeatureRow) -> Result<ClassProbabilities, InferenceError> {
        let mut totals = [0.0; CLASS_COUNT];
        for tree in &self.trees {
            let distribution = tree.leaf_distribution(features)?;
            for (total, p) in totals.iter_mut().zip(distribution) {
                *total += p;
            }
        }
        normalize(totals)
    }

    fn kind(&self) -> &'static str {
        ARTIFACT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Splits on scaled fatigue: rested rows go to a high-intensity leaf
    fn fatigue_stump() -> DecisionTree {
        serde_json::from_value(json!({
            "nodes": [
                {"feature": 3, "threshold": 0.0, "left": 1, "right": 2},
                {"value": [0.0, 2.0, 8.0]},
                {"value": [9.0, 1.0, 0.0]}
            ]
        }))
        .unwrap()
    }

    /// Always votes moderate
    fn moderate_leaf() -> DecisionTree {
        DecisionTree {
            nodes: vec![TreeNode::Leaf {
                value: vec![0.0, 1.0, 0.0],
            }],
        }
    }

    #[test]
    fn test_single_tree_follows_split() {
        let forest = RandomForest {
            trees: vec![fatigue_stump()],
        };
        forest.validate().unwrap();

        let mut rested = [0.0; 7];
        rested[3] = -1.0;
        assert_eq!(forest.predict_proba(&rested).unwrap(), [0.0, 0.2, 0.8]);

        let mut tired = [0.0; 7];
        tired[3] = 1.5;
        assert_eq!(forest.predict(&tired).unwrap().tier.index(), 0);
    }

    #[test]
    fn test_forest_averages_trees() {
        let forest = RandomForest {
            trees: vec![fatigue_stump(), moderate_leaf()],
        };
        let mut rested = [0.0; 7];
        rested[3] = -1.0;
        let probabilities = forest.predict_proba(&rested).unwrap();
        let expected = [0.0, 0.6, 0.4];
        for (p, e) in probabilities.iter().zip(expected) {
            assert!((p - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_validate_rejects_backward_child() {
        let tree: DecisionTree = serde_json::from_value(json!({
            "nodes": [
                {"feature": 0, "threshold": 0.5, "left": 1, "right": 2},
                {"feature": 1, "threshold": 0.5, "left": 0, "right": 2},
                {"value": [1.0, 0.0, 0.0]}
            ]
        }))
        .unwrap();
        let error = RandomForest { trees: vec![tree] }.validate().unwrap_err();
        assert!(error.to_string().contains("invalid child 0"));
    }

    #[test]
    fn test_validate_rejects_unknown_feature_and_bad_leaf() {
        let tree: DecisionTree = serde_json::from_value(json!({
            "nodes": [
                {"feature": 9, "threshold": 0.5, "left": 1, "right": 2},
                {"value": [1.0, 0.0, 0.0]},
                {"value": [1.0, 0.0, 0.0]}
            ]
        }))
        .unwrap();
        assert!(RandomForest { trees: vec![tree] }.validate().is_err());

        let leaf = DecisionTree {
            nodes: vec![TreeNode::Leaf {
                value: vec![0.0, 0.0, 0.0],
            }],
        };
        assert!(RandomForest { trees: vec![leaf] }.validate().is_err());
        assert!(RandomForest { trees: vec![] }.validate().is_err());
    }
}
