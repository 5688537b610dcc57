//! Regression trees grown on gradient statistics
//!
//! Each tree fits the negative gradient of the loss using second-order
//! split gain:
//!
//! `gain = ½·[G_L²/(H_L+λ) + G_R²/(H_R+λ) − G²/(H+λ)] − γ`
//!
//! with leaf weight `−G/(H+λ)` scaled by the learning rate. Candidate
//! thresholds are midpoints between consecutive distinct feature values.

use rayon::prelude::*;

use crate::pipeline::FeatureMatrix;

/// Splits whose gain does not exceed this are treated as no improvement
const MIN_SPLIT_GAIN: f64 = 1e-6;

/// Growth parameters for a single tree
#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    pub max_depth: usize,
    pub learning_rate: f64,
    pub reg_lambda: f64,
    pub min_child_weight: f64,
    pub gamma: f64,
}

#[derive(Debug, Clone)]
enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        gain: f64,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    feature: usize,
    threshold: f64,
    gain: f64,
}

/// A fitted regression tree stored as a flat node array, root at index 0
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Grow a tree over `rows` of `x` using the matching gradient statistics.
    ///
    /// `gradients` and `hessians` are indexed by row of `x`.
    pub fn fit(
        x: &FeatureMatrix,
        gradients: &[f64],
        hessians: &[f64],
        rows: &[usize],
        params: &TreeParams,
    ) -> Self {
        let mut nodes = Vec::new();
        build_node(x, gradients, hessians, rows, params, 0, &mut nodes);
        Self { nodes }
    }

    /// Leaf value reached by `row` of `x`
    pub fn predict_row(&self, x: &FeatureMatrix, row: usize) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    idx = if x.get(row, *feature) <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, TreeNode::Leaf { .. }))
            .count()
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[TreeNode], idx: usize) -> usize {
            match &nodes[idx] {
                TreeNode::Leaf { .. } => 0,
                TreeNode::Split { left, right, .. } => {
                    1 + walk(nodes, *left).max(walk(nodes, *right))
                }
            }
        }
        walk(&self.nodes, 0)
    }

    /// Total split gain credited to each feature
    pub fn feature_gains(&self, n_features: usize) -> Vec<f64> {
        let mut gains = vec![0.0; n_features];
        for node in &self.nodes {
            if let TreeNode::Split { feature, gain, .. } = node {
                if *feature < n_features {
                    gains[*feature] += gain;
                }
            }
        }
        gains
    }
}

fn leaf_weight(grad_sum: f64, hess_sum: f64, params: &TreeParams) -> f64 {
    -grad_sum / (hess_sum + params.reg_lambda) * params.learning_rate
}

#[inline]
fn score(grad_sum: f64, hess_sum: f64, lambda: f64) -> f64 {
    grad_sum * grad_sum / (hess_sum + lambda)
}

fn build_node(
    x: &FeatureMatrix,
    gradients: &[f64],
    hessians: &[f64],
    rows: &[usize],
    params: &TreeParams,
    depth: usize,
    nodes: &mut Vec<TreeNode>,
) -> usize {
    let grad_sum: f64 = rows.iter().map(|&r| gradients[r]).sum();
    let hess_sum: f64 = rows.iter().map(|&r| hessians[r]).sum();

    let make_leaf = |nodes: &mut Vec<TreeNode>| {
        let idx = nodes.len();
        nodes.push(TreeNode::Leaf {
            value: leaf_weight(grad_sum, hess_sum, params),
        });
        idx
    };

    if depth >= params.max_depth || rows.len() < 2 {
        return make_leaf(nodes);
    }

    let Some(best) = find_best_split(x, gradients, hessians, rows, grad_sum, hess_sum, params)
    else {
        return make_leaf(nodes);
    };

    let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
        .iter()
        .partition(|&&r| x.get(r, best.feature) <= best.threshold);

    if left_rows.is_empty() || right_rows.is_empty() {
        return make_leaf(nodes);
    }

    let node_idx = nodes.len();
    nodes.push(TreeNode::Leaf { value: 0.0 }); // placeholder

    let left = build_node(x, gradients, hessians, &left_rows, params, depth + 1, nodes);
    let right = build_node(x, gradients, hessians, &right_rows, params, depth + 1, nodes);

    nodes[node_idx] = TreeNode::Split {
        feature: best.feature,
        threshold: best.threshold,
        left,
        right,
        gain: best.gain,
    };
    node_idx
}

/// Best split across all features, searched in parallel.
///
/// Equal gains resolve to the lowest feature index so results do not
/// depend on thread scheduling.
fn find_best_split(
    x: &FeatureMatrix,
    gradients: &[f64],
    hessians: &[f64],
    rows: &[usize],
    grad_sum: f64,
    hess_sum: f64,
    params: &TreeParams,
) -> Option<SplitCandidate> {
    let parent_score = score(grad_sum, hess_sum, params.reg_lambda);

    let per_feature: Vec<SplitCandidate> = (0..x.ncols())
        .into_par_iter()
        .filter_map(|feature| {
            best_split_for_feature(
                x,
                gradients,
                hessians,
                rows,
                feature,
                grad_sum,
                hess_sum,
                parent_score,
                params,
            )
        })
        .collect();

    per_feature.into_iter().fold(None, |best, cand| match best {
        Some(b) if b.gain >= cand.gain => Some(b),
        _ => Some(cand),
    })
}

#[allow(clippy::too_many_arguments)]
fn best_split_for_feature(
    x: &FeatureMatrix,
    gradients: &[f64],
    hessians: &[f64],
    rows: &[usize],
    feature: usize,
    grad_sum: f64,
    hess_sum: f64,
    parent_score: f64,
    params: &TreeParams,
) -> Option<SplitCandidate> {
    let mut entries: Vec<(f64, f64, f64)> = rows
        .iter()
        .map(|&r| (x.get(r, feature), gradients[r], hessians[r]))
        .collect();
    entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut best: Option<SplitCandidate> = None;
    let mut grad_left = 0.0;
    let mut hess_left = 0.0;

    for i in 0..entries.len() - 1 {
        grad_left += entries[i].1;
        hess_left += entries[i].2;

        // No threshold separates equal values
        if entries[i].0 == entries[i + 1].0 {
            continue;
        }

        let grad_right = grad_sum - grad_left;
        let hess_right = hess_sum - hess_left;
        if hess_left < params.min_child_weight || hess_right < params.min_child_weight {
            continue;
        }

        let gain = 0.5
            * (score(grad_left, hess_left, params.reg_lambda)
                + score(grad_right, hess_right, params.reg_lambda)
                - parent_score)
            - params.gamma;

        if gain > MIN_SPLIT_GAIN && best.map_or(true, |b| gain > b.gain) {
            best = Some(SplitCandidate {
                feature,
                threshold: (entries[i].0 + entries[i + 1].0) / 2.0,
                gain,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(max_depth: usize) -> TreeParams {
        TreeParams {
            max_depth,
            learning_rate: 1.0,
            reg_lambda: 0.0,
            min_child_weight: 0.0,
            gamma: 0.0,
        }
    }

    fn matrix(values: &[f64]) -> FeatureMatrix {
        let rows: Vec<Vec<f64>> = values.iter().map(|&v| vec![v]).collect();
        FeatureMatrix::from_rows(&rows, vec!["f".to_string()])
    }

    #[test]
    fn test_single_split_separates_gradients() {
        let x = matrix(&[1.0, 2.0, 3.0, 4.0]);
        let g = vec![1.0, 1.0, -1.0, -1.0];
        let h = vec![1.0; 4];
        let rows: Vec<usize> = (0..4).collect();

        let tree = RegressionTree::fit(&x, &g, &h, &rows, &params(1));
        assert_eq!(tree.n_leaves(), 2);
        assert_eq!(tree.depth(), 1);
        assert!((tree.predict_row(&x, 0) + 1.0).abs() < 1e-12);
        assert!((tree.predict_row(&x, 3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_feature_gives_leaf() {
        let x = matrix(&[5.0, 5.0, 5.0]);
        let g = vec![1.0, -1.0, 1.0];
        let h = vec![1.0; 3];
        let rows: Vec<usize> = (0..3).collect();

        let tree = RegressionTree::fit(&x, &g, &h, &rows, &params(3));
        assert_eq!(tree.n_leaves(), 1);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_depth_limit_respected() {
        let values: Vec<f64> = (0..32).map(|i| i as f64).collect();
        let x = matrix(&values);
        let g: Vec<f64> = (0..32).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let h = vec![1.0; 32];
        let rows: Vec<usize> = (0..32).collect();

        let tree = RegressionTree::fit(&x, &g, &h, &rows, &params(3));
        assert!(tree.depth() <= 3);
    }

    #[test]
    fn test_min_child_weight_blocks_split() {
        let x = matrix(&[1.0, 2.0]);
        let g = vec![1.0, -1.0];
        let h = vec![1.0, 1.0];
        let p = TreeParams {
            min_child_weight: 2.0,
            ..params(2)
        };
        let tree = RegressionTree::fit(&x, &g, &h, &[0, 1], &p);
        assert_eq!(tree.n_leaves(), 1);
    }

    #[test]
    fn test_feature_gains_credit_split_feature() {
        let rows_data = vec![
            vec![0.0, 1.0],
            vec![0.0, 2.0],
            vec![0.0, 3.0],
            vec![0.0, 4.0],
        ];
        let x = FeatureMatrix::from_rows(&rows_data, vec!["noise".into(), "signal".into()]);
        let g = vec![1.0, 1.0, -1.0, -1.0];
        let h = vec![1.0; 4];
        let tree = RegressionTree::fit(&x, &g, &h, &[0, 1, 2, 3], &params(1));
        let gains = tree.feature_gains(2);
        assert_eq!(gains[0], 0.0);
        assert!(gains[1] > 0.0);
    }
}
