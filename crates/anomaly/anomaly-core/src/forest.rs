//! Isolation forest ensemble.

use anomaly_api::IsolationForestConfig;
use anomaly_spi::{AnomalyError, OutlierEnsemble, OutlierVerdict, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Euler-Mascheroni constant, for the harmonic-number approximation.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Cap on the automatic per-tree subsample size.
const MAX_AUTO_SAMPLE: usize = 256;

enum Node {
    Split {
        attribute: usize,
        value: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        size: usize,
    },
}

/// Isolation forest outlier ensemble.
///
/// Scores rows by how quickly random axis-aligned splits isolate them:
/// outliers end up alone after few splits, inliers need many. Each tree is
/// grown on a subsample of the batch, splitting a random attribute with
/// remaining spread at a uniform point until rows are isolated or the height
/// limit is reached. The decision threshold is placed at the batch's
/// `1 - contamination` score percentile; rows strictly above it are outliers.
pub struct IsolationForest {
    config: IsolationForestConfig,
    trees: Vec<Node>,
    sample_size: usize,
    fitted: bool,
}

impl IsolationForest {
    /// Create an unfitted forest with the given configuration.
    pub fn new(config: IsolationForestConfig) -> Self {
        Self {
            config,
            trees: Vec::new(),
            sample_size: 0,
            fitted: false,
        }
    }

    /// Check whether the forest has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn fit(&mut self, rows: &[Vec<f64>]) -> Result<()> {
        if rows.len() < 2 {
            return Err(AnomalyError::InsufficientData {
                required: 2,
                got: rows.len(),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.iter().any(|v| !v.is_finite()) {
                return Err(AnomalyError::DetectorFit(format!(
                    "non-finite value in row {}",
                    i
                )));
            }
        }

        let psi = self
            .config
            .sample_size
            .unwrap_or(MAX_AUTO_SAMPLE)
            .min(rows.len())
            .max(2);
        let height_limit = (psi as f64).log2().ceil() as usize;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        self.trees = (0..self.config.tree_count)
            .map(|_| {
                let indices = rand::seq::index::sample(&mut rng, rows.len(), psi).into_vec();
                build_node(rows, &indices, 0, height_limit, &mut rng)
            })
            .collect();
        self.sample_size = psi;
        self.fitted = true;
        Ok(())
    }

    fn score_row(&self, row: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| path_length(tree, row, 0.0)).sum();
        let mean_path = total / self.trees.len() as f64;
        2f64.powf(-mean_path / average_path_length(self.sample_size))
    }
}

impl OutlierEnsemble for IsolationForest {
    fn fit_predict(&mut self, rows: &[Vec<f64>]) -> Result<OutlierVerdict> {
        self.fit(rows)?;

        let scores: Vec<f64> = rows.iter().map(|row| self.score_row(row)).collect();
        let threshold = percentile(&scores, 100.0 * (1.0 - self.config.contamination));
        let is_anomaly: Vec<bool> = scores.iter().map(|&s| s > threshold).collect();

        Ok(OutlierVerdict::new(is_anomaly, scores, threshold))
    }
}

fn build_node(
    rows: &[Vec<f64>],
    indices: &[usize],
    depth: usize,
    height_limit: usize,
    rng: &mut StdRng,
) -> Node {
    if depth >= height_limit || indices.len() <= 1 {
        return Node::Leaf {
            size: indices.len(),
        };
    }

    // Only attributes with remaining spread qualify for a split.
    let columns = rows[indices[0]].len();
    let qualified: Vec<usize> = (0..columns)
        .filter(|&attribute| {
            let (min, max) = column_bounds(rows, indices, attribute);
            min < max
        })
        .collect();
    if qualified.is_empty() {
        return Node::Leaf {
            size: indices.len(),
        };
    }

    let attribute = qualified[rng.gen_range(0..qualified.len())];
    let (min, max) = column_bounds(rows, indices, attribute);
    let value = rng.gen_range(min..max);

    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| rows[i][attribute] < value);

    Node::Split {
        attribute,
        value,
        left: Box::new(build_node(rows, &left, depth + 1, height_limit, rng)),
        right: Box::new(build_node(rows, &right, depth + 1, height_limit, rng)),
    }
}

fn column_bounds(rows: &[Vec<f64>], indices: &[usize], attribute: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &i in indices {
        let v = rows[i][attribute];
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}

fn path_length(node: &Node, row: &[f64], depth: f64) -> f64 {
    match node {
        Node::Leaf { size } => depth + average_path_length(*size),
        Node::Split {
            attribute,
            value,
            left,
            right,
        } => {
            if row[*attribute] < *value {
                path_length(left, row, depth + 1.0)
            } else {
                path_length(right, row, depth + 1.0)
            }
        }
    }
}

/// Average path length of an unsuccessful BST search over `n` points.
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

/// Linearly interpolated percentile, `pct` in `[0, 100]`.
fn percentile(values: &[f64], pct: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (sorted.len() - 1) as f64 * pct.clamp(0.0, 100.0) / 100.0;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_with_outlier() -> Vec<Vec<f64>> {
        let mut rows: Vec<Vec<f64>> = (0..50).map(|i| vec![(i % 7) as f64 * 0.1]).collect();
        rows.push(vec![100.0]);
        rows
    }

    #[test]
    fn test_outlier_scores_highest() {
        let mut forest = IsolationForest::new(IsolationForestConfig::default());
        let rows = rows_with_outlier();

        let verdict = forest.fit_predict(&rows).unwrap();

        let max_idx = verdict
            .scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(max_idx, 50);
        assert!(verdict.is_anomaly[50]);
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let rows = rows_with_outlier();

        let mut first = IsolationForest::new(IsolationForestConfig::default().with_seed(7));
        let mut second = IsolationForest::new(IsolationForestConfig::default().with_seed(7));

        let a = first.fit_predict(&rows).unwrap();
        let b = second.fit_predict(&rows).unwrap();

        assert_eq!(a.scores, b.scores);
        assert_eq!(a.is_anomaly, b.is_anomaly);
    }

    #[test]
    fn test_zero_variance_batch_labels_all_normal() {
        let rows = vec![vec![1.0]; 20];
        let mut forest = IsolationForest::new(IsolationForestConfig::default());

        let verdict = forest.fit_predict(&rows).unwrap();

        assert!(verdict.is_anomaly.iter().all(|&flag| !flag));
        assert!(verdict.scores.iter().all(|&s| (s - verdict.scores[0]).abs() < 1e-12));
    }

    #[test]
    fn test_insufficient_data() {
        let mut forest = IsolationForest::new(IsolationForestConfig::default());
        let err = forest.fit_predict(&[vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            AnomalyError::InsufficientData { required: 2, got: 1 }
        ));
    }

    #[test]
    fn test_non_finite_input_fails_fit() {
        let mut forest = IsolationForest::new(IsolationForestConfig::default());
        let rows = vec![vec![1.0], vec![f64::NAN], vec![2.0]];
        let err = forest.fit_predict(&rows).unwrap_err();
        assert!(matches!(err, AnomalyError::DetectorFit(_)));
        assert!(!forest.is_fitted());
    }

    #[test]
    fn test_scores_bounded() {
        let mut forest = IsolationForest::new(IsolationForestConfig::default());
        let verdict = forest.fit_predict(&rows_with_outlier()).unwrap();
        assert!(verdict.scores.iter().all(|&s| s > 0.0 && s < 1.0));
    }

    #[test]
    fn test_average_path_length() {
        assert_eq!(average_path_length(0), 0.0);
        assert_eq!(average_path_length(1), 0.0);
        assert_eq!(average_path_length(2), 1.0);
        assert!(average_path_length(256) > average_path_length(16));
    }

    #[test]
    fn test_percentile_interpolation() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&values, 50.0), 3.0);
        assert!((percentile(&values, 90.0) - 4.6).abs() < 1e-12);
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 100.0), 5.0);
    }
}
