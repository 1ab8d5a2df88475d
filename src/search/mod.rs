//! Hyperparameter grid search
//!
//! Enumerates the Cartesian product of candidate learning rates and
//! regularization strengths, trains one classifier per point on the train
//! split and scores it on the test split. Selection is strictly-greater:
//! the first point to reach a given accuracy keeps it, so the enumeration
//! order (learning rates outer, regularizations inner) is observable and
//! must not change.

use crate::classifier::LinearClassifier;
use crate::core::{HyperParams, Result, SvmError};
use crate::data::Dataset;
use log::{debug, warn};

/// Outcome of a full search: the winning hyperparameters, a final model
/// retrained with them, and the best accuracy observed during the search
/// phase.
///
/// The accuracy is the one measured on the search-epoch model, not the
/// returned final-epoch model; the two can differ. Re-measuring would change
/// the reported numbers between runs with different final budgets, so the
/// search-phase value is kept.
#[derive(Debug)]
pub struct TrainingResult {
    /// Winning hyperparameter point
    pub params: HyperParams,
    /// Classifier retrained with `params` for `final_epochs`
    pub model: LinearClassifier,
    /// Best test-set accuracy recorded during the search phase, in [0, 1]
    pub accuracy: f64,
}

/// Score of a single completed grid trial
struct TrialScore {
    params: HyperParams,
    accuracy: f64,
}

/// Exhaustively search the hyperparameter grid.
///
/// Every `(learning_rate, regularization)` pair is evaluated with a fresh
/// classifier trained for `search_epochs`; the best pair is then retrained
/// from scratch for `final_epochs`. Points whose training blows up
/// numerically are skipped with a warning; if every point blows up the
/// search fails.
pub fn search(
    train: &Dataset,
    test: &Dataset,
    learning_rates: &[f64],
    regularizations: &[f64],
    search_epochs: usize,
    final_epochs: usize,
) -> Result<TrainingResult> {
    if learning_rates.is_empty() {
        return Err(SvmError::EmptyGrid("learning rates".to_string()));
    }
    if regularizations.is_empty() {
        return Err(SvmError::EmptyGrid("regularizations".to_string()));
    }

    // Learning rates outer, regularizations inner; this order decides ties
    let grid = learning_rates.iter().flat_map(|&learning_rate| {
        regularizations
            .iter()
            .map(move |&regularization| HyperParams::new(learning_rate, regularization))
    });

    let mut best: Option<TrialScore> = None;
    for params in grid {
        let Some(score) = run_trial(params, train, test, search_epochs)? else {
            continue;
        };

        debug!(
            "trial lr={} reg={}: accuracy {:.4}",
            params.learning_rate, params.regularization, score.accuracy
        );

        // Strictly greater: the first point to reach an accuracy wins ties
        if best.as_ref().map_or(true, |b| score.accuracy > b.accuracy) {
            best = Some(score);
        }
    }

    let best = best.ok_or_else(|| {
        SvmError::SearchFailed("every hyperparameter point diverged during training".to_string())
    })?;

    let mut model = LinearClassifier::from_params(best.params)?;
    model.train(train, final_epochs)?;

    Ok(TrainingResult {
        params: best.params,
        model,
        accuracy: best.accuracy,
    })
}

/// Evaluate one grid point: fresh classifier, train, score on the test set.
///
/// Returns `Ok(None)` when training hits numeric instability; any other
/// error propagates.
fn run_trial(
    params: HyperParams,
    train: &Dataset,
    test: &Dataset,
    search_epochs: usize,
) -> Result<Option<TrialScore>> {
    let mut classifier = LinearClassifier::from_params(params)?;

    match classifier.train(train, search_epochs) {
        Ok(()) => {}
        Err(SvmError::NumericInstability { epoch }) => {
            warn!(
                "skipping lr={} reg={}: non-finite weights after epoch {epoch}",
                params.learning_rate, params.regularization
            );
            return Ok(None);
        }
        Err(e) => return Err(e),
    }

    let accuracy = classifier.accuracy(test)?;
    Ok(Some(TrialScore { params, accuracy }))
}
