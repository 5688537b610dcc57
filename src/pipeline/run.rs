//! End-to-end run: load → split → preprocess → partition → train → evaluate

use tracing::info;

use super::columns::resolve_column_kinds;
use super::config::PipelineConfig;
use super::error::Result;
use super::loader::load_dataset;
use super::metrics::accuracy_score;
use super::partition::train_test_split;
use super::preprocess::Preprocessor;
use super::split::split_features_target;
use super::target::encode_target;
use crate::boosting::GradientBoostedClassifier;
use crate::report::RunSummary;

/// Run every stage once and return the summary, accuracy included
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunSummary> {
    config.validate()?;

    let loaded = load_dataset(&config.file_path, &config.target_column)?;
    info!(
        rows = loaded.height(),
        dropped = loaded.rows_dropped,
        "Loaded {}",
        config.file_path.display()
    );

    let (features, target) = split_features_target(&loaded.df, &config.target_column)?;

    let kinds = resolve_column_kinds(&features, config.schema.as_ref())?;
    let (preprocessor, x) = Preprocessor::fit_transform(&features, &kinds)?;
    let y = encode_target(&target)?;
    info!(
        numeric = preprocessor.n_numeric(),
        categorical = preprocessor.n_categorical(),
        features = x.ncols(),
        classes = y.n_classes(),
        "Preprocessed features"
    );

    let split = train_test_split(&x, &y, config.test_fraction, config.seed)?;

    let model = GradientBoostedClassifier::fit(&split.x_train, &split.y_train, &config.boosting)?;

    let predictions = model.predict(&split.x_test)?;
    let accuracy = accuracy_score(split.y_test.labels(), &predictions)?;
    info!(accuracy, "Evaluated on held-out rows");

    let mut summary = RunSummary {
        rows_read: loaded.rows_read,
        rows_dropped: loaded.rows_dropped,
        numeric_columns: preprocessor.n_numeric(),
        categorical_columns: preprocessor.n_categorical(),
        processed_features: x.ncols(),
        train_rows: split.x_train.nrows(),
        test_rows: split.x_test.nrows(),
        classes: y.classes().to_vec(),
        trees: model.n_trees(),
        accuracy,
        ..Default::default()
    };
    summary.set_feature_importances(x.names(), &model.feature_importances());

    Ok(summary)
}
