use approx::assert_abs_diff_eq;
use tabprep::{Column, FeaturePreprocessor, Frame, Loss, TargetPreprocessor, Transformer};

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}

#[test]
fn regression_pipeline_end_to_end() {
    let features = Frame::from_columns([
        ("age", Column::Numeric(vec![22.0, 38.0, 26.0, 35.0])),
        ("port", Column::from(vec!["S", "C", "S", "Q"])),
    ])
    .unwrap();
    let target = Column::Numeric(vec![7.25, 71.28, 7.92, 53.1]);

    let mut x_prep = FeaturePreprocessor::new();
    let mut y_prep = TargetPreprocessor::new(1).unwrap();
    let x = x_prep.fit_transform(&features, true).unwrap();
    let y = y_prep.fit_transform(&target, true).unwrap();

    assert_eq!(y_prep.loss(), Loss::MeanSquaredError);

    // Every output column is numeric and z-scored over the training data.
    for (_, col) in x.iter() {
        let (mean, std) = mean_and_std(col.as_numeric().unwrap());
        assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(std, 1.0, epsilon = 1e-10);
    }
    let (mean, std) = mean_and_std(y.as_numeric().unwrap());
    assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(std, 1.0, epsilon = 1e-10);
}

#[test]
fn classification_pipeline_end_to_end() {
    let features = Frame::from_columns([
        ("len", Column::Numeric(vec![4.9, 6.1, 5.0])),
        ("color", Column::from(vec!["red", "blue", "red"])),
    ])
    .unwrap();
    let target: Column = vec!["setosa", "virginica", "setosa"].into();

    let mut x_prep = FeaturePreprocessor::new();
    let mut y_prep = TargetPreprocessor::new(2).unwrap();
    x_prep.fit(&features).unwrap();
    y_prep.fit(&target).unwrap();

    assert_eq!(y_prep.loss(), Loss::Focal);
    assert_eq!(
        y_prep.transform(&target, true).unwrap(),
        Column::Numeric(vec![0.0, 1.0, 0.0])
    );

    // Held-out rows: seen categories keep their fit-time codes, unseen
    // feature categories fall back to 0.
    let held_out = Frame::from_columns([
        ("len", Column::Numeric(vec![5.5, 6.0])),
        ("color", Column::from(vec!["green", "blue"])),
    ])
    .unwrap();
    let out = x_prep.transform(&held_out, false).unwrap();
    assert_eq!(
        out.column("color").unwrap(),
        &Column::Numeric(vec![0.0, 1.0])
    );
}
