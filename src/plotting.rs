use gnuplot::*;

pub fn plot_trend(observed: &[f64], truth: Option<&[f64]>, filtered: &[(String, Vec<f64>)]) {
    let mut fg = Figure::new();
    let ax = fg.axes2d();
    ax.lines(
        (0..observed.len()).map(|t| t as f64),
        observed.iter().copied(),
        &[Caption("Observed price")],
    )
    .set_x_grid(true)
    .set_y_grid(true);
    if let Some(truth) = truth {
        ax.lines(
            (0..truth.len()).map(|t| t as f64),
            truth.iter().copied(),
            &[Caption("True trend")],
        );
    }
    for (label, series) in filtered {
        ax.lines(
            (0..series.len()).map(|t| t as f64),
            series.iter().copied(),
            &[Caption(label.as_str())],
        );
    }
    fg.show().unwrap();
}
