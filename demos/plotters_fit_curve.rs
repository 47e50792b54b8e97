extern crate plotters;
use plotters::prelude::*;

use curvefit::{fit_curve, Point2, SegmentSampler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // a wobbly stroke as it might come out of a pen tablet
    let gesture: Vec<Point2<f64>> = (0..=60)
        .map(|i| {
            let t = i as f64 / 60.0;
            let x = 10.0 * t;
            let y = 3.0 * (6.0 * t).sin() + 0.15 * (47.0 * t).sin();
            Point2::new(x, y)
        })
        .collect();

    let tolerance = 0.05;
    let path = fit_curve(&gesture, tolerance);
    println!("{} points -> {} segments", gesture.len(), path.len());

    let sampler = SegmentSampler::new(32)?;
    let fitted: Vec<(f64, f64)> = path
        .segments()
        .flat_map(|s| sampler.sample(s))
        .map(|p| (p.x, p.y))
        .collect();
    let input: Vec<(f64, f64)> = gesture.iter().map(|p| (p.x, p.y)).collect();
    let anchors: Vec<(f64, f64)> = path
        .segments()
        .map(|s| s.start())
        .chain(path.end())
        .map(|p| (p.x, p.y))
        .collect();

    let root = BitMapBackend::new("fit_curve.png", (800, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Fitted Bezier Path (max squared error {})", tolerance),
            ("sans-serif", 21).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-0.5f64..10.5f64, -4.5f64..4.5f64)?;

    chart.configure_mesh().draw()?;

    // draw the input polyline
    chart
        .draw_series(LineSeries::new(input.clone(), &BLUE.mix(0.4)))?
        .label("Input")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart.draw_series(PointSeries::of_element(
        input,
        2,
        &BLUE,
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled()),
    ))?;

    // draw the fitted curve
    chart
        .draw_series(LineSeries::new(fitted, &RED))?
        .label("Fitted")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    // draw the segment anchors
    chart
        .draw_series(PointSeries::of_element(
            anchors,
            5,
            &BLACK,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?
        .label("Anchors")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, &BLACK));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
