use plotters::prelude::*;

use bezier_sample::{Evaluator, Point2, Synthesizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let init = Point2::new(0f64, 0f64);
    let fin = Point2::new(10f64, 4f64);

    // a handful of reproducible cubics between the same endpoints
    let mut synth = Synthesizer::seeded(2024);
    let mut evaluator = Evaluator::new();
    let mut curves = Vec::new();
    for _ in 0..5 {
        let controls = synth.synthesize(init, fin, 0.35);
        let samples = evaluator.evaluate(controls.as_slice())?;
        println!("curve length {:.4}", samples.length());
        curves.push((controls, samples));
    }

    let root = BitMapBackend::new("synthesized_curves.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Synthesized cubic Bezier curves", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-5f64..15f64, -5f64..9f64)?;

    chart.configure_mesh().draw()?;

    for (index, (controls, samples)) in curves.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();

        // the control polygon
        chart.draw_series(LineSeries::new(
            controls.into_iter().map(|p| p.to_tuple()),
            color.mix(0.3),
        ))?;

        chart
            .draw_series(LineSeries::new(samples.iter().map(|p| p.to_tuple()), color))?
            .label(format!("B{}(t)", index))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
