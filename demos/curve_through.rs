use curvefit::{curve_through_flat, fit_curve_with, points_from_flat, CurveThroughConfig, FitConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=curvefit=trace shows every split and refinement decision
    env_logger::init();

    let coords = [
        0.0, 0.0, 12.0, 9.0, 25.0, 14.0, 40.0, 12.0, 52.0, 4.0, 60.0, -8.0, 71.0, -15.0, 85.0,
        -13.0, 96.0, -4.0, 100.0, 6.0,
    ];

    let points = points_from_flat(&coords)?;
    for tolerance in [0.5, 5.0, 50.0] {
        let path = fit_curve_with(&points, &FitConfig::new(tolerance));
        println!("max squared error {:>5}: {} segments", tolerance, path.len());
        for segment in path.segments() {
            println!("  {:?}", segment.to_flat());
        }
    }

    let config = CurveThroughConfig::default();
    let vertices = curve_through_flat(&coords, &config)?;
    println!(
        "curve_through: {} vertices ({} per segment)",
        vertices.len() / 2,
        config.points_in_arc + 1
    );
    for pair in vertices.chunks_exact(2) {
        println!("  ({:8.3}, {:8.3})", pair[0], pair[1]);
    }

    Ok(())
}
