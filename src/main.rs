use ridge_detector::image::ImageF64;
use ridge_detector::{RidgeDetector, RidgeOptions};

fn main() {
    // Demo: two bright horizontal bands on a dark background.
    let (w, h) = (64usize, 48usize);
    let image = ImageF64::from_fn(w, h, |_, y| {
        if (14..=16).contains(&y) || (31..=33).contains(&y) {
            1.0
        } else {
            0.0
        }
    });

    let detector = RidgeDetector::new(RidgeOptions::with_width(3.0));
    match detector.detect_with_report(&image) {
        Ok(report) => {
            println!("{}", report.summary());
            for (i, line) in report.polylines.iter().enumerate() {
                let pts = line.points();
                if let (Some(first), Some(last)) = (pts.first(), pts.last()) {
                    println!(
                        "  #{i}: {} points ({}, {}) -> ({}, {})",
                        line.len(),
                        first.x,
                        first.y,
                        last.x,
                        last.y
                    );
                }
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
