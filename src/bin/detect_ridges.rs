use ridge_detector::config::ridges;
use ridge_detector::image::io::{
    load_grayscale_image, normalize_unit, render_overlay, save_grayscale_f64, write_json_file,
};
use ridge_detector::RidgeDetector;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = ridges::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let image = gray.as_view().to_f64();
    let detector = RidgeDetector::new(config.ridge.clone());

    let report = detector
        .detect_with_report(&image)
        .map_err(|e| format!("Ridge detection failed: {e}"))?;
    write_json_file(&config.output.report_json, &report)?;
    println!("{}", report.summary());
    if let Some(line) = report.longest() {
        println!(
            "Longest polyline: {} points, {:.1} px",
            line.len(),
            line.arc_length()
        );
    }
    println!(
        "Saved {} polylines to {}",
        report.polylines.len(),
        config.output.report_json.display()
    );

    if let Some(path) = &config.output.overlay_image {
        let overlay = render_overlay(&image, &report.polylines);
        save_grayscale_f64(&overlay, path)?;
        println!("Saved overlay to {}", path.display());
    }

    if let Some(path) = &config.output.magnitude_image {
        let field = detector
            .analyze(&image)
            .map_err(|e| format!("Ridge analysis failed: {e}"))?;
        save_grayscale_f64(&normalize_unit(&field.magnitude_image()), path)?;
        println!("Saved eigen magnitude image to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: detect_ridges <config.json>".to_string()
}
