//! Example: A three-set diagram with composed labels
//!
//! Computes region labels showing each region's key, size and share of the
//! union, then renders them with a custom palette and writes `three_sets.svg`.

use venndraw::{DrawOptions, Fill, FillMode, get_labels, venn3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rust: Vec<&str> = vec!["cargo", "clippy", "rustfmt", "miri", "rustdoc"];
    let go: Vec<&str> = vec!["gofmt", "vet", "godoc", "pprof"];
    let linters: Vec<&str> = vec!["rustfmt", "gofmt", "pprof", "clippy"];

    let fill = Fill::new([FillMode::Logic, FillMode::Number, FillMode::Percent]);
    let labels = get_labels([rust, go, linters], &fill)?;

    for (_, label) in labels.iter() {
        println!("{label}");
    }

    let options = DrawOptions::default()
        .with_color_strings(["#e6550d80", "#3182bd80", "#31a35480"])?
        .with_font_size(16);

    let figure = venn3(&labels, &["Rust", "Go", "Linters"], &options)?;
    figure.save("three_sets.svg")?;

    println!("\nWrote three_sets.svg ({}x{} px)", figure.size().width(), figure.size().height());
    Ok(())
}
