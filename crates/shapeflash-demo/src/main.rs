use anyhow::Result;

use shapeflash_model::interpolators::{
    AlphaInterpolator, AngleInterpolator, ShapeInterpolator, StarInterpolator,
};
use shapeflash_model::logging::{LoggingConfig, init_logging};
use shapeflash_model::paint::Palette;
use shapeflash_model::shapes::{FlashShape, ShapeKind};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  shapeflash demo — flash shapes without a canvas");
    println!();

    arc_walkthrough();
    star_walkthrough()?;

    Ok(())
}

/// Builds an arc shape, randomizes its segment colors, and unrolls the
/// angular sweep the way a renderer would while a drag progresses.
fn arc_walkthrough() {
    let mut rng = rand::thread_rng();

    let mut arc = FlashShape::new(ShapeKind::Arc);
    arc.set_offsets(40, 120);
    arc.set_allow_multicolored_components(true);
    arc.set_component_color_pool(Palette::Two.colors());
    arc.generate_random_component_colors(&mut rng);
    arc.set_alpha_interpolator(AlphaInterpolator::new(300));
    arc.set_shape_interpolator(ShapeInterpolator::Angle(AngleInterpolator::with_angle(
        300,
        360.0,
        arc.max_components(),
    )));

    log::info!(
        "arc at ({}, {}) with {} segment colors",
        arc.x_offset(),
        arc.y_offset(),
        arc.component_colors().len()
    );

    println!("  arc segments:");
    for (i, color) in arc.component_colors().iter().enumerate() {
        println!("    segment {i:>2}  {color}");
    }
    println!();

    for value in [0, 100, 200, 300] {
        if let Some(interpolator) = arc.shape_interpolator_mut() {
            interpolator.update(value);
        }
        if let Some(alpha) = arc.alpha_interpolator_mut() {
            alpha.update(value);
        }

        let Some(ShapeInterpolator::Angle(angle)) = arc.shape_interpolator() else {
            return;
        };
        let alpha = arc
            .alpha_interpolator()
            .map(AlphaInterpolator::interpolated_alpha)
            .unwrap_or(0xFF);

        println!(
            "  progress {value:>3}: angle {:>5.1}°, alpha {alpha:>3}, {} arc(s)",
            angle.interpolated_angle(),
            angle.drawing_angles().len()
        );
    }
    println!();
}

/// Builds a star's drawing metrics and drives its five point triangles.
fn star_walkthrough() -> Result<()> {
    let mut star = StarInterpolator::builder(800)
        .width(500.0)
        .height(500.0)
        .build()?;

    println!("  star metrics (500x500):");
    println!("    inner polygon peak   {:?}", star.center_polygon_peak());
    println!("    bottom-left midpoint {:?}", star.bottom_left_midpoint());
    println!("    bottom-right midpoint {:?}", star.bottom_right_midpoint());
    println!();

    for value in [200, 400, 800] {
        star.update(value);
        let (base, altitude) = star.top_triangle().interpolated_values();
        println!(
            "  progress {value:>3}: top point base {base:>6.1}, altitude {altitude:>6.1}"
        );
    }
    println!();

    Ok(())
}
