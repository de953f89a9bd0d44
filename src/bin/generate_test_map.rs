//! One-time generation of a small test map image.
//! Run with: cargo run --bin generate_test_map [output.png]

use hexfield::TerrainKind;
use image::RgbImage;

/// Terrain bands from top to bottom of the generated map.
const BANDS: [TerrainKind; 5] = [
    TerrainKind::Water,
    TerrainKind::Sand,
    TerrainKind::Mud,
    TerrainKind::Grass,
    TerrainKind::Street,
];

const WIDTH: u32 = 16;
const HEIGHT: u32 = 10;

fn main() -> Result<(), image::ImageError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/test_map.png".to_string());

    println!("Generating {WIDTH}x{HEIGHT} test map...");

    let mut img = RgbImage::new(WIDTH, HEIGHT);
    for y in 0..HEIGHT {
        let band = BANDS[(y as usize * BANDS.len()) / HEIGHT as usize];
        for x in 0..WIDTH {
            img.put_pixel(x, y, band.color());
        }
    }

    // One deliberately unclassifiable pixel, to exercise the Unknown path.
    img.put_pixel(WIDTH / 2, HEIGHT / 2, image::Rgb([200, 10, 200]));

    if let Some(parent) = std::path::Path::new(&path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    img.save(&path)?;

    println!("Test map saved to {path}");
    Ok(())
}
