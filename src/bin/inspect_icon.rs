use image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/icons/AppIcon-1024.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgba = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Inspecting icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    let top_left = rgba.get_pixel(0, 0);
    let bottom_right = rgba.get_pixel(width - 1, height - 1);
    println!("\nBackground corners:");
    println!("  top-left     RGBA: [{}, {}, {}, {}]", top_left[0], top_left[1], top_left[2], top_left[3]);
    println!("  bottom-right RGBA: [{}, {}, {}, {}]", bottom_right[0], bottom_right[1], bottom_right[2], bottom_right[3]);

    if top_left[2] > bottom_right[2] {
        println!("✓ Diagonal gradient detected (blue falls toward the bottom-right)");
    } else if top_left == bottom_right {
        println!("⚠ Corners match — flat-fill fallback background");
    } else {
        println!("⚠ Unexpected corner colors");
    }

    // One sample inside the card inset and one outside, at the same
    // gradient position.
    let inside = rgba.get_pixel(width * 6 / 10, height * 15 / 100);
    let outside = rgba.get_pixel(width * 7 / 10, height * 5 / 100);
    println!("\nCard overlay:");
    println!("  inside  RGBA: [{}, {}, {}, {}]", inside[0], inside[1], inside[2], inside[3]);
    println!("  outside RGBA: [{}, {}, {}, {}]", outside[0], outside[1], outside[2], outside[3]);
    if inside[0] > outside[0] && inside[1] > outside[1] && inside[2] > outside[2] {
        println!("✓ Card overlay detected");
    } else {
        println!("⚠ Card overlay may be missing");
    }

    // Count near-white pixels in the central square.
    let x0 = width * 285 / 1000;
    let x1 = width * 715 / 1000;
    let mut white_pixels = 0u32;
    for y in x0..x1 {
        for x in x0..x1 {
            let p = rgba.get_pixel(x, y);
            if p[0] >= 240 && p[1] >= 240 && p[2] >= 240 {
                white_pixels += 1;
            }
        }
    }

    println!("\nForeground analysis:");
    println!("  {} near-white pixels in the central square", white_pixels);
    if white_pixels > 0 {
        println!("✓ Foreground mark detected");
    } else {
        println!("⚠ No foreground mark found");
    }
}
