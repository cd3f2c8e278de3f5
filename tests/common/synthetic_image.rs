/// Flat RGBA buffer filled with `background`.
pub fn blank_rgba(width: usize, height: usize, background: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0u8; width * height * 4];
    for px in img.chunks_exact_mut(4) {
        px[..3].copy_from_slice(&background);
        px[3] = 255;
    }
    img
}

pub fn fill_rect(
    img: &mut [u8],
    width: usize,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
    color: [u8; 3],
) {
    for y in y0..y1 {
        for x in x0..x1 {
            let i = (y * width + x) * 4;
            img[i..i + 3].copy_from_slice(&color);
            img[i + 3] = 255;
        }
    }
}

/// Color-coded T-shirt segmentation map on black background.
///
/// Torso (label 12 green) spans x in [16, 48), y in [12, 56); sleeves
/// (label 5 orange) extend the torso to x in [8, 56) for y in [16, 28).
pub fn tshirt_segmentation(width: usize, height: usize) -> Vec<u8> {
    assert!(width >= 64 && height >= 64, "t-shirt needs at least 64x64");
    let mut img = blank_rgba(width, height, [0, 0, 0]);
    fill_rect(&mut img, width, (16, 12), (48, 56), [0, 255, 0]);
    fill_rect(&mut img, width, (8, 16), (16, 28), [255, 128, 0]);
    fill_rect(&mut img, width, (48, 16), (56, 28), [255, 128, 0]);
    img
}

/// Pants-like silhouette: waistband plus two legs, label 18 blue.
pub fn pants_segmentation(width: usize, height: usize) -> Vec<u8> {
    assert!(width >= 64 && height >= 64, "pants need at least 64x64");
    let mut img = blank_rgba(width, height, [0, 0, 0]);
    fill_rect(&mut img, width, (20, 8), (44, 20), [0, 0, 255]);
    fill_rect(&mut img, width, (20, 20), (30, 58), [0, 0, 255]);
    fill_rect(&mut img, width, (34, 20), (44, 58), [0, 0, 255]);
    img
}

/// Product photo: dark garment centred on a bright cream backdrop. Neither
/// color is within the default tolerance of any palette entry, and the
/// backdrop's luminance is just above 240.
pub fn product_photo(width: usize, height: usize) -> Vec<u8> {
    let mut img = blank_rgba(width, height, [250, 240, 215]);
    fill_rect(
        &mut img,
        width,
        (width / 4, height / 4),
        (width * 3 / 4, height * 3 / 4),
        [60, 40, 90],
    );
    img
}
