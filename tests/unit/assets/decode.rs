use super::*;

#[test]
fn bgr8_ingestion_reverses_channel_order() {
    // 2x1 image: pixel 0 = (B=10, G=20, R=30), pixel 1 = (B=1, G=2, R=3).
    let bgr = [10u8, 20, 30, 1, 2, 3];
    let img = color_matrix_from_bgr8(2, 1, &bgr).unwrap();
    assert_eq!(img.shape(), (1, 2));
    assert_eq!(img.red().as_slice(), &[30.0, 3.0]);
    assert_eq!(img.green().as_slice(), &[20.0, 2.0]);
    assert_eq!(img.blue().as_slice(), &[10.0, 1.0]);
}

#[test]
fn bgr8_ingestion_rejects_wrong_length() {
    let err = color_matrix_from_bgr8(2, 2, &[0u8; 11]).unwrap_err();
    assert!(matches!(err, BlockpyrError::Validation(_)));
}

#[test]
fn bgr8_egress_clamps_and_truncates() {
    let mut img = ColorMatrix::new(1, 3);
    img.channel_mut(0).unwrap().as_mut_slice()[..].copy_from_slice(&[-5.0, 254.9, 300.0]);
    img.channel_mut(1).unwrap().as_mut_slice()[..].copy_from_slice(&[0.99, 128.5, f64::NAN]);
    img.channel_mut(2).unwrap().as_mut_slice()[..].copy_from_slice(&[7.0, 8.0, 9.0]);

    let out = color_matrix_to_bgr8(&img);
    assert_eq!(out, vec![7, 0, 0, 8, 128, 254, 9, 0, 255]);
}

#[test]
fn bgr8_egress_restores_ingested_bytes() {
    let bgr: Vec<u8> = (0..4 * 4 * 3).map(|v| (v * 5) as u8).collect();
    let img = color_matrix_from_bgr8(4, 4, &bgr).unwrap();
    assert_eq!(color_matrix_to_bgr8(&img), bgr);
}

#[test]
fn rgb_image_keeps_channel_roles() {
    let mut rgb = RgbImage::new(2, 2);
    rgb.put_pixel(1, 0, image::Rgb([200, 100, 50]));
    let img = from_rgb_image(&rgb);
    assert_eq!(img.red()[(0, 1)], 200.0);
    assert_eq!(img.green()[(0, 1)], 100.0);
    assert_eq!(img.blue()[(0, 1)], 50.0);

    let back = to_rgb_image(&img).unwrap();
    assert_eq!(back, rgb);
}

#[test]
fn decode_image_reads_png_bytes() {
    let mut rgb = RgbImage::new(4, 4);
    rgb.put_pixel(3, 2, image::Rgb([1, 2, 3]));
    let mut bytes = Vec::new();
    rgb.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();

    let img = decode_image(&bytes).unwrap();
    assert_eq!(img.shape(), (4, 4));
    assert_eq!(img.blue()[(2, 3)], 3.0);
}

#[test]
fn decode_image_rejects_garbage() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, BlockpyrError::Other(_)));
}

#[test]
fn save_png_then_load_image() {
    let dir = std::path::PathBuf::from("target").join("unit_assets_decode");
    let path = dir.join("nested").join("roundtrip.png");
    let _ = std::fs::remove_file(&path);

    let img = ColorMatrix::new(2, 2).map(|_| 42.0);
    save_png(&img, &path).unwrap();
    assert_eq!(load_image(&path).unwrap(), img);
}

#[test]
fn bgr8_ingestion_fills_every_plane_across_rows() {
    // 2x3 image, each byte distinct so a skipped plane stays visibly zero.
    let bgr: Vec<u8> = (1..=18).collect();
    let img = color_matrix_from_bgr8(2, 3, &bgr).unwrap();
    assert_eq!(img.shape(), (3, 2));
    assert_eq!(img.blue().as_slice(), &[1.0, 4.0, 7.0, 10.0, 13.0, 16.0]);
    assert_eq!(img.green().as_slice(), &[2.0, 5.0, 8.0, 11.0, 14.0, 17.0]);
    assert_eq!(img.red().as_slice(), &[3.0, 6.0, 9.0, 12.0, 15.0, 18.0]);
}
