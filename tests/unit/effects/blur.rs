use super::*;

fn gradient(side: usize) -> ColorMatrix {
    let mut img = ColorMatrix::new(side, side);
    for ch in 0..3 {
        let mut plane = img.channel_mut(ch).unwrap();
        for i in 0..side {
            for j in 0..side {
                plane[(i, j)] = (i * side + j) as f64 * (ch + 1) as f64 + 0.25;
            }
        }
    }
    img
}

#[test]
fn level_count_is_ceil_log2() {
    assert_eq!(level_count(0), 0);
    assert_eq!(level_count(1), 0);
    assert_eq!(level_count(2), 1);
    assert_eq!(level_count(3), 2);
    assert_eq!(level_count(256), 8);
    assert_eq!(level_count(257), 9);
}

#[test]
fn blur_level_0_is_identity() {
    let img = gradient(8);
    assert_eq!(block_blur(&img, 0).unwrap(), img);
}

#[test]
fn blur_averages_two_by_two_block() {
    let mut img = ColorMatrix::new(2, 2);
    let mut red = img.channel_mut(0).unwrap();
    red[(0, 0)] = 1.0;
    red[(0, 1)] = 2.0;
    red[(1, 0)] = 3.0;
    red[(1, 1)] = 4.0;

    let out = block_blur(&img, 1).unwrap();
    assert!(out.red().as_slice().iter().all(|&v| v == 2.5));
    assert!(out.green().as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn blur_keeps_blocks_independent() {
    let mut img = ColorMatrix::new(4, 4);
    let mut green = img.channel_mut(1).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            green[(i, j)] = 8.0;
        }
    }

    let out = block_blur(&img, 1).unwrap();
    assert_eq!(out.green()[(1, 1)], 8.0);
    assert_eq!(out.green()[(0, 2)], 0.0);
    assert_eq!(out.green()[(3, 3)], 0.0);

    let out = block_blur(&img, 2).unwrap();
    assert!(out.green().as_slice().iter().all(|&v| v == 2.0));
}

#[test]
fn blur_preserves_shape_and_channel_means() {
    let img = gradient(16);
    let out = block_blur(&img, 3).unwrap();
    assert_eq!(out.shape(), (16, 16));
    for ch in 0..3 {
        let before: f64 = img.channel(ch).unwrap().as_slice().iter().sum();
        let after: f64 = out.channel(ch).unwrap().as_slice().iter().sum();
        assert!((before - after).abs() < 1e-9 * before.abs());
    }
}

#[test]
fn blur_rejects_non_square() {
    let img = ColorMatrix::new(3, 5);
    assert!(matches!(block_blur(&img, 0), Err(BlockpyrError::Shape(_))));
}

#[test]
fn blur_rejects_non_power_of_two() {
    let img = ColorMatrix::new(6, 6);
    assert!(matches!(block_blur(&img, 1), Err(BlockpyrError::Shape(_))));
    let empty = ColorMatrix::new(0, 0);
    assert!(matches!(block_blur(&empty, 0), Err(BlockpyrError::Shape(_))));
}

#[test]
fn blur_rejects_level_above_log2_side() {
    let img = ColorMatrix::new(4, 4);
    assert!(block_blur(&img, 2).is_ok());
    assert!(matches!(
        block_blur(&img, 3),
        Err(BlockpyrError::LevelOutOfRange { level: 3, max: 2 })
    ));
}
