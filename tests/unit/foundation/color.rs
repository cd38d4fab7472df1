use super::*;

fn plane(rows: usize, cols: usize, values: &[f64]) -> Matrix {
    Matrix::from_vec(rows, cols, values.to_vec()).unwrap()
}

fn rgb(r: &[f64], g: &[f64], b: &[f64]) -> ColorMatrix {
    ColorMatrix::from_channels(plane(1, 2, r), plane(1, 2, g), plane(1, 2, b)).unwrap()
}

#[test]
fn new_allocates_three_equal_channels() {
    let c = ColorMatrix::new(4, 2);
    assert_eq!(c.shape(), (4, 2));
    for ch in c.channels() {
        assert_eq!(ch.shape(), (4, 2));
    }
}

#[test]
fn from_channels_rejects_mismatched_planes() {
    let err = ColorMatrix::from_channels(Matrix::new(2, 2), Matrix::new(2, 2), Matrix::new(2, 3))
        .unwrap_err();
    assert!(matches!(
        err,
        BlockpyrError::DimensionMismatch {
            op: "from_channels",
            ..
        }
    ));
}

#[test]
fn channel_accessor_maps_roles() {
    let mut c = rgb(&[1.0, 1.0], &[2.0, 2.0], &[3.0, 3.0]);
    assert_eq!(c.channel(0).unwrap(), c.red());
    assert_eq!(c.channel(1).unwrap(), c.green());
    assert_eq!(c.channel(2).unwrap(), c.blue());

    c.channel_mut(2).unwrap()[(0, 1)] = 9.0;
    assert_eq!(c.blue()[(0, 1)], 9.0);
}

#[test]
fn channel_accessor_rejects_fourth_channel() {
    let mut c = ColorMatrix::new(1, 1);
    assert!(matches!(c.channel(3), Err(BlockpyrError::InvalidChannel(3))));
    assert!(matches!(
        c.channel_mut(42),
        Err(BlockpyrError::InvalidChannel(42))
    ));
}

#[test]
fn arithmetic_delegates_per_channel() {
    let a = rgb(&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]);
    let b = rgb(&[1.0, 1.0], &[2.0, 2.0], &[3.0, 3.0]);

    let sum = a.add(&b).unwrap();
    assert_eq!(sum, rgb(&[2.0, 3.0], &[5.0, 6.0], &[8.0, 9.0]));

    let diff = a.subtract(&b).unwrap();
    assert_eq!(diff, rgb(&[0.0, 1.0], &[1.0, 2.0], &[2.0, 3.0]));

    let prod = a.multiply_elementwise(&b).unwrap();
    assert_eq!(prod, rgb(&[1.0, 2.0], &[6.0, 8.0], &[15.0, 18.0]));

    assert_eq!(b.scale(2.0), rgb(&[2.0, 2.0], &[4.0, 4.0], &[6.0, 6.0]));
    assert_eq!(b.divide(2.0), rgb(&[0.5, 0.5], &[1.0, 1.0], &[1.5, 1.5]));
}

#[test]
fn binary_ops_reject_shape_mismatch() {
    let a = ColorMatrix::new(2, 2);
    let b = ColorMatrix::new(2, 4);
    for res in [a.add(&b), a.subtract(&b), a.multiply_elementwise(&b)] {
        assert!(matches!(res, Err(BlockpyrError::DimensionMismatch { .. })));
    }
}

#[test]
fn take_leaves_empty_channels() {
    let mut a = ColorMatrix::new(2, 2);
    let b = a.take();
    assert_eq!(b.shape(), (2, 2));
    assert_eq!(a.shape(), (0, 0));
}

#[test]
fn channel_view_writes_elements_and_keeps_shared_shape() {
    let mut c = ColorMatrix::new(2, 3);
    {
        let mut green = c.channel_mut(1).unwrap();
        assert_eq!(green.shape(), (2, 3));
        green[(1, 2)] = 4.0;
        green[0] = -1.0;
        green.as_mut_slice()[1] = 0.5;
        assert_eq!(green[(1, 2)], 4.0);
    }
    assert_eq!(c.green().as_slice(), &[-1.0, 0.5, 0.0, 0.0, 0.0, 4.0]);
    for ch in c.channels() {
        assert_eq!(ch.shape(), c.shape());
    }
    assert!(c.add(&ColorMatrix::new(2, 3)).is_ok());
}
