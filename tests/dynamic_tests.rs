use matrix_demo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rect(rows: usize, cols: usize, values: &[f64]) -> DMatrix {
    DMatrix::from_row_slice(rows, cols, values).unwrap()
}

#[test]
fn literal_2x3_by_3x2_product() {
    let c = rect(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let d = rect(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let cd = c.try_mul(&d).unwrap();
    assert_eq!(cd, rect(2, 2, &[22.0, 28.0, 49.0, 64.0]));
    assert_eq!(&c * &d, cd);
}

#[test]
fn random_4x3_by_3x4_is_always_4x4() {
    let range = UniformRange::default();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = DMatrix::random(4, 3, &mut rng, &range).unwrap();
        let b = DMatrix::random(3, 4, &mut rng, &range).unwrap();
        let ab = a.try_mul(&b).unwrap();
        assert_eq!(ab.shape(), (4, 4));
        assert_eq!(ab.as_slice().len(), 16);
    }
}

#[test]
fn incompatible_shapes_are_rejected() {
    let x = rect(2, 3, &[1.0; 6]);
    let err = x.try_mul(&x).unwrap_err();
    assert_eq!(err, MatrixError::ShapeMismatch { left: (2, 3), right: (2, 3) });
    assert_eq!(
        err.to_string(),
        "cannot multiply a 2x3 matrix by a 2x3 matrix: shared dimension differs (3 vs 2)"
    );
}

#[test]
#[should_panic(expected = "shared dimension differs")]
fn operator_fails_fast_on_mismatch() {
    let x = rect(2, 3, &[1.0; 6]);
    let _ = &x * &x;
}

#[test]
fn construction_validates_shape() {
    assert_eq!(
        DMatrix::from_vec(2, 3, vec![1.0; 5]).unwrap_err(),
        MatrixError::DataLength { rows: 2, cols: 3, expected: 6, found: 5 }
    );
    assert_eq!(
        DMatrix::zeros(0, 3).unwrap_err(),
        MatrixError::ZeroDimension { rows: 0, cols: 3 }
    );
    let mut rng = StdRng::seed_from_u64(1);
    assert!(DMatrix::random(4, 0, &mut rng, &UniformRange::default()).is_err());
}

#[test]
fn from_rows_rejects_ragged_input() {
    let ok = DMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(ok, rect(2, 2, &[1.0, 2.0, 3.0, 4.0]));

    let err = DMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(err, MatrixError::RaggedRow { line: 2, expected: 2, found: 1 });
}

#[test]
fn indexing_is_row_major() {
    let m = rect(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m[(1, 0)], 4.0);
    assert_eq!(m.get(1, 3), None);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(m.row_iter().count(), 2);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn indexing_out_of_bounds_panics() {
    let m = rect(2, 3, &[0.0; 6]);
    let _ = m[(0, 3)];
}

#[test]
fn product_is_associative() {
    let mut rng = StdRng::seed_from_u64(42);
    let range = UniformRange::default();
    let x = DMatrix::random(3, 5, &mut rng, &range).unwrap();
    let y = DMatrix::random(5, 2, &mut rng, &range).unwrap();
    let z = DMatrix::random(2, 4, &mut rng, &range).unwrap();
    let left = (&x * &y).try_mul(&z).unwrap();
    let right = x.try_mul(&(&y * &z)).unwrap();
    assert_eq!(left.shape(), (3, 4));
    for (l, r) in left.as_slice().iter().zip(right.as_slice()) {
        approx::assert_abs_diff_eq!(*l, *r, epsilon = 1e-12);
    }
}

#[test]
fn identity_and_transpose() {
    let m = rect(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(DMatrix::identity(2).unwrap().try_mul(&m).unwrap(), m);
    let t = m.transpose();
    assert_eq!(t, rect(3, 2, &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]));
    assert_eq!(t.transpose(), m);
}

#[test]
fn into_vec_returns_data_and_shape() {
    let m = rect(1, 2, &[1.5, -2.0]);
    assert_eq!(m.into_vec(), (vec![1.5, -2.0], (1, 2)));
}

#[test]
fn overflowing_shapes_are_rejected() {
    let rows = usize::MAX / 2 + 1;
    let too_large = MatrixError::TooLarge { rows, cols: 2 };
    assert_eq!(DMatrix::from_vec(rows, 2, vec![]).unwrap_err(), too_large);
    assert_eq!(DMatrix::from_row_slice(rows, 2, &[]).unwrap_err(), too_large);
    assert_eq!(DMatrix::zeros(rows, 2).unwrap_err(), too_large);
    assert_eq!(DMatrix::from_fn(rows, 2, |_, _| 0.0).unwrap_err(), too_large);

    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(
        DMatrix::random(usize::MAX, usize::MAX, &mut rng, &UniformRange::default()).unwrap_err(),
        MatrixError::TooLarge { rows: usize::MAX, cols: usize::MAX }
    );
}
