use matrix_demo::classical::{multiply_matrices, multiply_rect};

#[test]
fn literal_3x3_product() {
    let a: Vec<f64> = (1..=9).map(f64::from).collect();
    let b: Vec<f64> = (1..=9).rev().map(f64::from).collect();
    let c = multiply_matrices(&a, &b, 3);
    assert_eq!(c, vec![30.0, 24.0, 18.0, 84.0, 69.0, 54.0, 138.0, 114.0, 90.0]);
}

#[test]
fn simple_2x2() {
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![3.0, 1.0, 2.0, 1.0];
    let c = multiply_matrices(&a, &b, 2);
    assert_eq!(c, vec![7.0, 3.0, 17.0, 7.0]);
}

#[test]
fn rect_2x3_by_3x2() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let b = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let c = multiply_rect(&a, &b, 2, 3, 2);
    assert_eq!(c, vec![22.0, 28.0, 49.0, 64.0]);
}

#[test]
fn rect_column_by_row_is_outer_product() {
    let col = [1.0, 2.0, 3.0];
    let row = [4.0, 5.0];
    let c = multiply_rect(&col, &row, 3, 1, 2);
    assert_eq!(c, vec![4.0, 5.0, 8.0, 10.0, 12.0, 15.0]);
}

#[test]
#[should_panic(expected = "right operand is not 3x2")]
fn rect_rejects_wrong_length() {
    let a = [1.0; 6];
    let b = [1.0; 4];
    multiply_rect(&a, &b, 2, 3, 2);
}
