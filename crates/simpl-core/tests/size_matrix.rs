use simpl_core::SizeMatrix;

#[test]
fn zeros_has_fixed_dimension() {
    let matrix = SizeMatrix::<u64>::zeros(4);
    assert_eq!(matrix.dim(), 4);
    assert_eq!(matrix.iter().count(), 16);
    assert_eq!(matrix.total(), 0);
    assert!(matrix.get(4, 0).is_none());
}

#[test]
fn indexing_is_row_major() {
    let mut matrix = SizeMatrix::<u64>::zeros(3);
    matrix[(0, 1)] += 2;
    matrix[(2, 0)] += 5;
    assert_eq!(matrix.iter().copied().collect::<Vec<_>>(), vec![0, 2, 0, 0, 0, 0, 5, 0, 0]);
    assert_eq!(matrix.to_rows(), vec![vec![0, 2, 0], vec![0, 0, 0], vec![5, 0, 0]]);
    assert_eq!(matrix.total(), 7);
}

#[test]
fn map_preserves_shape() {
    let mut matrix = SizeMatrix::<u64>::zeros(2);
    matrix[(1, 1)] = 3;
    let halved = matrix.map(|value| *value as f64 / 2.0);
    assert_eq!(halved.dim(), 2);
    assert_eq!(halved[(1, 1)], 1.5);
    assert_eq!(halved[(0, 0)], 0.0);
}

#[test]
fn empty_matrix_is_allowed() {
    let matrix = SizeMatrix::<f64>::zeros(0);
    assert_eq!(matrix.dim(), 0);
    assert!(matrix.to_rows().is_empty());
}

#[test]
fn add_assign_is_entrywise() {
    let mut acc = SizeMatrix::<u64>::zeros(2);
    let mut sample = SizeMatrix::<u64>::zeros(2);
    sample[(0, 1)] = 3;
    acc += &sample;
    acc += &sample;
    assert_eq!(acc.to_rows(), vec![vec![0, 6], vec![0, 0]]);
}

#[test]
#[should_panic]
fn out_of_range_index_panics() {
    let matrix = SizeMatrix::<u64>::zeros(2);
    let _ = matrix[(2, 0)];
}

#[test]
fn exposes_underlying_array() {
    let mut matrix = SizeMatrix::<u64>::zeros(3);
    matrix[(1, 2)] = 9;
    assert_eq!(matrix.as_array().shape(), &[3, 3]);
    assert_eq!(matrix.as_array()[[1, 2]], 9);
}
