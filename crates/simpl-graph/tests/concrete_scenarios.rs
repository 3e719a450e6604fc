use simpl_graph::{
    degrees_of, incidence_index, partition_by_size, simplicial_pairs, size_counts, total_volume,
    volume_of, DegreeSource, PairFlags, SimplicialPairs,
};

fn nested() -> (Vec<u32>, Vec<Vec<u32>>) {
    (
        vec![1, 2, 3, 4],
        vec![vec![1, 2], vec![1, 2, 3], vec![1, 2, 3, 4]],
    )
}

#[test]
fn nested_chain_has_three_pairs() {
    let (vertices, edges) = nested();
    let pairs = simplicial_pairs(&vertices, &edges, PairFlags::default()).unwrap();
    assert_eq!(pairs, SimplicialPairs::Total(3));
}

#[test]
fn nested_chain_degrees_and_volume() {
    let (vertices, edges) = nested();
    let degrees = degrees_of(&vertices, &edges).unwrap();
    let expected: Vec<(u32, usize)> = vec![(1, 3), (2, 3), (3, 2), (4, 1)];
    assert_eq!(degrees.into_iter().collect::<Vec<_>>(), expected);

    let degrees = degrees_of(&vertices, &edges).unwrap();
    let edge_volume: usize = edges.iter().map(Vec::len).sum();
    assert_eq!(total_volume(&degrees).unwrap(), edge_volume);
    assert_eq!(volume_of(&[3, 4], DegreeSource::Degrees(&degrees)).unwrap(), 3);
    assert_eq!(volume_of(&[1, 3], DegreeSource::Edges(&edges)).unwrap(), 5);
}

#[test]
fn nested_chain_matrix_layout() {
    let (vertices, edges) = nested();
    let flags = PairFlags {
        as_matrix: true,
        edge_order: false,
    };
    let SimplicialPairs::Matrix(matrix) = simplicial_pairs(&vertices, &edges, flags).unwrap()
    else {
        panic!("expected matrix result");
    };
    assert_eq!(matrix.dim(), 4);
    assert_eq!(matrix[(1, 2)], 1);
    assert_eq!(matrix[(1, 3)], 1);
    assert_eq!(matrix[(2, 3)], 1);
    assert_eq!(matrix.total(), 3);
}

#[test]
fn reversed_chain_counts_larger_first() {
    let (vertices, mut edges) = nested();
    edges.reverse();
    let ordered = simplicial_pairs(
        &vertices,
        &edges,
        PairFlags {
            as_matrix: false,
            edge_order: true,
        },
    )
    .unwrap();
    assert_eq!(ordered, SimplicialPairs::Ordered([0, 3]));

    let SimplicialPairs::Matrix(matrix) = simplicial_pairs(
        &vertices,
        &edges,
        PairFlags {
            as_matrix: true,
            edge_order: true,
        },
    )
    .unwrap() else {
        panic!("expected matrix result");
    };
    assert_eq!(matrix[(2, 1)], 1);
    assert_eq!(matrix[(3, 1)], 1);
    assert_eq!(matrix[(3, 2)], 1);
    assert_eq!(matrix[(1, 2)], 0);
}

#[test]
fn disjoint_pairs_have_no_containment() {
    let vertices = vec![1u32, 2, 3];
    let edges = vec![vec![1, 2], vec![2, 3]];
    let pairs = simplicial_pairs(&vertices, &edges, PairFlags::default()).unwrap();
    assert_eq!(pairs.total(), 0);
}

#[test]
fn empty_collection_counts_zero() {
    let vertices = vec![1u32, 2];
    let edges: Vec<Vec<u32>> = Vec::new();
    assert_eq!(
        simplicial_pairs(&vertices, &edges, PairFlags::default()).unwrap(),
        SimplicialPairs::Total(0)
    );
    let matrix = simplicial_pairs(
        &vertices,
        &edges,
        PairFlags {
            as_matrix: true,
            edge_order: true,
        },
    )
    .unwrap();
    assert_eq!(matrix.total(), 0);
}

#[test]
fn singletons_never_contain_each_other() {
    let vertices = vec!["a", "b"];
    let edges = vec![vec!["a"], vec!["b"], vec!["a", "b"]];
    let pairs = simplicial_pairs(&vertices, &edges, PairFlags::default()).unwrap();
    assert_eq!(pairs.total(), 2);
}

#[test]
fn repeated_vertices_collapse_to_sets() {
    let vertices = vec![1u32, 2, 3];
    let edges = vec![vec![1, 1], vec![1, 2, 2], vec![3, 3, 3]];
    let pairs = simplicial_pairs(&vertices, &edges, PairFlags::default()).unwrap();
    assert_eq!(pairs.total(), 1);

    let SimplicialPairs::Matrix(matrix) = simplicial_pairs(
        &vertices,
        &edges,
        PairFlags {
            as_matrix: true,
            edge_order: false,
        },
    )
    .unwrap() else {
        panic!("expected matrix result");
    };
    assert_eq!(matrix.dim(), 3);
    assert_eq!(matrix[(0, 1)], 1);
}

#[test]
fn incidence_index_preserves_arrival_order() {
    let (vertices, edges) = nested();
    let index = incidence_index(&vertices, &edges).unwrap();
    assert_eq!(index.edges_at(&1).unwrap(), &[0, 1, 2]);
    assert_eq!(index.edges_at(&3).unwrap(), &[1, 2]);
    assert_eq!(index.edges_at(&4).unwrap(), &[2]);
    assert_eq!(index.degree(&2).unwrap(), 3);
    assert_eq!(index.degrees(), degrees_of(&vertices, &edges).unwrap());
    assert!(index.edges_at(&9).is_err());
}

#[test]
fn isolated_vertices_get_empty_entries() {
    let vertices = vec![1u32, 2, 3];
    let edges = vec![vec![1, 2]];
    let index = incidence_index(&vertices, &edges).unwrap();
    assert!(index.edges_at(&3).unwrap().is_empty());
    assert_eq!(degrees_of(&vertices, &edges).unwrap().get(&3), Some(&0));
    assert_eq!(index.iter().count(), 3);
}

#[test]
fn partition_and_size_counts_agree() {
    let edges = vec![vec![1u32], vec![1, 2, 3], vec![2, 3, 4], vec![5]];
    let partition = partition_by_size(&edges);
    assert_eq!(partition.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(partition[&3], vec![vec![1, 2, 3], vec![2, 3, 4]]);
    assert_eq!(size_counts(&edges), vec![2, 0, 2]);
    assert!(size_counts::<u32>(&[]).is_empty());
}
