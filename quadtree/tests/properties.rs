use proptest::prelude::*;
use quadtree::{compress, uncompress, Node, PixelGrid};

/// grids up to 32x32, mostly two values so that plenty of quadrants merge
fn grid() -> impl Strategy<Value = PixelGrid> {
    (1_u32..=5).prop_flat_map(|dim_log2| {
        let dim = 1_usize << dim_log2;
        prop::collection::vec(prop_oneof![3 => 0_u8..2, 1 => any::<u8>()], dim * dim)
            .prop_map(move |pixels| PixelGrid::from_raw(dim, pixels).expect("dim * dim pixels"))
    })
}

/// any tree, reduced or not, with leaves at mixed depths
fn tree() -> impl Strategy<Value = Node> {
    let leaf = (0_u8..3).prop_map(Node::Leaf);
    leaf.prop_recursive(5, 256, 4, |inner| {
        (inner.clone(), inner.clone(), inner.clone(), inner)
            .prop_map(|(nw, ne, sw, se)| Node::new(nw, ne, sw, se))
    })
}

/// smallest grid the tree can be rendered into
fn dim_for(tree: &Node) -> usize {
    1 << tree.depth().max(1)
}

proptest! {
    #[test]
    fn lossless(grid in grid()) {
        let tree = Node::build(&grid).unwrap().reduce();
        let decoded = Node::decode(tree.encode(grid.dim())).unwrap();
        prop_assert_eq!(decoded.dim, grid.dim());
        prop_assert_eq!(decoded.render().unwrap(), grid);
    }

    #[test]
    fn lossless_pipeline(grid in grid()) {
        let tokens = compress(&grid).unwrap();
        prop_assert_eq!(uncompress(tokens).unwrap(), grid);
    }

    #[test]
    fn build_is_maximal(grid in grid()) {
        let tree = Node::build(&grid).unwrap();
        prop_assert_eq!(tree.leaf_count(), grid.dim() * grid.dim());
        prop_assert_eq!(1_usize << tree.depth(), grid.dim());
        prop_assert_eq!(tree.render(grid.dim()), grid);
    }

    #[test]
    fn reduce_idempotent(tree in tree()) {
        let once = tree.reduce();
        prop_assert_eq!(once.reduce(), once);
    }

    #[test]
    fn reduce_preserves_pixels(tree in tree()) {
        let dim = dim_for(&tree);
        prop_assert_eq!(tree.reduce().render(dim), tree.render(dim));
    }

    #[test]
    fn reduce_never_grows(tree in tree()) {
        prop_assert!(tree.reduce().node_count() <= tree.node_count());
    }

    #[test]
    fn reduced_has_no_mergeable_split(tree in tree()) {
        fn check(node: &Node) -> bool {
            match node.split() {
                None => true,
                Some(quad) => {
                    let values: Vec<_> = quad.iter().map(Node::leaf).collect();
                    let mergeable = values[0].is_some() && values.iter().all(|v| *v == values[0]);
                    !mergeable && quad.iter().all(check)
                }
            }
        }
        prop_assert!(check(&tree.reduce()));
    }

    #[test]
    fn encoding_self_delimits(tree in tree()) {
        let dim = dim_for(&tree);
        let decoded = Node::decode(tree.encode(dim)).unwrap();
        prop_assert_eq!(decoded.tree, tree);
        prop_assert_eq!(decoded.dim, dim);
    }

    #[test]
    fn display_reads_back(tree in tree()) {
        prop_assert_eq!(Node::from_test_format(&tree.to_string()), tree);
    }

    #[test]
    fn uniform_grids_reduce_to_a_leaf(dim_log2 in 1_u32..=6, value in any::<u8>()) {
        let grid = PixelGrid::filled(1 << dim_log2, value);
        prop_assert_eq!(Node::build(&grid).unwrap().reduce(), Node::Leaf(value));
    }

    #[test]
    fn truncation_is_detected(tree in tree(), cut in 1_usize..64) {
        let tokens = tree.encode(dim_for(&tree));
        let cut = cut.min(tokens.len() - 1);
        prop_assert!(Node::decode(tokens[..tokens.len() - cut].to_vec()).is_err());
    }
}
