use classic_collections::bst::BinarySearchTree;
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100_000;

#[test]
fn int_test_bst() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = BinarySearchTree::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 5000);
        if rng.gen_range(0, 2) == 0 {
            assert_eq!(tree.remove(&key), expected.remove(&key));
        } else {
            assert_eq!(tree.insert(key), expected.insert(key));
        }
        assert_eq!(tree.contains(&key), expected.contains(&key));
        assert_eq!(tree.len(), expected.len());
    }

    assert_eq!(tree.min(), expected.iter().next());
    assert_eq!(tree.max(), expected.iter().next_back());
    assert_eq!(
        tree.inorder_traversal(),
        expected.iter().collect::<Vec<&u32>>(),
    );

    let mut preorder = tree.preorder_traversal();
    let mut postorder = tree.postorder_traversal();
    assert_eq!(preorder.first(), postorder.last());
    preorder.sort();
    postorder.sort();
    assert_eq!(preorder, postorder);
    assert_eq!(preorder, tree.inorder_traversal());
}
