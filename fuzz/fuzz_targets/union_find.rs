#![no_main]

use libfuzzer_sys::fuzz_target;

use flowcut::{
    infra::{arbitrary::UnionFindOp, testing::NaiveUnionFind},
    union_find::{PathCompressed, QuickFind, QuickUnion, UnionFind, WeightedQuickUnion},
};

fn check<U: UnionFind>(n: usize, ops: &[UnionFindOp]) {
    let mut uf = U::new(n);
    let mut model = NaiveUnionFind::new(n);

    for op in ops {
        let before = uf.count();
        let actual = op.apply(&mut uf);

        assert_eq!(actual, op.apply_model(&mut model, n), "{op:?}");
        assert!(uf.count() <= before);
        assert_eq!(uf.count(), model.count());
    }
}

fuzz_target!(|input: (u8, Vec<UnionFindOp>)| {
    let (n, ops) = input;
    let n = usize::from(n);

    check::<QuickFind>(n, &ops);
    check::<QuickUnion>(n, &ops);
    check::<WeightedQuickUnion>(n, &ops);
    check::<PathCompressed>(n, &ops);
});
