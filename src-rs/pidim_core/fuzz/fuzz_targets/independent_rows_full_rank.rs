#![no_main]

use libfuzzer_sys::fuzz_target;
use pidim_core::{DimensionalMatrix, Variable};

fuzz_target!(|variables: Vec<Variable>| {
    let matrix = DimensionalMatrix::new(variables);
    let rows = matrix.independent_rows();

    assert_eq!(
        rows.len(),
        matrix.rank(),
        "independent rows ({:?}) do not match the rank ({})",
        rows,
        matrix.rank(),
    );
    assert_eq!(
        matrix.matrix().select_rows(rows).rank(),
        matrix.rank(),
        "independent rows ({:?}) are not independent in {}",
        rows,
        matrix.matrix(),
    );
    assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
});
