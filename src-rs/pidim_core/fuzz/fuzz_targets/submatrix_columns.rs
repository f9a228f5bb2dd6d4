#![no_main]

use libfuzzer_sys::fuzz_target;
use pidim_core::DimensionalMatrix;
use shared::VariablesWithSelection;

fuzz_target!(|data: VariablesWithSelection| {
    let matrix = DimensionalMatrix::new(data.variables.clone());
    let requested: Vec<_> = data
        .selection
        .iter()
        .map(|&index| &data.variables[index])
        .collect();

    let submatrix = matrix
        .submatrix(&requested)
        .expect("selected variables belong to the matrix");

    assert_eq!(submatrix.shape(), (matrix.dimensions().len(), requested.len()));
    for (col, variable) in requested.iter().enumerate() {
        let position = matrix
            .variables()
            .iter()
            .position(|member| member == *variable)
            .expect("selected variable is a column");
        assert_eq!(
            submatrix.column_entries(col),
            matrix.matrix().column_entries(position),
            "column {} of the submatrix does not match variable {}",
            col,
            variable,
        );
    }
});
