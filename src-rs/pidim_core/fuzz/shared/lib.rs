use libfuzzer_sys::arbitrary::{self, Result, Unstructured};
use pidim_core::Variable;

/// A handful of variables together with a selection of indices into them.
#[derive(Debug, Clone)]
pub struct VariablesWithSelection {
    pub variables: Vec<Variable>,
    pub selection: Vec<usize>,
}

impl<'a> arbitrary::Arbitrary<'a> for VariablesWithSelection {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let count = u.int_in_range(0..=6)?;
        let variables = (0..count)
            .map(|_| u.arbitrary::<Variable>())
            .collect::<Result<Vec<_>>>()?;

        let selection = if variables.is_empty() {
            Vec::new()
        } else {
            let picks = u.int_in_range(0..=8)?;
            (0..picks)
                .map(|_| u.choose_index(variables.len()))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(VariablesWithSelection {
            variables,
            selection,
        })
    }
}
