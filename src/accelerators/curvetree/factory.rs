use super::curve_tree::*;
use crate::core::error::*;
use crate::core::stats::*;

/// Builds curve trees from a stored set of arguments.
///
/// Every call to [`CurveTreeFactory::create`] runs a complete build; nothing
/// is cached between calls.
#[derive(Clone, Copy)]
pub struct CurveTreeFactory<'a> {
    arguments: CurveTreeArguments<'a>,
}

impl<'a> CurveTreeFactory<'a> {
    pub fn new(arguments: CurveTreeArguments<'a>) -> Self {
        CurveTreeFactory { arguments }
    }

    pub fn get_arguments(&self) -> &CurveTreeArguments<'a> {
        return &self.arguments;
    }

    pub fn create(&self) -> Result<Box<CurveTree>, CurveTreeError> {
        return self.create_with(&LogDiagnostics);
    }

    pub fn create_with(&self, diagnostics: &dyn Diagnostics) -> Result<Box<CurveTree>, CurveTreeError> {
        let tree = CurveTree::new(&self.arguments, diagnostics)?;
        return Ok(Box::new(tree));
    }
}
