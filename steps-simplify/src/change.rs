//! Records of the rewrites made by the simplifier.

use crate::expr::Expr;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of rewrite that a [`ChangeRecord`] reports.
///
/// Each kind has a stable identifier ([`ChangeType::id`]) that presentation layers can use to
/// look up localized text, and a short English description ([`ChangeType::description`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChangeType {
    // basic identities
    MultiplyByZero,
    ReduceZeroNumerator,
    ReduceExponentByZero,
    RemoveExponentByOne,
    RemoveExponentBaseOne,
    ResolveDoubleMinus,
    RemoveAddingZero,
    RemoveMultiplyingByOne,
    RemoveMultiplyingByNegativeOne,
    DivisionByOne,
    DivisionByNegativeOne,
    RearrangeCoeff,

    // division
    MultiplyByInverse,
    SimplifyDivision,

    // fractions
    AddFractions,
    CommonDenominator,
    MultiplyDenominators,
    MultiplyNumerators,
    CombineNumerators,
    AddNumerators,
    ConvertIntegerToFraction,
    DivideFractionForAddition,
    SimplifySigns,
    CancelMinuses,
    SimplifyFraction,
    FindGcd,
    CancelGcd,
    CancelTerms,
    SimplifyLikeBaseDivision,

    // like terms
    CollectAndCombineLikeTerms,
    CollectLikeTerms,
    AddPolynomialTerms,
    AddCoefficientOfOne,
    UnaryMinusToNegativeOne,
    GroupCoefficients,
    MultiplyPolynomialTerms,
    AddExponentOfOne,
    CollectPolynomialExponents,
    AddExponents,
    MultiplyCoefficients,
    CollectConstantExponents,

    // other
    SimplifyArithmetic,
    BreakUpFraction,
    MultiplyFractions,
    Distribute,
    DistributeNegativeOne,
    AbsoluteValue,
    NthRoot,

    /// Nothing changed.
    NoChange,
}

impl ChangeType {
    /// Every change type, in declaration order.
    pub const ALL: [ChangeType; 49] = [
        Self::MultiplyByZero,
        Self::ReduceZeroNumerator,
        Self::ReduceExponentByZero,
        Self::RemoveExponentByOne,
        Self::RemoveExponentBaseOne,
        Self::ResolveDoubleMinus,
        Self::RemoveAddingZero,
        Self::RemoveMultiplyingByOne,
        Self::RemoveMultiplyingByNegativeOne,
        Self::DivisionByOne,
        Self::DivisionByNegativeOne,
        Self::RearrangeCoeff,
        Self::MultiplyByInverse,
        Self::SimplifyDivision,
        Self::AddFractions,
        Self::CommonDenominator,
        Self::MultiplyDenominators,
        Self::MultiplyNumerators,
        Self::CombineNumerators,
        Self::AddNumerators,
        Self::ConvertIntegerToFraction,
        Self::DivideFractionForAddition,
        Self::SimplifySigns,
        Self::CancelMinuses,
        Self::SimplifyFraction,
        Self::FindGcd,
        Self::CancelGcd,
        Self::CancelTerms,
        Self::SimplifyLikeBaseDivision,
        Self::CollectAndCombineLikeTerms,
        Self::CollectLikeTerms,
        Self::AddPolynomialTerms,
        Self::AddCoefficientOfOne,
        Self::UnaryMinusToNegativeOne,
        Self::GroupCoefficients,
        Self::MultiplyPolynomialTerms,
        Self::AddExponentOfOne,
        Self::CollectPolynomialExponents,
        Self::AddExponents,
        Self::MultiplyCoefficients,
        Self::CollectConstantExponents,
        Self::SimplifyArithmetic,
        Self::BreakUpFraction,
        Self::MultiplyFractions,
        Self::Distribute,
        Self::DistributeNegativeOne,
        Self::AbsoluteValue,
        Self::NthRoot,
        Self::NoChange,
    ];

    /// Returns the stable identifier of this change type.
    pub fn id(self) -> &'static str {
        match self {
            Self::MultiplyByZero => "MULTIPLY_BY_ZERO",
            Self::ReduceZeroNumerator => "REDUCE_ZERO_NUMERATOR",
            Self::ReduceExponentByZero => "REDUCE_EXPONENT_BY_ZERO",
            Self::RemoveExponentByOne => "REMOVE_EXPONENT_BY_ONE",
            Self::RemoveExponentBaseOne => "REMOVE_EXPONENT_BASE_ONE",
            Self::ResolveDoubleMinus => "RESOLVE_DOUBLE_MINUS",
            Self::RemoveAddingZero => "REMOVE_ADDING_ZERO",
            Self::RemoveMultiplyingByOne => "REMOVE_MULTIPLYING_BY_ONE",
            Self::RemoveMultiplyingByNegativeOne => "REMOVE_MULTIPLYING_BY_NEGATIVE_ONE",
            Self::DivisionByOne => "DIVISION_BY_ONE",
            Self::DivisionByNegativeOne => "DIVISION_BY_NEGATIVE_ONE",
            Self::RearrangeCoeff => "REARRANGE_COEFF",
            Self::MultiplyByInverse => "MULTIPLY_BY_INVERSE",
            Self::SimplifyDivision => "SIMPLIFY_DIVISION",
            Self::AddFractions => "ADD_FRACTIONS",
            Self::CommonDenominator => "COMMON_DENOMINATOR",
            Self::MultiplyDenominators => "MULTIPLY_DENOMINATORS",
            Self::MultiplyNumerators => "MULTIPLY_NUMERATORS",
            Self::CombineNumerators => "COMBINE_NUMERATORS",
            Self::AddNumerators => "ADD_NUMERATORS",
            Self::ConvertIntegerToFraction => "CONVERT_INTEGER_TO_FRACTION",
            Self::DivideFractionForAddition => "DIVIDE_FRACTION_FOR_ADDITION",
            Self::SimplifySigns => "SIMPLIFY_SIGNS",
            Self::CancelMinuses => "CANCEL_MINUSES",
            Self::SimplifyFraction => "SIMPLIFY_FRACTION",
            Self::FindGcd => "FIND_GCD",
            Self::CancelGcd => "CANCEL_GCD",
            Self::CancelTerms => "CANCEL_TERMS",
            Self::SimplifyLikeBaseDivision => "SIMPLIFY_LIKE_BASE_DIVISION",
            Self::CollectAndCombineLikeTerms => "COLLECT_AND_COMBINE_LIKE_TERMS",
            Self::CollectLikeTerms => "COLLECT_LIKE_TERMS",
            Self::AddPolynomialTerms => "ADD_POLYNOMIAL_TERMS",
            Self::AddCoefficientOfOne => "ADD_COEFFICIENT_OF_ONE",
            Self::UnaryMinusToNegativeOne => "UNARY_MINUS_TO_NEGATIVE_ONE",
            Self::GroupCoefficients => "GROUP_COEFFICIENTS",
            Self::MultiplyPolynomialTerms => "MULTIPLY_POLYNOMIAL_TERMS",
            Self::AddExponentOfOne => "ADD_EXPONENT_OF_ONE",
            Self::CollectPolynomialExponents => "COLLECT_POLYNOMIAL_EXPONENTS",
            Self::AddExponents => "ADD_EXPONENTS",
            Self::MultiplyCoefficients => "MULTIPLY_COEFFICIENTS",
            Self::CollectConstantExponents => "COLLECT_CONSTANT_EXPONENTS",
            Self::SimplifyArithmetic => "SIMPLIFY_ARITHMETIC",
            Self::BreakUpFraction => "BREAK_UP_FRACTION",
            Self::MultiplyFractions => "MULTIPLY_FRACTIONS",
            Self::Distribute => "DISTRIBUTE",
            Self::DistributeNegativeOne => "DISTRIBUTE_NEGATIVE_ONE",
            Self::AbsoluteValue => "ABSOLUTE_VALUE",
            Self::NthRoot => "NTH_ROOT",
            Self::NoChange => "NO_CHANGE",
        }
    }

    /// Returns a short English description of this change type.
    pub fn description(self) -> &'static str {
        match self {
            Self::MultiplyByZero => "Multiplying anything by 0 gives 0",
            Self::ReduceZeroNumerator => "0 divided by anything non-zero is 0",
            Self::ReduceExponentByZero => "Anything raised to the power 0 is 1",
            Self::RemoveExponentByOne => "Anything raised to the power 1 is itself",
            Self::RemoveExponentBaseOne => "1 raised to any power is 1",
            Self::ResolveDoubleMinus => "Two minus signs cancel out",
            Self::RemoveAddingZero => "Adding 0 does not change a sum",
            Self::RemoveMultiplyingByOne => "Multiplying by 1 does not change a product",
            Self::RemoveMultiplyingByNegativeOne => "Multiplying by -1 negates the other factor",
            Self::DivisionByOne => "Dividing by 1 does not change anything",
            Self::DivisionByNegativeOne => "Dividing by -1 negates the numerator",
            Self::RearrangeCoeff => "Write the coefficient before the variable",
            Self::MultiplyByInverse => "Dividing by a fraction is multiplying by its inverse",
            Self::SimplifyDivision => "Dividing twice is dividing by the product",
            Self::AddFractions => "Add the fractions",
            Self::CommonDenominator => "Rewrite the fractions over a common denominator",
            Self::MultiplyDenominators => "Multiply out the denominators",
            Self::MultiplyNumerators => "Multiply out the numerators",
            Self::CombineNumerators => "Combine the numerators over the common denominator",
            Self::AddNumerators => "Add the numerators",
            Self::ConvertIntegerToFraction => "Write the integer as a fraction with the same denominator",
            Self::DivideFractionForAddition => "Evaluate the fraction so it can be added",
            Self::SimplifySigns => "Move the minus sign to the numerator",
            Self::CancelMinuses => "A minus sign in the numerator and denominator cancel out",
            Self::SimplifyFraction => "Simplify the fraction",
            Self::FindGcd => "Find the greatest common divisor of the numerator and denominator",
            Self::CancelGcd => "Divide the numerator and denominator by their greatest common divisor",
            Self::CancelTerms => "Cancel factors that appear in both the numerator and denominator",
            Self::SimplifyLikeBaseDivision => "Subtract the exponents of powers with the same base",
            Self::CollectAndCombineLikeTerms => "Collect and combine like terms",
            Self::CollectLikeTerms => "Group like terms together",
            Self::AddPolynomialTerms => "Add the like terms",
            Self::AddCoefficientOfOne => "A term without a written coefficient has coefficient 1",
            Self::UnaryMinusToNegativeOne => "A minus sign in front of a term is a coefficient of -1",
            Self::GroupCoefficients => "Group the coefficients of the like terms",
            Self::MultiplyPolynomialTerms => "Multiply the like terms",
            Self::AddExponentOfOne => "A variable without a written exponent has exponent 1",
            Self::CollectPolynomialExponents => "Powers of the same variable are multiplied by adding their exponents",
            Self::AddExponents => "Add the exponents",
            Self::MultiplyCoefficients => "Multiply the coefficients",
            Self::CollectConstantExponents => "Powers of the same number are multiplied by adding their exponents",
            Self::SimplifyArithmetic => "Evaluate the arithmetic",
            Self::BreakUpFraction => "Split the fraction into one fraction per term of the numerator",
            Self::MultiplyFractions => "Multiply the fractions",
            Self::Distribute => "Distribute the multiplication over the sum",
            Self::DistributeNegativeOne => "Distribute the minus sign over the sum",
            Self::AbsoluteValue => "Evaluate the absolute value",
            Self::NthRoot => "Evaluate the root",
            Self::NoChange => "No change",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A report of one rewrite of a tree.
///
/// `old_node` is the tree before the rewrite and `new_node` the tree after it. A rewrite that a
/// learner would see as one step, such as adding two fractions, lists the smaller rewrites it is
/// made of in `substeps`, in the order they happen. The first substep starts from `old_node` and
/// the last one ends at `new_node`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChangeRecord {
    /// What kind of rewrite this is.
    pub change_type: ChangeType,

    /// The tree before the rewrite.
    pub old_node: Expr,

    /// The tree after the rewrite.
    pub new_node: Expr,

    /// The smaller rewrites this one is made of.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub substeps: Vec<ChangeRecord>,
}

impl ChangeRecord {
    /// Creates the record reporting that nothing changed.
    pub fn no_change(expr: &Expr) -> Self {
        Self::tagged(ChangeType::NoChange, expr.clone(), expr.clone())
    }

    /// Returns true if this record reports a rewrite.
    pub fn has_changed(&self) -> bool {
        self.change_type != ChangeType::NoChange
    }

    /// Creates a record whose old and new trees are tagged with change group `1` as a whole.
    pub(crate) fn node_changed(change_type: ChangeType, old_node: &Expr, new_node: Expr) -> Self {
        Self::tagged(change_type, old_node.clone().with_group(1), new_node.with_group(1))
    }

    /// Creates a record from trees whose change groups have already been placed.
    pub(crate) fn tagged(change_type: ChangeType, old_node: Expr, new_node: Expr) -> Self {
        Self {
            change_type,
            old_node,
            new_node,
            substeps: Vec::new(),
        }
    }

    /// Attaches substeps to the record.
    pub(crate) fn with_substeps(mut self, substeps: Vec<ChangeRecord>) -> Self {
        self.substeps = substeps;
        self
    }

    /// Lifts a record describing a rewrite of the child at `index` of `parent` into a record
    /// describing the rewrite of `parent`. Substeps are lifted the same way.
    pub(crate) fn child_changed(parent: &Expr, record: ChangeRecord, index: usize) -> Self {
        let ChangeRecord { change_type, old_node, new_node, substeps } = record;
        Self {
            change_type,
            old_node: parent.with_child(index, old_node),
            new_node: parent.with_child(index, new_node),
            substeps: substeps
                .into_iter()
                .map(|substep| Self::child_changed(parent, substep, index))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::build::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn identifiers_are_unique() {
        let ids = ChangeType::ALL.iter().map(|change| change.id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), ChangeType::ALL.len());
        assert!(ChangeType::ALL.iter().all(|change| !change.description().is_empty()));
        assert_eq!(ChangeType::AddFractions.id(), "ADD_FRACTIONS");
    }

    #[test]
    fn no_change_record() {
        let record = ChangeRecord::no_change(&s("x"));
        assert!(!record.has_changed());
        assert_eq!(record.old_node, record.new_node);
        assert!(record.substeps.is_empty());
    }

    #[test]
    fn default_change_group() {
        let record = ChangeRecord::node_changed(ChangeType::RemoveAddingZero, &(c(5) + c(0)), c(5));
        assert!(record.has_changed());
        assert_eq!(record.old_node.change_group, Some(1));
        assert_eq!(record.new_node.change_group, Some(1));
    }

    #[test]
    fn lifting_into_parent() {
        let parent = Expr::mul(vec![c(2), Expr::pow(s("x"), c(1))]);
        let child = ChangeRecord::node_changed(ChangeType::RemoveExponentByOne, &Expr::pow(s("x"), c(1)), s("x"))
            .with_substeps(vec![ChangeRecord::node_changed(ChangeType::RemoveExponentByOne, &c(1), c(1))]);

        let lifted = ChangeRecord::child_changed(&parent, child, 1);
        assert_eq!(lifted.old_node, parent);
        assert_eq!(lifted.new_node, Expr::mul(vec![c(2), s("x")]));
        assert_eq!(lifted.new_node.child(1).and_then(|child| child.change_group), Some(1));
        assert_eq!(lifted.substeps[0].new_node, Expr::mul(vec![c(2), c(1)]));
    }
}
