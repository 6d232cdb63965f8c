//! # Late syntactic rewrites
//!
//! Small, purely local rewrites the printer applies to an expression right
//! before printing it, only when `minify_syntax` is set (spec §4.1/§4.2).
//! These are intentionally narrow: constant folding of literal-operand
//! arithmetic, collapsing an immediately-invoked arrow/function expression
//! that just returns its single argument, and inlining a wrapper
//! [`Expression::InlinedEnum`]/[`Expression::Annotated`] node down to its
//! underlying value when the surrounding context doesn't need the
//! preserved name as a comment. None of these change program semantics;
//! they are not a general-purpose optimizer and never reorder side effects.

use std::collections::HashMap;

use crate::generator::ConstValue;
use crate::parser::ast_types::{
    Argument, ArrowFunctionBody, BinaryOperator, Expression, Literal, LogicalOperator,
    NumberLiteral, Pattern, Span, Statement, UnaryOperator,
};
use crate::symbols::{SymbolFlags, SymbolRef, SymbolTable};

/// Attempts to fold a binary expression with two literal-number operands
/// into a single literal, per spec §4.1's constant-folding rule. Returns
/// `None` when either operand isn't foldable or the operator isn't
/// arithmetic (folding comparisons/logical ops is out of scope here since
/// those are already handled by `LogicalExpression`'s own short-circuit
/// printing).
pub fn fold_binary_numeric(left: &Expression, op: BinaryOperator, right: &Expression) -> Option<Expression> {
    let (Expression::Literal(Literal::Number(NumberLiteral { value: l, .. })), Expression::Literal(Literal::Number(NumberLiteral { value: r, .. }))) =
        (left.unwrap_parens(), right.unwrap_parens())
    else {
        return None;
    };

    let folded = match op {
        BinaryOperator::Add => l + r,
        BinaryOperator::Subtract => l - r,
        BinaryOperator::Multiply => l * r,
        BinaryOperator::Divide => l / r,
        BinaryOperator::Remainder => l % r,
        BinaryOperator::Exponentiation => l.powf(*r),
        _ => return None,
    };

    // Don't fold to a NaN/Infinity literal: `1/0` is valid source but
    // `Infinity` as a re-synthesized literal would need to round-trip
    // through a global lookup rather than a true numeric literal token,
    // which the rest of the printer doesn't model as input here.
    if !folded.is_finite() {
        return None;
    }

    Some(Expression::Literal(Literal::Number(NumberLiteral { value: folded, span: left.span() })))
}

/// Attempts to fold a unary expression over a literal operand (`-1`, `!0`,
/// `~0`, `typeof` over a literal never folds since its result depends on the
/// engine's type tag, not a literal we can re-spell).
pub fn fold_unary_numeric(op: UnaryOperator, argument: &Expression) -> Option<Expression> {
    let Expression::Literal(Literal::Number(NumberLiteral { value, span })) = argument.unwrap_parens() else {
        return None;
    };
    let folded = match op {
        UnaryOperator::Minus => -value,
        UnaryOperator::Plus => *value,
        UnaryOperator::BitwiseNot => !(*value as i64 as i32) as f64,
        _ => return None,
    };
    if !folded.is_finite() {
        return None;
    }
    Some(Expression::Literal(Literal::Number(NumberLiteral { value: folded, span: *span })))
}

/// Truthiness of a literal, when it can be determined without evaluating
/// anything (every literal kind qualifies; a `RegExp` literal is always a
/// new, truthy object).
fn literal_truthiness(lit: &Literal) -> Option<bool> {
    match lit {
        Literal::Boolean(b) => Some(b.value),
        Literal::Number(n) => Some(n.value != 0.0 && !n.value.is_nan()),
        Literal::String(s) => Some(!s.value.is_empty()),
        Literal::BigInt(b) => Some(b.value.trim_start_matches('0') != ""),
        Literal::Null { .. } | Literal::Undefined { .. } => Some(false),
        Literal::RegExp(_) => Some(true),
    }
}

fn literal_is_nullish(lit: &Literal) -> bool {
    matches!(lit, Literal::Null { .. } | Literal::Undefined { .. })
}

/// Collapses `left && right` / `left || right` / `left ?? right` down to
/// whichever side the result is known to always be, when `left` is a literal
/// (so testing it has no side effect to preserve). Returns the surviving
/// side unevaluated — callers print it, they don't re-derive a boolean.
pub fn short_circuit_logical<'a>(
    left: &'a Expression,
    op: LogicalOperator,
    right: &'a Expression,
) -> Option<&'a Expression> {
    let Expression::Literal(lit) = left.unwrap_parens() else { return None };
    match op {
        LogicalOperator::And => {
            if literal_truthiness(lit)? { Some(right) } else { Some(left) }
        }
        LogicalOperator::Or => {
            if literal_truthiness(lit)? { Some(left) } else { Some(right) }
        }
        LogicalOperator::NullishCoalescing => {
            if literal_is_nullish(lit) { Some(right) } else { Some(left) }
        }
    }
}

/// Collapses `test ? consequent : alternate` down to whichever branch a
/// literal `test` always selects.
pub fn collapse_conditional_constant_test<'a>(
    test: &'a Expression,
    consequent: &'a Expression,
    alternate: &'a Expression,
) -> Option<&'a Expression> {
    let Expression::Literal(lit) = test.unwrap_parens() else { return None };
    Some(if literal_truthiness(lit)? { consequent } else { alternate })
}

/// Detects `(function(x) { return x; })(arg)` / `(x => x)(arg)` shaped
/// immediately-invoked identity wrappers some bundlers emit around a single
/// expression and returns the inner argument to print directly instead.
/// Intentionally conservative: only fires when there is exactly one
/// parameter, one argument, and the body is a single `return <param>;`.
pub fn inline_identity_iife<'a>(
    callee_params: &[crate::parser::ast_types::Pattern],
    callee_body: &'a [crate::parser::ast_types::Statement],
    arguments: &'a [crate::parser::ast_types::Argument],
) -> Option<&'a Expression> {
    use crate::parser::ast_types::{Argument, Pattern, Statement};

    let [Pattern::Identifier(param)] = callee_params else { return None };
    let [Statement::ReturnStatement { argument: Some(returned), .. }] = callee_body else { return None };
    let Expression::Identifier(returned_id) = returned.unwrap_parens() else { return None };
    if returned_id.name != param.name {
        return None;
    }
    let [Argument::Expression(arg)] = arguments else { return None };
    Some(arg)
}

/// Result of collapsing an immediately-invoked empty/trivial function down
/// to the value it always produces: either a reference into the existing
/// tree, or a freshly synthesized node (there's nothing in the original
/// tree to borrow for a bare `undefined`).
pub enum Collapsed<'a> {
    Borrowed(&'a Expression),
    Owned(Expression),
}

fn undefined_literal() -> Expression {
    Expression::Literal(Literal::Undefined { span: Span::DUMMY })
}

fn collapse_block_body(body: &[Statement]) -> Option<Collapsed<'_>> {
    match body {
        [] => Some(Collapsed::Owned(undefined_literal())),
        [Statement::ReturnStatement { argument: None, .. }] => Some(Collapsed::Owned(undefined_literal())),
        [Statement::ReturnStatement { argument: Some(value), .. }] => Some(Collapsed::Borrowed(value)),
        _ => None,
    }
}

/// Collapses a zero-argument call to a function-expression IIFE whose body
/// is empty or a single `return`, e.g. `(function(){})()` -> `undefined`,
/// `(function(){return 1;})()` -> `1`. Non-async only: an async function's
/// call always produces a `Promise`, never the bare return value.
pub fn try_collapse_zero_arg_function_iife<'a>(
    is_async: bool,
    params: &[Pattern],
    body: &'a [Statement],
    arguments: &[Argument],
) -> Option<Collapsed<'a>> {
    if is_async || !params.is_empty() || !arguments.is_empty() {
        return None;
    }
    collapse_block_body(body)
}

/// Same as [`try_collapse_zero_arg_function_iife`] for `(() => { ... })()`
/// and `(() => expr)()` shaped arrow IIFEs.
pub fn try_collapse_zero_arg_arrow_iife<'a>(
    is_async: bool,
    params: &[Pattern],
    body: &'a ArrowFunctionBody,
    arguments: &[Argument],
) -> Option<Collapsed<'a>> {
    if is_async || !params.is_empty() || !arguments.is_empty() {
        return None;
    }
    match body {
        ArrowFunctionBody::BlockStatement(stmts) => collapse_block_body(stmts),
        ArrowFunctionBody::Expression(expr) => Some(Collapsed::Borrowed(expr)),
    }
}

/// Whether printing `collapsed` directly in place of the original callee
/// would change call semantics because it's now a bare reference where it
/// wasn't before (the direct-`eval` hazard: an indirect call to `eval`
/// behaves differently from a direct one).
pub fn collapsed_needs_indirect_call_guard(collapsed: &Expression) -> bool {
    matches!(
        collapsed.unwrap_parens(),
        Expression::Identifier(_) | Expression::DotExpression { .. } | Expression::IndexExpression { .. }
    )
}

// ---------------------------------------------------------------------
// Cross-module constant inlining (spec §4.1)
// ---------------------------------------------------------------------

/// Resolves a `Module.Key` dot-access to its statically known enum-member
/// value, if the linker recorded one for this `(module_symbol, member)`
/// pair. Returns a real [`Expression::InlinedEnum`] node carrying the
/// original member name so the printer can still show it as a trailing
/// comment.
pub fn try_inline_enum_member(
    ts_enums: &HashMap<SymbolRef, HashMap<String, ConstValue>>,
    symbols: &SymbolTable,
    target_symbol: SymbolRef,
    member: &str,
    span: Span,
) -> Option<Expression> {
    let resolved = symbols.follow(target_symbol);
    let value = ts_enums.get(&resolved)?.get(member)?;
    Some(Expression::InlinedEnum { value: Box::new(value.to_literal(span)), original_name: member.to_string(), span })
}

/// Same idea as [`try_inline_enum_member`] for a plain (non-enum)
/// cross-module constant referenced directly by identifier rather than
/// through a member access.
pub fn try_inline_const_value(
    const_values: &HashMap<SymbolRef, ConstValue>,
    symbols: &SymbolTable,
    target_symbol: SymbolRef,
    span: Span,
) -> Option<Expression> {
    let resolved = symbols.follow(target_symbol);
    let value = const_values.get(&resolved)?;
    let original_name = symbols.get(resolved).map(|s| s.original_name.clone()).unwrap_or_default();
    Some(Expression::InlinedEnum { value: Box::new(value.to_literal(span)), original_name, span })
}

// ---------------------------------------------------------------------
// Symbol-flag-driven empty-function call collapsing (spec §4.1)
// ---------------------------------------------------------------------

/// Collapses a zero-argument call through a binding the linker proved
/// always resolves to a no-op function (`SymbolFlags::IS_EMPTY_FUNCTION`),
/// the same way a literal IIFE with an empty body collapses. Bails out
/// whenever the binding might have been reassigned (`COULD_BE_MUTATED`),
/// the call isn't zero-argument, or an argument is a spread — evaluating a
/// spread still has to run the iterable's `Symbol.iterator` protocol, which
/// dropping the call entirely would skip.
pub fn try_collapse_symbol_referenced_empty_function_call(
    symbol_flags: SymbolFlags,
    arguments: &[Argument],
) -> Option<Expression> {
    if !symbol_flags.contains(SymbolFlags::IS_EMPTY_FUNCTION) || symbol_flags.contains(SymbolFlags::COULD_BE_MUTATED)
    {
        return None;
    }
    if arguments.iter().any(|a| matches!(a, Argument::Spread(_))) {
        return None;
    }
    if arguments.is_empty() {
        return Some(undefined_literal());
    }
    // Argument side effects must still run in order; the call itself always
    // contributed `undefined` as the result, so that's the sequence's tail.
    let mut expressions: Vec<Expression> = arguments
        .iter()
        .map(|a| match a {
            Argument::Expression(e) => e.clone(),
            Argument::Spread(_) => unreachable!("checked above"),
        })
        .collect();
    expressions.push(undefined_literal());
    Some(Expression::SequenceExpression { expressions, span: Span::DUMMY })
}

// ---------------------------------------------------------------------
// Statement-level merging (spec §4.2)
// ---------------------------------------------------------------------

/// Applies the statement-sequence rewrites a minifier does once per
/// statement list: merging adjacent declarations of the same kind, folding
/// an `if (a) return b;` chain into a single ternary `return`, and
/// collapsing an `if`/`else` whose arms are both plain expression
/// statements into one expression statement. Runs once per block/program
/// body; does not recurse into nested statement lists itself (the printer
/// calls this at every level that walks a `Vec<Statement>`).
pub fn merge_statements(stmts: &[Statement]) -> Vec<Statement> {
    let mut merged = Vec::with_capacity(stmts.len());
    let mut i = 0;
    while i < stmts.len() {
        if let Statement::VariableDeclaration(decl) = &stmts[i] {
            let mut combined = decl.clone();
            let mut j = i + 1;
            while let Some(Statement::VariableDeclaration(next)) = stmts.get(j) {
                if next.kind != combined.kind {
                    break;
                }
                combined.declarations.extend(next.declarations.clone());
                j += 1;
            }
            if j > i + 1 {
                merged.push(Statement::VariableDeclaration(combined));
                i = j;
                continue;
            }
        }

        if let Some((folded, consumed)) = try_fold_if_return_chain(&stmts[i..]) {
            merged.push(folded);
            i += consumed;
            continue;
        }

        if let Statement::IfStatement { test, consequent, alternate, span } = &stmts[i] {
            if let Some(collapsed) =
                try_collapse_if_else_to_expression(test, consequent, alternate.as_deref(), *span)
            {
                merged.push(collapsed);
                i += 1;
                continue;
            }
        }

        merged.push(stmts[i].clone());
        i += 1;
    }
    merged
}

/// `return`, or a block containing exactly that one `return`, reduced to
/// the returned value (`None` for a bare `return;`).
fn single_return_value(stmt: &Statement) -> Option<Option<&Expression>> {
    match stmt {
        Statement::ReturnStatement { argument, .. } => Some(argument.as_ref()),
        Statement::BlockStatement { body, .. } => match body.as_slice() {
            [Statement::ReturnStatement { argument, .. }] => Some(argument.as_ref()),
            _ => None,
        },
        _ => None,
    }
}

fn undefined_or_clone(value: Option<&Expression>) -> Expression {
    value.cloned().unwrap_or_else(undefined_literal)
}

/// Folds a run of `if (test) return value;` statements (no `else`, each
/// consequent a single return) followed by a terminal `return`, into one
/// `return test1 ? value1 : test2 ? value2 : ... : finalValue;`. Requires at
/// least two `if`s so the rewrite is never just busywork on a single branch.
fn try_fold_if_return_chain(rest: &[Statement]) -> Option<(Statement, usize)> {
    let mut arms: Vec<(&Expression, Option<&Expression>)> = Vec::new();
    let mut i = 0;
    while let Some(Statement::IfStatement { test, consequent, alternate: None, .. }) = rest.get(i) {
        let Some(value) = single_return_value(consequent) else { break };
        arms.push((test, value));
        i += 1;
    }
    if arms.len() < 2 {
        return None;
    }
    let final_value = match rest.get(i) {
        Some(Statement::ReturnStatement { argument, .. }) => argument.as_ref(),
        _ => return None,
    };
    i += 1;

    let mut result_expr = undefined_or_clone(final_value);
    for (test, value) in arms.into_iter().rev() {
        result_expr = Expression::ConditionalExpression {
            test: Box::new(test.clone()),
            consequent: Box::new(undefined_or_clone(value)),
            alternate: Box::new(result_expr),
            span: Span::DUMMY,
        };
    }
    Some((Statement::ReturnStatement { argument: Some(result_expr), span: Span::DUMMY }, i))
}

/// `if (test) exprStmt; else exprStmt2;` -> `test ? expr : expr2;`, or
/// `if (test) exprStmt;` (no else) -> `test && expr;`, when both arms (and
/// the implicit "do nothing" else) are plain, side-effect-bearing
/// expression statements rather than declarations/control flow the ternary
/// form can't represent.
fn try_collapse_if_else_to_expression(
    test: &Expression,
    consequent: &Statement,
    alternate: Option<&Statement>,
    span: Span,
) -> Option<Statement> {
    let Statement::ExpressionStatement { expression: consequent_expr, .. } = consequent else { return None };
    let combined = match alternate {
        None => Expression::LogicalExpression {
            left: Box::new(test.clone()),
            operator: LogicalOperator::And,
            right: Box::new(consequent_expr.clone()),
            span,
        },
        Some(Statement::ExpressionStatement { expression: alternate_expr, .. }) => {
            Expression::ConditionalExpression {
                test: Box::new(test.clone()),
                consequent: Box::new(consequent_expr.clone()),
                alternate: Box::new(alternate_expr.clone()),
                span,
            }
        }
        Some(_) => return None,
    };
    Some(Statement::ExpressionStatement { expression: combined, span })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast_types::Span;

    fn num(v: f64) -> Expression {
        Expression::Literal(Literal::Number(NumberLiteral { value: v, span: Span::DUMMY }))
    }

    #[test]
    fn folds_simple_addition() {
        let folded = fold_binary_numeric(&num(1.0), BinaryOperator::Add, &num(2.0)).unwrap();
        match folded {
            Expression::Literal(Literal::Number(n)) => assert_eq!(n.value, 3.0),
            _ => panic!("expected a number literal"),
        }
    }

    #[test]
    fn refuses_to_fold_into_a_non_finite_result() {
        assert!(fold_binary_numeric(&num(1.0), BinaryOperator::Divide, &num(0.0)).is_none());
    }

    #[test]
    fn refuses_to_fold_non_numeric_operands() {
        let s = Expression::Literal(Literal::String(crate::parser::ast_types::StringLiteral {
            value: "x".into(),
            span: Span::DUMMY,
        }));
        assert!(fold_binary_numeric(&s, BinaryOperator::Add, &num(1.0)).is_none());
    }

    #[test]
    fn folds_unary_negation() {
        let folded = fold_unary_numeric(UnaryOperator::Minus, &num(5.0)).unwrap();
        match folded {
            Expression::Literal(Literal::Number(n)) => assert_eq!(n.value, -5.0),
            _ => panic!("expected a number literal"),
        }
    }

    fn bool_lit(v: bool) -> Expression {
        Expression::Literal(Literal::Boolean(crate::parser::ast_types::BooleanLiteral {
            value: v,
            span: Span::DUMMY,
        }))
    }

    #[test]
    fn and_with_falsy_literal_left_keeps_the_literal() {
        let left = bool_lit(false);
        let right = num(1.0);
        let result = short_circuit_logical(&left, LogicalOperator::And, &right).unwrap();
        assert!(matches!(result, Expression::Literal(Literal::Boolean(b)) if !b.value));
    }

    #[test]
    fn and_with_truthy_literal_left_keeps_the_right_side() {
        let left = bool_lit(true);
        let right = num(7.0);
        let result = short_circuit_logical(&left, LogicalOperator::And, &right).unwrap();
        match result {
            Expression::Literal(Literal::Number(n)) => assert_eq!(n.value, 7.0),
            _ => panic!("expected right side to survive"),
        }
    }

    #[test]
    fn nullish_coalescing_skips_non_nullish_left() {
        let left = num(0.0);
        let right = num(9.0);
        let result = short_circuit_logical(&left, LogicalOperator::NullishCoalescing, &right).unwrap();
        match result {
            Expression::Literal(Literal::Number(n)) => assert_eq!(n.value, 0.0),
            _ => panic!("0 is not nullish, left should survive"),
        }
    }

    #[test]
    fn conditional_with_constant_test_picks_the_live_branch() {
        let test = bool_lit(true);
        let consequent = num(1.0);
        let alternate = num(2.0);
        let result = collapse_conditional_constant_test(&test, &consequent, &alternate).unwrap();
        match result {
            Expression::Literal(Literal::Number(n)) => assert_eq!(n.value, 1.0),
            _ => panic!("expected the consequent branch"),
        }
    }

    #[test]
    fn empty_function_iife_collapses_to_undefined() {
        let collapsed = try_collapse_zero_arg_function_iife(false, &[], &[], &[]).unwrap();
        assert!(matches!(collapsed, Collapsed::Owned(Expression::Literal(Literal::Undefined { .. }))));
    }

    #[test]
    fn async_function_iife_never_collapses() {
        assert!(try_collapse_zero_arg_function_iife(true, &[], &[], &[]).is_none());
    }

    #[test]
    fn arrow_expression_body_iife_collapses_to_its_expression() {
        let body = ArrowFunctionBody::Expression(Box::new(num(3.0)));
        let collapsed = try_collapse_zero_arg_arrow_iife(false, &[], &body, &[]).unwrap();
        match collapsed {
            Collapsed::Borrowed(Expression::Literal(Literal::Number(n))) => assert_eq!(n.value, 3.0),
            _ => panic!("expected the arrow body expression"),
        }
    }

    #[test]
    fn collapsing_to_a_bare_identifier_needs_the_indirect_call_guard() {
        let ident = Expression::Identifier(crate::parser::ast_types::Identifier::new("eval", Span::DUMMY));
        assert!(collapsed_needs_indirect_call_guard(&ident));
        assert!(!collapsed_needs_indirect_call_guard(&num(1.0)));
    }

    fn ident_expr(name: &str) -> Expression {
        Expression::Identifier(crate::parser::ast_types::Identifier::new(name, Span::DUMMY))
    }

    fn var_decl(kind: crate::parser::ast_types::VariableDeclarationKind, name: &str, init: f64) -> Statement {
        Statement::VariableDeclaration(crate::parser::ast_types::VariableDeclaration {
            kind,
            span: Span::DUMMY,
            declarations: vec![crate::parser::ast_types::VariableDeclarator {
                id: Pattern::Identifier(crate::parser::ast_types::Identifier::new(name, Span::DUMMY)),
                init: Some(num(init)),
                span: Span::DUMMY,
            }],
        })
    }

    fn return_stmt(value: Option<Expression>) -> Statement {
        Statement::ReturnStatement { argument: value, span: Span::DUMMY }
    }

    fn if_return(test: Expression, value: Option<Expression>) -> Statement {
        Statement::IfStatement {
            test,
            consequent: Box::new(return_stmt(value)),
            alternate: None,
            span: Span::DUMMY,
        }
    }

    #[test]
    fn merges_adjacent_same_kind_declarations() {
        use crate::parser::ast_types::VariableDeclarationKind::Let;
        let stmts = vec![var_decl(Let, "a", 1.0), var_decl(Let, "b", 2.0)];
        let merged = merge_statements(&stmts);
        assert_eq!(merged.len(), 1);
        match &merged[0] {
            Statement::VariableDeclaration(decl) => assert_eq!(decl.declarations.len(), 2),
            _ => panic!("expected a single merged declaration"),
        }
    }

    #[test]
    fn does_not_merge_declarations_of_different_kinds() {
        use crate::parser::ast_types::VariableDeclarationKind::{Const, Let};
        let stmts = vec![var_decl(Let, "a", 1.0), var_decl(Const, "b", 2.0)];
        assert_eq!(merge_statements(&stmts).len(), 2);
    }

    #[test]
    fn folds_if_return_chain_into_nested_ternary() {
        let stmts = vec![
            if_return(ident_expr("a"), Some(num(1.0))),
            if_return(ident_expr("c"), Some(num(2.0))),
            return_stmt(Some(num(3.0))),
        ];
        let merged = merge_statements(&stmts);
        assert_eq!(merged.len(), 1);
        match &merged[0] {
            Statement::ReturnStatement { argument: Some(Expression::ConditionalExpression { .. }), .. } => {}
            other => panic!("expected a single ternary return, got {other:?}"),
        }
    }

    #[test]
    fn collapses_if_else_expression_statements_to_a_ternary() {
        let stmt = Statement::IfStatement {
            test: ident_expr("c"),
            consequent: Box::new(Statement::ExpressionStatement { expression: num(1.0), span: Span::DUMMY }),
            alternate: Some(Box::new(Statement::ExpressionStatement {
                expression: num(2.0),
                span: Span::DUMMY,
            })),
            span: Span::DUMMY,
        };
        let merged = merge_statements(std::slice::from_ref(&stmt));
        match &merged[0] {
            Statement::ExpressionStatement { expression: Expression::ConditionalExpression { .. }, .. } => {}
            other => panic!("expected a collapsed ternary expression statement, got {other:?}"),
        }
    }

    #[test]
    fn collapses_if_without_else_to_logical_and() {
        let stmt = Statement::IfStatement {
            test: ident_expr("c"),
            consequent: Box::new(Statement::ExpressionStatement { expression: num(1.0), span: Span::DUMMY }),
            alternate: None,
            span: Span::DUMMY,
        };
        let merged = merge_statements(std::slice::from_ref(&stmt));
        match &merged[0] {
            Statement::ExpressionStatement { expression: Expression::LogicalExpression { operator, .. }, .. } => {
                assert_eq!(*operator, LogicalOperator::And);
            }
            other => panic!("expected a collapsed `&&` expression statement, got {other:?}"),
        }
    }
}
