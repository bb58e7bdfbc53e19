//! Tests for the statement and expression evaluator.

extern crate just_notes;

use just_notes::parser::ast::{DeclarationKind, ExpressionType, Meta, NumberLiteralType, StatementType};
use just_notes::runner::ds::error::ErrorType;
use just_notes::runner::ds::value::Value;
use just_notes::runner::eval::expression::evaluate_expression;
use just_notes::runner::eval::statement::execute_statement;
use just_notes::runner::plugin::types::EvalContext;

/// Helper to create a simple meta for tests.
fn test_meta() -> Meta {
    Meta {
        start_index: 0,
        end_index: 0,
    }
}

fn num_expr(n: i64) -> ExpressionType {
    ExpressionType::NumberLiteral {
        meta: test_meta(),
        value: NumberLiteralType::IntegerLiteral(n),
    }
}

fn str_expr(s: &str) -> ExpressionType {
    ExpressionType::StringLiteral {
        meta: test_meta(),
        value: s.to_string(),
    }
}

fn ident_expr(name: &str) -> ExpressionType {
    ExpressionType::Identifier {
        meta: test_meta(),
        name: name.to_string(),
    }
}

fn call_expr(callee: &[&str], arguments: Vec<ExpressionType>) -> ExpressionType {
    ExpressionType::Call {
        meta: test_meta(),
        callee: callee.iter().map(|s| s.to_string()).collect(),
        arguments,
    }
}

fn declare(kind: DeclarationKind, name: &str, init: ExpressionType) -> StatementType {
    StatementType::VariableDeclaration {
        meta: test_meta(),
        kind,
        name: name.to_string(),
        init,
    }
}

#[test]
fn test_literals() {
    let mut ctx = EvalContext::new();
    assert_eq!(evaluate_expression(&num_expr(42), &mut ctx), Ok(Value::integer(42)));
    assert_eq!(evaluate_expression(&str_expr("qwe"), &mut ctx), Ok(Value::string("qwe")));
    let array = ExpressionType::Array {
        meta: test_meta(),
        elements: vec![num_expr(1), str_expr("1")],
    };
    assert_eq!(
        evaluate_expression(&array, &mut ctx),
        Ok(Value::Array(vec![Value::integer(1), Value::string("1")]))
    );
}

#[test]
fn test_undefined_identifier() {
    let mut ctx = EvalContext::new();
    assert_eq!(
        evaluate_expression(&ident_expr("ourCodeMakesAMistake"), &mut ctx),
        Err(ErrorType::ReferenceError(
            "ourCodeMakesAMistake is not defined".to_string()
        ))
    );
}

#[test]
fn test_declaration_binds_value() {
    let mut ctx = EvalContext::new();
    let completion = execute_statement(&declare(DeclarationKind::Var, "n", num_expr(6)), &mut ctx).unwrap();
    assert_eq!(completion.value, None);
    assert_eq!(ctx.get_binding("n"), Some(Value::integer(6)));
    assert_eq!(evaluate_expression(&ident_expr("n"), &mut ctx), Ok(Value::integer(6)));
}

#[test]
fn test_var_can_be_redeclared() {
    let mut ctx = EvalContext::new();
    execute_statement(&declare(DeclarationKind::Var, "a", num_expr(1)), &mut ctx).unwrap();
    execute_statement(&declare(DeclarationKind::Var, "a", num_expr(2)), &mut ctx).unwrap();
    assert_eq!(ctx.get_binding("a"), Some(Value::integer(2)));
}

#[test]
fn test_let_and_const_cannot_be_redeclared() {
    let mut ctx = EvalContext::new();
    execute_statement(&declare(DeclarationKind::Let, "a", num_expr(1)), &mut ctx).unwrap();
    assert!(matches!(
        execute_statement(&declare(DeclarationKind::Var, "a", num_expr(2)), &mut ctx),
        Err(ErrorType::SyntaxError(_))
    ));

    execute_statement(&declare(DeclarationKind::Var, "b", num_expr(1)), &mut ctx).unwrap();
    assert!(matches!(
        execute_statement(&declare(DeclarationKind::Const, "b", num_expr(2)), &mut ctx),
        Err(ErrorType::SyntaxError(_))
    ));
    assert_eq!(ctx.get_binding("a"), Some(Value::integer(1)));
    assert_eq!(ctx.get_binding("b"), Some(Value::integer(1)));
}

#[test]
fn test_call_without_builtins_is_reference_error() {
    let mut ctx = EvalContext::new();
    assert!(matches!(
        evaluate_expression(&call_expr(&["factorial"], vec![num_expr(3)]), &mut ctx),
        Err(ErrorType::ReferenceError(_))
    ));
}

#[test]
fn test_call_core_builtin() {
    let mut ctx = EvalContext::with_core();
    assert_eq!(
        evaluate_expression(&call_expr(&["factorial"], vec![num_expr(5)]), &mut ctx),
        Ok(Value::integer(120))
    );
}

#[test]
fn test_unknown_member_is_type_error() {
    let mut ctx = EvalContext::with_core();
    assert_eq!(
        evaluate_expression(&call_expr(&["console", "warn"], vec![]), &mut ctx),
        Err(ErrorType::TypeError("console.warn is not a function".to_string()))
    );
}

#[test]
fn test_binding_shadows_builtin() {
    let mut ctx = EvalContext::with_core();
    execute_statement(&declare(DeclarationKind::Var, "factorial", num_expr(1)), &mut ctx).unwrap();
    assert_eq!(
        evaluate_expression(&call_expr(&["factorial"], vec![num_expr(3)]), &mut ctx),
        Err(ErrorType::TypeError("factorial is not a function".to_string()))
    );
}

#[test]
fn test_argument_errors_propagate() {
    let mut ctx = EvalContext::with_core();
    let expr = call_expr(&["deduplicate"], vec![ident_expr("missing")]);
    assert!(matches!(
        evaluate_expression(&expr, &mut ctx),
        Err(ErrorType::ReferenceError(_))
    ));
}

#[test]
fn test_context_local_functions_do_not_leak() {
    let mut first = EvalContext::with_core();
    first.register_function("triple", |_ctx, args| match args.first() {
        Some(Value::Number(n)) => Ok(Value::integer(n.as_integer().unwrap_or(0) * 3)),
        _ => Ok(Value::Undefined),
    });
    assert_eq!(
        evaluate_expression(&call_expr(&["triple"], vec![num_expr(7)]), &mut first),
        Ok(Value::integer(21))
    );
    assert_eq!(
        evaluate_expression(&call_expr(&["factorial"], vec![num_expr(3)]), &mut first),
        Ok(Value::integer(6))
    );

    let mut second = EvalContext::with_core();
    assert!(matches!(
        evaluate_expression(&call_expr(&["triple"], vec![num_expr(7)]), &mut second),
        Err(ErrorType::ReferenceError(_))
    ));
}
