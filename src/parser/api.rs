use std::time::Instant;

use pest::error::{Error, ErrorVariant};
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;
use tracing::debug;

use super::ast::*;

#[derive(Parser)]
#[grammar = "parser/notes_grammar.pest"] // relative to src
pub struct NotesParser;

const TAB_WIDTH: usize = 2;

impl NotesParser {
    /// Parse a snippet into its AST.
    pub fn parse_to_ast_from_str(script: &str) -> Result<ProgramData, Error<Rule>> {
        let start = Instant::now();
        let mut pairs = NotesParser::parse(Rule::script, script)?;
        let script_pair = match pairs.next() {
            Some(p) => p,
            None => {
                return Err(Error::new_from_pos(
                    ErrorVariant::CustomError {
                        message: "Empty parse result".to_string(),
                    },
                    pest::Position::from_start(script),
                ))
            }
        };
        let program = build_program(script_pair)?;
        debug!(
            statements = program.body.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "parsed snippet"
        );
        Ok(program)
    }

    /// Render the raw parse tree, one rule per line, for debugging the grammar.
    pub fn parse_to_token_tree(script: &str) -> Result<String, String> {
        let mut tree = vec![];
        let start = Instant::now();
        let result = NotesParser::parse(Rule::script, script);
        debug!(
            elapsed_us = start.elapsed().as_micros() as u64,
            "token tree parse"
        );

        match result {
            Ok(pairs) => {
                for pair in pairs {
                    tree.push(pair_to_string(pair, 0).join("\n"));
                }
            }
            Err(rule) => {
                return Err(format!("Parse error due to {:?}", rule));
            }
        }
        Ok(tree.join("\n"))
    }
}

fn pair_to_string(pair: Pair<Rule>, level: usize) -> Vec<String> {
    let mut tree = vec![];
    let span = pair.as_span();
    let rule_name = format!(
        "{:?} => ({},{}) #{:?}",
        pair.as_rule(),
        span.start(),
        span.end(),
        span.as_str()
    );
    let string_pads = " ".repeat(level * TAB_WIDTH);
    tree.push(format!("{}{}", string_pads, rule_name));
    for child_pair in pair.into_inner() {
        tree.append(pair_to_string(child_pair, level + 1).as_mut());
    }
    tree
}

fn get_meta(pair: &Pair<Rule>) -> Meta {
    let span = pair.as_span();
    Meta {
        start_index: span.start(),
        end_index: span.end(),
    }
}

fn get_unexpected_error(id: i32, pair: &Pair<Rule>) -> Error<Rule> {
    let message = format!("Unexpected state reached [{:?}] - {}", pair.as_rule(), id);
    Error::new_from_span(ErrorVariant::CustomError { message }, pair.as_span())
}

fn next_inner<'i>(
    id: i32,
    parent: &Pair<'i, Rule>,
    pairs: &mut Pairs<'i, Rule>,
) -> Result<Pair<'i, Rule>, Error<Rule>> {
    pairs.next().ok_or_else(|| get_unexpected_error(id, parent))
}

fn build_program(pair: Pair<Rule>) -> Result<ProgramData, Error<Rule>> {
    let meta = get_meta(&pair);
    let mut body = vec![];
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::statement => body.push(build_statement(inner_pair)?),
            Rule::EOI => { /* Do nothing */ }
            _ => return Err(get_unexpected_error(1, &inner_pair)),
        }
    }
    Ok(ProgramData { meta, body })
}

fn build_statement(pair: Pair<Rule>) -> Result<StatementType, Error<Rule>> {
    let meta = get_meta(&pair);
    let mut pairs = pair.clone().into_inner();
    let inner_pair = next_inner(2, &pair, &mut pairs)?;
    Ok(match inner_pair.as_rule() {
        Rule::var_declaration => build_var_declaration(meta, inner_pair)?,
        Rule::expression => StatementType::ExpressionStatement {
            meta,
            expression: build_expression(inner_pair)?,
        },
        _ => return Err(get_unexpected_error(3, &inner_pair)),
    })
}

fn build_var_declaration(meta: Meta, pair: Pair<Rule>) -> Result<StatementType, Error<Rule>> {
    let mut pairs = pair.clone().into_inner();
    let kind_pair = next_inner(4, &pair, &mut pairs)?;
    let kind = DeclarationKind::from_keyword(kind_pair.as_str())
        .ok_or_else(|| get_unexpected_error(5, &kind_pair))?;
    let name = next_inner(6, &pair, &mut pairs)?.as_str().to_string();
    let init = build_expression(next_inner(7, &pair, &mut pairs)?)?;
    Ok(StatementType::VariableDeclaration {
        meta,
        kind,
        name,
        init,
    })
}

fn build_expression(pair: Pair<Rule>) -> Result<ExpressionType, Error<Rule>> {
    let mut pairs = pair.clone().into_inner();
    let inner_pair = next_inner(8, &pair, &mut pairs)?;
    let meta = get_meta(&inner_pair);
    Ok(match inner_pair.as_rule() {
        Rule::call_expression => build_call_expression(meta, inner_pair)?,
        Rule::array_literal => ExpressionType::Array {
            meta,
            elements: build_expression_list(inner_pair)?,
        },
        Rule::string_literal => {
            let mut inner = inner_pair.clone().into_inner();
            let raw = next_inner(9, &inner_pair, &mut inner)?;
            ExpressionType::StringLiteral {
                meta,
                value: unescape(raw.as_str()),
            }
        }
        Rule::number_literal => ExpressionType::NumberLiteral {
            meta,
            value: build_number(&inner_pair)?,
        },
        Rule::boolean_literal => ExpressionType::BooleanLiteral {
            meta,
            value: inner_pair.as_str() == "true",
        },
        Rule::identifier => ExpressionType::Identifier {
            meta,
            name: inner_pair.as_str().to_string(),
        },
        _ => return Err(get_unexpected_error(10, &inner_pair)),
    })
}

fn build_call_expression(meta: Meta, pair: Pair<Rule>) -> Result<ExpressionType, Error<Rule>> {
    let mut pairs = pair.clone().into_inner();
    let path_pair = next_inner(11, &pair, &mut pairs)?;
    let callee = path_pair
        .into_inner()
        .map(|p| p.as_str().to_string())
        .collect();
    let arguments = build_expression_list(next_inner(12, &pair, &mut pairs)?)?;
    Ok(ExpressionType::Call {
        meta,
        callee,
        arguments,
    })
}

/// Build the expressions of an `arguments` or `array_literal` pair.
fn build_expression_list(pair: Pair<Rule>) -> Result<Vec<ExpressionType>, Error<Rule>> {
    let mut list = vec![];
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::expression => list.push(build_expression(inner_pair)?),
            _ => return Err(get_unexpected_error(13, &inner_pair)),
        }
    }
    Ok(list)
}

const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

fn build_number(pair: &Pair<Rule>) -> Result<NumberLiteralType, Error<Rule>> {
    let text = pair.as_str();
    let is_integral = !text.contains(|c: char| c == '.' || c == 'e' || c == 'E');
    if is_integral {
        // Integers past 2^53 - 1 lose precision the same way they would as doubles.
        match text.parse::<i64>() {
            Ok(i) if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&i) => {
                return Ok(NumberLiteralType::IntegerLiteral(i));
            }
            _ => {}
        }
    }
    text.parse::<f64>()
        .map(NumberLiteralType::FloatLiteral)
        .map_err(|e| {
            Error::new_from_span(
                ErrorVariant::CustomError {
                    message: format!("Invalid number literal: {}", e),
                },
                pair.as_span(),
            )
        })
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
