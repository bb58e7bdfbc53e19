use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}
impl DeclarationKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "var" => Some(DeclarationKind::Var),
            "let" => Some(DeclarationKind::Let),
            "const" => Some(DeclarationKind::Const),
            _ => None,
        }
    }
}
impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeclarationKind::Var => "var",
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteralType {
    IntegerLiteral(i64),
    FloatLiteral(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionType {
    Call {
        meta: Meta,
        /// Dotted path of the callee, e.g. `["console", "log"]`.
        callee: Vec<String>,
        arguments: Vec<ExpressionType>,
    },
    Array {
        meta: Meta,
        elements: Vec<ExpressionType>,
    },
    StringLiteral {
        meta: Meta,
        value: String,
    },
    NumberLiteral {
        meta: Meta,
        value: NumberLiteralType,
    },
    BooleanLiteral {
        meta: Meta,
        value: bool,
    },
    Identifier {
        meta: Meta,
        name: String,
    },
}
impl ExpressionType {
    pub fn get_meta(&self) -> &Meta {
        match self {
            ExpressionType::Call { meta, .. }
            | ExpressionType::Array { meta, .. }
            | ExpressionType::StringLiteral { meta, .. }
            | ExpressionType::NumberLiteral { meta, .. }
            | ExpressionType::BooleanLiteral { meta, .. }
            | ExpressionType::Identifier { meta, .. } => meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementType {
    VariableDeclaration {
        meta: Meta,
        kind: DeclarationKind,
        name: String,
        init: ExpressionType,
    },
    ExpressionStatement {
        meta: Meta,
        expression: ExpressionType,
    },
}
impl StatementType {
    pub fn get_meta(&self) -> &Meta {
        match self {
            StatementType::VariableDeclaration { meta, .. }
            | StatementType::ExpressionStatement { meta, .. } => meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramData {
    pub meta: Meta,
    pub body: Vec<StatementType>,
}
