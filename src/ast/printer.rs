//! Textual forms of the AST.
//!
//! - `to_sexp` gives a deterministic, span-free dump in the
//!   `Kind(field, ...)` form. Identifiers and numbers print as their text,
//!   expression statements as their bare expression, absent fields as `None`.
//! - `print_source` gives canonical source text which parses back into the
//!   same tree.

use super::{
    ast::{Expr, Program, Stmt},
    expressions::ArrowBody,
    statements::{BlockStmt, ForInit, Parameter, VarDeclStmt},
    types::TypeAnnotation,
};

const INDENT: &str = "    ";

pub fn to_sexp(program: &Program) -> String {
    let mut fields = vec![];
    if let Some(hash_bang) = &program.hash_bang {
        fields.push(format!("HashBang({})", hash_bang));
    }
    fields.extend(program.body.iter().map(stmt_sexp));

    format!("Program({})", fields.join(", "))
}

pub fn stmt_sexp(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression(stmt) => expr_sexp(&stmt.expression),
        Stmt::Block(block) => block_sexp(block),
        Stmt::If(stmt) => format!(
            "IfStatement({}, {}, {})",
            expr_sexp(&stmt.condition),
            stmt_sexp(&stmt.then_body),
            optional(stmt.else_body.as_deref(), stmt_sexp)
        ),
        Stmt::For(stmt) => {
            let init = match &stmt.init {
                Some(ForInit::VarDecl(decl)) => var_decl_sexp(decl),
                Some(ForInit::Expr(expr)) => expr_sexp(expr),
                None => String::from("None"),
            };

            format!(
                "ForStatement({}, {}, {}, {})",
                init,
                optional(stmt.condition.as_ref(), expr_sexp),
                optional(stmt.update.as_ref(), expr_sexp),
                stmt_sexp(&stmt.body)
            )
        }
        Stmt::VarDecl(decl) => var_decl_sexp(decl),
        Stmt::FnDecl(decl) => format!(
            "FunctionDeclaration({}{}, {}, {}, {})",
            if decl.is_async { "async, " } else { "" },
            decl.identifier,
            parameters_sexp(&decl.parameters),
            optional(decl.return_type.as_ref(), type_sexp),
            block_sexp(&decl.body)
        ),
        Stmt::Return(stmt) => format!(
            "ReturnStatement({})",
            optional(stmt.value.as_ref(), expr_sexp)
        ),
    }
}

pub fn expr_sexp(expr: &Expr) -> String {
    match expr {
        Expr::Symbol(symbol) => symbol.value.clone(),
        Expr::Number(number) => number.raw.clone(),
        Expr::Binary(binary) => format!(
            "BinaryExpression({}, {}, {})",
            binary.operator,
            expr_sexp(&binary.left),
            expr_sexp(&binary.right)
        ),
        Expr::Update(update) => format!(
            "UpdateExpression({}, {}, {})",
            expr_sexp(&update.argument),
            update.operator,
            if update.is_prefix { "prefix" } else { "postfix" }
        ),
        Expr::Assignment(assignment) => format!(
            "AssignmentExpression({}{}, {})",
            if assignment.uses_using { "using, " } else { "" },
            assignment.assignee.value,
            expr_sexp(&assignment.value)
        ),
        Expr::ArrowFunction(arrow) => format!(
            "ArrowFunction({}, {}, {})",
            parameters_sexp(&arrow.parameters),
            optional(arrow.return_type.as_ref(), type_sexp),
            match &arrow.body {
                ArrowBody::Expr(expr) => expr_sexp(expr),
                ArrowBody::Block(block) => block_sexp(block),
            }
        ),
    }
}

pub fn type_sexp(ty: &TypeAnnotation) -> String {
    match ty {
        TypeAnnotation::Primitive(ty) => format!("Primitive({})", ty.primitive),
        TypeAnnotation::Generic(ty) => format!(
            "Generic({}, [{}])",
            ty.name,
            ty.type_arguments
                .iter()
                .map(type_sexp)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

fn block_sexp(block: &BlockStmt) -> String {
    format!(
        "Block({})",
        block.iter().map(stmt_sexp).collect::<Vec<_>>().join(", ")
    )
}

fn var_decl_sexp(decl: &VarDeclStmt) -> String {
    format!(
        "VariableDeclaration({}, {}, {}, {})",
        decl.kind,
        decl.identifier,
        optional(decl.explicit_type.as_ref(), type_sexp),
        optional(decl.assigned_value.as_ref(), expr_sexp)
    )
}

fn parameters_sexp(parameters: &[Parameter]) -> String {
    let parameters = parameters
        .iter()
        .map(|parameter| {
            format!(
                "Parameter({}{}{}, {}, {})",
                if parameter.is_rest { "..." } else { "" },
                parameter.name,
                if parameter.is_optional { "?" } else { "" },
                optional(parameter.explicit_type.as_ref(), type_sexp),
                optional(parameter.default_value.as_ref(), expr_sexp)
            )
        })
        .collect::<Vec<_>>();

    format!("[{}]", parameters.join(", "))
}

fn optional<T: ?Sized>(value: Option<&T>, print: fn(&T) -> String) -> String {
    value.map_or_else(|| String::from("None"), print)
}

// SOURCE

pub fn print_source(program: &Program) -> String {
    let mut out = String::new();
    if let Some(hash_bang) = &program.hash_bang {
        out.push_str(hash_bang);
        out.push('\n');
    }

    for stmt in &program.body {
        out.push_str(&print_stmt(stmt, 0));
        out.push('\n');
    }

    out
}

// The first line carries no indentation; nested lines are indented for
// `depth`.
fn print_stmt(stmt: &Stmt, depth: usize) -> String {
    match stmt {
        Stmt::Expression(stmt) => format!("{};", print_expr(&stmt.expression, depth)),
        Stmt::Block(block) => print_block(block, depth),
        Stmt::If(stmt) => {
            let mut out = format!(
                "if ({}) {}",
                print_expr(&stmt.condition, depth),
                print_stmt(&stmt.then_body, depth)
            );
            if let Some(else_body) = &stmt.else_body {
                out.push_str(" else ");
                out.push_str(&print_stmt(else_body, depth));
            }
            out
        }
        Stmt::For(stmt) => {
            let mut out = String::from("for (");
            match &stmt.init {
                Some(ForInit::VarDecl(decl)) => out.push_str(&print_var_decl(decl, depth)),
                Some(ForInit::Expr(expr)) => out.push_str(&print_expr(expr, depth)),
                None => {}
            }
            out.push(';');
            if let Some(condition) = &stmt.condition {
                out.push(' ');
                out.push_str(&print_expr(condition, depth));
            }
            out.push(';');
            if let Some(update) = &stmt.update {
                out.push(' ');
                out.push_str(&print_expr(update, depth));
            }
            out.push_str(") ");
            out.push_str(&print_stmt(&stmt.body, depth));
            out
        }
        Stmt::VarDecl(decl) => format!("{};", print_var_decl(decl, depth)),
        Stmt::FnDecl(decl) => format!(
            "{}function {}({}){} {}",
            if decl.is_async { "async " } else { "" },
            decl.identifier,
            print_parameters(&decl.parameters, depth),
            print_return_type(decl.return_type.as_ref()),
            print_block(&decl.body, depth)
        ),
        Stmt::Return(stmt) => match &stmt.value {
            Some(value) => format!("return {};", print_expr(value, depth)),
            None => String::from("return;"),
        },
    }
}

fn print_block(block: &BlockStmt, depth: usize) -> String {
    if block.body.is_empty() {
        return String::from("{}");
    }

    let mut out = String::from("{\n");
    for stmt in block.iter() {
        out.push_str(&INDENT.repeat(depth + 1));
        out.push_str(&print_stmt(stmt, depth + 1));
        out.push('\n');
    }
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
    out
}

fn print_var_decl(decl: &VarDeclStmt, depth: usize) -> String {
    let mut out = format!("{} {}", decl.kind, decl.identifier);
    if let Some(ty) = &decl.explicit_type {
        out.push_str(&format!(": {}", ty));
    }
    if let Some(value) = &decl.assigned_value {
        out.push_str(&format!(" = {}", print_expr(value, depth)));
    }
    out
}

fn print_parameters(parameters: &[Parameter], depth: usize) -> String {
    parameters
        .iter()
        .map(|parameter| {
            let mut out = String::new();
            if parameter.is_rest {
                out.push_str("...");
            }
            out.push_str(&parameter.name);
            if parameter.is_optional {
                out.push('?');
            }
            if let Some(ty) = &parameter.explicit_type {
                out.push_str(&format!(": {}", ty));
            }
            if let Some(default_value) = &parameter.default_value {
                out.push_str(&format!(" = {}", print_expr(default_value, depth)));
            }
            out
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_return_type(return_type: Option<&TypeAnnotation>) -> String {
    return_type.map_or_else(String::new, |ty| format!(": {}", ty))
}

fn print_expr(expr: &Expr, depth: usize) -> String {
    match expr {
        Expr::Symbol(symbol) => symbol.value.clone(),
        Expr::Number(number) => number.raw.clone(),
        Expr::Binary(binary) => format!(
            "{} {} {}",
            print_operand(&binary.left, depth),
            binary.operator,
            print_operand(&binary.right, depth)
        ),
        Expr::Update(update) => {
            let argument = print_operand(&update.argument, depth);
            if update.is_prefix {
                format!("{}{}", update.operator, argument)
            } else {
                format!("{}{}", argument, update.operator)
            }
        }
        Expr::Assignment(assignment) => format!(
            "{}{} = {}",
            if assignment.uses_using { "using " } else { "" },
            assignment.assignee.value,
            print_expr(&assignment.value, depth)
        ),
        Expr::ArrowFunction(arrow) => format!(
            "({}){} => {}",
            print_parameters(&arrow.parameters, depth),
            print_return_type(arrow.return_type.as_ref()),
            match &arrow.body {
                ArrowBody::Expr(body) => print_expr(body, depth),
                ArrowBody::Block(block) => print_block(block, depth),
            }
        ),
    }
}

// Compound operands are always parenthesized so that precedence never has
// to be reconstructed.
fn print_operand(expr: &Expr, depth: usize) -> String {
    match expr {
        Expr::Symbol(_) | Expr::Number(_) | Expr::Update(_) => print_expr(expr, depth),
        _ => format!("({})", print_expr(expr, depth)),
    }
}
