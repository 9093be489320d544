use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{NumberExpr, SymbolExpr},
        printer::{expr_sexp, print_source, to_sexp, type_sexp},
        statements::{DeclKind, ExpressionStmt, VarDeclStmt},
        types::{GenericType, Primitive, PrimitiveType, TypeAnnotation},
    },
    lexer::tokens::Radix,
    parse_source, Position, Span,
};

fn span() -> Span {
    Span {
        start: Position::start(),
        end: Position::start(),
    }
}

fn symbol(name: &str) -> Expr {
    Expr::Symbol(SymbolExpr {
        value: name.to_string(),
        span: span(),
    })
}

#[test]
fn test_sexp_of_built_tree() {
    let program = Program {
        hash_bang: None,
        body: vec![
            Stmt::VarDecl(VarDeclStmt {
                kind: DeclKind::Const,
                identifier: String::from("limit"),
                explicit_type: Some(TypeAnnotation::Primitive(PrimitiveType {
                    primitive: Primitive::Number,
                    span: span(),
                })),
                assigned_value: Some(Expr::Number(NumberExpr {
                    raw: String::from("0xFF"),
                    radix: Radix::Hex,
                    span: span(),
                })),
                span: span(),
            }),
            Stmt::Expression(ExpressionStmt {
                expression: symbol("limit"),
                span: span(),
            }),
        ],
        span: span(),
    };

    assert_eq!(
        to_sexp(&program),
        "Program(VariableDeclaration(const, limit, Primitive(number), 0xFF), limit)"
    );
}

#[test]
fn test_type_display_and_sexp() {
    let ty = TypeAnnotation::Generic(GenericType {
        name: String::from("Promise"),
        type_arguments: vec![TypeAnnotation::Primitive(PrimitiveType {
            primitive: Primitive::Void,
            span: span(),
        })],
        span: span(),
    });

    assert_eq!(ty.to_string(), "Promise<void>");
    assert_eq!(type_sexp(&ty), "Generic(Promise, [Primitive(void)])");
}

#[test]
fn test_kind_names() {
    let expr = symbol("x");
    assert_eq!(expr.kind_name(), "Identifier");
    assert_eq!(expr_sexp(&expr), "x");
    assert!(expr.as_symbol().is_some());

    let program = parse_source("for (;;) {}").unwrap();
    assert_eq!(program.body[0].kind_name(), "ForStatement");
}

#[test]
fn test_print_source_parenthesizes_compound_operands() {
    let program = parse_source("(a + b) * c ** (d - 1)").unwrap();
    assert_eq!(print_source(&program), "(a + b) * (c ** (d - 1));\n");

    let program = parse_source("a - --b").unwrap();
    assert_eq!(print_source(&program), "a - --b;\n");
}

#[test]
fn test_print_source_layout() {
    let source = "#!/usr/bin/env node\nasync function f(x?: number, ...rest: any): Promise<number> { if (x) { return x } else return; }";
    let program = parse_source(source).unwrap();

    assert_eq!(
        print_source(&program),
        "#!/usr/bin/env node\n\
         async function f(x?: number, ...rest: any): Promise<number> {\n\
         \x20   if (x) {\n\
         \x20       return x;\n\
         \x20   } else return;\n\
         }\n"
    );
}

#[test]
fn test_print_source_statements() {
    let program = parse_source("for (let i = 0; i < n; i++) {} let f = (a = 1) => a; using r = f").unwrap();

    assert_eq!(
        print_source(&program),
        "for (let i = 0; i < n; i++) {}\nlet f = (a = 1) => a;\nusing r = f;\n"
    );
}
