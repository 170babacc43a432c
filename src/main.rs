use std::time::Instant;

use pcf_typeck::{
    ast::{terms::Term, types::Type},
    display_result,
    type_checker::{environment::Environment, type_checker::TypeChecker},
};

fn int_to_int() -> Type {
    Type::function(Type::Integer, Type::Integer)
}

fn demonstration_terms() -> Vec<Term> {
    let sum = Term::fix(
        "sum",
        Type::function(Type::Integer, int_to_int()),
        Term::function(
            "x",
            Type::Integer,
            Term::function(
                "y",
                Type::Integer,
                Term::cond(
                    Term::app(Term::IsZero, Term::ident("x")),
                    Term::ident("y"),
                    Term::app(
                        Term::app(
                            Term::ident("sum"),
                            Term::app(Term::Predecessor, Term::ident("x")),
                        ),
                        Term::app(Term::Successor, Term::ident("y")),
                    ),
                ),
            ),
        ),
    );

    let let_succ = Term::let_in(
        "f",
        int_to_int(),
        Term::function("x", Type::Integer, Term::app(Term::Successor, Term::ident("x"))),
        Term::app(Term::ident("f"), Term::num(0)),
    );

    let pair = Term::pair(Term::num(1), Term::boolean(true));

    vec![
        Term::num(3),
        Term::app(Term::Successor, Term::num(3)),
        Term::function("x", Type::Integer, Term::ident("x")),
        sum,
        let_succ,
        Term::first(pair.clone()),
        Term::second(pair),
        Term::ident("x"),
        Term::app(Term::Successor, Term::boolean(true)),
        Term::first(Term::num(5)),
    ]
}

fn main() {
    let checker = TypeChecker::default();
    let start = Instant::now();

    for term in demonstration_terms() {
        let check_start = Instant::now();
        let result = checker.check(&term, &Environment::empty());

        println!("{}", display_result(&term, &result));
        println!("Type checked in {:?}", check_start.elapsed());
    }

    println!("Total time: {:?}", start.elapsed());
}
