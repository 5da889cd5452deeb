// Copyright 2026 The Synt Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Property-based tests: programs generated from the grammar must always
//! be accepted, and recognition of arbitrary input is deterministic.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

use super::recognize;

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,2}"
}

fn const_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,5}",
        "0[bB][01]{1,8}",
        "0[xX][0-9a-fA-F]{1,6}",
    ]
}

/// Build expression strings bottom-up the same way the grammar derives
/// them: primaries under optional negations, '*' chains, '+' chains, and
/// assignments whose target is a bare name.
fn expr_strategy() -> BoxedStrategy<String> {
    let leaf = prop_oneof![const_strategy(), ident_strategy()];
    leaf.prop_recursive(3, 24, 3, |expr| {
        let primary = prop_oneof![
            const_strategy(),
            ident_strategy(),
            expr.clone().prop_map(|e| format!("({e})")),
        ];
        let unary = ("~{0,2}", primary).prop_map(|(negs, p)| format!("{negs}{p}"));
        let term = prop::collection::vec(unary, 1..3).prop_map(|us| us.join("*"));
        let sum = prop::collection::vec(term, 1..3).prop_map(|ts| ts.join(" + "));
        prop_oneof![
            sum,
            (ident_strategy(), expr).prop_map(|(id, e)| format!("{id} = {e}")),
        ]
    })
    .boxed()
}

fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(expr_strategy(), 1..4).prop_map(|stmts| stmts.join("; "))
}

proptest! {
    #[test]
    fn grammar_generated_programs_accept(program in program_strategy()) {
        prop_assert_eq!(Ok(()), recognize(&program), "program: {}", program);
    }

    #[test]
    fn same_input_same_verdict(input in "[ -~]{0,24}") {
        prop_assert_eq!(recognize(&input), recognize(&input));
    }

    #[test]
    fn no_panics_on_arbitrary_input(input in "\\PC{0,32}") {
        let _ = recognize(&input);
    }
}
