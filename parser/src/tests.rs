//! FILENAME: parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::ast::{Connective, Formula};
use crate::lexer::{tokenize, Lexer};
use crate::parser::{parse_formula, parse_formula_strict, ParseError, Parser, MAX_DEPTH};
use crate::render::{placeholder, render, NoMeanings};
use crate::token::Token;
use std::collections::{BTreeMap, HashMap};

fn p() -> Formula {
    Formula::atom('P')
}

fn q() -> Formula {
    Formula::atom('Q')
}

fn r() -> Formula {
    Formula::atom('R')
}

fn meanings(pairs: &[(char, &str)]) -> HashMap<char, String> {
    pairs
        .iter()
        .map(|(atom, meaning)| (*atom, meaning.to_string()))
        .collect()
}

fn abc() -> HashMap<char, String> {
    meanings(&[('P', "a"), ('Q', "b"), ('R', "c")])
}

fn render_str(input: &str, meanings: &HashMap<char, String>) -> String {
    render(&parse_formula(input).unwrap(), meanings)
}

// ========================================
// LEXER TESTS
// ========================================

#[test]
fn lexer_tokenizes_every_symbol() {
    assert_eq!(
        tokenize("¬∧∨→↔()"),
        vec![
            Token::Not,
            Token::And,
            Token::Or,
            Token::Implies,
            Token::Iff,
            Token::LParen,
            Token::RParen,
        ]
    );
}

#[test]
fn lexer_tokenizes_atoms_a_to_z() {
    assert_eq!(
        tokenize("AMZ"),
        vec![Token::Atom('A'), Token::Atom('M'), Token::Atom('Z')]
    );
}

#[test]
fn lexer_skips_spaces_tabs_and_newlines() {
    assert_eq!(
        tokenize(" P\t∧\nQ "),
        vec![Token::Atom('P'), Token::And, Token::Atom('Q')]
    );
}

#[test]
fn lexer_drops_unrecognized_characters() {
    assert_eq!(tokenize("P & q"), vec![Token::Atom('P')]);
    assert_eq!(tokenize("p1 + x -> y"), Vec::<Token>::new());
    assert_eq!(tokenize("É"), Vec::<Token>::new());
}

#[test]
fn lexer_returns_eof_repeatedly() {
    let mut lexer = Lexer::new("P");
    assert_eq!(lexer.next_token(), Token::Atom('P'));
    assert_eq!(lexer.next_token(), Token::EOF);
    assert_eq!(lexer.next_token(), Token::EOF);
}

#[test]
fn lexer_reports_char_offsets() {
    let mut lexer = Lexer::new(" P ∧ Q");
    assert_eq!(lexer.next_spanned(), (Token::Atom('P'), 1));
    assert_eq!(lexer.next_spanned(), (Token::And, 3));
    assert_eq!(lexer.next_spanned(), (Token::Atom('Q'), 5));
    assert_eq!(lexer.next_spanned(), (Token::EOF, 6));
}

#[test]
fn strict_lexer_reports_illegal_characters() {
    let mut lexer = Lexer::strict("P & Q");
    assert_eq!(lexer.next_token(), Token::Atom('P'));
    assert_eq!(lexer.next_token(), Token::Illegal('&'));
    assert_eq!(lexer.next_token(), Token::Atom('Q'));
    assert_eq!(lexer.next_token(), Token::EOF);
}

#[test]
fn strict_lexer_still_ignores_other_whitespace() {
    let tokens: Vec<Token> = Lexer::strict("P\r∧\u{a0}Q").collect();
    assert_eq!(tokens, vec![Token::Atom('P'), Token::And, Token::Atom('Q')]);
}

#[test]
fn token_display_uses_source_symbols() {
    assert_eq!(Token::Implies.to_string(), "→");
    assert_eq!(Token::Atom('X').to_string(), "X");
    assert_eq!(Token::EOF.to_string(), "EOF");
}

// ========================================
// PARSER TESTS - BASIC FORMS
// ========================================

#[test]
fn parser_parses_atom() {
    assert_eq!(parse_formula("P").unwrap(), p());
}

#[test]
fn parser_parses_negation() {
    assert_eq!(parse_formula("¬P").unwrap(), Formula::not(p()));
    assert_eq!(
        parse_formula("¬¬P").unwrap(),
        Formula::not(Formula::not(p()))
    );
}

#[test]
fn parser_parses_each_binary_connective() {
    assert_eq!(parse_formula("P ∧ Q").unwrap(), Formula::and(p(), q()));
    assert_eq!(parse_formula("P ∨ Q").unwrap(), Formula::or(p(), q()));
    assert_eq!(parse_formula("P → Q").unwrap(), Formula::implies(p(), q()));
    assert_eq!(parse_formula("P ↔ Q").unwrap(), Formula::iff(p(), q()));
}

#[test]
fn parser_ignores_whitespace_layout() {
    assert_eq!(
        parse_formula("P∧Q").unwrap(),
        parse_formula(" P  ∧  Q ").unwrap()
    );
    assert_eq!(
        parse_formula("(P→Q)\n∧\tR").unwrap(),
        parse_formula("(P → Q) ∧ R").unwrap()
    );
}

// ========================================
// PARSER TESTS - PRECEDENCE & ASSOCIATIVITY
// ========================================

#[test]
fn parser_and_binds_tighter_than_or() {
    assert_eq!(
        parse_formula("P ∧ Q ∨ R").unwrap(),
        Formula::or(Formula::and(p(), q()), r())
    );
    assert_eq!(
        parse_formula("P ∨ Q ∧ R").unwrap(),
        Formula::or(p(), Formula::and(q(), r()))
    );
}

#[test]
fn parser_negation_binds_tightest() {
    assert_eq!(
        parse_formula("¬P ∧ Q").unwrap(),
        Formula::and(Formula::not(p()), q())
    );
}

#[test]
fn parser_full_precedence_ladder() {
    assert_eq!(
        parse_formula("P ∨ Q → R ↔ S").unwrap(),
        Formula::iff(
            Formula::implies(Formula::or(p(), q()), r()),
            Formula::atom('S')
        )
    );
}

#[test]
fn parser_implication_is_right_associative() {
    assert_eq!(
        parse_formula("P → Q → R").unwrap(),
        Formula::implies(p(), Formula::implies(q(), r()))
    );
}

#[test]
fn parser_biconditional_folds_left() {
    assert_eq!(
        parse_formula("P ↔ Q ↔ R").unwrap(),
        Formula::iff(Formula::iff(p(), q()), r())
    );
}

#[test]
fn parser_conjunction_and_disjunction_fold_left() {
    assert_eq!(
        parse_formula("P ∧ Q ∧ R").unwrap(),
        Formula::and(Formula::and(p(), q()), r())
    );
    assert_eq!(
        parse_formula("P ∨ Q ∨ R").unwrap(),
        Formula::or(Formula::or(p(), q()), r())
    );
}

#[test]
fn parser_parentheses_reset_precedence() {
    assert_eq!(
        parse_formula("¬(P ∧ Q)").unwrap(),
        Formula::not(Formula::and(p(), q()))
    );
    assert_eq!(
        parse_formula("(P ↔ Q) ∧ R").unwrap(),
        Formula::and(Formula::iff(p(), q()), r())
    );
    assert_eq!(
        parse_formula("(P → Q) → R").unwrap(),
        Formula::implies(Formula::implies(p(), q()), r())
    );
    assert_eq!(parse_formula("((P))").unwrap(), p());
}

#[test]
fn parser_accepts_pre_tokenized_input() {
    let mut parser = Parser::from_tokens(vec![Token::Atom('P'), Token::Or, Token::Atom('Q')]);
    assert_eq!(parser.parse().unwrap(), Formula::or(p(), q()));
}

// ========================================
// PARSER TESTS - ERRORS
// ========================================

#[test]
fn parser_rejects_unmatched_open_paren() {
    assert_eq!(
        parse_formula("(P ∧ Q"),
        Err(ParseError::Expected {
            expected: Token::RParen,
            found: Token::EOF,
            position: 4,
        })
    );
}

#[test]
fn parser_rejects_adjacent_atoms() {
    assert_eq!(
        parse_formula("P Q"),
        Err(ParseError::TrailingTokens {
            found: Token::Atom('Q'),
            position: 1,
        })
    );
}

#[test]
fn parser_rejects_unmatched_close_paren() {
    assert_eq!(
        parse_formula("P)"),
        Err(ParseError::TrailingTokens {
            found: Token::RParen,
            position: 1,
        })
    );
}

#[test]
fn parser_rejects_dangling_operator() {
    assert_eq!(parse_formula("P ∧"), Err(ParseError::UnexpectedEnd));
    assert_eq!(parse_formula("¬"), Err(ParseError::UnexpectedEnd));
    assert_eq!(parse_formula("P →"), Err(ParseError::UnexpectedEnd));
}

#[test]
fn parser_rejects_empty_input() {
    assert_eq!(parse_formula(""), Err(ParseError::UnexpectedEnd));
    assert_eq!(parse_formula("  \n"), Err(ParseError::UnexpectedEnd));
    // Nothing survives the tokenizer here either
    assert_eq!(parse_formula("chove"), Err(ParseError::UnexpectedEnd));
}

#[test]
fn parser_rejects_operator_in_atom_position() {
    assert_eq!(
        parse_formula("∧ P"),
        Err(ParseError::InvalidAtom {
            found: Token::And,
            position: 0,
        })
    );
    assert_eq!(
        parse_formula("P ∧ )"),
        Err(ParseError::InvalidAtom {
            found: Token::RParen,
            position: 2,
        })
    );
    assert_eq!(
        parse_formula("()"),
        Err(ParseError::InvalidAtom {
            found: Token::RParen,
            position: 1,
        })
    );
}

#[test]
fn parser_permissive_mode_hides_unknown_characters() {
    // "&" and "q" vanish before parsing
    assert_eq!(parse_formula("P & q").unwrap(), p());
}

#[test]
fn parser_strict_mode_rejects_unknown_characters() {
    assert_eq!(
        parse_formula_strict("P & q"),
        Err(ParseError::IllegalCharacter { ch: '&', offset: 2 })
    );
    assert_eq!(
        parse_formula_strict("P ∧ Q").unwrap(),
        Formula::and(p(), q())
    );
}

#[test]
fn parse_error_messages() {
    let err = parse_formula("(P ∧ Q").unwrap_err();
    assert_eq!(err.to_string(), "expected ')' at token 4, found 'EOF'");

    let err = parse_formula("P Q").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected 'Q' at token 1 after a complete formula"
    );
}

#[test]
fn parse_rejects_long_implication_chain() {
    let chain = vec!["P"; 100_000].join("→");
    assert_eq!(
        parse_formula(&chain),
        Err(ParseError::TooDeep { limit: MAX_DEPTH })
    );
}

#[test]
fn parse_rejects_long_left_folding_chain() {
    let chain = vec!["P"; 100_000].join(" ∧ ");
    assert_eq!(
        parse_formula(&chain),
        Err(ParseError::TooDeep { limit: MAX_DEPTH })
    );

    let chain = vec!["P"; 100_000].join("↔");
    assert_eq!(
        parse_formula(&chain),
        Err(ParseError::TooDeep { limit: MAX_DEPTH })
    );
}

#[test]
fn parse_rejects_deep_nesting() {
    let negations = format!("{}P", "¬".repeat(100_000));
    assert_eq!(
        parse_formula(&negations),
        Err(ParseError::TooDeep { limit: MAX_DEPTH })
    );

    let parens = format!("{}P{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(
        parse_formula(&parens),
        Err(ParseError::TooDeep { limit: MAX_DEPTH })
    );
}

#[test]
fn parse_accepts_formula_at_depth_limit() {
    let deepest = format!("{}P", "¬".repeat(MAX_DEPTH - 1));
    let formula = parse_formula(&deepest).unwrap();
    assert_eq!(formula.depth(), MAX_DEPTH);
    assert!(render(&formula, &NoMeanings).ends_with("proposição P"));

    let too_deep = format!("¬{}", deepest);
    assert_eq!(
        parse_formula(&too_deep),
        Err(ParseError::TooDeep { limit: MAX_DEPTH })
    );

    let chain = vec!["P"; MAX_DEPTH].join(" ∧ ");
    assert_eq!(parse_formula(&chain).unwrap().depth(), MAX_DEPTH);
}

// ========================================
// AST TESTS
// ========================================

#[test]
fn connective_precedence_ladder() {
    assert!(Connective::Not.precedence() > Connective::And.precedence());
    assert!(Connective::And.precedence() > Connective::Or.precedence());
    assert!(Connective::Or.precedence() > Connective::Implies.precedence());
    assert!(Connective::Implies.precedence() > Connective::Iff.precedence());
    assert_eq!(Connective::Iff.precedence(), 1);
    assert_eq!(p().precedence(), 5);
}

#[test]
fn formula_collects_distinct_atoms() {
    let formula = parse_formula("(R → Q) ∧ ¬R ∨ P").unwrap();
    let atoms: Vec<char> = formula.atoms().into_iter().collect();
    assert_eq!(atoms, vec!['P', 'Q', 'R']);
}

#[test]
fn formula_depth() {
    assert_eq!(p().depth(), 1);
    assert_eq!(parse_formula("¬(P ∧ Q)").unwrap().depth(), 3);
    assert_eq!(parse_formula("P → Q → R").unwrap().depth(), 3);
}

#[test]
fn formula_connective_and_operands() {
    let formula = parse_formula("P ∨ Q").unwrap();
    assert_eq!(formula.connective(), Some(Connective::Or));
    assert_eq!(formula.operands(), Some((&p(), &q())));
    assert_eq!(p().connective(), None);
    assert_eq!(Formula::binary(Connective::Not, p(), q()), None);
}

#[test]
fn formula_display_uses_minimal_parentheses() {
    let cases = [
        ("P∧Q∨R", "P ∧ Q ∨ R"),
        ("P ∧ (Q ∨ R)", "P ∧ (Q ∨ R)"),
        ("(P → Q) → R", "(P → Q) → R"),
        ("P → (Q → R)", "P → Q → R"),
        ("(P ∧ Q) ∧ R", "P ∧ Q ∧ R"),
        ("P ∧ (Q ∧ R)", "P ∧ (Q ∧ R)"),
        ("¬(P ∧ Q)", "¬(P ∧ Q)"),
        ("¬¬P", "¬¬P"),
        ("((P))", "P"),
        ("(P ↔ Q) ↔ R", "P ↔ Q ↔ R"),
    ];

    for (input, expected) in cases {
        assert_eq!(parse_formula(input).unwrap().to_string(), expected, "{}", input);
    }
}

#[test]
fn formula_display_reparses_to_same_tree() {
    let inputs = [
        "P ↔ (Q ↔ R)",
        "¬(P → Q) ∨ (R ∧ ¬S)",
        "((P ∨ Q) → R) → (S ↔ T)",
        "P ∧ ¬(Q ∨ R → S)",
    ];

    for input in inputs {
        let formula = parse_formula(input).unwrap();
        assert_eq!(parse_formula(&formula.to_string()).unwrap(), formula);
    }
}

#[test]
fn formula_serializes_as_tagged_json() {
    let formula = Formula::not(Formula::and(p(), q()));
    let json = serde_json::to_value(&formula).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "not",
            "operand": {
                "type": "and",
                "left": { "type": "atom", "name": "P" },
                "right": { "type": "atom", "name": "Q" }
            }
        })
    );

    let back: Formula = serde_json::from_value(json).unwrap();
    assert_eq!(back, formula);
}

// ========================================
// RENDERER TESTS
// ========================================

#[test]
fn render_each_connective() {
    let m = meanings(&[('P', "chove"), ('Q', "faz frio")]);
    assert_eq!(render_str("P ∧ Q", &m), "chove e faz frio");
    assert_eq!(render_str("P ∨ Q", &m), "chove ou faz frio");
    assert_eq!(render_str("P → Q", &m), "se chove, então faz frio");
    assert_eq!(render_str("P ↔ Q", &m), "chove se e somente se faz frio");
    assert_eq!(render_str("¬P", &m), "não chove");
}

#[test]
fn render_placeholder_for_missing_meaning() {
    assert_eq!(render(&p(), &NoMeanings), "proposição P");
    assert_eq!(placeholder('Z'), "proposição Z");

    let m = meanings(&[('P', "chove")]);
    assert_eq!(render_str("P ∨ Q", &m), "chove ou proposição Q");
}

#[test]
fn render_empty_meaning_falls_back_to_placeholder() {
    let m = meanings(&[('P', "")]);
    assert_eq!(render_str("P", &m), "proposição P");
}

#[test]
fn render_negated_conjunction_keeps_scope() {
    let formula = parse_formula("¬(P ∧ Q)").unwrap();
    assert_eq!(
        render(&formula, &NoMeanings),
        "não (proposição P e proposição Q)"
    );

    let formula = parse_formula("¬P ∧ Q").unwrap();
    assert_eq!(
        render(&formula, &NoMeanings),
        "não proposição P e proposição Q"
    );
}

#[test]
fn render_negation_of_negation_and_of_biconditional() {
    let m = abc();
    assert_eq!(render_str("¬¬P", &m), "não não a");
    assert_eq!(render_str("¬(P ↔ Q)", &m), "não (a se e somente se b)");
}

#[test]
fn render_parenthesizes_weaker_child() {
    let m = abc();
    assert_eq!(render_str("(P ∨ Q) ∧ R", &m), "(a ou b) e c");
    assert_eq!(render_str("(P → Q) ∧ R", &m), "(se a, então b) e c");
    assert_eq!(render_str("P ∧ (Q ↔ R)", &m), "a e (b se e somente se c)");
    assert_eq!(
        render_str("(P ↔ Q) → R", &m),
        "se (a se e somente se b), então c"
    );
}

#[test]
fn render_leaves_stronger_child_bare() {
    let m = abc();
    assert_eq!(render_str("P ∧ Q ∨ R", &m), "a e b ou c");
    assert_eq!(render_str("P → Q ∧ R", &m), "se a, então b e c");
    assert_eq!(render_str("P → Q → R", &m), "se a, então se b, então c");
    assert_eq!(
        render_str("P ↔ Q ↔ R", &m),
        "a se e somente se b se e somente se c"
    );
}

#[test]
fn render_accepts_string_keyed_maps() {
    let formula = parse_formula("P → Q").unwrap();

    let mut by_string: HashMap<String, String> = HashMap::new();
    by_string.insert("P".to_string(), "estudo".to_string());
    by_string.insert("Q".to_string(), "passo".to_string());
    assert_eq!(render(&formula, &by_string), "se estudo, então passo");

    let mut ordered: BTreeMap<String, String> = BTreeMap::new();
    ordered.insert("Q".to_string(), "passo".to_string());
    assert_eq!(render(&formula, &ordered), "se proposição P, então passo");

    let mut by_char: BTreeMap<char, String> = BTreeMap::new();
    by_char.insert('P', "estudo".to_string());
    assert_eq!(render(&formula, &by_char), "se estudo, então proposição Q");
}

#[test]
fn render_is_never_empty_for_parsed_formulas() {
    let inputs = [
        "P",
        "¬P",
        "P ∧ Q ∨ R → S ↔ T",
        "¬(¬(P ∨ Q) ∧ (R → ¬S))",
        "(((A)))",
        "A ↔ B ↔ C ↔ D",
    ];

    for input in inputs {
        let formula = parse_formula(input).unwrap();
        assert!(!render(&formula, &NoMeanings).is_empty(), "{}", input);
    }
}
