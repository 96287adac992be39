use eupoly::{
    poly::polynomial::Polynomial, printer::PrintOptions, ParseError, PolynomialError, Term,
};

#[test]
fn evaluate_parsed() {
    let p: Polynomial = "3x^2+2x+1".parse().unwrap();
    assert_eq!(p.eval(2.), 17.);
}

#[test]
fn parse_and_print() {
    let p: Polynomial = "x^2+1".parse().unwrap();
    assert_eq!(p.to_string(), "x^2 + 1");
}

#[test]
fn remove_middle_term() {
    let mut p = Polynomial::from_terms(
        1,
        &[
            Term::new(1., &[2]),
            Term::new(2., &[1]),
            Term::new(3., &[0]),
        ],
    )
    .unwrap();

    let mut cursor: isize = 1;
    p.remove_term_at_cursor(&mut cursor).unwrap();

    assert_eq!(cursor, 0);
    assert_eq!(p.nterms(), 2);
    assert_eq!(p.term_at(0).unwrap().to_owned(), Term::new(1., &[2]));
    assert_eq!(p.term_at(1).unwrap().to_owned(), Term::new(3., &[0]));
}

#[test]
fn remove_zero_terms_with_cursor() {
    let mut p: Polynomial = "0x^3+x^2+0x+4".parse().unwrap();

    let mut t: isize = 0;
    while (t as usize) < p.nterms() {
        if p.coefficient(t as usize).unwrap() == 0. {
            p.remove_term_at_cursor(&mut t).unwrap();
        }
        t += 1;
    }

    assert_eq!(p.nterms(), 2);
    assert_eq!(p.to_string(), "x^2 + 4");
}

#[test]
fn cached_second_derivative() {
    let mut p: Polynomial = "x^3".parse().unwrap();

    let d = p.get_derivative(2, 0).unwrap();
    assert_eq!(d.to_string(), "6x");
    let computed = p.derivative_cache().computed();

    let d = p.get_derivative(2, 0).unwrap();
    assert_eq!(d.to_string(), "6x");
    assert_eq!(p.derivative_cache().computed(), computed);
}

#[test]
fn expected_utility_workflow() {
    // player 1 has three strategies and payoffs 4, 1 and 3 against a fixed opponent
    let mut eu = Polynomial::template(3, 2, 0).unwrap();
    eu.set_eu_coefficients(&[4., 1., 3.]).unwrap();
    eu.compute_total_degree();
    assert_eq!(eu.total_degree(), Some(1));
    assert!(eu.is_linear());

    assert_eq!(eu.to_string(), "x_1 - 2x_2 + 3");
    assert_eq!(
        eu.printer(PrintOptions::expected_utility(1, 1)).to_string(),
        "p_{1,1} - 2p_{1,1} + 3"
    );

    let d = eu.get_derivative(1, 1).unwrap();
    assert_eq!(d, &Polynomial::constant(2, -2.));
}

#[test]
fn errors_compose() {
    fn sum(a: &str, b: &str) -> Result<Polynomial, PolynomialError> {
        let a = Polynomial::parse(a)?;
        let b = Polynomial::parse(b)?;
        a.checked_add(&b)
    }

    assert_eq!(sum("x", "2x+1").unwrap().to_string(), "3x + 1");
    assert_eq!(
        sum("x", "z").unwrap_err(),
        PolynomialError::Parse(ParseError::InvalidCharacter {
            character: 'z',
            position: 0
        })
    );

    let p = Polynomial::zero(2);
    let q = Polynomial::zero(3);
    assert_eq!(
        p.checked_mul(&q).unwrap_err().to_string(),
        "nvars mismatched: got 3, expected 2"
    );
}

#[test]
fn definite_integral() {
    let p: Polynomial = "6x^2+-2x".parse().unwrap();
    assert_eq!(p.integrate_over_interval(1., 2., 0).unwrap(), 11.);
}

#[test]
fn incremental_construction() {
    let mut p = Polynomial::default();
    p.append_term(1., &[0, 1]).unwrap();
    p.append_term(2., &[1, 0]).unwrap();
    p.insert_term(0, &[0, 0], 5.).unwrap();
    assert_eq!(p.nterms(), 3);
    assert_eq!(p.total_degree(), None);

    p.simplify();
    assert_eq!(p.to_string(), "2x_1 + x_2 + 5");
    assert_eq!(p.compute_total_degree(), 1);
}
