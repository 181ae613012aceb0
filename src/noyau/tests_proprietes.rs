//! Propriétés attendues du noyau, vues de l’extérieur (évaluer + formater).

use super::erreur::Raison;
use super::jetons::Op;
use super::{evaluer, formater, pourcent};

fn affiche(tampon: &str) -> String {
    match evaluer(tampon) {
        Ok(v) => formater(v),
        Err(_) => "Error".to_string(),
    }
}

#[test]
fn determinisme() {
    for t in ["2+2", "1/3", "-7*3-1/8", "1/0", "1++2", "0.1+0.2*3"] {
        assert_eq!(evaluer(t), evaluer(t), "t={t:?}");
    }
}

#[test]
fn deux_plus_deux() {
    assert_eq!(affiche("2+2"), "4");
}

#[test]
fn division_par_zero_signalee() {
    assert_eq!(evaluer("1/0"), Err(Raison::DivisionParZero));
    assert_eq!(affiche("1/0"), "Error");
}

#[test]
fn zeros_finaux_retires() {
    assert_eq!(affiche("5*.2"), "1");
    assert_eq!(affiche("2.50*2"), "5");
    assert_eq!(affiche("1.10+0"), "1.1");
}

#[test]
fn suites_mal_formees() {
    assert_eq!(evaluer("1++2"), Err(Raison::ExpressionInvalide));
    assert_eq!(evaluer("..5"), Err(Raison::ExpressionInvalide));
}

#[test]
fn pourcent_chaine_additive() {
    let v = pourcent(10.0, Some(Op::Moins), Some(200.0)).unwrap();
    assert_eq!(formater(v), "20");
}

#[test]
fn idempotence_format() {
    for x in [
        0.0, 1.0, -1.0, 0.5, 1.0 / 3.0, 2.0 / 3.0, 123.456, -98765.4321, 0.1 + 0.2, 1e-6,
        9_999_999_999.0, 42.000_000_000_001,
    ] {
        let une = formater(x);
        let relu: f64 = une.parse().unwrap_or_else(|e| panic!("{une:?}: {e}"));
        assert_eq!(formater(relu), une, "x={x}");
    }
}

#[test]
fn frontiere_exponentielle() {
    assert_eq!(affiche("10000000000"), "1e+10");
    assert_eq!(affiche("9999000000"), "9999000000");
    assert_eq!(affiche("9999000000+999999999.9"), "1.0999e+10");
}

#[test]
fn precedence_conventionnelle() {
    assert_eq!(affiche("2+3*4"), "14");
    assert_eq!(affiche("10-4-3"), "3");
    assert_eq!(affiche("100/10/5"), "2");
    assert_eq!(affiche("-3+5"), "2");
    assert_eq!(affiche("1/3+1/3+1/3"), "1");
}
