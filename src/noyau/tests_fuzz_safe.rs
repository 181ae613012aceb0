//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le lecteur et l’accumulateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariant clé : le tampon reste un préfixe d’expression complétable

use std::time::{Duration, Instant};

use super::erreur::Raison;
use super::{evaluer, formater};
use crate::app::{Action, Calculatrice, Jeton, Phase};
use crate::noyau::jetons::Op;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', ' ',
];

/// Tampon brut : n’importe quelle suite de l’alphabet (souvent mal formée).
fn gen_brut(rng: &mut Rng, max_len: u32) -> String {
    let n = 1 + rng.pick(max_len);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(1000);
    match rng.pick(3) {
        0 => format!("{entier}"),
        1 => format!("{entier}.{}", rng.pick(100)),
        _ => format!(".{}", 1 + rng.pick(99)),
    }
}

/// Expression bien formée : a op b op c …
fn gen_expr(rng: &mut Rng, termes: u32) -> String {
    let mut s = String::new();
    if rng.pick(4) == 0 {
        s.push('-');
    }
    s.push_str(&gen_nombre(rng));
    for _ in 0..termes {
        s.push(['+', '-', '*', '/'][rng.pick(4) as usize]);
        s.push_str(&gen_nombre(rng));
    }
    s
}

fn est_op(c: char) -> bool {
    Op::depuis_char(c).is_some()
}

fn check_invariant_tampon(t: &str) {
    let chars: Vec<char> = t.chars().collect();
    if let Some(&c0) = chars.first() {
        assert!(!est_op(c0) || c0 == '-', "tête invalide: {t:?}");
    }
    for w in chars.windows(2) {
        assert!(
            !(est_op(w[0]) && est_op(w[1])),
            "deux opérateurs de suite: {t:?}"
        );
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_brut_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let tampon = gen_brut(&mut rng, 12);
        let r1 = evaluer(&tampon);
        let r2 = evaluer(&tampon);
        assert_eq!(r1, r2, "non déterministe: {tampon:?}");

        match r1 {
            Ok(v) => {
                assert!(v.is_finite());
                assert_ne!(formater(v), "Error", "tampon={tampon:?}");
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let termes = rng.pick(6);
        let expr = gen_expr(&mut rng, termes);

        // bien formée => jamais "Invalid expression"
        match evaluer(&expr) {
            Ok(v) => assert!(v.is_finite()),
            Err(e) => assert_eq!(e, Raison::DivisionParZero, "expr={expr:?}"),
        }
    }
}

#[test]
fn fuzz_safe_accumulateur_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);
    let mut calc = Calculatrice::default();

    for _ in 0..5000 {
        budget(t0, max);

        let aff = match rng.pick(20) {
            0..=9 => calc.soumettre_jeton(Jeton::Chiffre(rng.pick(10) as u8)),
            10 => calc.soumettre_jeton(Jeton::Point),
            11 => calc.soumettre_jeton(Jeton::Operateur(Op::Plus)),
            12 => calc.soumettre_jeton(Jeton::Operateur(Op::Moins)),
            13 => calc.soumettre_jeton(Jeton::Operateur(Op::Fois)),
            14 => calc.soumettre_jeton(Jeton::Operateur(Op::Div)),
            15 => calc.soumettre_action(Action::Retour),
            16 => calc.soumettre_action(Action::Pourcent),
            17 | 18 => calc.soumettre_action(Action::Evaluer),
            _ => calc.soumettre_action(Action::Effacer),
        };

        check_invariant_tampon(calc.tampon());

        // "Error" à l’écran <=> phase Erreur
        assert_eq!(aff.erreur, calc.phase() == Phase::Erreur);
        if aff.erreur {
            assert_eq!(aff.texte, "Error");
            assert!(calc.tampon().is_empty());
            assert!(!calc.historique().is_empty());
        }
    }
}
