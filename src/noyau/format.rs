// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/// Au-delà (ou en deçà), on passe en notation exponentielle.
const SEUIL_HAUT: f64 = 1e10;
const SEUIL_BAS: f64 = 1e-9;

/// Chiffres après la virgule en notation exponentielle.
const CHIFFRES_EXP: usize = 8;

/// Arrondi de la notation fixe : 12 décimales.
const ECHELLE_FIXE: f64 = 1e12;

/* ------------------------ Helpers ------------------------ */

/// "1.50000000" -> "1.5", "2.000" -> "2", "10" -> "10"
fn retire_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Arrondi “demi vers le haut” (comme un Math.round), pas “loin de zéro”.
fn arrondi_demi_haut(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn pow10(n: u32) -> BigRational {
    BigRational::from_integer(BigInt::from(10).pow(n))
}

/// 10^k exact, k de signe quelconque.
fn puissance10(k: i32) -> BigRational {
    if k >= 0 {
        pow10(k.unsigned_abs())
    } else {
        pow10(k.unsigned_abs()).recip()
    }
}

/// Mantisse à 9 chiffres significatifs, arrondie demi vers le haut sur la
/// valeur binaire exacte (un `{:.8e}` arrondirait les égalités au pair).
fn format_exponentiel(v: f64) -> String {
    let Some(exact) = BigRational::from_float(v) else {
        return "Error".to_string();
    };
    let abs = exact.abs();

    // exposant de départ (repr. la plus courte), recalé sur la valeur exacte
    let mut e: i32 = format!("{:e}", v.abs())
        .split_once('e')
        .and_then(|(_, x)| x.parse().ok())
        .unwrap_or(0);
    while abs < puissance10(e) {
        e -= 1;
    }
    while abs >= puissance10(e + 1) {
        e += 1;
    }

    let demi = BigRational::new(BigInt::from(1), BigInt::from(2));
    let echelle = puissance10(CHIFFRES_EXP as i32 - e);
    let mut n = (abs * echelle + demi).floor().to_integer();

    // 9.999999995e… arrondi à 10.00000000e… => 1e(…+1)
    if n == BigInt::from(10).pow(CHIFFRES_EXP as u32 + 1) {
        n = BigInt::from(10).pow(CHIFFRES_EXP as u32);
        e += 1;
    }

    let chiffres = n.to_string();
    let (tete, reste) = chiffres.split_at(1);
    let mantisse = retire_zeros(&format!("{tete}.{reste}")).to_string();
    let signe = if exact.is_negative() { "-" } else { "" };

    if e < 0 {
        format!("{signe}{mantisse}e{e}")
    } else {
        format!("{signe}{mantisse}e+{e}")
    }
}

fn format_fixe(v: f64) -> String {
    // petit biais epsilon contre l’erreur de représentation binaire (0.1+0.2…)
    let arrondi = arrondi_demi_haut((v + f64::EPSILON) * ECHELLE_FIXE) / ECHELLE_FIXE;
    if arrondi == 0.0 {
        // pas de "-0"
        return "0".to_string();
    }
    retire_zeros(&arrondi.to_string()).to_string()
}

/* ------------------------ API ------------------------ */

/// Texte d’affichage canonique d’un nombre.
/// - non fini       -> "Error"
/// - |v| >= 1e10 ou 0 < |v| < 1e-9 -> exponentiel (1.5e+10)
/// - sinon          -> fixe, 12 décimales max, sans zéros inutiles
pub fn formater(v: f64) -> String {
    if !v.is_finite() {
        return "Error".to_string();
    }

    let abs = v.abs();
    if abs != 0.0 && (abs >= SEUIL_HAUT || abs < SEUIL_BAS) {
        return format_exponentiel(v);
    }

    format_fixe(v)
}

/// Texte à remettre dans le tampon après un calcul : la valeur complète.
///
/// Jamais l’affichage arrondi (sinon `1/3=*3=` donnerait 0.999999999999).
/// Le `Display` de f64 ne passe jamais en exponentiel : le tampon reste
/// dans l’alphabet `[-+*/.0-9 ]` même pour 1e300.
pub fn texte_tampon(v: f64) -> String {
    if v == 0.0 {
        // pas de "-0"
        return "0".to_string();
    }
    v.to_string()
}
