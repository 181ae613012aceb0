//! Noyau — évaluation (pipeline réel)
//!
//! garde (alphabet) -> jetons -> RPN -> rationnel exact -> f64 -> finitude
//!
//! Remarque : aucune exécution de code arbitraire. La garde sur l’alphabet
//! n’est qu’un premier filtre ; c’est le lecteur (jetons + RPN) qui refuse
//! les suites mal formées.

use num_traits::ToPrimitive;
use tracing::trace;

use super::erreur::{Raison, Resultat};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Alphabet du tampon : `[-+*/.0-9 ]`.
pub fn dans_alphabet(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | '+' | '-' | '*' | '/' | ' ')
}

/// API publique : évalue un tampon complet.
/// - `Ok(valeur)` finie
/// - `Err(raison)` sinon (fonction pure, aucun effet de bord)
pub fn evaluer(tampon: &str) -> Resultat {
    if tampon.is_empty() || !tampon.chars().all(dans_alphabet) {
        return Err(Raison::ExpressionInvalide);
    }

    // 1) Jetons
    let jetons = tokenize(tampon)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_tokens(&rpn), "rpn");

    // 3) Valeur exacte
    let exact = eval_rpn(&rpn)?;

    // 4) Lecture flottante : ∞ si le rationnel dépasse f64
    let v = exact.to_f64().ok_or(Raison::NonFini)?;
    if !v.is_finite() {
        return Err(Raison::NonFini);
    }

    Ok(v)
}
