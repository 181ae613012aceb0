//! src/app/reglages.rs
//!
//! Réglages passés par l’appelant (opaques pour le noyau).
//! Le moteur ne les persiste jamais : c’est à l’appelant de les fournir.

/// Garde-fou : longueur max du tampon saisi (borne le coût du calcul exact).
/// Assez large pour enchaîner sur un résultat : 1e300 s’écrit en 301 chiffres.
pub const LONGUEUR_MAX: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// false => la touche % est refusée ("Percent not supported").
    pub pourcent_actif: bool,

    /// true => l’historique affiche × et ÷ au lieu de * et /.
    pub symboles: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            pourcent_actif: true,
            symboles: false,
        }
    }
}

/// Lecture tolérante d’un drapeau texte ("1", "true", "oui"…).
/// None si la valeur n’est pas reconnue (l’appelant garde alors le défaut).
pub fn lire_drapeau(valeur: &str) -> Option<bool> {
    match valeur.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "oui" | "on" => Some(true),
        "0" | "false" | "non" | "off" => Some(false),
        _ => None,
    }
}
