// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::Raison;

/// Les quatre opérateurs binaires de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Div,
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    /// Symbole ASCII (celui qui vit dans le tampon).
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Div => '/',
        }
    }

    /// Symbole d’affichage (historique) : × et ÷.
    pub fn symbole_joli(self) -> char {
        match self {
            Op::Fois => '×',
            Op::Div => '÷',
            autre => autre.symbole(),
        }
    }

    pub fn est_additif(self) -> bool {
        matches!(self, Op::Plus | Op::Moins)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),
    Op(Op),
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Lit un littéral décimal ("12", "12.5", ".5", "5.") en rationnel exact.
/// Refuse "." seul et plusieurs points dans la même suite.
fn lire_decimal(txt: &str) -> Result<BigRational, Raison> {
    let mut parts = txt.split('.');
    let entier = parts.next().unwrap_or("");
    let frac = parts.next().unwrap_or("");
    if parts.next().is_some() {
        return Err(Raison::ExpressionInvalide);
    }
    if entier.is_empty() && frac.is_empty() {
        return Err(Raison::ExpressionInvalide);
    }

    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or(Raison::ExpressionInvalide)?;
    Ok(BigRational::new(n, pow10(frac.len())))
}

/// Tokenize le tampon en jetons.
/// Supporte:
/// - décimaux (ex: 12, 0.5, .5, 5.)
/// - opérateurs + - * /
/// - espaces (ignorés)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, Raison> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == ' ' {
            i += 1;
            continue;
        }

        if let Some(op) = Op::depuis_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Suite numérique : chiffres et points, validée d’un bloc
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_decimal(&txt)?));
            continue;
        }

        return Err(Raison::ExpressionInvalide);
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) if r.denom().is_one() => format!("{}", r.numer()),
            Tok::Num(r) => format!("{}/{}", r.numer(), r.denom()),
            Tok::Op(op) => op.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
