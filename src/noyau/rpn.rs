// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en refusant toute suite mal formée
// - Puis calculer la RPN en rationnels exacts
//
// Règles:
// - * et / lient plus fort que + et -, associativité à gauche partout
// - Moins unaire: seulement tout au début, on injecte 0 : "-x" => "0 x -"
// - Deux opérateurs de suite, deux nombres de suite, opérateur final => refus

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::Raison;
use super::jetons::{Op, Tok};

fn precedence(op: Op) -> i32 {
    match op {
        Op::Plus | Op::Moins => 1,
        Op::Fois | Op::Div => 2,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Star, Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, Raison> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len() + 1);
    let mut ops: Vec<Op> = Vec::new();

    // “valeur” = un nombre vient d’être lu.
    // Sert à détecter le moins unaire et les suites interdites.
    let mut prev_was_value = false;

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(Raison::ExpressionInvalide);
                }
                out.push(tok.clone());
                prev_was_value = true;
            }

            Tok::Op(op) => {
                if !prev_was_value {
                    // seul cas toléré : '-' en toute première position
                    if i == 0 && *op == Op::Moins {
                        out.push(Tok::Num(BigRational::zero()));
                    } else {
                        return Err(Raison::ExpressionInvalide);
                    }
                }

                // associativité à gauche : on sort tout ce qui lie au moins aussi fort
                while let Some(top) = ops.last() {
                    if precedence(*top) >= precedence(*op) {
                        out.push(Tok::Op(*top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(*op);
                prev_was_value = false;
            }
        }
    }

    // vide, ou opérateur en fin
    if !prev_was_value {
        return Err(Raison::ExpressionInvalide);
    }

    while let Some(op) = ops.pop() {
        out.push(Tok::Op(op));
    }

    Ok(out)
}

/// Calcule une RPN en rationnel exact.
pub fn eval_rpn(rpn: &[Tok]) -> Result<BigRational, Raison> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(r) => st.push(r.clone()),

            Tok::Op(op) => {
                let b = st.pop().ok_or(Raison::ExpressionInvalide)?;
                let a = st.pop().ok_or(Raison::ExpressionInvalide)?;

                let v = match op {
                    Op::Plus => a + b,
                    Op::Moins => a - b,
                    Op::Fois => a * b,
                    Op::Div => {
                        if b.is_zero() {
                            return Err(Raison::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(Raison::ExpressionInvalide),
    }
}
