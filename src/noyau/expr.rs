// src/noyau/expr.rs
//
// Arbre d’expression (flottants f64).
// - Num   : littéral
// - Nom   : constante résolue dans l’environnement (PI, E)
// - Appel : fonction unaire de l’environnement (SIN, SQRT, FACT, …)
// - Fact  : factorielle postfixe "(expr)!"
//
// L’évaluation ne connaît AUCUN nom en dur : tout passe par la table.

use std::fmt;

use super::environnement::{Environnement, NOM_FACT};
use super::erreur::Defaut;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Nom(String),

    Appel(String, Box<Expr>),

    Neg(Box<Expr>),
    Fact(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évalue l’arbre sur l’environnement. Les valeurs intermédiaires suivent IEEE 754
    /// (1/0 = inf) : seul le résultat final est contrôlé, par l’appelant.
    pub fn eval(&self, env: &Environnement) -> Result<f64, Defaut> {
        use Expr::*;

        match self {
            Num(v) => Ok(*v),
            Nom(nom) => env
                .constante(nom)
                .ok_or_else(|| Defaut::NomInconnu(nom.clone())),

            Appel(nom, x) => {
                let f = env
                    .fonction(nom)
                    .ok_or_else(|| Defaut::FonctionInconnue(nom.clone()))?;
                f(x.eval(env)?)
            }
            Fact(x) => {
                let f = env
                    .fonction(NOM_FACT)
                    .ok_or_else(|| Defaut::FonctionInconnue(NOM_FACT.to_string()))?;
                f(x.eval(env)?)
            }

            Neg(x) => Ok(-x.eval(env)?),

            Add(a, b) => Ok(a.eval(env)? + b.eval(env)?),
            Sub(a, b) => Ok(a.eval(env)? - b.eval(env)?),
            Mul(a, b) => Ok(a.eval(env)? * b.eval(env)?),
            Div(a, b) => Ok(a.eval(env)? / b.eval(env)?),
            Pow(a, b) => Ok(a.eval(env)?.powf(b.eval(env)?)),
        }
    }
}

/// Affichage entièrement parenthésé (journal).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Num(v) => write!(f, "{v}"),
            Nom(nom) => f.write_str(nom),
            Appel(nom, x) => write!(f, "{nom}({x})"),
            Neg(x) => write!(f, "(-{x})"),
            Fact(x) => write!(f, "({x})!"),
            Add(a, b) => write!(f, "({a} + {b})"),
            Sub(a, b) => write!(f, "({a} - {b})"),
            Mul(a, b) => write!(f, "({a} * {b})"),
            Div(a, b) => write!(f, "({a} / {b})"),
            Pow(a, b) => write!(f, "({a} ** {b})"),
        }
    }
}
