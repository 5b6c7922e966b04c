// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - suivi de '(' => appel de fonction (sort en RPN après la parenthèse fermante)
//    - sinon        => constante (Expr::Nom), résolue plus tard dans l’environnement
// - Moins unaire: opérateur préfixe Neg, plus fort que * / et plus faible que ** (-2**2 = -4)
// - Plus unaire : ignoré
// - '!' postfixe : sort immédiatement (lie plus fort que tout le reste)
// - Deux valeurs collées sans opérateur ("2PI", "(1)(2)") => erreur de syntaxe

use super::erreur::Defaut;
use super::expr::Expr;
use super::jetons::Tok;

/// Élément de la notation polonaise inversée.
#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Num(f64),
    Nom(String),
    Appel(String),
    Neg,
    Fact,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Pile d’opérateurs du shunting-yard.
#[derive(Clone, Debug)]
enum Op {
    LPar,
    Fonction(String),
    Neg,
    Binaire(Rpn),
}

fn precedence(op: &Rpn) -> i32 {
    match op {
        Rpn::Add | Rpn::Sub => 1,
        Rpn::Mul | Rpn::Div => 2,
        Rpn::Neg => 3,
        Rpn::Pow => 4,
        _ => 0,
    }
}

fn is_right_associative(op: &Rpn) -> bool {
    matches!(op, Rpn::Pow)
}

fn binaire(tok: &Tok) -> Option<Rpn> {
    match tok {
        Tok::Plus => Some(Rpn::Add),
        Tok::Minus => Some(Rpn::Sub),
        Tok::Star => Some(Rpn::Mul),
        Tok::Slash => Some(Rpn::Div),
        Tok::StarStar => Some(Rpn::Pow),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("SIN"), LPar, Ident("PI"), Slash, Num(2), RPar]
///   rpn:    [Nom("PI"), Num(2), Div, Appel("SIN")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, Defaut> {
    if tokens.is_empty() {
        return Err(Defaut::syntaxe("entrée vide"));
    }

    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les valeurs collées.
    let mut prev_was_value = false;

    for (k, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(v) => {
                if prev_was_value {
                    return Err(Defaut::syntaxe("opérateur manquant avant un nombre"));
                }
                out.push(Rpn::Num(*v));
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if prev_was_value {
                    return Err(Defaut::syntaxe(format!("opérateur manquant avant {name}")));
                }
                if matches!(tokens.get(k + 1), Some(Tok::LPar)) {
                    // fonction : on la garde sur la pile (elle sortira après son argument)
                    ops.push(Op::Fonction(name.clone()));
                    prev_was_value = false;
                } else {
                    out.push(Rpn::Nom(name.clone()));
                    prev_was_value = true;
                }
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(Defaut::syntaxe("opérateur manquant avant '('"));
                }
                ops.push(Op::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(Defaut::syntaxe("opérande manquante avant ')'"));
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    match top {
                        Op::LPar => {
                            ouverte = true;
                            break;
                        }
                        Op::Neg => out.push(Rpn::Neg),
                        Op::Binaire(b) => out.push(b),
                        Op::Fonction(name) => {
                            return Err(Defaut::syntaxe(format!("appel {name} mal formé")))
                        }
                    }
                }
                if !ouverte {
                    return Err(Defaut::syntaxe("parenthèse fermante sans ouvrante"));
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Op::Fonction(_)) = ops.last() {
                    if let Some(Op::Fonction(name)) = ops.pop() {
                        out.push(Rpn::Appel(name));
                    }
                }

                prev_was_value = true;
            }

            Tok::Bang => {
                if !prev_was_value {
                    return Err(Defaut::syntaxe("'!' sans opérande"));
                }
                out.push(Rpn::Fact);
            }

            Tok::Minus if !prev_was_value => {
                ops.push(Op::Neg);
            }

            Tok::Plus if !prev_was_value => {
                // plus unaire : neutre
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::StarStar => {
                if !prev_was_value {
                    return Err(Defaut::syntaxe("opérateur sans opérande gauche"));
                }
                let Some(op) = binaire(tok) else {
                    return Err(Defaut::syntaxe("opérateur inconnu"));
                };

                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    let top_rpn = match top {
                        Op::Neg => Rpn::Neg,
                        Op::Binaire(b) => b.clone(),
                        Op::LPar | Op::Fonction(_) => break,
                    };

                    let p_top = precedence(&top_rpn);
                    let p_tok = precedence(&op);

                    let doit_pop = if is_right_associative(&op) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    ops.pop();
                    out.push(top_rpn);
                }

                ops.push(Op::Binaire(op));
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err(Defaut::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        match op {
            Op::LPar | Op::Fonction(_) => return Err(Defaut::syntaxe("parenthèses non fermées")),
            Op::Neg => out.push(Rpn::Neg),
            Op::Binaire(b) => out.push(b),
        }
    }

    Ok(out)
}

/// Profondeur maximale de l’arbre : l’évaluation (et la libération) sont récursives,
/// un arbre plus profond ferait déborder la pile.
pub const PROFONDEUR_MAX: usize = 1000;

/// Construit une Expr à partir d’une RPN.
/// Chaque élément de la pile porte la profondeur de son sous-arbre.
pub fn from_rpn(rpn: &[Rpn]) -> Result<Expr, Defaut> {
    let mut st: Vec<(Expr, usize)> = Vec::new();

    fn pop(st: &mut Vec<(Expr, usize)>) -> Result<(Box<Expr>, usize), Defaut> {
        st.pop()
            .map(|(e, p)| (Box::new(e), p))
            .ok_or_else(|| Defaut::syntaxe("expression invalide"))
    }

    for item in rpn {
        let (e, profondeur) = match item {
            Rpn::Num(v) => (Expr::Num(*v), 1),
            Rpn::Nom(name) => (Expr::Nom(name.clone()), 1),

            Rpn::Appel(_) | Rpn::Neg | Rpn::Fact => {
                let (x, p) = pop(&mut st)?;
                let e = match item {
                    Rpn::Appel(name) => Expr::Appel(name.clone(), x),
                    Rpn::Neg => Expr::Neg(x),
                    _ => Expr::Fact(x),
                };
                (e, p + 1)
            }

            Rpn::Add | Rpn::Sub | Rpn::Mul | Rpn::Div | Rpn::Pow => {
                let (b, pb) = pop(&mut st)?;
                let (a, pa) = pop(&mut st)?;
                let e = match item {
                    Rpn::Add => Expr::Add(a, b),
                    Rpn::Sub => Expr::Sub(a, b),
                    Rpn::Mul => Expr::Mul(a, b),
                    Rpn::Div => Expr::Div(a, b),
                    _ => Expr::Pow(a, b),
                };
                (e, pa.max(pb) + 1)
            }
        };
        if profondeur > PROFONDEUR_MAX {
            return Err(Defaut::syntaxe("expression trop profonde"));
        }
        st.push((e, profondeur));
    }

    let (racine, _) = pop(&mut st)?;
    if !st.is_empty() {
        return Err(Defaut::syntaxe("expression invalide"));
    }
    Ok(*racine)
}

/// Format utilitaire (journal) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(|r| match r {
            Rpn::Num(v) => format!("{v}"),
            Rpn::Nom(n) => n.clone(),
            Rpn::Appel(n) => format!("{n}()"),
            Rpn::Neg => "neg".to_string(),
            Rpn::Fact => "!".to_string(),
            Rpn::Add => "+".to_string(),
            Rpn::Sub => "-".to_string(),
            Rpn::Mul => "*".to_string(),
            Rpn::Div => "/".to_string(),
            Rpn::Pow => "**".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
