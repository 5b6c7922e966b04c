//! Noyau - évaluation (pipeline réel)
//!
//! texte calculatrice -> traduire -> canon -> jetons -> RPN -> Expr -> eval(env) -> contrôle fini
//!
//! Frontière d’erreur : toute cause interne (`Defaut`) est journalisée puis écrasée
//! en `ErreurEvaluation`. L’appelant ne voit jamais la différence syntaxe/domaine.

use tracing::trace;

use super::environnement::Environnement;
use super::erreur::{Defaut, ErreurEvaluation};
use super::jetons::{format_tokens, tokenize};
use super::registres::Registres;
use super::rpn::{format_rpn, from_rpn, to_rpn};
use super::traduction::traduire;
use super::trig::ModeAngle;

/// Évalue une expression CANONIQUE dans le mode d’angle donné.
/// Succès = nombre fini, sinon `ErreurEvaluation`.
pub fn evaluer(canon: &str, mode: ModeAngle) -> Result<f64, ErreurEvaluation> {
    Ok(evaluer_canon(canon, mode)?)
}

fn evaluer_canon(canon: &str, mode: ModeAngle) -> Result<f64, Defaut> {
    // 1) Jetons
    let jetons = tokenize(canon)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(jetons = %format_tokens(&jetons), rpn = %format_rpn(&rpn), "analyse");

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;

    // 4) Évaluation sur la table (trig liée au mode)
    let env = Environnement::standard(mode);
    let v = expr.eval(&env)?;

    // 5) Seul un résultat fini est une réponse
    if !v.is_finite() {
        return Err(Defaut::NonFini(v));
    }
    Ok(v)
}

/// Aperçu : traduit puis évalue avec les registres courants (aucune écriture).
pub fn eval_expression(texte: &str, registres: &Registres) -> Result<f64, ErreurEvaluation> {
    let canon = traduire(texte, registres);
    evaluer(&canon, registres.mode_angle())
}

/// Touche "=" : comme l’aperçu, puis ANS reçoit la valeur si (et seulement si) succès.
pub fn valider(texte: &str, registres: &mut Registres) -> Result<f64, ErreurEvaluation> {
    let v = eval_expression(texte, registres)?;
    registres.enregistrer_reponse(v);
    Ok(v)
}
