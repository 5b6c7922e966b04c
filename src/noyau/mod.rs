//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - traduction.rs    : notation calculatrice (×, ÷, π, √, x², EXP, ANS, MR…) -> canon ASCII
//! - jetons.rs        : tokenisation du canon
//! - rpn.rs           : shunting-yard + construction Expr
//! - expr.rs          : arbre f64 + évaluation sur la table
//! - environnement.rs : table nom -> implémentation (π, e, trig, √, log, ln, factorielle)
//! - trig.rs          : mode d’angle DEG/RAD
//! - registres.rs     : mémoire, dernière réponse, mode
//! - format.rs        : texte des registres + affichage du résultat
//! - erreur.rs        : erreur unique "Error" (+ cause interne journalisée)
//! - eval.rs          : pipeline complet

pub mod environnement;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod registres;
pub mod rpn;
pub mod traduction;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use environnement::factorielle;
pub use erreur::ErreurEvaluation;
pub use eval::{eval_expression, evaluer, valider};
pub use format::format_resultat;
pub use registres::Registres;
pub use traduction::traduire;
pub use trig::ModeAngle;
