// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// - Defaut : cause interne (syntaxe, nom inconnu, non fini, factorielle)
//            -> sert au journal, ne sort jamais de l’évaluation
// - ErreurEvaluation : la SEULE erreur vue par l’appelant ("Error")

use thiserror::Error;

/// Cause détaillée d’un échec (diagnostic interne).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Defaut {
    #[error("syntaxe: {0}")]
    Syntaxe(String),
    #[error("nom inconnu: {0}")]
    NomInconnu(String),
    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),
    #[error("résultat non fini: {0}")]
    NonFini(f64),
    #[error("factorielle hors domaine: {0}")]
    DomaineFactorielle(f64),
}

impl Defaut {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Defaut::Syntaxe(msg.into())
    }
}

/// Erreur unique exposée par le noyau : syntaxe, domaine, division… tout se confond.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Error")]
pub struct ErreurEvaluation;

impl From<Defaut> for ErreurEvaluation {
    fn from(defaut: Defaut) -> Self {
        tracing::debug!(cause = %defaut, "évaluation refusée");
        ErreurEvaluation
    }
}
