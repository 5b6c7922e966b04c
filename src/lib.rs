//! Calculatrice scientifique : bibliothèque.
//!
//! `noyau` est utilisable seul (traduction, évaluation, registres, factorielle) ;
//! l’interface egui (src/main.rs + src/app) s’appuie dessus.

pub mod noyau;
