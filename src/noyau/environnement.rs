//! Table d’environnement : nom canonique -> implémentation.
//!
//! Les fonctions trig sont liées au mode d’angle au moment de la construction
//! (`Environnement::standard(mode)`), puis l’évaluateur ne fait que des lookups.

use std::collections::HashMap;
use std::f64::consts::{E, PI};

use num_traits::ToPrimitive;

use super::erreur::{Defaut, ErreurEvaluation};
use super::trig::{ModeAngle, TrigFn};

/* ------------------------ Noms canoniques ------------------------ */

pub const NOM_PI: &str = "PI";
pub const NOM_E: &str = "E";
pub const NOM_SQRT: &str = "SQRT";
pub const NOM_LOG10: &str = "LOG";
pub const NOM_LN: &str = "LN";
pub const NOM_FACT: &str = "FACT";

/// Fonction unaire de l’environnement.
pub type FonctionUnaire = Box<dyn Fn(f64) -> Result<f64, Defaut>>;

pub struct Environnement {
    constantes: HashMap<&'static str, f64>,
    fonctions: HashMap<&'static str, FonctionUnaire>,
}

impl Environnement {
    /// Environnement fixe : constantes π/e, trig (mode lié), √, log10, ln, factorielle.
    pub fn standard(mode: ModeAngle) -> Self {
        let mut constantes = HashMap::new();
        constantes.insert(NOM_PI, PI);
        constantes.insert(NOM_E, E);

        let mut fonctions: HashMap<&'static str, FonctionUnaire> = HashMap::new();
        for f in TrigFn::TOUTES {
            fonctions.insert(f.nom_canon(), Box::new(move |x: f64| -> Result<f64, Defaut> {
                Ok(f.appliquer(mode, x))
            }));
        }
        fonctions.insert(NOM_SQRT, reelle(f64::sqrt));
        fonctions.insert(NOM_LOG10, reelle(f64::log10));
        fonctions.insert(NOM_LN, reelle(f64::ln));
        fonctions.insert(NOM_FACT, Box::new(fact));

        Self {
            constantes,
            fonctions,
        }
    }

    pub fn constante(&self, nom: &str) -> Option<f64> {
        self.constantes.get(nom).copied()
    }

    pub fn fonction(&self, nom: &str) -> Option<&FonctionUnaire> {
        self.fonctions.get(nom)
    }
}

/// Fonction réelle ordinaire (NaN éventuel rattrapé en fin d’évaluation).
fn reelle(g: fn(f64) -> f64) -> FonctionUnaire {
    Box::new(move |x: f64| -> Result<f64, Defaut> { Ok(g(x)) })
}

/* ------------------------ Factorielle ------------------------ */

/// Plus grand n dont la factorielle est finie en f64.
const FACT_MAX_FINIE: f64 = 170.0;

/// n! pour n entier ≥ 0 (produit itératif, 0! = 1).
/// Au-delà de 170!, le produit devient infini : on s’arrête là, l’évaluation le refusera.
fn fact(n: f64) -> Result<f64, Defaut> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(Defaut::DomaineFactorielle(n));
    }
    // 171! dépasse f64::MAX, y compris pour les entiers hors de u64
    if n > FACT_MAX_FINIE {
        return Ok(f64::INFINITY);
    }
    let borne = n.to_u64().ok_or(Defaut::DomaineFactorielle(n))?;

    let mut r = 1.0_f64;
    for i in 2..=borne {
        r *= i as f64;
        if r.is_infinite() {
            break;
        }
    }
    Ok(r)
}

/// Factorielle exposée seule (réutilisation / tests).
pub fn factorielle(n: f64) -> Result<f64, ErreurEvaluation> {
    Ok(fact(n)?)
}
