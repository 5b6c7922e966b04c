// src/noyau/trig.rs
//
// Trigonométrie sensible au mode d’angle
// --------------------------------------
// - DEG : l’argument de sin/cos/tan est converti en radians,
//         le résultat de asin/acos/atan est reconverti en degrés
// - RAD : identité
//
// Pas d’angles “spéciaux” : sin(180°) vaut ~1.2e-16, comme un flottant ordinaire.

use std::f64::consts::PI;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// Angle saisi -> radians.
    pub fn vers_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x * PI / 180.0,
            ModeAngle::Radians => x,
        }
    }

    /// Radians -> angle affiché.
    pub fn depuis_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x * 180.0 / PI,
            ModeAngle::Radians => x,
        }
    }

    /// Texte court du bouton (et clé de persistance).
    pub fn code(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }

    pub fn depuis_code(code: &str) -> Option<Self> {
        match code {
            "DEG" => Some(ModeAngle::Degres),
            "RAD" => Some(ModeAngle::Radians),
            _ => None,
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl TrigFn {
    pub const TOUTES: [TrigFn; 6] = [
        TrigFn::Sin,
        TrigFn::Cos,
        TrigFn::Tan,
        TrigFn::Asin,
        TrigFn::Acos,
        TrigFn::Atan,
    ];

    /// Nom interne (forme canonique) : SIN, COS, …
    pub fn nom_canon(self) -> &'static str {
        match self {
            TrigFn::Sin => "SIN",
            TrigFn::Cos => "COS",
            TrigFn::Tan => "TAN",
            TrigFn::Asin => "ASIN",
            TrigFn::Acos => "ACOS",
            TrigFn::Atan => "ATAN",
        }
    }

    /// Nom tapé par l’utilisateur : sin, cos, …
    pub fn nom_saisie(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
            TrigFn::Asin => "asin",
            TrigFn::Acos => "acos",
            TrigFn::Atan => "atan",
        }
    }

    pub fn appliquer(self, mode: ModeAngle, x: f64) -> f64 {
        match self {
            TrigFn::Sin => mode.vers_radians(x).sin(),
            TrigFn::Cos => mode.vers_radians(x).cos(),
            TrigFn::Tan => mode.vers_radians(x).tan(),
            TrigFn::Asin => mode.depuis_radians(x.asin()),
            TrigFn::Acos => mode.depuis_radians(x.acos()),
            TrigFn::Atan => mode.depuis_radians(x.atan()),
        }
    }
}
