// src/observed/mod.rs

//! Reference values of the physical constants that predictions are compared to.
//!
//! Values follow CODATA 2018 and the 2020 Review of Particle Physics. They are
//! literal comparison targets only; nothing in the crate derives them.

use crate::core::{FitError, FitResult};
use std::fmt;

/// Unit attached to an observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Dimensionless,
    MeV,
    GeV,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Dimensionless => Ok(()),
            Unit::MeV => write!(f, "MeV"),
            Unit::GeV => write!(f, "GeV"),
        }
    }
}

/// A physical constant with a fixed observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhysicalConstant {
    /// Fine-structure constant α.
    FineStructure,
    /// Inverse fine-structure constant α⁻¹.
    InverseFineStructure,
    /// Electron mass.
    ElectronMass,
    /// Muon mass.
    MuonMass,
    /// Proton to electron mass ratio.
    ProtonElectronMassRatio,
    /// W boson mass.
    WBosonMass,
    /// Z boson mass.
    ZBosonMass,
    /// Higgs boson mass.
    HiggsMass,
    /// Higgs field vacuum expectation value.
    HiggsVev,
    /// Top quark mass.
    TopQuarkMass,
    /// Weak mixing angle sin²θ_W (MS-bar, at m_Z).
    WeakMixingAngle,
    /// Planck mass.
    PlanckMass,
}

impl PhysicalConstant {
    /// Every constant in the reference table, in display order.
    pub const ALL: [PhysicalConstant; 12] = [
        PhysicalConstant::FineStructure,
        PhysicalConstant::InverseFineStructure,
        PhysicalConstant::ElectronMass,
        PhysicalConstant::MuonMass,
        PhysicalConstant::ProtonElectronMassRatio,
        PhysicalConstant::WBosonMass,
        PhysicalConstant::ZBosonMass,
        PhysicalConstant::HiggsMass,
        PhysicalConstant::HiggsVev,
        PhysicalConstant::TopQuarkMass,
        PhysicalConstant::WeakMixingAngle,
        PhysicalConstant::PlanckMass,
    ];

    /// The observed value, expressed in `self.unit()`.
    pub fn value(&self) -> f64 {
        match self {
            PhysicalConstant::FineStructure => 7.297_352_569_3e-3,
            PhysicalConstant::InverseFineStructure => 137.035_999_084,
            PhysicalConstant::ElectronMass => 0.510_998_95,
            PhysicalConstant::MuonMass => 105.658_375_5,
            PhysicalConstant::ProtonElectronMassRatio => 1_836.152_673_43,
            PhysicalConstant::WBosonMass => 80.379,
            PhysicalConstant::ZBosonMass => 91.1876,
            PhysicalConstant::HiggsMass => 125.10,
            PhysicalConstant::HiggsVev => 246.22,
            PhysicalConstant::TopQuarkMass => 172.76,
            PhysicalConstant::WeakMixingAngle => 0.231_22,
            PhysicalConstant::PlanckMass => 1.220_890e19,
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            PhysicalConstant::FineStructure
            | PhysicalConstant::InverseFineStructure
            | PhysicalConstant::ProtonElectronMassRatio
            | PhysicalConstant::WeakMixingAngle => Unit::Dimensionless,
            PhysicalConstant::ElectronMass | PhysicalConstant::MuonMass => Unit::MeV,
            PhysicalConstant::WBosonMass
            | PhysicalConstant::ZBosonMass
            | PhysicalConstant::HiggsMass
            | PhysicalConstant::HiggsVev
            | PhysicalConstant::TopQuarkMass
            | PhysicalConstant::PlanckMass => Unit::GeV,
        }
    }

    /// Conventional symbol, for table output.
    pub fn symbol(&self) -> &'static str {
        match self {
            PhysicalConstant::FineStructure => "α",
            PhysicalConstant::InverseFineStructure => "α⁻¹",
            PhysicalConstant::ElectronMass => "m_e",
            PhysicalConstant::MuonMass => "m_μ",
            PhysicalConstant::ProtonElectronMassRatio => "m_p/m_e",
            PhysicalConstant::WBosonMass => "m_W",
            PhysicalConstant::ZBosonMass => "m_Z",
            PhysicalConstant::HiggsMass => "m_H",
            PhysicalConstant::HiggsVev => "v",
            PhysicalConstant::TopQuarkMass => "m_t",
            PhysicalConstant::WeakMixingAngle => "sin²θ_W",
            PhysicalConstant::PlanckMass => "M_Pl",
        }
    }

    /// Stable snake_case key, used in configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            PhysicalConstant::FineStructure => "fine_structure",
            PhysicalConstant::InverseFineStructure => "inverse_fine_structure",
            PhysicalConstant::ElectronMass => "electron_mass",
            PhysicalConstant::MuonMass => "muon_mass",
            PhysicalConstant::ProtonElectronMassRatio => "proton_electron_mass_ratio",
            PhysicalConstant::WBosonMass => "w_boson_mass",
            PhysicalConstant::ZBosonMass => "z_boson_mass",
            PhysicalConstant::HiggsMass => "higgs_mass",
            PhysicalConstant::HiggsVev => "higgs_vev",
            PhysicalConstant::TopQuarkMass => "top_quark_mass",
            PhysicalConstant::WeakMixingAngle => "weak_mixing_angle",
            PhysicalConstant::PlanckMass => "planck_mass",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PhysicalConstant::FineStructure => "fine-structure constant",
            PhysicalConstant::InverseFineStructure => "inverse fine-structure constant",
            PhysicalConstant::ElectronMass => "electron mass",
            PhysicalConstant::MuonMass => "muon mass",
            PhysicalConstant::ProtonElectronMassRatio => "proton/electron mass ratio",
            PhysicalConstant::WBosonMass => "W boson mass",
            PhysicalConstant::ZBosonMass => "Z boson mass",
            PhysicalConstant::HiggsMass => "Higgs boson mass",
            PhysicalConstant::HiggsVev => "Higgs vacuum expectation value",
            PhysicalConstant::TopQuarkMass => "top quark mass",
            PhysicalConstant::WeakMixingAngle => "weak mixing angle",
            PhysicalConstant::PlanckMass => "Planck mass",
        }
    }

    /// Looks a constant up by its `key()`.
    pub fn from_key(key: &str) -> FitResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == key)
            .ok_or_else(|| FitError::UnknownConstant { key: key.to_string() })
    }
}

impl fmt::Display for PhysicalConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit() {
            Unit::Dimensionless => write!(f, "{} = {}", self.symbol(), self.value()),
            unit => write!(f, "{} = {} {}", self.symbol(), self.value(), unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_resolvable() -> FitResult<()> {
        for constant in PhysicalConstant::ALL {
            assert_eq!(PhysicalConstant::from_key(constant.key())?, constant);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_key() {
        let err = PhysicalConstant::from_key("graviton_mass").unwrap_err();
        assert!(matches!(err, FitError::UnknownConstant { ref key } if key == "graviton_mass"));
    }

    #[test]
    fn test_values_are_positive() {
        for constant in PhysicalConstant::ALL {
            assert!(constant.value() > 0.0, "{} must be positive", constant.name());
        }
    }

    #[test]
    fn test_fine_structure_inverse_consistency() {
        let product = PhysicalConstant::FineStructure.value() * PhysicalConstant::InverseFineStructure.value();
        assert!((product - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_includes_unit() {
        assert_eq!(PhysicalConstant::HiggsMass.to_string(), "m_H = 125.1 GeV");
        assert_eq!(PhysicalConstant::WeakMixingAngle.to_string(), "sin²θ_W = 0.23122");
    }
}
