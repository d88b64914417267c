//! Seawater carbonate system
//!
//! Computes the aragonite saturation state (and companions) of a seawater
//! sample from its two measured carbonate-system parameters, dissolved
//! inorganic carbon and total alkalinity, at a given temperature and
//! salinity.
//!
//! # What This Component Does
//!
//! 1. Evaluates the equilibrium constants of the carbonate system at the
//!    sample's temperature and salinity from published parameterizations
//!    (citations on each function below).
//!
//! 2. Solves the alkalinity balance for the hydrogen ion concentration by
//!    bisection: find $[H^+]$ such that
//!
//!    $$TA = [HCO_3^-] + 2[CO_3^{2-}] + [B(OH)_4^-] + [OH^-] - [H^+]$$
//!
//! 3. Speciates DIC at the solved $[H^+]$ and forms the saturation states
//!
//!    $$\Omega = \frac{[Ca^{2+}][CO_3^{2-}]}{K_{sp}}$$
//!
//!    for both aragonite and calcite.
//!
//! # Conventions
//!
//! All equilibrium constants are expressed on the **total hydrogen ion pH
//! scale** in mol/kg-seawater, at surface pressure. The choice of carbonic
//! acid dissociation constants is a configuration value
//! ([`K1K2Parameterization`]); both supported sets are native to the total
//! scale, so no scale conversion is applied anywhere.
//!
//! # Simplifications
//!
//! Minor alkalinity contributions (phosphate, silicate, and the
//! sulfate/fluoride corrections) are neglected. For surface seawater in
//! the supported input range their effect on the saturation states is a
//! fraction of a percent.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::CELSIUS_TO_KELVIN;
use coastal_core::errors::{CoastalError, CoastalResult};
use coastal_core::timeseries::FloatValue;

/// Choice of carbonic acid dissociation constants (total pH scale).
///
/// This is the solver's `K1`/`K2` configuration: which published fit of
/// the first and second dissociation constants of carbonic acid in
/// seawater to use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum K1K2Parameterization {
    /// Lueker, Dickson and Keeling (2000): refit of the Mehrbach (1973)
    /// measurements on real seawater. The recommended default for open
    /// ocean conditions.
    #[default]
    Lueker2000,
    /// Roy et al. (1993): artificial seawater measurements.
    Roy1993,
}

impl K1K2Parameterization {
    /// First dissociation constant of carbonic acid (mol/kg-SW).
    pub fn k1(&self, t_k: FloatValue, salinity: FloatValue) -> FloatValue {
        match self {
            Self::Lueker2000 => {
                let pk1 = 3633.86 / t_k - 61.2172 + 9.67770 * t_k.ln() - 0.011555 * salinity
                    + 0.0001152 * salinity.powi(2);
                (10.0 as FloatValue).powf(-pk1)
            }
            Self::Roy1993 => {
                let sqrt_s = salinity.sqrt();
                let ln_k1 = 2.83655 - 2307.1266 / t_k - 1.5529413 * t_k.ln()
                    + (-0.20760841 - 4.0484 / t_k) * sqrt_s
                    + 0.08468345 * salinity
                    - 0.00654208 * sqrt_s * salinity
                    + (1.0 - 0.001005 * salinity).ln();
                ln_k1.exp()
            }
        }
    }

    /// Second dissociation constant of carbonic acid (mol/kg-SW).
    pub fn k2(&self, t_k: FloatValue, salinity: FloatValue) -> FloatValue {
        match self {
            Self::Lueker2000 => {
                let pk2 = 471.78 / t_k + 25.9290 - 3.16967 * t_k.ln() - 0.01781 * salinity
                    + 0.0001122 * salinity.powi(2);
                (10.0 as FloatValue).powf(-pk2)
            }
            Self::Roy1993 => {
                let sqrt_s = salinity.sqrt();
                let ln_k2 = -9.226508 - 3351.6106 / t_k - 0.2005743 * t_k.ln()
                    + (-0.106901773 - 23.9722 / t_k) * sqrt_s
                    + 0.1130822 * salinity
                    - 0.00846934 * sqrt_s * salinity
                    + (1.0 - 0.001005 * salinity).ln();
                ln_k2.exp()
            }
        }
    }
}

/// Dissociation constant of boric acid, Dickson (1990) (mol/kg-SW, total scale).
fn dissociation_boric(t_k: FloatValue, salinity: FloatValue) -> FloatValue {
    let s = salinity;
    let sqrt_s = s.sqrt();
    let ln_kb = (-8966.90 - 2890.53 * sqrt_s - 77.942 * s + 1.728 * s * sqrt_s - 0.0996 * s * s)
        / t_k
        + 148.0248
        + 137.1942 * sqrt_s
        + 1.62142 * s
        - (24.4344 + 25.085 * sqrt_s + 0.2474 * s) * t_k.ln()
        + 0.053105 * sqrt_s * t_k;
    ln_kb.exp()
}

/// Ion product of water, Millero (1995) (mol^2/kg^2, total scale).
fn ion_product_water(t_k: FloatValue, salinity: FloatValue) -> FloatValue {
    let ln_kw = 148.9652 - 13847.26 / t_k - 23.6521 * t_k.ln()
        + (118.67 / t_k - 5.977 + 1.0495 * t_k.ln()) * salinity.sqrt()
        - 0.01615 * salinity;
    ln_kw.exp()
}

/// Stoichiometric solubility product of aragonite, Mucci (1983) (mol^2/kg^2).
fn solubility_aragonite(t_k: FloatValue, salinity: FloatValue) -> FloatValue {
    let s = salinity;
    let log_ksp = -171.945 - 0.077993 * t_k + 2903.293 / t_k + 71.595 * t_k.log10()
        + (-0.068393 + 0.0017276 * t_k + 88.135 / t_k) * s.sqrt()
        - 0.10018 * s
        + 0.0059415 * s * s.sqrt();
    (10.0 as FloatValue).powf(log_ksp)
}

/// Stoichiometric solubility product of calcite, Mucci (1983) (mol^2/kg^2).
fn solubility_calcite(t_k: FloatValue, salinity: FloatValue) -> FloatValue {
    let s = salinity;
    let log_ksp = -171.9065 - 0.077993 * t_k + 2839.319 / t_k + 71.595 * t_k.log10()
        + (-0.77712 + 0.0028426 * t_k + 178.34 / t_k) * s.sqrt()
        - 0.07711 * s
        + 0.0041249 * s * s.sqrt();
    (10.0 as FloatValue).powf(log_ksp)
}

/// Total boron from salinity, Uppström (1974) (mol/kg-SW).
fn total_boron(salinity: FloatValue) -> FloatValue {
    0.000232 / 10.811 * salinity / 1.80655
}

/// Calcium concentration from salinity, Riley and Tongudai (1967) (mol/kg-SW).
fn calcium(salinity: FloatValue) -> FloatValue {
    0.02128 / 40.087 * salinity / 1.80655
}

/// Total alkalinity at a given hydrogen ion concentration (mol/kg).
///
/// Carbonate, borate and water terms only; see the module docs for the
/// neglected minor species.
fn total_alkalinity(
    h: FloatValue,
    dic: FloatValue,
    k1: FloatValue,
    k2: FloatValue,
    bt: FloatValue,
    kb: FloatValue,
    kw: FloatValue,
) -> FloatValue {
    let denom = h * h + k1 * h + k1 * k2;
    let hco3 = dic * k1 * h / denom;
    let co3 = dic * k1 * k2 / denom;
    let borate = bt * kb / (kb + h);
    let hydroxide = kw / h;
    hco3 + 2.0 * co3 + borate + hydroxide - h
}

/// Parameters for the carbonate system solver
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonateParameters {
    /// Carbonic acid dissociation constant set
    /// default: Lueker2000
    pub k1_k2: K1K2Parameterization,
    /// Lower edge of the pH search bracket
    /// default: 2.0
    pub ph_min: FloatValue,
    /// Upper edge of the pH search bracket
    /// default: 12.0
    pub ph_max: FloatValue,
    /// Convergence tolerance on pH
    /// default: 1e-8
    pub ph_tolerance: FloatValue,
    /// Iteration cap for the bisection
    /// default: 100
    pub max_iterations: usize,
}

impl Default for CarbonateParameters {
    fn default() -> Self {
        Self {
            k1_k2: K1K2Parameterization::default(),
            ph_min: 2.0,
            ph_max: 12.0,
            ph_tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

/// Solved state of the carbonate system.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonateSolution {
    /// pH on the total hydrogen ion scale
    pub ph_total: FloatValue,
    /// Carbonate ion concentration
    /// unit: µmol/kg
    pub co3_umol_kg: FloatValue,
    /// Aragonite saturation state (> 1 favours calcification)
    pub omega_aragonite: FloatValue,
    /// Calcite saturation state
    pub omega_calcite: FloatValue,
}

/// Seawater carbonate-system equilibrium solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonateSystem {
    parameters: CarbonateParameters,
}

impl CarbonateSystem {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self::from_parameters(CarbonateParameters::default())
    }

    pub fn from_parameters(parameters: CarbonateParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &CarbonateParameters {
        &self.parameters
    }

    /// Solve the carbonate system from DIC and total alkalinity.
    ///
    /// # Arguments
    ///
    /// * `dic_umol_kg` - Dissolved inorganic carbon (µmol/kg)
    /// * `alkalinity_umol_kg` - Total alkalinity (µmol/kg)
    /// * `temperature_c` - In-situ temperature (°C)
    /// * `salinity` - Practical salinity
    ///
    /// # Errors
    ///
    /// [`CoastalError::ChemistrySolver`] on out-of-range inputs, an
    /// unbracketed alkalinity root, or failure to converge. Failures are
    /// surfaced to the caller verbatim and never retried.
    pub fn solve(
        &self,
        dic_umol_kg: FloatValue,
        alkalinity_umol_kg: FloatValue,
        temperature_c: FloatValue,
        salinity: FloatValue,
    ) -> CoastalResult<CarbonateSolution> {
        if !dic_umol_kg.is_finite() || dic_umol_kg <= 0.0 {
            return Err(CoastalError::ChemistrySolver(format!(
                "DIC must be positive, got {} umol/kg",
                dic_umol_kg
            )));
        }
        if !alkalinity_umol_kg.is_finite() || alkalinity_umol_kg <= 0.0 {
            return Err(CoastalError::ChemistrySolver(format!(
                "total alkalinity must be positive, got {} umol/kg",
                alkalinity_umol_kg
            )));
        }
        if !salinity.is_finite() || !(0.0..=50.0).contains(&salinity) {
            return Err(CoastalError::ChemistrySolver(format!(
                "salinity {} outside the supported range [0, 50]",
                salinity
            )));
        }
        if !temperature_c.is_finite() || !(-2.0..=45.0).contains(&temperature_c) {
            return Err(CoastalError::ChemistrySolver(format!(
                "temperature {} C outside the supported range [-2, 45]",
                temperature_c
            )));
        }

        let p = &self.parameters;
        let t_k = temperature_c + CELSIUS_TO_KELVIN;
        let dic = dic_umol_kg * 1e-6;
        let ta = alkalinity_umol_kg * 1e-6;

        let k1 = p.k1_k2.k1(t_k, salinity);
        let k2 = p.k1_k2.k2(t_k, salinity);
        let kb = dissociation_boric(t_k, salinity);
        let kw = ion_product_water(t_k, salinity);
        let bt = total_boron(salinity);

        let residual = |ph: FloatValue| {
            let h = (10.0 as FloatValue).powf(-ph);
            total_alkalinity(h, dic, k1, k2, bt, kb, kw) - ta
        };

        // The residual increases monotonically with pH: acid end negative,
        // alkaline end positive, so bisection is unconditionally stable.
        let mut lo = p.ph_min;
        let mut hi = p.ph_max;
        if residual(lo) > 0.0 || residual(hi) < 0.0 {
            return Err(CoastalError::ChemistrySolver(format!(
                "alkalinity root not bracketed in pH [{}, {}] for DIC={} TA={}",
                lo, hi, dic_umol_kg, alkalinity_umol_kg
            )));
        }

        let mut ph = 0.5 * (lo + hi);
        let mut converged = false;
        for _ in 0..p.max_iterations {
            ph = 0.5 * (lo + hi);
            if residual(ph) < 0.0 {
                lo = ph;
            } else {
                hi = ph;
            }
            if hi - lo < p.ph_tolerance {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(CoastalError::ChemistrySolver(format!(
                "pH iteration did not converge within {} iterations",
                p.max_iterations
            )));
        }

        let h = (10.0 as FloatValue).powf(-ph);
        let co3 = dic * k1 * k2 / (h * h + k1 * h + k1 * k2);
        let ca = calcium(salinity);
        let solution = CarbonateSolution {
            ph_total: ph,
            co3_umol_kg: co3 * 1e6,
            omega_aragonite: ca * co3 / solubility_aragonite(t_k, salinity),
            omega_calcite: ca * co3 / solubility_calcite(t_k, salinity),
        };

        debug!(
            "carbonate system: pH={:.4}, CO3={:.1} umol/kg, omega_arag={:.3}",
            solution.ph_total, solution.co3_umol_kg, solution.omega_aragonite
        );
        Ok(solution)
    }

    /// Aragonite saturation state only; see [`solve`](Self::solve).
    pub fn aragonite_saturation(
        &self,
        dic_umol_kg: FloatValue,
        alkalinity_umol_kg: FloatValue,
        temperature_c: FloatValue,
        salinity: FloatValue,
    ) -> CoastalResult<FloatValue> {
        self.solve(dic_umol_kg, alkalinity_umol_kg, temperature_c, salinity)
            .map(|solution| solution.omega_aragonite)
    }
}

impl Default for CarbonateSystem {
    fn default() -> Self {
        Self::new()
    }
}
