/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Physical constants (CODATA 2014 values).

use std::f64::consts::PI;

use lazy_static::lazy_static;

use crate::units::{
    AMPERE, COULOMB, FARAD, JOULE, KELVIN, KILOGRAM, METER, MILLIMETER,
    MOLE, NEWTON, PASCAL, SECOND, WATT,
};
use crate::Quantity;

lazy_static! {
    pub static ref SPEED_OF_LIGHT: Quantity =
        299792458.0 * (&*METER / &*SECOND);
    pub static ref GRAVITATIONAL_CONSTANT: Quantity =
        6.67408e-11 * (METER.powi(3) / (&*KILOGRAM * SECOND.powi(2)));
    pub static ref STANDARD_GRAVITY: Quantity =
        9.80665 * (&*METER / SECOND.powi(2));
    pub static ref PLANCK: Quantity = 6.626070040e-34 * (&*JOULE * &*SECOND);
    pub static ref REDUCED_PLANCK: Quantity =
        1.054571800e-34 * (&*JOULE * &*SECOND);
    pub static ref VACUUM_PERMITTIVITY: Quantity =
        8.854187817e-12 * (&*FARAD / &*METER);
    pub static ref VACUUM_PERMEABILITY: Quantity =
        4e-7 * PI * (&*NEWTON / AMPERE.powi(2));
    pub static ref ELEMENTARY_CHARGE: Quantity = 1.6021766208e-19 * &*COULOMB;
    pub static ref ELECTRON_MASS: Quantity = 9.10938356e-31 * &*KILOGRAM;
    pub static ref PROTON_MASS: Quantity = 1.672621898e-27 * &*KILOGRAM;
    pub static ref NEUTRON_MASS: Quantity = 1.674927471e-27 * &*KILOGRAM;
    pub static ref ATOMIC_MASS_UNIT: Quantity = 1.660539040e-27 * &*KILOGRAM;
    pub static ref AVOGADRO: Quantity = 6.022140857e23 * MOLE.invert();
    pub static ref BOLTZMANN: Quantity = 1.38064852e-23 * (&*JOULE / &*KELVIN);
    pub static ref GAS_CONSTANT: Quantity =
        8.3144598 * (&*JOULE / (&*MOLE * &*KELVIN));
    pub static ref STEFAN_BOLTZMANN: Quantity =
        5.670367e-8 * (&*WATT / (METER.powi(2) * KELVIN.powi(4)));
    pub static ref WIEN_DISPLACEMENT: Quantity =
        2.8977729 * (&*MILLIMETER * &*KELVIN);
    pub static ref STANDARD_ATMOSPHERE: Quantity = 101325.0 * &*PASCAL;
    pub static ref HUBBLE: Quantity = 2.25e-18 * SECOND.invert();

    /// e² / (4π·ε₀·ħ·c), dimensionless.
    pub static ref FINE_STRUCTURE: Quantity = ELEMENTARY_CHARGE.powi(2)
        / (4.0 * PI
            * &*VACUUM_PERMITTIVITY
            * &*REDUCED_PLANCK
            * &*SPEED_OF_LIGHT);
}
