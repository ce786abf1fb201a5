//! The ten-slot simulation state and its time derivative.
//!
//! Both vectors share one fixed layout. Each index has a physical meaning:
//!
//! | Index | [`Slot`]                        | Meaning                                                    |
//! |-------|---------------------------------|------------------------------------------------------------|
//! | 0     | [`Slot::Heading`]               | heading-rate state input                                   |
//! | 1     | [`Slot::HeadingRate`]           | heading angular acceleration · (paired with)               |
//! | 2     | [`Slot::Bank`]                  | bank angle                                                 |
//! | 3     | [`Slot::BankRate`]              | bank angular rate                                          |
//! | 4     | [`Slot::Sideslip`]              | sideslip angle                                             |
//! | 5     | [`Slot::LateralDeviation`]      | a lateral-deviation integral                               |
//! | 6     | [`Slot::GyroHeading`]           | heading-filter (gyro-compass) state                        |
//! | 7     | [`Slot::BankCommand`]           | commanded-bank filter state                                |
//! | 8     | [`Slot::AileronFilter`]         | filtered aileron command                                   |
//! | 9     | [`Slot::RudderFilter`]          | filtered rudder command                                    |
//!
//! Slots 0 and 1 form a pair: the state holds heading and heading rate, so the
//! derivative holds heading rate and heading angular acceleration. The same
//! holds for slots 2 and 3 with bank.

use std::ops::{Index, IndexMut};

use crate::StepIntegrable;

/// Number of slots in a [`StateVector`] or [`DerivativeVector`].
pub const STATE_LEN: usize = 10;

/// Named index into a [`StateVector`] or [`DerivativeVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// 0: heading-rate state input (heading angle ψ).
    Heading,
    /// 1: heading angular acceleration, paired with 0 (heading rate ψ̇).
    HeadingRate,
    /// 2: bank angle γ.
    Bank,
    /// 3: bank angular rate γ̇.
    BankRate,
    /// 4: sideslip angle β.
    Sideslip,
    /// 5: a lateral-deviation integral Z.
    LateralDeviation,
    /// 6: heading-filter (gyro-compass) state ψ_g.
    GyroHeading,
    /// 7: commanded-bank filter state.
    BankCommand,
    /// 8: filtered aileron command.
    AileronFilter,
    /// 9: filtered rudder command.
    RudderFilter,
}

impl Slot {
    /// All slots in index order.
    pub const ALL: [Slot; STATE_LEN] = [
        Slot::Heading,
        Slot::HeadingRate,
        Slot::Bank,
        Slot::BankRate,
        Slot::Sideslip,
        Slot::LateralDeviation,
        Slot::GyroHeading,
        Slot::BankCommand,
        Slot::AileronFilter,
        Slot::RudderFilter,
    ];

    /// Returns the array index of this slot.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

macro_rules! slot_vector {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name([f64; STATE_LEN]);

        impl $name {
            /// Returns the underlying values in slot order.
            #[must_use]
            pub fn as_array(&self) -> &[f64; STATE_LEN] {
                &self.0
            }
        }

        impl From<[f64; STATE_LEN]> for $name {
            fn from(values: [f64; STATE_LEN]) -> Self {
                Self(values)
            }
        }

        impl Index<Slot> for $name {
            type Output = f64;

            fn index(&self, slot: Slot) -> &f64 {
                &self.0[slot.index()]
            }
        }

        impl IndexMut<Slot> for $name {
            fn index_mut(&mut self, slot: Slot) -> &mut f64 {
                &mut self.0[slot.index()]
            }
        }
    };
}

slot_vector! {
    /// The simulation state, exclusively owned by one run.
    ///
    /// Starts at all zeros: level wings, zero heading, zero sideslip.
    StateVector
}

slot_vector! {
    /// The instantaneous rate of change of each [`StateVector`] slot.
    DerivativeVector
}

impl StepIntegrable<f64> for StateVector {
    type Derivative = DerivativeVector;

    fn step(&self, derivative: DerivativeVector, dt: f64) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + derivative.0[i] * dt))
    }
}
