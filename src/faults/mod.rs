//! Simulated hardware faults.
//!
//! The machine never draws random numbers itself. It asks a
//! [`FaultGenerator`] at three points:
//! - when money is inserted (was it recognized?)
//! - after a sale is committed (did the product jam?)
//! - after change is released (did the coins jam?)
//!
//! [`RandomFaults`] reproduces the hardware's odds; [`ScriptedFaults`] replays
//! a fixed sequence of outcomes for tests and demos.

mod random;
mod scripted;

pub use random::{FaultProfile, RandomFaults};
pub use scripted::ScriptedFaults;

/// Source of the three simulated hardware outcomes.
pub trait FaultGenerator {
    /// `true` when the inserted money was accepted by the reader.
    fn money_recognized(&mut self) -> bool;

    /// `true` when the product got stuck on its way to the tray.
    fn product_jammed(&mut self) -> bool;

    /// `true` when the released change got stuck in the dispenser.
    fn change_jammed(&mut self) -> bool;
}

impl<F: FaultGenerator + ?Sized> FaultGenerator for &mut F {
    fn money_recognized(&mut self) -> bool {
        (**self).money_recognized()
    }

    fn product_jammed(&mut self) -> bool {
        (**self).product_jammed()
    }

    fn change_jammed(&mut self) -> bool {
        (**self).change_jammed()
    }
}

impl<F: FaultGenerator + ?Sized> FaultGenerator for Box<F> {
    fn money_recognized(&mut self) -> bool {
        (**self).money_recognized()
    }

    fn product_jammed(&mut self) -> bool {
        (**self).product_jammed()
    }

    fn change_jammed(&mut self) -> bool {
        (**self).change_jammed()
    }
}
