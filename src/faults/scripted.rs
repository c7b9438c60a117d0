//! Deterministic fault outcomes.

use super::FaultGenerator;
use std::collections::VecDeque;

/// Replays queued outcomes per fault kind. An exhausted queue means
/// "no fault", so `ScriptedFaults::default()` is a machine that never fails.
///
/// # Example
///
/// ```rust
/// use vending_machine::faults::{FaultGenerator, ScriptedFaults};
///
/// let mut faults = ScriptedFaults::default().jam_product().then_deliver();
///
/// assert!(faults.product_jammed());
/// assert!(!faults.product_jammed());
/// assert!(!faults.product_jammed());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedFaults {
    recognitions: VecDeque<bool>,
    product_jams: VecDeque<bool>,
    change_jams: VecDeque<bool>,
}

impl ScriptedFaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next insertion is rejected by the money reader.
    pub fn reject_money(mut self) -> Self {
        self.recognitions.push_back(false);
        self
    }

    /// Next insertion is accepted.
    pub fn accept_money(mut self) -> Self {
        self.recognitions.push_back(true);
        self
    }

    /// Next committed sale jams in the dispenser.
    pub fn jam_product(mut self) -> Self {
        self.product_jams.push_back(true);
        self
    }

    /// Next committed sale reaches the tray.
    pub fn then_deliver(mut self) -> Self {
        self.product_jams.push_back(false);
        self
    }

    /// Next change collection jams.
    pub fn jam_change(mut self) -> Self {
        self.change_jams.push_back(true);
        self
    }

    /// Outcomes not yet consumed, across all fault kinds.
    pub fn pending(&self) -> usize {
        self.recognitions.len() + self.product_jams.len() + self.change_jams.len()
    }
}

impl FaultGenerator for ScriptedFaults {
    fn money_recognized(&mut self) -> bool {
        self.recognitions.pop_front().unwrap_or(true)
    }

    fn product_jammed(&mut self) -> bool {
        self.product_jams.pop_front().unwrap_or(false)
    }

    fn change_jammed(&mut self) -> bool {
        self.change_jams.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_never_faults() {
        let mut faults = ScriptedFaults::new();
        assert!(faults.money_recognized());
        assert!(!faults.product_jammed());
        assert!(!faults.change_jammed());
    }

    #[test]
    fn outcomes_are_consumed_in_order() {
        let mut faults = ScriptedFaults::new()
            .reject_money()
            .accept_money()
            .jam_change();
        assert_eq!(faults.pending(), 3);

        assert!(!faults.money_recognized());
        assert!(faults.money_recognized());
        assert!(faults.change_jammed());
        assert!(!faults.change_jammed());
        assert_eq!(faults.pending(), 0);
    }

    #[test]
    fn queues_are_independent() {
        let mut faults = ScriptedFaults::new().jam_product();

        assert!(!faults.change_jammed());
        assert!(faults.money_recognized());
        assert!(faults.product_jammed());
    }

    #[test]
    fn borrowed_generator_forwards_calls() {
        fn jammed<F: FaultGenerator>(mut faults: F) -> bool {
            faults.product_jammed()
        }

        let mut faults = ScriptedFaults::new().jam_product();
        assert!(jammed(&mut faults));
        assert_eq!(faults.pending(), 0);
    }
}
