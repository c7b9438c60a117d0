//! End-to-end purchase scenarios with scripted hardware.

use vending_machine::builder::VendingMachineBuilder;
use vending_machine::catalog;
use vending_machine::core::{Money, TransactionKind};
use vending_machine::faults::ScriptedFaults;
use vending_machine::machine::{VendingError, VendingMachine};
use vending_machine::{Locale, MachineConfig};

fn water_machine(faults: ScriptedFaults) -> VendingMachine<ScriptedFaults> {
    VendingMachineBuilder::new()
        .products(catalog!["Water" => (2, Money::from_units(5))])
        .faults(faults)
        .build()
        .expect("water catalog should build")
}

#[test]
fn exact_payment_delivers_and_empties_balance() {
    let mut machine = water_machine(ScriptedFaults::new().accept_money().then_deliver());

    let delivery = machine.purchase("Water", Money::from_units(5)).unwrap();

    assert_eq!(delivery.product, "Water");
    assert_eq!(machine.product("Water").unwrap().quantity, 1);
    assert_eq!(machine.balance(), Money::ZERO);
}

#[test]
fn short_payment_keeps_inserted_money() {
    let mut machine = water_machine(ScriptedFaults::new());

    assert_eq!(
        machine.purchase("Water", Money::from_units(3)),
        Err(VendingError::InsufficientFunds)
    );
    assert_eq!(machine.product("Water").unwrap().quantity, 2);
    assert_eq!(machine.balance(), Money::from_units(3));
}

#[test]
fn unknown_product_still_credits_insertion() {
    let mut machine = water_machine(ScriptedFaults::new());

    assert_eq!(
        machine.purchase("Soda", Money::from_units(10)),
        Err(VendingError::ProductNotFound)
    );
    assert_eq!(machine.balance(), Money::from_units(10));
}

#[test]
fn dispenser_jam_does_not_roll_back_sale() {
    let mut machine = water_machine(ScriptedFaults::new().jam_product());

    assert_eq!(
        machine.purchase("Water", Money::from_units(8)),
        Err(VendingError::ProductStuck)
    );
    assert_eq!(machine.product("Water").unwrap().quantity, 1);
    assert_eq!(machine.balance(), Money::from_units(3));
}

#[test]
fn change_jam_still_empties_balance() {
    let mut machine = water_machine(ScriptedFaults::new().jam_change());
    let _ = machine.purchase("Soda", Money::from_units(7));
    assert_eq!(machine.balance(), Money::from_units(7));

    assert_eq!(machine.collect_change(), Err(VendingError::ChangeStuck));
    assert_eq!(machine.balance(), Money::ZERO);

    let last = machine.journal().records().last().unwrap();
    assert_eq!(
        last.kind,
        TransactionKind::CollectChange {
            amount: Money::from_units(7)
        }
    );
}

#[test]
fn leftover_balance_buys_a_second_item() {
    let mut machine = water_machine(ScriptedFaults::new());

    machine.purchase("Water", Money::from_units(10)).unwrap();
    let second = machine.purchase("Water", Money::ZERO).unwrap();

    assert_eq!(second.balance, Money::ZERO);
    assert_eq!(
        machine.purchase("Water", Money::ZERO),
        Err(VendingError::ProductUnavailable)
    );
    assert_eq!(machine.journal().deliveries(), vec!["Water", "Water"]);
}

#[test]
fn expired_stock_from_config_is_refused() {
    let config = MachineConfig::from_json(
        r#"{"products":[{"name":"Milk","quantity":1,"price":300,"expires_in_days":-2}]}"#,
    )
    .unwrap();
    let mut machine = config
        .into_builder()
        .unwrap()
        .faults(ScriptedFaults::new())
        .build()
        .unwrap();

    assert_eq!(
        machine.purchase("Milk", Money::from_units(3)),
        Err(VendingError::ProductExpired)
    );
    assert_eq!(machine.collect_change(), Ok(Money::from_units(3)));
}

#[test]
fn reference_session_runs_like_the_demo() {
    let config = MachineConfig::reference();
    let locale = config.locale;
    let mut machine = config
        .into_builder()
        .unwrap()
        .faults(ScriptedFaults::new())
        .build()
        .unwrap();

    // 8 buys one bag, 0 more buys nothing: 3 left over.
    machine.purchase("Cebolitos", Money::from_units(8)).unwrap();
    let error = machine.purchase("Cebolitos", Money::ZERO).unwrap_err();

    assert_eq!(locale, Locale::Portuguese);
    assert_eq!(error.localized(locale), "Dinheiro insuficiente");
    assert_eq!(machine.collect_change(), Ok(Money::from_units(3)));
}
