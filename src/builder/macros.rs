//! Macros for concise catalog construction.

/// Build a `Vec<ProductSpec>` from `name => (quantity, price)` entries.
///
/// # Example
///
/// ```
/// use vending_machine::catalog;
/// use vending_machine::core::Money;
///
/// let products = catalog![
///     "Water" => (2, Money::from_units(5)),
///     "Milk" => (1, Money::from_units(3), expires_in_days: 3),
/// ];
///
/// assert_eq!(products.len(), 2);
/// assert_eq!(products[1].expires_in_days, Some(3));
/// ```
#[macro_export]
macro_rules! catalog {
    (
        $(
            $name:expr => ($quantity:expr, $price:expr $(, expires_in_days: $days:expr)?)
        ),* $(,)?
    ) => {
        vec![
            $(
                {
                    #[allow(unused_mut)]
                    let mut spec = $crate::core::ProductSpec::new($name, $quantity, $price);
                    $( spec = spec.expires_in_days($days); )?
                    spec
                }
            ),*
        ]
    };
}
