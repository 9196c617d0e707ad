use entity::sea_orm_active_enums::CurrencySuccessor;

/// Scale `amount` by its currency successor.
///
/// Only `M` is scaled (×1000); `K` and `RAW` amounts are counted as entered.
pub fn normalize_amount(amount: f64, successor: CurrencySuccessor) -> f64 {
    match successor {
        CurrencySuccessor::M => amount * 1000.0,
        CurrencySuccessor::K | CurrencySuccessor::Raw => amount,
    }
}
