use crate::domain::Chips;
use crate::engine::errors::LedgerError;

/// Проверка суммы изменения вклада: ненулевая и кратная минимальному шагу.
pub fn validate_amount(amount: i64, unit: Chips) -> Result<(), LedgerError> {
    let unit_signed = unit.as_signed();
    if amount == 0 || unit_signed == 0 || amount % unit_signed != 0 {
        return Err(LedgerError::InvalidAmount { amount, unit });
    }
    Ok(())
}

/// Индекс игрока существует.
pub fn validate_index(index: usize, len: usize) -> Result<(), LedgerError> {
    if index >= len {
        return Err(LedgerError::IndexOutOfRange { index, len });
    }
    Ok(())
}
