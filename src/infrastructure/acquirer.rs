use crate::domain::ports::Acquirer;
use crate::domain::transaction::AuthorizationStatus;

/// Deterministic in-process stand-in for an acquirer network.
///
/// Approves cards whose last digit is even and denies those ending in an odd
/// digit. A card number that is empty or ends in anything other than an ASCII
/// digit is denied.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedAcquirer;

impl SimulatedAcquirer {
    pub fn new() -> Self {
        Self
    }
}

impl Acquirer for SimulatedAcquirer {
    fn authorize(&self, card_number: &str) -> AuthorizationStatus {
        match card_number.bytes().last() {
            Some(byte) if byte.is_ascii_digit() && (byte - b'0') % 2 == 0 => {
                AuthorizationStatus::Approved
            }
            _ => AuthorizationStatus::Denied,
        }
    }
}
