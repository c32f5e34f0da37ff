use super::entities::PaymentStatus;

/// Payment figures derived from what has been paid so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentState {
    pub status: PaymentStatus,
    pub remaining_amount: f64,
}

impl PaymentState {
    /// Nothing paid keeps the current status, so an explicit `refunded` survives.
    pub fn derive(total: f64, paid: f64, current: PaymentStatus) -> Self {
        let remaining_amount = total - paid;
        let status = if remaining_amount <= 0.0 {
            PaymentStatus::Paid
        } else if paid > 0.0 {
            PaymentStatus::Partial
        } else {
            current
        };

        Self {
            status,
            remaining_amount,
        }
    }
}
