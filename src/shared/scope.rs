use uuid::Uuid;

/// Which customer/vendor records a caller may see: bookings and inquiries
/// are visible to both parties and to admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyScope {
    All,
    Customer(Uuid),
    Vendor(Uuid),
}

impl PartyScope {
    pub fn allows(&self, customer_id: Uuid, vendor_id: Uuid) -> bool {
        match self {
            PartyScope::All => true,
            PartyScope::Customer(id) => *id == customer_id,
            PartyScope::Vendor(id) => *id == vendor_id,
        }
    }
}
