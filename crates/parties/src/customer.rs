use serde::{Deserialize, Serialize};

use picker_core::{DomainError, DomainResult, Entity, ValueObject, record_id};

record_id! {
    /// Customer (Kunde) identifier.
    pub struct CustomerId;
}

/// Contact information for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ValueObject for ContactInfo {}

/// A delivery customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, contact: ContactInfo) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        Ok(Self { id, name, contact })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_keeps_contact_details() {
        let contact = ContactInfo {
            email: Some("einkauf@tischlerei-berg.de".to_string()),
            phone: Some("+49 30 1234567".to_string()),
            address: Some("Hauptstr. 5, 10115 Berlin".to_string()),
        };

        let customer = Customer::new(CustomerId::new(3), "Tischlerei Berg", contact.clone()).unwrap();

        assert_eq!(*customer.id(), CustomerId::new(3));
        assert_eq!(customer.name(), "Tischlerei Berg");
        assert_eq!(customer.contact(), &contact);
    }

    #[test]
    fn new_customer_rejects_blank_name() {
        let err = Customer::new(CustomerId::new(1), "   ", ContactInfo::default()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn deserializes_without_contact_block() {
        let customer: Customer =
            serde_json::from_str(r#"{ "id": 9, "name": "Bau GmbH" }"#).unwrap();

        assert_eq!(customer.id, CustomerId::new(9));
        assert_eq!(customer.contact, ContactInfo::default());
    }
}
