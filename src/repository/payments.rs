//! Payment method collection

use crate::errors::{Result, TallerError};
use crate::schemas::PaymentMethod;
use crate::store::{Collection, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentMethodRepository {
    methods: Vec<PaymentMethod>,
}

impl PaymentMethodRepository {
    pub fn load<S: Store>(store: &S) -> Self {
        PaymentMethodRepository {
            methods: store.get(Collection::PaymentMethods),
        }
    }

    pub fn persist<S: Store>(&self, store: &mut S) {
        store.set(Collection::PaymentMethods, &self.methods);
    }

    pub fn all(&self) -> &[PaymentMethod] {
        &self.methods
    }

    pub fn active(&self) -> impl Iterator<Item = &PaymentMethod> {
        self.methods.iter().filter(|m| m.is_active)
    }

    pub fn get(&self, id: &str) -> Result<&PaymentMethod> {
        self.methods
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| TallerError::NotFound(format!("payment method {}", id)))
    }

    pub fn insert(&mut self, method: PaymentMethod) {
        self.methods.push(method);
    }

    pub fn replace(&mut self, method: PaymentMethod) -> Result<()> {
        match self.methods.iter_mut().find(|m| m.id == method.id) {
            Some(slot) => {
                *slot = method;
                Ok(())
            }
            None => Err(TallerError::NotFound(format!("payment method {}", method.id))),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<PaymentMethod> {
        let index = self.methods.iter().position(|m| m.id == id)?;
        Some(self.methods.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{PaymentMethodDraft, PaymentMethodType};
    use crate::store::MemoryStore;

    fn cash(id: &str) -> PaymentMethod {
        PaymentMethodDraft::new(PaymentMethodType::Cash).into_method(id.to_string())
    }

    #[test]
    fn test_round_trip_and_active_filter() {
        let mut store = MemoryStore::new();
        let mut repo = PaymentMethodRepository::load(&store);
        repo.insert(cash("m1"));
        let mut inactive = cash("m2");
        inactive.is_active = false;
        repo.insert(inactive);
        repo.persist(&mut store);

        let reloaded = PaymentMethodRepository::load(&store);
        assert_eq!(reloaded.all().len(), 2);
        assert_eq!(reloaded.active().count(), 1);
    }

    #[test]
    fn test_missing_ids() {
        let mut repo = PaymentMethodRepository::default();
        assert!(repo.get("m1").is_err());
        assert!(repo.replace(cash("m1")).is_err());
        assert!(repo.remove("m1").is_none());
    }
}
