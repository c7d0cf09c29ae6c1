use crate::domain::money::Amount;
use crate::domain::ports::PaymentChannelBox;
use crate::error::DispatchError;
use std::collections::BTreeMap;
use tracing::debug;

/// Checkout that is extended by registering channels, never by editing it.
#[derive(Default)]
pub struct PaymentProcessor {
    payment_methods: BTreeMap<String, PaymentChannelBox>,
}

impl PaymentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `method` under `name`, replacing any previous registration.
    pub fn register_payment_method(&mut self, name: impl Into<String>, method: PaymentChannelBox) {
        let name = name.into();
        debug!(%name, channel = method.name(), "payment method registered");
        self.payment_methods.insert(name, method);
    }

    pub fn process_payment(
        &self,
        payment_type: &str,
        amount: Amount,
    ) -> Result<String, DispatchError> {
        self.payment_methods
            .get(payment_type)
            .map(|method| method.process(amount))
            .ok_or_else(|| DispatchError::UnsupportedMethod(payment_type.to_string()))
    }

    pub fn registered(&self) -> impl Iterator<Item = &str> {
        self.payment_methods.keys().map(String::as_str)
    }
}
