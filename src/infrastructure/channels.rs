use crate::domain::money::Amount;
use crate::domain::ports::{PaymentChannel, PaymentChannelBox, Provider};

pub struct CreditCardPayment;

impl Provider for CreditCardPayment {
    fn name(&self) -> &str {
        "Credit Card"
    }
}

impl PaymentChannel for CreditCardPayment {
    fn process(&self, amount: Amount) -> String {
        format!("Processing {amount} via Credit Card")
    }
}

pub struct PayPalChannel;

impl Provider for PayPalChannel {
    fn name(&self) -> &str {
        "PayPal"
    }
}

impl PaymentChannel for PayPalChannel {
    fn process(&self, amount: Amount) -> String {
        format!("Processing {amount} via PayPal")
    }
}

pub struct BitcoinPayment;

impl Provider for BitcoinPayment {
    fn name(&self) -> &str {
        "Bitcoin"
    }
}

impl PaymentChannel for BitcoinPayment {
    fn process(&self, amount: Amount) -> String {
        format!("Processing {amount} via Bitcoin")
    }
}

pub struct ApplePayChannel;

impl Provider for ApplePayChannel {
    fn name(&self) -> &str {
        "Apple Pay"
    }
}

impl PaymentChannel for ApplePayChannel {
    fn process(&self, amount: Amount) -> String {
        format!("Processing {amount} via Apple Pay")
    }
}

/// Wraps another channel and encrypts whatever it produces.
pub struct EncryptedPayment {
    name: String,
    inner: PaymentChannelBox,
}

impl EncryptedPayment {
    pub fn new(inner: PaymentChannelBox) -> Self {
        Self {
            name: format!("Encrypted {}", inner.name()),
            inner,
        }
    }

    fn encrypt(data: &str) -> String {
        format!("ENCRYPTED({data})")
    }
}

impl Provider for EncryptedPayment {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PaymentChannel for EncryptedPayment {
    fn process(&self, amount: Amount) -> String {
        format!("[ENCRYPTED] {}", Self::encrypt(&self.inner.process(amount)))
    }
}
