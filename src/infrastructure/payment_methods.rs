use crate::domain::money::{Amount, FeeSchedule, Money};
use crate::domain::outcome::{PaymentReceipt, RefundReceipt};
use crate::domain::ports::{PaymentMetadata, PaymentMethod, Provider};
use crate::error::ProviderError;
use rust_decimal_macros::dec;
use tracing::info;
use uuid::Uuid;

/// Configuration shared by the simulated processors: identity, id prefixes,
/// supported countries (`None` means global) and fee schedule.
struct Processor {
    name: &'static str,
    label: &'static str,
    charge_prefix: &'static str,
    refund_prefix: &'static str,
    countries: Option<&'static [&'static str]>,
    fees: FeeSchedule,
}

impl Processor {
    /// Simulated connection: fails when any credential is missing.
    fn connect(&self, credentials: &[&str]) -> Result<(), ProviderError> {
        if credentials.iter().any(|c| c.is_empty()) {
            return Err(ProviderError::Unreachable {
                provider: self.name.to_string(),
            });
        }
        Ok(())
    }

    fn charge(&self, amount: Amount, metadata: &PaymentMetadata) -> PaymentReceipt {
        info!(
            user_id = %metadata.user_id,
            location = %metadata.location,
            "{}: Processing {amount} payment", self.label
        );
        PaymentReceipt {
            transaction_id: format!("{}_{}", self.charge_prefix, Uuid::new_v4()),
            amount,
            fee: self.fee(amount),
        }
    }

    fn refund(&self, transaction_id: &str, amount: Amount) -> RefundReceipt {
        info!("{}: Refunding {amount} for {transaction_id}", self.label);
        RefundReceipt {
            refund_id: format!("{}_{}", self.refund_prefix, Uuid::new_v4()),
            transaction_id: transaction_id.to_string(),
            amount,
        }
    }

    fn serves(&self, country_code: &str) -> bool {
        self.countries
            .is_none_or(|countries| countries.contains(&country_code))
    }

    fn fee(&self, amount: Amount) -> Money {
        self.fees.apply(amount.value())
    }
}

/// Stripe: 2.9% + $0.30.
pub struct StripePayment {
    api_key: String,
    processor: Processor,
}

impl StripePayment {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            processor: Processor {
                name: "StripePayment",
                label: "Stripe",
                charge_prefix: "stripe",
                refund_prefix: "refund",
                countries: Some(&["US", "CA", "GB", "AU", "DE", "FR"]),
                fees: FeeSchedule::percentage_plus_flat(dec!(0.029), dec!(0.30)),
            },
        }
    }
}

impl Provider for StripePayment {
    fn name(&self) -> &str {
        self.processor.name
    }
}

impl PaymentMethod for StripePayment {
    fn process_payment(
        &self,
        amount: Amount,
        metadata: &PaymentMetadata,
    ) -> Result<PaymentReceipt, ProviderError> {
        self.processor.connect(&[self.api_key.as_str()])?;
        Ok(self.processor.charge(amount, metadata))
    }

    fn refund_payment(
        &self,
        transaction_id: &str,
        amount: Amount,
    ) -> Result<RefundReceipt, ProviderError> {
        self.processor.connect(&[self.api_key.as_str()])?;
        Ok(self.processor.refund(transaction_id, amount))
    }

    fn is_available_in_country(&self, country_code: &str) -> bool {
        self.processor.serves(country_code)
    }

    fn processing_fee(&self, amount: Amount) -> Money {
        self.processor.fee(amount)
    }
}

/// PayPal: 3.49%, available everywhere.
pub struct PayPalPayment {
    client_id: String,
    client_secret: String,
    processor: Processor,
}

impl PayPalPayment {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            processor: Processor {
                name: "PayPalPayment",
                label: "PayPal",
                charge_prefix: "paypal",
                refund_prefix: "pp_refund",
                countries: None,
                fees: FeeSchedule::percentage(dec!(0.0349)),
            },
        }
    }
}

impl Provider for PayPalPayment {
    fn name(&self) -> &str {
        self.processor.name
    }
}

impl PaymentMethod for PayPalPayment {
    fn process_payment(
        &self,
        amount: Amount,
        metadata: &PaymentMetadata,
    ) -> Result<PaymentReceipt, ProviderError> {
        self.processor.connect(&[self.client_id.as_str(), self.client_secret.as_str()])?;
        Ok(self.processor.charge(amount, metadata))
    }

    fn refund_payment(
        &self,
        transaction_id: &str,
        amount: Amount,
    ) -> Result<RefundReceipt, ProviderError> {
        self.processor.connect(&[self.client_id.as_str(), self.client_secret.as_str()])?;
        Ok(self.processor.refund(transaction_id, amount))
    }

    fn is_available_in_country(&self, country_code: &str) -> bool {
        self.processor.serves(country_code)
    }

    fn processing_fee(&self, amount: Amount) -> Money {
        self.processor.fee(amount)
    }
}

/// Apple Pay: 2.5%.
pub struct ApplePayment {
    merchant_id: String,
    processor: Processor,
}

impl ApplePayment {
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            processor: Processor {
                name: "ApplePayment",
                label: "Apple Pay",
                charge_prefix: "apple",
                refund_prefix: "apple_refund",
                countries: Some(&["US", "CA", "GB", "AU", "JP", "CN"]),
                fees: FeeSchedule::percentage(dec!(0.025)),
            },
        }
    }
}

impl Provider for ApplePayment {
    fn name(&self) -> &str {
        self.processor.name
    }
}

impl PaymentMethod for ApplePayment {
    fn process_payment(
        &self,
        amount: Amount,
        metadata: &PaymentMetadata,
    ) -> Result<PaymentReceipt, ProviderError> {
        self.processor.connect(&[self.merchant_id.as_str()])?;
        Ok(self.processor.charge(amount, metadata))
    }

    fn refund_payment(
        &self,
        transaction_id: &str,
        amount: Amount,
    ) -> Result<RefundReceipt, ProviderError> {
        self.processor.connect(&[self.merchant_id.as_str()])?;
        Ok(self.processor.refund(transaction_id, amount))
    }

    fn is_available_in_country(&self, country_code: &str) -> bool {
        self.processor.serves(country_code)
    }

    fn processing_fee(&self, amount: Amount) -> Money {
        self.processor.fee(amount)
    }
}
