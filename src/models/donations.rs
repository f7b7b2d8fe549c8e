use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::models::settings::SiteSettings;

pub const PREDEFINED_AMOUNTS: [u32; 5] = [10, 25, 50, 100, 250];
pub const MAX_DONATION: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Stripe,
    Paypal,
    OrangeMoney,
    Wave,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Stripe,
        PaymentMethod::Paypal,
        PaymentMethod::OrangeMoney,
        PaymentMethod::Wave,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "Stripe",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::OrangeMoney => "Orange Money",
            PaymentMethod::Wave => "Wave Sénégal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "Carte bancaire sécurisée",
            PaymentMethod::Paypal => "PayPal entre amis",
            PaymentMethod::OrangeMoney => "Paiement mobile",
            PaymentMethod::Wave => "Transfert rapide",
        }
    }

    /// The configured identifier, if the method is switched on and filled in.
    pub fn account<'a>(&self, settings: &'a SiteSettings) -> Option<&'a str> {
        let (enabled, account) = match self {
            PaymentMethod::Stripe => (settings.stripe_enabled, &settings.stripe_public_key),
            PaymentMethod::Paypal => (settings.paypal_enabled, &settings.paypal_email),
            PaymentMethod::OrangeMoney => {
                (settings.orange_money_enabled, &settings.orange_money_number)
            }
            PaymentMethod::Wave => (settings.wave_enabled, &settings.wave_number),
        };
        (enabled && !account.is_empty()).then_some(account.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentMethodInfo {
    pub id: PaymentMethod,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DonationOptions {
    pub predefined_amounts: Vec<u32>,
    pub methods: Vec<PaymentMethodInfo>,
}

impl DonationOptions {
    pub fn from_settings(settings: &SiteSettings) -> Self {
        let methods = PaymentMethod::ALL
            .iter()
            .filter(|method| method.account(settings).is_some())
            .map(|method| PaymentMethodInfo {
                id: *method,
                name: method.display_name(),
                description: method.description(),
            })
            .collect();
        Self {
            predefined_amounts: PREDEFINED_AMOUNTS.to_vec(),
            methods,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DonationRequest {
    pub method: PaymentMethod,
    pub amount: BigDecimal,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DonationInstructions {
    Redirect {
        url: String,
    },
    MobileMoney {
        provider: &'static str,
        phone_number: String,
        dial_code: &'static str,
        amount: String,
        steps: Vec<String>,
    },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DonationError {
    #[error("Please select a valid amount (at most 1000000 €, two decimals)")]
    InvalidAmount,
    #[error("{0} is not configured. Please contact the administrator.")]
    MethodUnavailable(&'static str),
}

/// Accepts positive amounts up to `MAX_DONATION` with at most two decimals.
/// The size checks only look at the digits and the exponent, so an input such
/// as `1e50000000` is refused before anything expands it.
pub fn check_amount(amount: &BigDecimal) -> Result<(), DonationError> {
    if *amount <= BigDecimal::zero() {
        return Err(DonationError::InvalidAmount);
    }
    let (digits, scale) = amount.as_bigint_and_exponent();
    let digits = digits.to_string();
    let significant = digits.trim_end_matches('0');
    let trailing_zeros = (digits.len() - significant.len()) as i64;
    let integer_digits = digits.len() as i64 - scale;

    if scale - trailing_zeros > 2 || integer_digits > 7 {
        return Err(DonationError::InvalidAmount);
    }
    if *amount > BigDecimal::from(MAX_DONATION) {
        return Err(DonationError::InvalidAmount);
    }
    Ok(())
}

/// Builds the deep link or the manual transfer instructions for a donation.
/// No payment is performed.
pub fn checkout(
    settings: &SiteSettings,
    method: PaymentMethod,
    amount: &BigDecimal,
) -> Result<DonationInstructions, DonationError> {
    check_amount(amount)?;
    let account = method
        .account(settings)
        .ok_or(DonationError::MethodUnavailable(method.display_name()))?;
    let amount_text = amount.normalized().to_string();

    let instructions = match method {
        PaymentMethod::Stripe => {
            let cents = (amount * &BigDecimal::from(100))
                .round(0)
                .to_i64()
                .ok_or(DonationError::InvalidAmount)?;
            DonationInstructions::Redirect {
                url: format!("https://donate.stripe.com?amount={}", cents),
            }
        }
        PaymentMethod::Paypal => DonationInstructions::Redirect {
            url: format!("https://www.paypal.com/paypalme/{}/{}EUR", account, amount_text),
        },
        PaymentMethod::OrangeMoney | PaymentMethod::Wave => {
            let (provider, dial_code) = if method == PaymentMethod::OrangeMoney {
                ("Orange Money", "#144#")
            } else {
                ("Wave", "WAVE")
            };
            DonationInstructions::MobileMoney {
                provider,
                phone_number: account.to_string(),
                dial_code,
                steps: vec![
                    format!("Composez le code {} sur votre téléphone", dial_code),
                    "Sélectionnez \"Transfert d'argent\"".to_string(),
                    "Entrez le numéro ci-dessus".to_string(),
                    format!("Saisissez le montant: {} €", amount_text),
                    "Confirmez le paiement".to_string(),
                ],
                amount: amount_text,
            }
        }
    };
    Ok(instructions)
}
