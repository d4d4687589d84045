//! Sale records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use salonledger_shared::types::{Currency, CustomerId, ProductId, SaleId, SalonId, ServiceId};

/// How a sale was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash at the counter.
    Cash,
    /// Debit or credit card.
    Card,
    /// Mobile money wallet.
    MobileMoney,
    /// Bank transfer.
    BankTransfer,
    /// Anything the upstream reports that is not one of the above.
    Other,
}

impl PaymentMethod {
    /// Returns the wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::MobileMoney => "mobile_money",
            Self::BankTransfer => "bank_transfer",
            Self::Other => "other",
        }
    }

    /// Parses an upstream value, mapping unknown spellings to `Other`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "cash" => Self::Cash,
            "card" | "credit_card" | "debit_card" => Self::Card,
            "mobile_money" | "momo" | "mobilemoney" => Self::MobileMoney,
            "bank_transfer" | "bank" | "banktransfer" => Self::BankTransfer,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a sale line refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum LineItemKind {
    /// A salon service.
    Service {
        /// Service ID, if known.
        id: Option<ServiceId>,
        /// Service name, if known.
        name: Option<String>,
    },
    /// A retail product.
    Product {
        /// Product ID, if known.
        id: Option<ProductId>,
        /// Product name, if known.
        name: Option<String>,
    },
}

impl LineItemKind {
    /// Label used when grouping revenue by service or product.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Service { name, .. } => name.as_deref().unwrap_or("Unknown Service"),
            Self::Product { name, .. } => name.as_deref().unwrap_or("Unknown Product"),
        }
    }
}

/// One line of a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleItem {
    /// Service or product sold.
    pub kind: LineItemKind,
    /// Quantity sold.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Line total.
    pub line_total: Decimal,
}

/// A completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Sale ID.
    pub id: SaleId,
    /// Salon the sale belongs to.
    pub salon_id: Option<SalonId>,
    /// Customer, if recorded.
    pub customer_id: Option<CustomerId>,
    /// Sale total.
    pub total_amount: Decimal,
    /// Sale currency.
    pub currency: Currency,
    /// Settlement method.
    pub payment_method: PaymentMethod,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Line items.
    #[serde(default)]
    pub items: Vec<SaleItem>,
}
