//! Upstream record shapes and their conversion into core records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use salonledger_core::records::{
    Appointment, AppointmentStatus, Commission, CommissionSource, EmployeeRef, LineItemKind,
    PaymentMethod, Sale, SaleItem, SalonRef,
};
use salonledger_shared::types::{
    AppointmentId, CommissionId, CustomerId, EmployeeId, ProductId, SaleId, SalonId, ServiceId,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::decimal::lenient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NamedDto {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaleItemDto {
    #[serde(default)]
    service_id: Option<ServiceId>,
    #[serde(default)]
    product_id: Option<ProductId>,
    #[serde(default)]
    service: Option<NamedDto>,
    #[serde(default)]
    product: Option<NamedDto>,
    #[serde(default, deserialize_with = "lenient")]
    quantity: Decimal,
    #[serde(default, deserialize_with = "lenient")]
    unit_price: Decimal,
    #[serde(default, deserialize_with = "lenient")]
    line_total: Decimal,
}

impl From<SaleItemDto> for SaleItem {
    fn from(dto: SaleItemDto) -> Self {
        let kind = if dto.product_id.is_some() || dto.product.is_some() {
            LineItemKind::Product {
                id: dto.product_id,
                name: dto.product.and_then(|p| p.name),
            }
        } else {
            LineItemKind::Service {
                id: dto.service_id,
                name: dto.service.and_then(|s| s.name),
            }
        };

        let line_total = if dto.line_total.is_zero() {
            dto.unit_price.checked_mul(dto.quantity).unwrap_or_else(|| {
                warn!(
                    unit_price = %dto.unit_price,
                    quantity = %dto.quantity,
                    "Line total overflows, counting the item as zero"
                );
                Decimal::ZERO
            })
        } else {
            dto.line_total
        };

        Self {
            kind,
            quantity: dto.quantity,
            unit_price: dto.unit_price,
            line_total,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaleDto {
    id: SaleId,
    #[serde(default)]
    salon_id: Option<SalonId>,
    #[serde(default)]
    customer_id: Option<CustomerId>,
    #[serde(default, deserialize_with = "lenient")]
    total_amount: Decimal,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    payment_method: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    items: Vec<SaleItemDto>,
}

impl From<SaleDto> for Sale {
    fn from(dto: SaleDto) -> Self {
        Self {
            id: dto.id,
            salon_id: dto.salon_id,
            customer_id: dto.customer_id,
            total_amount: dto.total_amount,
            currency: dto
                .currency
                .and_then(|c| c.parse().ok())
                .unwrap_or_default(),
            payment_method: dto
                .payment_method
                .as_deref()
                .map_or(PaymentMethod::Other, PaymentMethod::parse_lenient),
            created_at: dto.created_at,
            items: dto.items.into_iter().map(SaleItem::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    #[serde(default)]
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeDto {
    id: EmployeeId,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    user: Option<UserDto>,
}

impl From<EmployeeDto> for EmployeeRef {
    fn from(dto: EmployeeDto) -> Self {
        Self {
            id: dto.id,
            full_name: dto.full_name.or_else(|| dto.user.and_then(|u| u.full_name)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommissionDto {
    id: CommissionId,
    #[serde(default, alias = "employee")]
    salon_employee: Option<EmployeeDto>,
    #[serde(default, deserialize_with = "lenient")]
    amount: Decimal,
    #[serde(default, deserialize_with = "lenient")]
    commission_rate: Decimal,
    #[serde(default, deserialize_with = "lenient")]
    sale_amount: Decimal,
    #[serde(default)]
    paid: bool,
    #[serde(default)]
    paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    payment_method: Option<String>,
    #[serde(default)]
    payment_reference: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    metadata: Option<Value>,
}

impl From<CommissionDto> for Commission {
    fn from(dto: CommissionDto) -> Self {
        let source = dto
            .metadata
            .as_ref()
            .and_then(|m| m.get("source"))
            .and_then(Value::as_str)
            .map_or(CommissionSource::Unknown, CommissionSource::parse_lenient);

        Self {
            id: dto.id,
            employee: dto.salon_employee.map(EmployeeRef::from),
            amount: dto.amount,
            commission_rate: dto.commission_rate,
            sale_amount: dto.sale_amount,
            paid: dto.paid,
            paid_at: dto.paid_at,
            payment_method: dto.payment_method,
            payment_reference: dto.payment_reference,
            created_at: dto.created_at,
            source,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppointmentDto {
    id: AppointmentId,
    #[serde(default)]
    salon_id: Option<SalonId>,
    #[serde(default)]
    customer_id: Option<CustomerId>,
    #[serde(default)]
    service_id: Option<ServiceId>,
    #[serde(default, alias = "employeeId")]
    salon_employee_id: Option<EmployeeId>,
    scheduled_start: DateTime<Utc>,
    scheduled_end: DateTime<Utc>,
    status: String,
}

impl TryFrom<AppointmentDto> for Appointment {
    type Error = String;

    fn try_from(dto: AppointmentDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            salon_id: dto.salon_id,
            customer_id: dto.customer_id,
            service_id: dto.service_id,
            employee_id: dto.salon_employee_id,
            scheduled_start: dto.scheduled_start,
            scheduled_end: dto.scheduled_end,
            status: dto.status.parse::<AppointmentStatus>()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SalonDto {
    id: SalonId,
    #[serde(default)]
    name: String,
}

impl From<SalonDto> for SalonRef {
    fn from(dto: SalonDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use salonledger_shared::types::Currency;
    use serde_json::json;

    #[test]
    fn test_sale_with_string_amounts() {
        let dto: SaleDto = serde_json::from_value(json!({
            "id": "0192f5a4-1111-7000-8000-000000000001",
            "salonId": "0192f5a4-2222-7000-8000-000000000001",
            "totalAmount": "1,500.00",
            "currency": "rwf",
            "paymentMethod": "mobile_money",
            "createdAt": "2026-10-16T08:30:00Z",
            "items": [
                {"service": {"name": "Braids"}, "quantity": "1", "unitPrice": 1000, "lineTotal": "1000"},
                {"productId": "0192f5a4-3333-7000-8000-000000000001", "quantity": 2, "unitPrice": "250"}
            ]
        }))
        .unwrap();

        let sale = Sale::from(dto);

        assert_eq!(sale.total_amount, dec!(1500));
        assert_eq!(sale.currency, Currency::Rwf);
        assert_eq!(sale.payment_method, PaymentMethod::MobileMoney);
        assert_eq!(sale.items[0].kind.label(), "Braids");
        assert_eq!(sale.items[1].kind.label(), "Unknown Product");
        assert_eq!(sale.items[1].line_total, dec!(500));
    }

    #[test]
    fn test_overflowing_line_total_is_zero() {
        let dto: SaleItemDto = serde_json::from_value(json!({
            "service": {"name": "Braids"},
            "quantity": "79228162514264337593543950335",
            "unitPrice": "2"
        }))
        .unwrap();

        let item = SaleItem::from(dto);

        assert_eq!(item.line_total, Decimal::ZERO);
        assert_eq!(item.unit_price, dec!(2));
        assert_eq!(item.quantity, Decimal::MAX);
    }

    #[test]
    fn test_sale_missing_amount_is_zero() {
        let dto: SaleDto = serde_json::from_value(json!({
            "id": "0192f5a4-1111-7000-8000-000000000001",
            "totalAmount": null,
            "createdAt": "2026-10-16T08:30:00Z"
        }))
        .unwrap();

        let sale = Sale::from(dto);

        assert_eq!(sale.total_amount, Decimal::ZERO);
        assert_eq!(sale.payment_method, PaymentMethod::Other);
        assert!(sale.items.is_empty());
    }

    #[test]
    fn test_commission_employee_name_from_user() {
        let dto: CommissionDto = serde_json::from_value(json!({
            "id": "0192f5a4-4444-7000-8000-000000000001",
            "salonEmployee": {
                "id": "0192f5a4-5555-7000-8000-000000000001",
                "user": {"fullName": "Aline Uwase"}
            },
            "amount": "300",
            "commissionRate": 10,
            "saleAmount": "3000",
            "paid": true,
            "paidAt": "2026-10-16T10:00:00Z",
            "createdAt": "2026-10-15T10:00:00Z",
            "metadata": {"source": "appointment"}
        }))
        .unwrap();

        let commission = Commission::from(dto);

        assert_eq!(commission.amount, dec!(300));
        assert!(commission.paid);
        assert_eq!(commission.source, CommissionSource::Appointment);
        assert_eq!(
            commission.employee.unwrap().full_name.as_deref(),
            Some("Aline Uwase")
        );
    }

    #[test]
    fn test_commission_without_employee_or_metadata() {
        let dto: CommissionDto = serde_json::from_value(json!({
            "id": "0192f5a4-4444-7000-8000-000000000001",
            "amount": 100,
            "createdAt": "2026-10-15T10:00:00Z"
        }))
        .unwrap();

        let commission = Commission::from(dto);

        assert!(commission.employee.is_none());
        assert!(!commission.paid);
        assert_eq!(commission.source, CommissionSource::Unknown);
    }

    #[test]
    fn test_appointment_status_parsing() {
        let body = json!({
            "id": "0192f5a4-6666-7000-8000-000000000001",
            "employeeId": "0192f5a4-5555-7000-8000-000000000001",
            "scheduledStart": "2026-10-16T09:00:00Z",
            "scheduledEnd": "2026-10-16T10:00:00Z",
            "status": "no_show"
        });
        let dto: AppointmentDto = serde_json::from_value(body).unwrap();

        let appointment = Appointment::try_from(dto).unwrap();

        assert_eq!(appointment.status, AppointmentStatus::NoShow);
        assert!(appointment.employee_id.is_some());
    }

    #[test]
    fn test_appointment_unknown_status_is_rejected() {
        let dto: AppointmentDto = serde_json::from_value(json!({
            "id": "0192f5a4-6666-7000-8000-000000000001",
            "scheduledStart": "2026-10-16T09:00:00Z",
            "scheduledEnd": "2026-10-16T10:00:00Z",
            "status": "teleported"
        }))
        .unwrap();

        assert!(Appointment::try_from(dto).is_err());
    }
}
