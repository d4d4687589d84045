//! Record builders shared by unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use salonledger_shared::types::{
    AppointmentId, CommissionId, Currency, EmployeeId, SaleId, SalonId, ServiceId,
};

use crate::records::{
    Appointment, AppointmentStatus, Commission, CommissionSource, EmployeeRef, LineItemKind,
    PaymentMethod, Sale, SaleItem,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Noon UTC on the given day.
pub fn noon(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap())
}

pub fn sale(amount: Decimal, method: PaymentMethod, day: NaiveDate) -> Sale {
    Sale {
        id: SaleId::new(),
        salon_id: None,
        customer_id: None,
        total_amount: amount,
        currency: Currency::Rwf,
        payment_method: method,
        created_at: noon(day),
        items: Vec::new(),
    }
}

pub fn service_item(name: Option<&str>, line_total: Decimal) -> SaleItem {
    SaleItem {
        kind: LineItemKind::Service {
            id: Some(ServiceId::new()),
            name: name.map(str::to_string),
        },
        quantity: Decimal::ONE,
        unit_price: line_total,
        line_total,
    }
}

pub fn commission(amount: Decimal, paid: bool, employee: Option<&str>) -> Commission {
    Commission {
        id: CommissionId::new(),
        employee: employee.map(|name| EmployeeRef {
            id: EmployeeId::new(),
            full_name: Some(name.to_string()),
        }),
        amount,
        commission_rate: Decimal::TEN,
        sale_amount: amount * Decimal::TEN,
        paid,
        paid_at: None,
        payment_method: None,
        payment_reference: None,
        created_at: noon(date(2026, 10, 16)),
        source: CommissionSource::Sale,
    }
}

pub fn appointment(status: AppointmentStatus, start: DateTime<Utc>) -> Appointment {
    Appointment {
        id: AppointmentId::new(),
        salon_id: Some(SalonId::new()),
        customer_id: None,
        service_id: None,
        employee_id: None,
        scheduled_start: start,
        scheduled_end: start + chrono::Duration::hours(1),
        status,
    }
}
