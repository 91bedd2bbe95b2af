pub mod p001_delivery_status;
pub mod p002_shipment_calendar;
