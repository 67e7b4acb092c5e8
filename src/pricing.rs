// Pricing: nights in a stay, tax breakdown and informational discount display
use crate::catalog::HotelRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TAX_RATE: f64 = 0.12;

/// Number of nights billed for a stay.
///
/// Never returns less than 1, even for equal or inverted dates. Callers must
/// check date order themselves before trusting the result.
pub fn compute_nights(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    days.clamp(1, u32::MAX as i64) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub nightly_rate: f64,
    pub nights: u32,
    pub tax_rate: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

// Amounts are kept at full precision; rounding only happens for display
pub fn price_breakdown(nightly_rate: f64, nights: u32, tax_rate: f64) -> PriceBreakdown {
    let subtotal = nightly_rate * nights as f64;
    let tax = subtotal * tax_rate;

    PriceBreakdown {
        nightly_rate,
        nights,
        tax_rate,
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", round_cents(amount))
}

impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} x {} nights: {}",
            format_money(self.nightly_rate),
            self.nights,
            format_money(self.subtotal)
        )?;
        writeln!(
            f,
            "Taxes & fees ({:.0}%): {}",
            self.tax_rate * 100.0,
            format_money(self.tax)
        )?;
        write!(f, "Total: {}", format_money(self.total))
    }
}

// What the listing shows next to a discounted hotel. Never subtracted
// from a booking total: the hotel price is already the discounted rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountInfo {
    pub label: Option<String>,
    pub original_price: f64,
    pub current_price: f64,
    pub savings_per_night: f64,
    pub total_savings: f64,
}

impl DiscountInfo {
    pub fn for_stay(hotel: &HotelRecord, nights: u32) -> Option<Self> {
        let original_price = hotel.original_price?;
        if original_price <= hotel.price {
            return None;
        }

        let savings_per_night = original_price - hotel.price;
        Some(Self {
            label: hotel.discount.clone(),
            original_price,
            current_price: hotel.price,
            savings_per_night,
            total_savings: savings_per_night * nights as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;
    use test_case::test_case;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test_case("2025-06-01", "2025-06-04", 3; "#1 regular stay")]
    #[test_case("2025-06-01", "2025-06-02", 1; "#2 single night")]
    #[test_case("2025-06-01", "2025-06-01", 1; "#3 same day")]
    #[test_case("2025-06-10", "2025-06-01", 1; "#4 inverted dates")]
    #[test_case("2024-02-28", "2024-03-01", 2; "#5 across leap day")]
    fn test_compute_nights(check_in: &str, check_out: &str, expected: u32) {
        assert_eq!(compute_nights(date(check_in), date(check_out)), expected);
    }

    #[test]
    fn test_breakdown_three_nights() {
        let breakdown = price_breakdown(250.0, 3, DEFAULT_TAX_RATE);

        assert_eq!(round_cents(breakdown.subtotal), 750.00);
        assert_eq!(round_cents(breakdown.tax), 90.00);
        assert_eq!(round_cents(breakdown.total), 840.00);
        assert_eq!(breakdown.total, breakdown.subtotal + breakdown.tax);
    }

    #[test]
    fn test_breakdown_matches_rate_times_nights() {
        for rate in [0.0, 1.0, 99.99, 180.0, 250.0, 1234.56] {
            for nights in 1..=14u32 {
                let breakdown = price_breakdown(rate, nights, DEFAULT_TAX_RATE);
                let expected = rate * nights as f64 * 1.12;

                assert_eq!(breakdown.total, breakdown.subtotal + breakdown.tax);
                assert!(
                    (breakdown.total - expected).abs() < 1e-6,
                    "rate {} nights {}: {} != {}",
                    rate,
                    nights,
                    breakdown.total,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_zero_tax_rate() {
        let breakdown = price_breakdown(180.0, 2, 0.0);
        assert_eq!(breakdown.tax, 0.0);
        assert_eq!(breakdown.total, 360.0);
    }

    #[test]
    fn test_display_rounds_to_cents() {
        let breakdown = price_breakdown(99.995, 1, DEFAULT_TAX_RATE);
        let rendered = breakdown.to_string();

        assert!(rendered.contains("x 1 nights"));
        assert!(rendered.contains("Taxes & fees (12%)"));
        assert!(rendered.ends_with(&format_money(breakdown.total)));
        assert_eq!(format_money(840.0), "$840.00");
    }

    #[test]
    fn test_discount_is_informational() {
        let hotels = seed_catalog();
        let resort = &hotels[0];

        let discount = DiscountInfo::for_stay(resort, 3).unwrap();
        assert_eq!(discount.label.as_deref(), Some("15% OFF"));
        assert_eq!(discount.savings_per_night, 45.0);
        assert_eq!(discount.total_savings, 135.0);

        // The booking total is still based on the current nightly price
        let breakdown = price_breakdown(resort.price, 3, DEFAULT_TAX_RATE);
        assert_eq!(round_cents(breakdown.total), 840.00);
    }

    #[test]
    fn test_no_discount_without_higher_original_price() {
        let mut hotel = seed_catalog().remove(1);
        hotel.original_price = None;
        assert!(DiscountInfo::for_stay(&hotel, 2).is_none());

        hotel.original_price = Some(hotel.price);
        assert!(DiscountInfo::for_stay(&hotel, 2).is_none());
    }
}
