// src/common/format.rs

use rust_decimal::{Decimal, RoundingStrategy};

/// Formata um valor em reais, no padrão pt-BR: `R$ 1.234,56`.
pub fn format_money(value: Decimal) -> String {
    let rounded = value
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded);
    let (integer, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}R$ {grouped},{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> String {
        format_money(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn formats_with_thousands_and_cents() {
        assert_eq!(money("0"), "R$ 0,00");
        assert_eq!(money("12.5"), "R$ 12,50");
        assert_eq!(money("1234.56"), "R$ 1.234,56");
        assert_eq!(money("1234567.8"), "R$ 1.234.567,80");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(money("9.995"), "R$ 10,00");
        assert_eq!(money("0.004"), "R$ 0,00");
    }

    #[test]
    fn keeps_the_sign_of_negative_values() {
        assert_eq!(money("-3.2"), "-R$ 3,20");
        assert_eq!(money("-0.001"), "R$ 0,00");
    }
}
