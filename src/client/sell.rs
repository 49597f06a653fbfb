// src/client/sell.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    client::card::{ProductCard, MAX_QUANTITY},
    common::format::format_money,
};

#[derive(Debug, Clone, PartialEq)]
struct SellLine {
    product: Uuid,
    name: String,
    unit_price: Decimal,
    quantity: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeLine {
    pub product: Uuid,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderResume {
    pub lines: Vec<ResumeLine>,
    pub item_count: i64,
    pub total: Decimal,
    pub can_order: bool,
}

impl OrderResume {
    pub fn total_label(&self) -> String {
        format_money(self.total)
    }
}

/// Quantidades escolhidas nos cards, na ordem em que entraram.
#[derive(Debug, Clone, Default)]
pub struct SellContext {
    order_enabled: bool,
    lines: Vec<SellLine>,
}

impl SellContext {
    pub fn new(order_enabled: bool) -> Self {
        Self { order_enabled, lines: Vec::new() }
    }

    /// Quantidade `<= 0` tira o produto do pedido.
    pub fn set_quantity(&mut self, card: &ProductCard, quantity: i64) {
        let quantity = quantity.min(MAX_QUANTITY);
        let product = card.product().id;
        let position = self.lines.iter().position(|line| line.product == product);

        match (position, quantity > 0) {
            (Some(i), true) => self.lines[i].quantity = quantity,
            (Some(i), false) => {
                self.lines.remove(i);
            }
            (None, true) => self.lines.push(SellLine {
                product,
                name: card.name().to_string(),
                unit_price: card.unit_price(),
                quantity,
            }),
            (None, false) => {}
        }
    }

    /// Lê a quantidade digitada no card e sincroniza o pedido.
    pub fn update_from_input(&mut self, card: &mut ProductCard, input: &str) {
        let quantity = card.set_quantity_input(input);
        self.set_quantity(card, quantity);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn resume(&self) -> OrderResume {
        let lines: Vec<ResumeLine> = self
            .lines
            .iter()
            .map(|line| ResumeLine {
                product: line.product,
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                total: line.unit_price.saturating_mul(Decimal::from(line.quantity)),
            })
            .collect();

        OrderResume {
            item_count: lines.iter().fold(0i64, |count, line| count.saturating_add(line.quantity)),
            total: lines.iter().fold(Decimal::ZERO, |total, line| total.saturating_add(line.total)),
            can_order: self.order_enabled && !lines.is_empty(),
            lines,
        }
    }
}
