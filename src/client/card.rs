// src/client/card.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{common::format::format_money, models::product::ListedProduct};

/// Maior quantidade aceita por produto em um pedido.
pub const MAX_QUANTITY: i64 = 9_999;

/// Ícone exibido quando o produto não tem imagem.
pub const IMAGE_PLACEHOLDER: &str = "🍽";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipTint {
    Cyan,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip<'a> {
    pub label: &'a str,
    pub tint: ChipTint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardImage<'a> {
    Url(&'a str),
    Placeholder(&'static str),
}

/// View model do card de um produto, com o seletor de quantidade local.
#[derive(Debug, Clone)]
pub struct ProductCard {
    product: ListedProduct,
    quantity: i64,
}

impl ProductCard {
    pub fn new(product: ListedProduct) -> Self {
        Self { product, quantity: 0 }
    }

    pub fn product(&self) -> &ListedProduct {
        &self.product
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn image(&self) -> CardImage<'_> {
        match self.product.image.as_deref() {
            Some(url) if !url.trim().is_empty() => CardImage::Url(url),
            _ => CardImage::Placeholder(IMAGE_PLACEHOLDER),
        }
    }

    pub fn price_label(&self) -> String {
        format_money(self.product.price)
    }

    /// Preço promocional, quando maior que zero, substitui o preço.
    pub fn unit_price(&self) -> Decimal {
        if self.product.promotional_price > Decimal::ZERO {
            self.product.promotional_price
        } else {
            self.product.price
        }
    }

    // Primeira, terceira... ciano; segunda, quarta... vermelho.
    pub fn chips(&self) -> Vec<TagChip<'_>> {
        self.product
            .tags
            .iter()
            .enumerate()
            .map(|(i, label)| TagChip {
                label,
                tint: if i % 2 == 0 { ChipTint::Cyan } else { ChipTint::Red },
            })
            .collect()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Texto não numérico vira zero; decimais são truncados para baixo e o
    /// resultado fica limitado a `MAX_QUANTITY`.
    pub fn set_quantity_input(&mut self, input: &str) -> i64 {
        self.quantity = input
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| value.floor().min(MAX_QUANTITY as f64) as i64)
            .unwrap_or(0);
        self.quantity
    }

    /// Em branco quando não há quantidade positiva.
    pub fn quantity_display(&self) -> String {
        if self.quantity <= 0 { String::new() } else { self.quantity.to_string() }
    }

    /// Clique no corpo do card: delega a navegação para o detalhe.
    pub fn click<F: FnMut(Uuid)>(&self, mut on_open: F) {
        on_open(self.product.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(tags: &[&str], image: Option<&str>) -> ListedProduct {
        ListedProduct {
            id: Uuid::new_v4(),
            name: "Açaí".into(),
            description: None,
            price: Decimal::new(123456, 2),
            promotional_price: Decimal::ZERO,
            employee_commission: Decimal::ZERO,
            image: image.map(str::to_string),
            active: true,
            category: "Sobremesas".into(),
            category_order: 3,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            store: Uuid::new_v4(),
        }
    }

    #[test]
    fn chips_alternate_tints_by_position() {
        let card = ProductCard::new(product(&["Doce", "Gelado", "Vegano"], None));
        let tints: Vec<ChipTint> = card.chips().iter().map(|c| c.tint).collect();
        assert_eq!(tints, vec![ChipTint::Cyan, ChipTint::Red, ChipTint::Cyan]);
        assert_eq!(card.chips()[1].label, "Gelado");
    }

    #[test]
    fn shows_placeholder_without_image() {
        assert_eq!(ProductCard::new(product(&[], None)).image(), CardImage::Placeholder(IMAGE_PLACEHOLDER));
        assert_eq!(
            ProductCard::new(product(&[], Some("https://img.test/a.png"))).image(),
            CardImage::Url("https://img.test/a.png")
        );
    }

    #[test]
    fn formats_the_price_in_reais() {
        assert_eq!(ProductCard::new(product(&[], None)).price_label(), "R$ 1.234,56");
    }

    #[test]
    fn quantity_input_is_parsed_and_blank_when_not_positive() {
        let mut card = ProductCard::new(product(&[], None));

        assert_eq!(card.set_quantity_input("3"), 3);
        assert_eq!(card.quantity_display(), "3");
        assert_eq!(card.set_quantity_input("2.9"), 2);
        assert_eq!(card.set_quantity_input("abc"), 0);
        assert_eq!(card.quantity_display(), "");
        assert_eq!(card.set_quantity_input("-4"), -4);
        assert_eq!(card.quantity_display(), "");
    }

    #[test]
    fn huge_quantities_are_capped() {
        let mut card = ProductCard::new(product(&[], None));

        assert_eq!(card.set_quantity_input("1e30"), MAX_QUANTITY);
        assert_eq!(card.set_quantity_input("99999999999999999999"), MAX_QUANTITY);
        assert_eq!(card.set_quantity_input("10000"), MAX_QUANTITY);
        assert_eq!(card.set_quantity_input("9999"), 9_999);
    }

    #[test]
    fn clicking_hands_the_product_id_to_the_caller() {
        let card = ProductCard::new(product(&[], None));
        let mut opened = Vec::new();

        card.click(|id| opened.push(id));

        assert_eq!(opened, vec![card.product().id]);
    }
}
