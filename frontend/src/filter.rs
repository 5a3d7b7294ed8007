//! Property matching for the gallery filter.
//!
//! Everything here is pure: the DOM layer in [`crate::dom::filters`] reads the
//! controls and cards into [`FilterCriteria`] / [`CardFacts`], asks this module
//! which cards stay visible, and writes the answer back.

use crate::types::{CardFacts, FilterCriteria};

/// An inclusive numeric window parsed from a select value such as
/// `500000-1000000` or `1000000+`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(min) = value.strip_suffix('+') {
            return Some(Self {
                min: parse_plain_number(min)?,
                max: None,
            });
        }
        let (min, max) = value.split_once('-')?;
        let min = if min.trim().is_empty() {
            0.0
        } else {
            parse_plain_number(min)?
        };
        let max = parse_plain_number(max)?;
        (min <= max).then_some(Self {
            min,
            max: Some(max),
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

fn parse_plain_number(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// `3` and `3+` both mean "at least three".
pub fn parse_minimum(value: &str) -> Option<u32> {
    value.trim().trim_end_matches('+').trim().parse().ok()
}

/// Parses Brazilian currency text (`R$ 1.250.000,00`) into whole reais.
///
/// Dots are thousands separators and the comma starts the cents, which are
/// dropped. Text without any digit (`Sob consulta`) yields `None`.
pub fn parse_brl(text: &str) -> Option<u64> {
    let integral = text.split(',').next().unwrap_or_default();
    let digits: String = integral.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// First run of digits in `text`, e.g. `"3 quartos"` -> 3.
pub fn first_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// First number in `text` written the pt-BR way: dots group thousands and a
/// comma marks the fraction (`1.250,5 m²` -> 1250.5).
pub fn first_decimal(text: &str) -> Option<f64> {
    let number: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    number.trim_end_matches('.').parse().ok()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_price(filter: &str, card_price: &str) -> bool {
    if filter.trim().is_empty() {
        return true;
    }
    if card_price.trim().is_empty() {
        return false;
    }
    match (NumericRange::parse(filter), parse_brl(card_price)) {
        (Some(range), Some(price)) => range.contains(price as f64),
        _ => true,
    }
}

fn matches_minimum(filter: &str, fact: Option<u32>) -> bool {
    match (parse_minimum(filter), fact) {
        (Some(min), Some(value)) => value >= min,
        _ => true,
    }
}

fn matches_area(filter: &str, fact: Option<f64>) -> bool {
    match (NumericRange::parse(filter), fact) {
        (Some(range), Some(area)) => range.contains(area),
        _ => true,
    }
}

fn matches_amenities(selected: &[String], offered: Option<&[String]>) -> bool {
    let Some(offered) = offered else {
        return true;
    };
    selected.iter().all(|wanted| {
        offered
            .iter()
            .any(|have| have.trim().eq_ignore_ascii_case(wanted.trim()))
    })
}

/// Whether `card` survives every active criterion.
pub fn card_matches(criteria: &FilterCriteria, card: &CardFacts) -> bool {
    contains_ci(&card.property_type, &criteria.property_type)
        && contains_ci(&card.location, &criteria.location)
        && matches_price(&criteria.price, &card.price)
        && matches_minimum(&criteria.bedrooms, card.bedrooms)
        && matches_minimum(&criteria.bathrooms, card.bathrooms)
        && matches_area(&criteria.area, card.area)
        && matches_amenities(&criteria.amenities, card.amenities.as_deref())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// One flag per card, in input order.
    pub visible: Vec<bool>,
    pub visible_count: usize,
}

pub fn evaluate(criteria: &FilterCriteria, cards: &[CardFacts]) -> FilterOutcome {
    let visible: Vec<bool> = cards
        .iter()
        .map(|card| card_matches(criteria, card))
        .collect();
    let visible_count = visible.iter().filter(|shown| **shown).count();
    FilterOutcome {
        visible,
        visible_count,
    }
}

/// The state after "clear filters": no criteria, so every card shows.
pub fn clear(cards: &[CardFacts]) -> (FilterCriteria, FilterOutcome) {
    let criteria = FilterCriteria::default();
    let outcome = evaluate(&criteria, cards);
    (criteria, outcome)
}

/// Portuguese counter text: `1 imóvel encontrado`, `3 imóveis encontrados`.
pub fn results_label(count: usize) -> String {
    if count == 1 {
        format!("{count} imóvel encontrado")
    } else {
        format!("{count} imóveis encontrados")
    }
}

/// Markup written into the results counter.
pub fn counter_html(count: usize) -> String {
    format!(
        "<p class=\"text-white-50\"><i class=\"fas fa-home me-2 luxury-text-gold\"></i>{}</p>",
        results_label(count)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(kind: &str, location: &str, price: &str) -> CardFacts {
        CardFacts {
            property_type: kind.into(),
            location: location.into(),
            price: price.into(),
            ..CardFacts::default()
        }
    }

    fn gallery() -> Vec<CardFacts> {
        vec![
            card("Apartamento", "Jardins, São Paulo", "R$ 750.000"),
            card("Casa", "Alphaville, Barueri", "R$ 1.250.000,00"),
            card("Comercial", "Itaim Bibi, São Paulo", "Sob consulta"),
        ]
    }

    #[test]
    fn empty_criteria_show_everything() {
        let outcome = evaluate(&FilterCriteria::default(), &gallery());
        assert_eq!(outcome.visible, vec![true, true, true]);
        assert_eq!(outcome.visible_count, 3);
    }

    #[test]
    fn type_match_is_case_insensitive_substring() {
        let criteria = FilterCriteria {
            property_type: "casa".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(evaluate(&criteria, &gallery()).visible, vec![false, true, false]);
    }

    #[test]
    fn disjoint_type_hides_all() {
        let criteria = FilterCriteria {
            property_type: "cobertura".into(),
            ..FilterCriteria::default()
        };
        let outcome = evaluate(&criteria, &gallery());
        assert_eq!(outcome.visible_count, 0);
    }

    #[test]
    fn location_and_type_combine() {
        let criteria = FilterCriteria {
            property_type: "comercial".into(),
            location: "são paulo".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(evaluate(&criteria, &gallery()).visible, vec![false, false, true]);
    }

    #[test]
    fn price_range_compares_parsed_amounts() {
        let criteria = FilterCriteria {
            price: "500000-1000000".into(),
            ..FilterCriteria::default()
        };
        // unparseable "Sob consulta" only needs a listed price
        assert_eq!(evaluate(&criteria, &gallery()).visible, vec![true, false, true]);
    }

    #[test]
    fn open_ended_price_range() {
        let criteria = FilterCriteria {
            price: "1000000+".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(evaluate(&criteria, &gallery()).visible, vec![false, true, true]);
    }

    #[test]
    fn active_price_filter_hides_cards_without_price() {
        let criteria = FilterCriteria {
            price: "luxo".into(),
            ..FilterCriteria::default()
        };
        let cards = vec![card("Casa", "Moema", ""), card("Casa", "Moema", "R$ 10")];
        assert_eq!(evaluate(&criteria, &cards).visible, vec![false, true]);
    }

    #[test]
    fn bedroom_minimum_skips_cards_without_data() {
        let criteria = FilterCriteria {
            bedrooms: "3+".into(),
            ..FilterCriteria::default()
        };
        let mut two = card("Casa", "Moema", "R$ 1");
        two.bedrooms = Some(2);
        let mut four = two.clone();
        four.bedrooms = Some(4);
        let unknown = card("Casa", "Moema", "R$ 1");
        assert_eq!(
            evaluate(&criteria, &[two, four, unknown]).visible,
            vec![false, true, true]
        );
    }

    #[test]
    fn area_range_and_amenities() {
        let criteria = FilterCriteria {
            area: "100-200".into(),
            amenities: vec!["piscina".into(), "Academia".into()],
            ..FilterCriteria::default()
        };
        let mut fits = card("Casa", "Moema", "R$ 1");
        fits.area = Some(150.0);
        fits.amenities = Some(vec!["Piscina".into(), "academia".into(), "churrasqueira".into()]);
        let mut lacks_gym = fits.clone();
        lacks_gym.amenities = Some(vec!["piscina".into()]);
        let mut too_big = fits.clone();
        too_big.area = Some(450.0);
        assert_eq!(
            evaluate(&criteria, &[fits, lacks_gym, too_big]).visible,
            vec![true, false, false]
        );
    }

    #[test]
    fn range_parsing() {
        assert_eq!(
            NumericRange::parse("0-500000"),
            Some(NumericRange { min: 0.0, max: Some(500000.0) })
        );
        assert_eq!(
            NumericRange::parse("300+"),
            Some(NumericRange { min: 300.0, max: None })
        );
        assert_eq!(NumericRange::parse("900-100"), None);
        assert_eq!(NumericRange::parse("premium"), None);
    }

    #[test]
    fn brl_parsing() {
        assert_eq!(parse_brl("R$ 1.250.000,00"), Some(1_250_000));
        assert_eq!(parse_brl("R$ 980.000"), Some(980_000));
        assert_eq!(parse_brl("Sob consulta"), None);
    }

    #[test]
    fn fact_extraction_helpers() {
        assert_eq!(first_integer("3 quartos"), Some(3));
        assert_eq!(first_integer("sem dados"), None);
        assert_eq!(first_decimal("120,5 m²"), Some(120.5));
        assert_eq!(first_decimal("1.200 m²"), Some(1200.0));
        assert_eq!(first_decimal("1.250,5 m²"), Some(1250.5));
        assert_eq!(first_decimal("área não informada"), None);
        assert_eq!(parse_minimum("4+"), Some(4));
    }

    #[test]
    fn label_pluralises() {
        assert_eq!(results_label(0), "0 imóveis encontrados");
        assert_eq!(results_label(1), "1 imóvel encontrado");
        assert_eq!(results_label(12), "12 imóveis encontrados");
    }

    #[test]
    fn thousands_grouped_area_passes_large_range() {
        let criteria = FilterCriteria {
            area: "1000+".into(),
            ..FilterCriteria::default()
        };
        let mut large = card("Casa", "Alphaville", "R$ 1");
        large.area = first_decimal("1.200 m²");
        let mut small = large.clone();
        small.area = first_decimal("120,5 m²");
        assert_eq!(evaluate(&criteria, &[large, small]).visible, vec![true, false]);
    }

    #[test]
    fn clearing_after_a_narrow_filter_shows_every_card() {
        let narrowed = FilterCriteria {
            property_type: "casa".into(),
            price: "1000000+".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(evaluate(&narrowed, &gallery()).visible_count, 1);

        let (criteria, outcome) = clear(&gallery());
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(outcome.visible, vec![true, true, true]);
        assert_eq!(outcome.visible_count, gallery().len());
        assert!(counter_html(outcome.visible_count).contains("3 imóveis encontrados"));
    }
}
