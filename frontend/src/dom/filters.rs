use std::str::FromStr;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use super::{document, expose_global, listen, query, query_all, set_style};
use crate::error::UiResult;
use crate::filter::{clear, counter_html, evaluate, first_decimal, first_integer};
use crate::types::{CardFacts, FilterCriteria};

const TYPE_FILTER: &str = "typeFilter";
const LOCATION_FILTER: &str = "locationFilter";
const PRICE_FILTER: &str = "priceFilter";
const BEDROOMS_FILTER: &str = "bedroomsFilter";
const BATHROOMS_FILTER: &str = "bathroomsFilter";
const AREA_FILTER: &str = "areaFilter";

const FILTER_IDS: [&str; 6] = [
    TYPE_FILTER,
    LOCATION_FILTER,
    PRICE_FILTER,
    BEDROOMS_FILTER,
    BATHROOMS_FILTER,
    AREA_FILTER,
];

const AMENITY_SELECTOR: &str = ".amenities-checkboxes input[type=\"checkbox\"]";
const CARD_SELECTOR: &str = ".luxury-property-card";
const CARD_CONTAINER_SELECTOR: &str = ".col-lg-4, .col-md-6";
const COUNTER_SELECTOR: &str = ".results-counter";
const GALLERY_SELECTOR: &str = ".py-5 .container";

const SHOW_ADVANCED_LABEL: &str = "<i class=\"fas fa-cog me-2\"></i>Filtros Avançados";
const HIDE_ADVANCED_LABEL: &str = "<i class=\"fas fa-cog me-2\"></i>Ocultar Filtros Avançados";

pub fn init() -> UiResult<()> {
    for selector in [".apply-filters-btn", "[data-action=\"apply-filters\"]"] {
        for button in query_all(selector)? {
            listen(&button, "click", |_| run(apply_filters))?;
        }
    }
    for selector in [".clear-filters-btn", "[data-action=\"clear-filters\"]"] {
        for button in query_all(selector)? {
            listen(&button, "click", |_| run(clear_filters))?;
        }
    }
    let document = document()?;
    for id in FILTER_IDS {
        if let Some(control) = document.get_element_by_id(id) {
            listen(&control, "change", |_| run(apply_filters))?;
        }
    }
    for checkbox in query_all(AMENITY_SELECTOR)? {
        listen(&checkbox, "change", |_| run(apply_filters))?;
    }

    expose_global("applyFilters", || run(apply_filters))?;
    expose_global("clearFilters", || run(clear_filters))?;
    expose_global("toggleAdvancedFilters", || run(toggle_advanced_filters))?;
    Ok(())
}

fn run<T>(action: fn() -> UiResult<T>) {
    if let Err(err) = action() {
        tracing::warn!("filter action failed: {err}");
    }
}

fn control_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    String::new()
}

fn reset_control(document: &Document, id: &str) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value("");
    } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    }
}

fn amenity_boxes() -> UiResult<Vec<HtmlInputElement>> {
    Ok(query_all(AMENITY_SELECTOR)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

pub fn read_criteria(document: &Document) -> UiResult<FilterCriteria> {
    Ok(FilterCriteria {
        property_type: control_value(document, TYPE_FILTER),
        location: control_value(document, LOCATION_FILTER),
        price: control_value(document, PRICE_FILTER),
        bedrooms: control_value(document, BEDROOMS_FILTER),
        bathrooms: control_value(document, BATHROOMS_FILTER),
        area: control_value(document, AREA_FILTER),
        amenities: amenity_boxes()?
            .into_iter()
            .filter(|checkbox| checkbox.checked())
            .map(|checkbox| checkbox.value())
            .collect(),
    })
}

fn child_text(card: &Element, selector: &str) -> Option<String> {
    card.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
}

/// Data attribute first, then a labelled child element.
/// `data-*` attributes hold plain machine numbers (`1200.5`); the visible
/// child text is pt-BR formatted and goes through `parse_text`.
fn numeric_fact<T: FromStr>(
    card: &Element,
    attr: &str,
    selector: &str,
    parse_text: fn(&str) -> Option<T>,
) -> Option<T> {
    card.get_attribute(attr)
        .and_then(|value| value.trim().parse().ok())
        .or_else(|| child_text(card, selector).and_then(|text| parse_text(&text)))
}

pub fn read_card(card: &Element) -> CardFacts {
    CardFacts {
        property_type: child_text(card, ".property-type-badge").unwrap_or_default(),
        location: child_text(card, ".property-location").unwrap_or_default(),
        price: child_text(card, ".property-price").unwrap_or_default(),
        bedrooms: numeric_fact(card, "data-bedrooms", ".property-bedrooms", first_integer),
        bathrooms: numeric_fact(card, "data-bathrooms", ".property-bathrooms", first_integer),
        area: numeric_fact(card, "data-area", ".property-area", first_decimal),
        amenities: card.get_attribute("data-amenities").map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        }),
    }
}

/// The grid cell holding a card; cards outside the grid toggle themselves.
fn card_container(card: &Element) -> Element {
    card.closest(CARD_CONTAINER_SELECTOR)
        .ok()
        .flatten()
        .unwrap_or_else(|| card.clone())
}

fn set_card_visible(card: &Element, visible: bool) -> UiResult<()> {
    set_style(
        &card_container(card),
        "display",
        if visible { "block" } else { "none" },
    )
}

/// Shows the cards matching the current controls and returns how many remain.
pub fn apply_filters() -> UiResult<usize> {
    let document = document()?;
    let criteria = read_criteria(&document)?;
    let cards = query_all(CARD_SELECTOR)?;
    let facts: Vec<CardFacts> = cards.iter().map(read_card).collect();
    let outcome = evaluate(&criteria, &facts);

    for (card, visible) in cards.iter().zip(&outcome.visible) {
        set_card_visible(card, *visible)?;
    }
    tracing::debug!(
        "filters {:?} matched {}/{} cards",
        criteria,
        outcome.visible_count,
        cards.len()
    );
    update_results_count(outcome.visible_count)?;
    Ok(outcome.visible_count)
}

pub fn update_results_count(count: usize) -> UiResult<()> {
    let counter = match query(COUNTER_SELECTOR)? {
        Some(counter) => counter,
        None => {
            let Some(gallery) = query(GALLERY_SELECTOR)? else {
                tracing::debug!("no gallery container for the results counter");
                return Ok(());
            };
            let counter = document()?.create_element("div")?;
            counter.set_class_name("results-counter text-center mb-4");
            gallery.insert_before(&counter, gallery.first_child().as_ref())?;
            counter
        }
    };
    counter.set_inner_html(&counter_html(count));
    Ok(())
}

/// Resets every control, shows every card and returns the total.
pub fn clear_filters() -> UiResult<usize> {
    let document = document()?;
    for id in FILTER_IDS {
        reset_control(&document, id);
    }
    for checkbox in amenity_boxes()? {
        checkbox.set_checked(false);
    }
    let cards = query_all(CARD_SELECTOR)?;
    let facts: Vec<CardFacts> = cards.iter().map(read_card).collect();
    let (_, outcome) = clear(&facts);
    for (card, visible) in cards.iter().zip(&outcome.visible) {
        set_card_visible(card, *visible)?;
    }
    update_results_count(outcome.visible_count)?;
    Ok(outcome.visible_count)
}

pub fn toggle_advanced_filters() -> UiResult<()> {
    let Some(panel) = document()?
        .get_element_by_id("advancedFilters")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let style = panel.style();
    let opening = style.get_property_value("display")? == "none";
    style.set_property("display", if opening { "block" } else { "none" })?;

    if let Some(toggle) = query(".advanced-filters-toggle button")? {
        toggle.set_inner_html(if opening {
            HIDE_ADVANCED_LABEL
        } else {
            SHOW_ADVANCED_LABEL
        });
    }
    Ok(())
}
