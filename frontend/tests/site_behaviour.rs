use maeva_frontend::filter::{clear, evaluate, results_label};
use maeva_frontend::notification::NotificationCenter;
use maeva_frontend::share::{ShareAction, ShareMenu, ShareTarget};
use maeva_frontend::validation::{format_phone, validate, FieldKind, ValidationError};
use maeva_frontend::{CardFacts, FilterCriteria, NotificationKind, NotificationRequest, SharePayload};

fn listing() -> Vec<CardFacts> {
    [
        ("Apartamento", "Vila Nova Conceição", "R$ 2.400.000"),
        ("Casa", "Alphaville", "R$ 3.100.000"),
        ("Cobertura", "Jardins", "R$ 5.800.000,00"),
        ("Comercial", "Faria Lima", "Sob consulta"),
    ]
    .into_iter()
    .map(|(kind, location, price)| CardFacts {
        property_type: kind.to_string(),
        location: location.to_string(),
        price: price.to_string(),
        ..CardFacts::default()
    })
    .collect()
}

#[test]
fn no_active_filter_shows_every_card() {
    let cards = listing();
    let outcome = evaluate(&FilterCriteria::default(), &cards);
    assert!(outcome.visible.iter().all(|shown| *shown));
    assert_eq!(outcome.visible_count, cards.len());
    assert_eq!(results_label(outcome.visible_count), "4 imóveis encontrados");
}

#[test]
fn unknown_type_hides_every_card() {
    let criteria = FilterCriteria {
        property_type: "terreno".into(),
        ..FilterCriteria::default()
    };
    let outcome = evaluate(&criteria, &listing());
    assert!(outcome.visible.iter().all(|shown| !*shown));
    assert_eq!(outcome.visible_count, 0);
}

#[test]
fn cleared_criteria_restore_full_count() {
    let cards = listing();
    let narrowed = FilterCriteria {
        location: "jardins".into(),
        price: "5000000+".into(),
        amenities: vec!["piscina".into()],
        ..FilterCriteria::default()
    };
    assert_eq!(evaluate(&narrowed, &cards).visible_count, 1);

    let (cleared, outcome) = clear(&cards);
    assert_eq!(cleared, FilterCriteria::default());
    assert_eq!(outcome.visible_count, cards.len());
}

#[test]
fn email_and_phone_rules() {
    assert!(validate(FieldKind::Email, "a@b.com", true).is_ok());
    let err = validate(FieldKind::Email, "not-an-email", true).unwrap_err();
    assert_eq!(err.to_string(), "Por favor, insira um e-mail válido.");
    assert_eq!(
        validate(FieldKind::Email, "", true),
        Err(ValidationError::Required)
    );

    let mobile = format_phone("11987654321");
    assert_eq!(mobile, "(11) 98765-4321");
    assert!(validate(FieldKind::Tel, &mobile, true).is_ok());
    assert_eq!(format_phone("1187654321"), "(11) 8765-4321");
}

#[test]
fn back_to_back_notifications_leave_one() {
    let mut center = NotificationCenter::default();
    let first = center.show(NotificationRequest::new("Texto copiado!", NotificationKind::Success));
    let second = center.show(NotificationRequest::new("Bem-vindo", NotificationKind::Info));

    assert!(!center.is_current(first));
    assert!(center.is_current(second));
    // the first toast's pending removal must not clear the second
    assert!(!center.begin_exit(first));
    assert!(!center.remove(first));
    assert_eq!(center.current().map(|n| n.message.as_str()), Some("Bem-vindo"));
}

#[test]
fn fallback_menu_offers_four_options_and_whatsapp_link() {
    let payload = SharePayload::new("Casa X", "http://example.com");
    let menu = ShareMenu::new(&payload, "http://example.com");
    assert_eq!(menu.options.len(), 4);

    let ShareAction::OpenUrl(url) = menu.action_for(ShareTarget::WhatsApp) else {
        panic!("whatsapp opens a link");
    };
    let encoded = urlencoding::encode(&payload.message()).into_owned();
    assert_eq!(url, format!("https://wa.me/?text={encoded}"));
}
