//! Integration tests for the catalog implementations

use msgloc_catalog::{
    params, CatalogError, FluentCatalog, FluentResource, Locale, MessageCatalog, StaticCatalog,
};
use msgloc_common::test_utils::init_test_logging;
use std::sync::Arc;
use std::thread;

fn locale(code: &str) -> Locale {
    Locale::from_code(code).unwrap()
}

/// Build a Fluent catalog with English and Spanish bundles
fn create_fluent_catalog() -> FluentCatalog {
    let mut catalog = FluentCatalog::new()
        .with_name("responses")
        .with_default_locale(locale("en-US"));

    catalog
        .add_resource(
            &locale("en-US"),
            FluentResource::try_new(
                r#"
hello = Hello!
welcome = Welcome, {$arg0}!
only-english = Only in English
item-count = You have {$arg0 ->
    [one] {$arg0} item
   *[other] {$arg0} items
}
"#
                .to_string(),
            )
            .unwrap(),
        )
        .unwrap();

    catalog
        .add_resource(
            &locale("es"),
            FluentResource::try_new(
                r#"
hello = ¡Hola!
welcome = ¡Bienvenido, {$arg0}!
"#
                .to_string(),
            )
            .unwrap(),
        )
        .unwrap();

    catalog
}

#[test]
fn test_basic_message_retrieval() {
    init_test_logging();
    let catalog = create_fluent_catalog();

    let message = catalog.lookup("hello", &[], &locale("en-US")).unwrap();
    assert_eq!(message, "Hello!");
}

#[test]
fn test_message_with_arguments() {
    let catalog = create_fluent_catalog();

    let message = catalog
        .lookup("welcome", &params!["Alice"], &locale("en-US"))
        .unwrap();
    assert_eq!(message, "Welcome, Alice!");
}

#[test]
fn test_pluralization_through_positional_arg() {
    let catalog = create_fluent_catalog();

    let one = catalog
        .lookup("item-count", &params![1], &locale("en-US"))
        .unwrap();
    assert_eq!(one, "You have 1 item");

    let many = catalog
        .lookup("item-count", &params![5], &locale("en-US"))
        .unwrap();
    assert_eq!(many, "You have 5 items");
}

#[test]
fn test_region_falls_back_to_language_bundle() {
    let catalog = create_fluent_catalog();

    let message = catalog
        .lookup("welcome", &params!["Ana"], &locale("es-MX"))
        .unwrap();
    assert_eq!(message, "¡Bienvenido, Ana!");
}

#[test]
fn test_fallback_to_default_locale() {
    let catalog = create_fluent_catalog();

    let message = catalog
        .lookup("only-english", &[], &locale("es"))
        .unwrap();
    assert_eq!(message, "Only in English");

    let message = catalog.lookup("hello", &[], &locale("fr-FR")).unwrap();
    assert_eq!(message, "Hello!");
}

#[test]
fn test_message_not_found() {
    let catalog = create_fluent_catalog();

    let err = catalog
        .lookup("nonexistent", &[], &locale("en-US"))
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::Unresolvable {
            key: "nonexistent".to_string(),
            locale: "en-US".to_string(),
        }
    );
}

#[test]
fn test_contains() {
    let catalog = create_fluent_catalog();

    assert!(catalog.contains("hello", &locale("es")));
    assert!(!catalog.contains("nonexistent", &locale("en-US")));
    assert_eq!(catalog.available_locales().len(), 2);
}

#[test]
fn test_static_and_fluent_agree_behind_trait_objects() {
    let mut static_catalog = StaticCatalog::new();
    static_catalog.add_message("welcome", &locale("en-US"), "Welcome, {0}!");

    let catalogs: Vec<Arc<dyn MessageCatalog>> =
        vec![Arc::new(static_catalog), Arc::new(create_fluent_catalog())];

    for catalog in &catalogs {
        let message = catalog
            .lookup("welcome", &params!["Bob"], &locale("en-US"))
            .unwrap();
        assert_eq!(message, "Welcome, Bob!", "catalog {}", catalog.name());
    }
}

#[test]
fn test_catalog_is_shared_across_threads() {
    let catalog: Arc<dyn MessageCatalog> = Arc::new(create_fluent_catalog());

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                catalog
                    .lookup("item-count", &params![n], &locale("en-US"))
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[1], "You have 1 item");
    assert_eq!(results[3], "You have 3 items");
}
