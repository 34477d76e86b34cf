//! Property tests for entity resolution.
//!
//! This test suite covers:
//! - Resolving an entity twice yields the same message
//! - Entities without a code pass through unchanged
//! - Default payloads never carry a status

use msgloc::{
    ApiException, ApiResponse, CatalogSet, Locale, Localizable, Localizer, StaticCatalog,
    StatusCode,
};
use proptest::prelude::*;
use std::sync::Arc;

fn localizer_with(code: &str, template: &str) -> Localizer {
    let mut catalog = StaticCatalog::new();
    catalog.add_message(code, &Locale::english(), template);
    Localizer::new(CatalogSet::single(Arc::new(catalog)))
}

proptest! {
    #[test]
    fn resolution_is_idempotent(
        code in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}",
        template in "[^{}]{0,40}",
        param in "[a-zA-Z0-9 ]{0,12}",
    ) {
        let localizer = localizer_with(&code, &format!("{template}{{0}}"));
        let locale = Locale::english();

        let once = localizer
            .resolve_in(&locale, ApiResponse::new(code.clone()).with_param(param.clone()))
            .unwrap();
        let twice = localizer.resolve_in(&locale, once.clone()).unwrap();

        let expected = format!("{template}{param}");
        prop_assert_eq!(once.message(), Some(expected.as_str()));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn uncoded_entities_pass_through(id in any::<u32>(), detail in "[a-z]{0,10}") {
        let localizer = localizer_with("unused", "unused");
        let locale = Locale::english();

        let response = ApiResponse::uncoded(Some(id));
        let resolved = localizer.resolve_in(&locale, response.clone()).unwrap();
        prop_assert_eq!(resolved, response);

        let ex = ApiException::uncoded().with_detail("note", detail);
        let resolved = localizer.resolve_in(&locale, ex.clone()).unwrap();
        prop_assert_eq!(resolved, ex);
    }

    #[test]
    fn default_payload_has_no_status(status in 400_u16..600) {
        let localizer = localizer_with("unused", "unused");
        let status = StatusCode::from_u16(status).unwrap();

        let payload = localizer
            .error_response_in(&Locale::english(), &ApiException::uncoded(), status)
            .unwrap();
        prop_assert_eq!(payload.status(), None);
        prop_assert_eq!(payload.reason(), None);
    }
}
