//! Positional `{n}` substitution

use crate::Param;

/// Replace every `{n}` in `template` with `params[n]`.
///
/// Placeholders whose index has no matching param, and braces that do not
/// enclose a plain decimal index, are copied through verbatim.
pub fn substitute(template: &str, params: &[Param]) -> String {
    if params.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let inner = &after[..close];
        let is_index = !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit());
        let param = if is_index {
            inner.parse::<usize>().ok().and_then(|index| params.get(index))
        } else {
            None
        };

        match param {
            Some(param) => out.push_str(&param.to_string()),
            None => {
                out.push('{');
                out.push_str(inner);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use proptest::prelude::*;

    #[test]
    fn test_single_placeholder() {
        assert_eq!(
            substitute("Response Message {0}", &params!["Two"]),
            "Response Message Two"
        );
    }

    #[test]
    fn test_reordered_and_repeated_placeholders() {
        assert_eq!(
            substitute("{1} before {0}, then {1} again", &params!["a", "b"]),
            "b before a, then b again"
        );
    }

    #[test]
    fn test_missing_index_is_kept() {
        assert_eq!(substitute("{0} and {2}", &params!["x"]), "x and {2}");
    }

    #[test]
    fn test_non_numeric_braces_are_kept() {
        assert_eq!(
            substitute("{name} {+1} {0}", &params!["v"]),
            "{name} {+1} v"
        );
    }

    #[test]
    fn test_unterminated_brace() {
        assert_eq!(substitute("value {0", &params!["v"]), "value {0");
    }

    #[test]
    fn test_no_params_returns_template() {
        assert_eq!(substitute("Total {0}", &[]), "Total {0}");
    }

    proptest! {
        #[test]
        fn templates_without_braces_are_untouched(template in "[^{}]*", value in "[a-z]{0,8}") {
            let params = params![value];
            prop_assert_eq!(substitute(&template, &params), template);
        }

        #[test]
        fn placeholder_is_replaced_by_param(prefix in "[^{}]*", value in "[^{}]*") {
            let template = format!("{prefix}{{0}}");
            let params = params![value.clone()];
            prop_assert_eq!(substitute(&template, &params), format!("{prefix}{value}"));
        }
    }
}
