mod error;
mod grammar;
mod parser;

pub use error::SyntaxError;
pub use parser::ParsedRule;

/// Parse plural rule text into a [`ParsedRule`].
///
/// The empty string is a valid rule; it matches every number.
///
/// # Errors
///
/// Returns [`SyntaxError`] if the input is not a valid plural rule. No partial
/// result is produced.
pub fn parse(input: &str) -> Result<ParsedRule, SyntaxError> {
    use winnow::Parser;
    match grammar::plural_rule.parse(input) {
        Ok(parsed) => {
            tracing::debug!(
                len = input.len(),
                relations = parsed.condition.relation_count(),
                samples = parsed.samples.len(),
                "parsed plural rule"
            );
            Ok(parsed)
        }
        Err(e) => {
            let message = describe(input, e.offset(), &e.inner().to_string());
            let err = SyntaxError::new(e.offset(), message);
            tracing::debug!(offset = err.position(), "rejected plural rule");
            Err(err)
        }
    }
}

fn describe(input: &str, offset: usize, context: &str) -> String {
    let context = context.trim().replace('\n', "; ");
    let mut message = if context.is_empty() {
        "unexpected input".to_owned()
    } else {
        context
    };
    match input.get(offset..).and_then(|rest| rest.split_whitespace().next()) {
        Some(token) => message.push_str(&format!(" at '{token}'")),
        None => message.push_str(" at end of rule"),
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_offending_token() {
        assert_eq!(describe("n ??", 2, ""), "unexpected input at '??'");
        assert_eq!(
            describe("n is", 4, "expected non-negative integer"),
            "expected non-negative integer at end of rule"
        );
        assert_eq!(
            describe("x is 1", 0, "invalid range\nexpected integer"),
            "invalid range; expected integer at 'x'"
        );
    }

    #[test]
    fn parse_failure_has_no_partial_result() {
        let err = parse("n is 1 and").unwrap_err();
        assert!(err.position() <= "n is 1 and".len());
    }
}
