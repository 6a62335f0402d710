use justconfig::error::ConfigError;
use justconfig::item::{MapAction, StringItem};

/// Strips one pair of surrounding quotes from string settings, so that
/// `products_path = "data/products.csv"` and `products_path = data/products.csv`
/// mean the same thing.
pub trait Unquote
where
    Self: Sized,
{
    fn unquote(self) -> Result<StringItem, ConfigError>;
}

impl Unquote for Result<StringItem, ConfigError> {
    fn unquote(self) -> Result<StringItem, ConfigError> {
        self?.map(|raw| match strip_quotes(raw.trim()) {
            Some(inner) => MapAction::Replace(vec![inner.to_owned()]),
            None => MapAction::Keep,
        })
    }
}

fn strip_quotes(value: &str) -> Option<&str> {
    ['"', '\''].iter().find_map(|&quote| {
        value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}

#[cfg(test)]
mod config_processors_test {
    use super::*;

    #[test]
    fn should_strip_double_and_single_quotes() {
        assert_eq!(Some("abc"), strip_quotes("\"abc\""));
        assert_eq!(Some("a b"), strip_quotes("'a b'"));
    }

    #[test]
    fn should_leave_unbalanced_values_alone() {
        assert_eq!(None, strip_quotes("abc"));
        assert_eq!(None, strip_quotes("\"abc'"));
    }
}
