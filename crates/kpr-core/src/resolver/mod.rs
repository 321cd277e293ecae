//! Tax-ID resolution for records whose letter did not state a usable ИНН.

mod yandex;

pub use yandex::YandexResolver;

/// Narrow seam for looking up a tax ID by organization name.
///
/// Implementations are best-effort: a lookup that fails for any reason
/// reports `None` and must never surface a hard error to the caller.
pub trait InnResolver {
    /// Resolve a tax ID for the named organization, if one can be found.
    fn resolve(&self, organization_name: &str) -> Option<String>;
}

/// Resolver that never finds anything; used when lookup is disabled.
pub struct NoopResolver;

impl InnResolver for NoopResolver {
    fn resolve(&self, _organization_name: &str) -> Option<String> {
        None
    }
}

/// Whether an extracted tax ID should be re-resolved.
///
/// An empty ID is always unresolved; an ID equal to the configured
/// placeholder (e.g. the buyer's own ИНН printed on every letter) is treated
/// as not actually found.
pub fn needs_resolution(inn: &str, placeholder: &str) -> bool {
    inn.is_empty() || inn == placeholder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_resolution() {
        assert!(needs_resolution("", ""));
        assert!(needs_resolution("7707083893", "7707083893"));
        assert!(!needs_resolution("7707083893", ""));
        assert!(!needs_resolution("7707083893", "5029069967"));
    }

    #[test]
    fn test_noop_resolver() {
        assert_eq!(NoopResolver.resolve("ООО «Ромашка»"), None);
    }
}
