// ==========================================
// Internationalization (i18n) module
// ==========================================
// Uses the rust-i18n library
// Supported locales: Czech ("cs") and English ("en")
// ==========================================
// Note: the rust_i18n::i18n! macro is initialized in lib.rs
// ==========================================

/// Current locale.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Set the locale.
///
/// # Arguments
/// - locale: locale code ("cs" or "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a message (no arguments).
///
/// # Example
/// ```no_run
/// use warehouse_kpi::i18n::t;
/// let msg = t("report.totals_header");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message in an explicit locale, ignoring the global one.
///
/// The printable report is always rendered in Czech regardless of the
/// UI locale, so the report layer resolves its labels through this.
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// Translate a message with `%{name}` placeholder substitution.
///
/// # Example
/// ```no_run
/// use warehouse_kpi::i18n::t_with_args;
/// let msg = t_with_args("error.batch_failed", &[("detail", "bad file")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    substitute(rust_i18n::t!(key).to_string(), args)
}

/// Locale-pinned variant of [`t_with_args`].
pub fn t_in_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    substitute(rust_i18n::t!(key, locale = locale).to_string(), args)
}

fn substitute(mut text: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        text = text.replace(&placeholder, v);
    }
    text
}
