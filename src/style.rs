// Inline-style value builders. Kept free of web-sys so host tests can include them.

#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", v)
}

#[inline]
pub fn percent(v: f64) -> String {
    format!("{}%", v)
}

#[inline]
pub fn translate_x(v: f64) -> String {
    format!("translateX({}px)", v)
}

#[inline]
pub fn translate_y(v: f64) -> String {
    format!("translateY({}px)", v)
}

#[inline]
pub fn number(v: f64) -> String {
    format!("{}", v)
}

/// `"data-fx-particle-count"` for config key `"particle-count"`.
#[inline]
pub fn config_attr(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}

/// `"#about"` -> `Some("about")`; bare `"#"` and non-fragment hrefs -> `None`.
#[inline]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// `true` when a class list string names any of `classes`.
pub fn has_any_class(class_name: &str, classes: &[&str]) -> bool {
    class_name
        .split_whitespace()
        .any(|c| classes.iter().any(|want| *want == c))
}
