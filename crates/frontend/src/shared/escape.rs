//! HTML kaçış yardımcıları.
//!
//! Hazır markup'a giren, depodan gelen her metin buradan geçer.

/// `& < > " '` karakterlerini isimli HTML varlıklarına çevirir.
/// `&` her zaman ilk sırada işlenir.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Tırnaklı HTML öznitelikleri için: `escape_html` + backtick.
pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('`', "&#96;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("<b>&'\""), "&lt;b&gt;&amp;&#39;&quot;");
    }

    #[test]
    fn ampersand_is_escaped_first() {
        // `&lt;` girdisi çift kaçışla `&amp;lt;` olmalı
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn attr_additionally_escapes_backtick() {
        assert_eq!(escape_attr("`x`"), "&#96;x&#96;");
        assert_eq!(escape_attr("<`"), "&lt;&#96;");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_attr(""), "");
    }
}
