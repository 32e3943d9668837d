use crate::locale::Locale;

/// Heading decoration policy for one wiki
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// `== Title ==` instead of `==Title==`
    pub space_in_headings: bool,
    pub empty_line_after_headings: bool,
    /// Never applied to the first line of a page
    pub empty_line_before_headings: bool,
}

pub const STYLE_JA: Style = Style {
    space_in_headings: false,
    empty_line_after_headings: false,
    empty_line_before_headings: false,
};

pub const STYLE_EN: Style = Style {
    space_in_headings: false,
    empty_line_after_headings: false,
    empty_line_before_headings: true,
};

impl Style {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => STYLE_EN,
            Locale::Ja => STYLE_JA,
        }
    }

    /// Resolve a raw locale code; unknown codes get the Japanese style
    pub fn for_code(code: &str) -> Self {
        Self::for_locale(Locale::from_code(code))
    }
}

impl Default for Style {
    fn default() -> Self {
        STYLE_JA
    }
}
