//! Turkish-to-ASCII folding for outputs whose character set is limited:
//! the built-in PDF fonts and download filenames.

const TABLE: &[(char, char)] = &[
    ('ğ', 'g'),
    ('Ğ', 'G'),
    ('ş', 's'),
    ('Ş', 'S'),
    ('İ', 'I'),
    ('ı', 'i'),
    ('ç', 'c'),
    ('Ç', 'C'),
    ('ö', 'o'),
    ('Ö', 'O'),
    ('ü', 'u'),
    ('Ü', 'U'),
];

/// Replaces Turkish letters with their ASCII equivalents; everything else
/// passes through untouched.
pub fn fold(text: &str) -> String {
    text.chars()
        .map(|c| {
            TABLE
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

/// Filename-safe form: folded, with runs of non-alphanumerics collapsed to a
/// single underscore and no leading/trailing underscore.
pub fn filename_slug(text: &str) -> String {
    let folded = fold(text);
    let mut slug = String::with_capacity(folded.len());
    let mut gap = false;
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('_');
            }
            gap = false;
            slug.push(c);
        } else {
            gap = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_turkish_letters() {
        assert_eq!(fold("Ayşe Yılmaz"), "Ayse Yilmaz");
        assert_eq!(fold("ĞÜŞİÖÇ ğüşıöç"), "GUSIOC gusioc");
    }

    #[test]
    fn leaves_ascii_untouched() {
        assert_eq!(fold("Leave Request 2025"), "Leave Request 2025");
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(filename_slug("Ayşe  Yılmaz"), "Ayse_Yilmaz");
        assert_eq!(filename_slug("Yıllık İzin"), "Yillik_Izin");
        assert_eq!(filename_slug("  -- "), "");
    }
}
