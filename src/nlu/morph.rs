//! Citation-form lookup for school subject words.
//!
//! Subjects arrive in whatever grammatical case the sentence put them in
//! ("по математике", "алгебру", "русскому языку"). The store wants one
//! spelling per subject, so each token is reduced to its dictionary form
//! before storage and lookup. The vocabulary is a few dozen school
//! subjects, so this is a curated lexicon, not a stemmer; unknown tokens
//! pass through untouched.

/// Subject stems paired with their citation forms. A token matches an
/// entry when it equals the citation form, or when it starts with the
/// stem and the remainder is a known inflectional ending.
const STEM_LEXICON: &[(&str, &str)] = &[
    ("алгебр", "алгебра"),
    ("английск", "английский"),
    ("астрономи", "астрономия"),
    ("биологи", "биология"),
    ("географи", "география"),
    ("геометри", "геометрия"),
    ("информатик", "информатика"),
    ("испанск", "испанский"),
    ("истори", "история"),
    ("китайск", "китайский"),
    ("литератур", "литература"),
    ("математик", "математика"),
    ("музык", "музыка"),
    ("немецк", "немецкий"),
    ("обществознани", "обществознание"),
    ("природоведени", "природоведение"),
    ("русск", "русский"),
    ("технологи", "технология"),
    ("физик", "физика"),
    ("физкультур", "физкультура"),
    ("французск", "французский"),
    ("хими", "химия"),
    ("черчени", "черчение"),
    ("чтени", "чтение"),
    ("язык", "язык"),
];

/// Case and number endings of Russian nouns and adjectives, covering the
/// forms subjects take in chat.
const ENDINGS: &[&str] = &[
    "а", "я", "о", "е", "и", "ы", "у", "ю", "ой", "ей", "ом", "ем", "ам",
    "ям", "ах", "ях", "ами", "ями", "ии", "ию", "ия", "ие", "ого", "его",
    "ому", "ему", "ый", "ий", "ая", "яя", "ую", "юю", "ое", "ее", "ых",
    "их", "ым", "им",
];

/// Reduce one lowercase token to its citation form. Tokens outside the
/// lexicon come back unchanged.
pub fn citation_form(token: &str) -> &str {
    for &(stem, citation) in STEM_LEXICON {
        if token == citation {
            return citation;
        }
        if let Some(rest) = token.strip_prefix(stem) {
            if !rest.is_empty() && ENDINGS.contains(&rest) {
                return citation;
            }
        }
    }
    token
}
