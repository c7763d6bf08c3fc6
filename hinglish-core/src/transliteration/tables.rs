//! Devanagari to Roman lookup tables
//!
//! Every entry is an `(ITRANS, IAST)` pair.

pub(crate) const VIRAMA: char = '\u{094D}';
pub(crate) const NUKTA: char = '\u{093C}';

type Pair = (&'static str, &'static str);

/// Consonants, carrying an inherent vowel
pub(crate) fn consonant(ch: char) -> Option<Pair> {
    let pair = match ch {
        'क' => ("k", "k"),
        'ख' => ("kh", "kh"),
        'ग' => ("g", "g"),
        'घ' => ("gh", "gh"),
        'ङ' => ("~N", "ṅ"),
        'च' => ("ch", "c"),
        'छ' => ("Ch", "ch"),
        'ज' => ("j", "j"),
        'झ' => ("jh", "jh"),
        'ञ' => ("~n", "ñ"),
        'ट' => ("T", "ṭ"),
        'ठ' => ("Th", "ṭh"),
        'ड' => ("D", "ḍ"),
        'ढ' => ("Dh", "ḍh"),
        'ण' => ("N", "ṇ"),
        'त' => ("t", "t"),
        'थ' => ("th", "th"),
        'द' => ("d", "d"),
        'ध' => ("dh", "dh"),
        'न' => ("n", "n"),
        '\u{0929}' => ("n", "ṉ"),
        'प' => ("p", "p"),
        'फ' => ("ph", "ph"),
        'ब' => ("b", "b"),
        'भ' => ("bh", "bh"),
        'म' => ("m", "m"),
        'य' => ("y", "y"),
        'र' => ("r", "r"),
        '\u{0931}' => ("r", "ṟ"),
        'ल' => ("l", "l"),
        'ळ' => ("L", "ḷ"),
        '\u{0934}' => ("zh", "ḻ"),
        'व' => ("v", "v"),
        'श' => ("sh", "ś"),
        'ष' => ("Sh", "ṣ"),
        'स' => ("s", "s"),
        'ह' => ("h", "h"),
        // Precomposed nukta forms
        '\u{0958}' => ("q", "q"),
        '\u{0959}' => ("K", "ḵh"),
        '\u{095A}' => ("G", "ġ"),
        '\u{095B}' => ("z", "z"),
        '\u{095C}' => (".D", "ṛ"),
        '\u{095D}' => (".Dh", "ṛh"),
        '\u{095E}' => ("f", "f"),
        '\u{095F}' => ("Y", "ẏ"),
        _ => return None,
    };
    Some(pair)
}

/// Consonant followed by a combining nukta (U+093C)
pub(crate) fn nukta_form(base: char) -> Option<Pair> {
    let composed = match base {
        'क' => '\u{0958}',
        'ख' => '\u{0959}',
        'ग' => '\u{095A}',
        'ज' => '\u{095B}',
        'ड' => '\u{095C}',
        'ढ' => '\u{095D}',
        'फ' => '\u{095E}',
        'य' => '\u{095F}',
        _ => return None,
    };
    consonant(composed)
}

/// Independent vowels
pub(crate) fn vowel(ch: char) -> Option<Pair> {
    let pair = match ch {
        'अ' => ("a", "a"),
        'आ' => ("A", "ā"),
        'इ' => ("i", "i"),
        'ई' => ("I", "ī"),
        'उ' => ("u", "u"),
        'ऊ' => ("U", "ū"),
        'ऋ' => ("RRi", "ṛ"),
        'ॠ' => ("RRI", "ṝ"),
        'ऌ' => ("LLi", "ḷ"),
        'ॡ' => ("LLI", "ḹ"),
        'ऍ' | 'ऎ' | 'ए' => ("e", "e"),
        'ऐ' => ("ai", "ai"),
        'ऑ' | 'ऒ' | 'ओ' => ("o", "o"),
        'औ' => ("au", "au"),
        _ => return None,
    };
    Some(pair)
}

/// Dependent vowel signs (matras), replacing the inherent vowel
pub(crate) fn vowel_sign(ch: char) -> Option<Pair> {
    let pair = match ch {
        'ा' => ("A", "ā"),
        'ि' => ("i", "i"),
        'ी' => ("I", "ī"),
        'ु' => ("u", "u"),
        'ू' => ("U", "ū"),
        'ृ' => ("RRi", "ṛ"),
        'ॄ' => ("RRI", "ṝ"),
        'ॢ' => ("LLi", "ḷ"),
        'ॣ' => ("LLI", "ḹ"),
        'ॅ' | 'ॆ' | 'े' => ("e", "e"),
        'ै' => ("ai", "ai"),
        'ॉ' | 'ॊ' | 'ो' => ("o", "o"),
        'ौ' => ("au", "au"),
        _ => return None,
    };
    Some(pair)
}

/// Signs, punctuation and digits that stand on their own
pub(crate) fn symbol(ch: char) -> Option<Pair> {
    let pair = match ch {
        'ं' => ("M", "ṃ"),
        'ँ' => (".N", "m̐"),
        'ः' => ("H", "ḥ"),
        'ऽ' => (".a", "'"),
        'ॐ' => ("OM", "oṃ"),
        '।' => ("|", "|"),
        '॥' => ("||", "||"),
        '०' => ("0", "0"),
        '१' => ("1", "1"),
        '२' => ("2", "2"),
        '३' => ("3", "3"),
        '४' => ("4", "4"),
        '५' => ("5", "5"),
        '६' => ("6", "6"),
        '७' => ("7", "7"),
        '८' => ("8", "8"),
        '९' => ("9", "9"),
        _ => return None,
    };
    Some(pair)
}

/// Marks that produce no output on their own
pub(crate) fn is_silent(ch: char) -> bool {
    matches!(ch, VIRAMA | NUKTA | '\u{200C}' | '\u{200D}')
}
