//! German trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    "en ", "er ", "ie ", "nd ", " di", "che", "die", "ich",
    "sch", " si", "cht", "der", " de", " un", "und", " da",
    "ach", "ten", " ge", " me", " wi", "ch ", "e s", "hen",
    "men", "ht ", "ist", "sie", " le", " sa", " sp", "ein",
    "ens", "gen", "n d", "n m", "n s", "n w", "nde", "st ",
    "te ", "ter", " is", " we", "as ", "den", "ern", "iel",
    "it ", "mit", "nsc", "r s", "spr", "ute", "wir", " am",
    " au", " be", " ei", " ma", " re", " vi", " zu", "ag ",
    "am ", "aß ", "ben", "das", "eit", "ele", "end", "es ",
    "ese", "eut", "he ", "in ", "ind", "len", "mme", "n v",
    "nen", "pra", "rac", "ren", "sag", "sen", "sse", "t u",
    "tag", "ver", "vie", " ic", " im", " in", " mi", " ve",
    " vo", "abe", "age", "an ", "and", "auf", "daß", "e d",
    "e m", "e w", "ech", "em ", "ers", "hre", "ies", "ine",
    "ir ", "le ", "lei", "lle", "man", "n i", "r g", "r m",
    "rec", "rte", "s i", "sin", "zu ", " ab", " al", " an",
    " es", " gu", " ha", " he", " je", " ka", " kl", " na",
    " sc", " wa", "all", "beg", "bt ", "chm", "d g", "d i",
    "d k", "des", "e k", "e l", "ede", "eic", "ere", "ewi",
    "gew", "gut", "hmi", "hte", "im ", "ing", "ion", "iss",
    "itt", "kom", "lic", "m g", "m n", "n a", "n b", "n e",
    "n k", "nac", "ng ", "nn ", "on ", "r h", "r i", "rde",
    "rei", "rn ", "s a", "se ", "t d", "t v", "tta", "uf ",
    "von", "wis", " br", " fü", " ga", " gi", " gl", " ih",
    " ko", " la", " mo", " ni", " se", " st", " ta", " wo",
    " wä", " wö", " wü", "abt", "ank", "ar ", "art", "atz",
    "aus", "ber", "chi", "chö", "d d", "d r", "de ", "dem",
    "e a", "e e", "e f", "e g", "ega", "eis", "el ", "elt",
    "ema", "enn", "erl", "ess", "ett", "f d", "fen", "ffe",
    "fre", "für", "g b", "gab", "gar", "ges", "gle", "h a",
    "h l", "hei", "her", "heu", "ier", "ihr", "imm", "ird",
    "ite", "jed", "lan", "ler", "leu", "lte", "m f", "m m",
    "m s", "mac", "mei", "mor", "n g", "n t", "n u", "ner",
    "nge", "nic", "nkt", "nt ", "och", "oll", "omm", "org",
    "r z", "rd ", "rge", "rli", "rsc", "s w", "sta", "ste",
    "t a", "t g", "t s", "tte", "tze", "um ", "ung", "vor",
    "wen", "wet", "wie", "wäh", "wör", "wür", "ß a", "ß s",
    "ähr", "ört", "ür ", "ürd",
];
