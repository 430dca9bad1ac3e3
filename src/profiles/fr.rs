//! French trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    "es ", " de", " le", "nt ", "de ", "ns ", "ent", "le ",
    "t d", "e c", " qu", "dan", " la", "s l", "ue ", " da",
    " et", "ans", "e l", "et ", "re ", "s d", " es", "e p",
    "les", " pe", "ne ", "on ", " di", " en", " il", " l ",
    " pa", "ais", "e d", "est", "it ", "nne", "ren", "son",
    "st ", " be", " co", " un", "ang", "ant", "bea", "ce ",
    "eau", "gue", "ien", "la ", "ngu", "que", "rès", "s a",
    "s e", "t l", "ts ", "ès ", " ap", " ce", " ch", "cou",
    "end", "in ", "ire", "is ", "lan", "onn", "our", "prè",
    "res", "s p", "s u", "t q", "une", " au", " do", " li",
    " mi", " on", " so", " vi", " à ", "ait", "auc", "e e",
    "en ", "ens", "er ", "ers", "il ", "ion", "jou", "n d",
    "n e", "ons", "oup", "par", "r d", "rai", "s c", "s m",
    "te ", "tou", "té ", "uco", "up ", "us ", "à l", " a ",
    " av", " du", " fo", " fr", " ge", " je", " ma", " mo",
    " no", " pr", " to", "ain", "apr", "ard", "are", "as ",
    "au ", "cha", "cie", "com", "di ", "dir", "du ", "e j",
    "e m", "e q", "e s", "e v", "enc", "gen", "idi", "ils",
    "ir ", "ise", "l a", "lle", "ls ", "mid", "nd ", "nen",
    "nts", "ont", "ous", "p d", "pen", "per", "pre", "qu ",
    "rs ", "rso", "s s", "sen", "t a", "t c", "tre", "ui ",
    "vie", "é d", "ée ", " d ", " dr", " el", " fa", " hu",
    " j ", " ja", " jo", " ra", " tr", " ét", "a d", "a l",
    "a m", "and", "app", "aut", "bre", "con", "d e", "des",
    "din", "dro", "e a", "e f", "e g", "e n", "e r", "e t",
    "ell", "enn", "eur", "eut", "for", "fra", "ger", "i e",
    "i l", "ill", "iso", "ité", "ive", "jar", "je ", "l e",
    "l h", "l o", "lib", "mai", "mme", "mot", "n a", "n p",
    "nce", "nda", "ndr", "nes", "nit", "nou", "nsc", "oir",
    "oit", "omm", "omp", "org", "ots", "pas", "ppr", "qua",
    "qui", "r l", "rd ", "rdi", "rge", "roi", "s f", "s j",
    "s q", "s t", "sci", "se ", "t e", "t p", "t à", "t é",
    "tai", "u f", "u p", "uan", "ujo", "ur ", "ure", "urs",
    "ut ", "utr", "ux ", "ver", "és ", "éta", " ac", " ag",
    " ai", " al", " ar", " as", " c ", " ca", " ci", " cl",
    " dî", " fe", " ga", " he", " hi", " im", " lo", " me",
    " n ", " na", " ne", " ph", " pl", " re", " ré", " sa",
    " si", " su", " ta", " te",
];
