//! Italian trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    "no ", " di", "re ", "ne ", "to ", "di ", "la ", " in",
    "gio", "le ", " co", " e ", "e c", "e d", "e p", "in ",
    "na ", "one", " al", " ch", " li", "che", "e i", "he ",
    "ion", " mo", " pe", " qu", " è ", "o a", "ono", "par",
    "per", "ti ", " il", " pa", " se", " un", "ano", "ers",
    "il ", "io ", "mol", "ni ", "olt", "se ", "son", "ta ",
    " gi", " la", " le", " ne", "a c", "a d", "a l", "a s",
    "dir", "e l", "el ", "eri", "ggi", "gua", "i c", "ing",
    "ire", "lin", "nel", "ngu", "o c", "o d", "ome", "que",
    "ri ", "rso", "una", " ca", " ce", " ci", " da", " si",
    "a a", "al ", "all", "and", "com", "con", "cos", "do ",
    "e s", "e v", "est", "gni", "i g", "i i", "i p", "i s",
    "ino", "l m", "li ", "lla", "mer", "ndo", "o e", "o l",
    "sta", "tre", "tti", "ua ", "ues", " gl", " ha", " im",
    " me", " og", " pi", " po", " pr", " so", " st", " ve",
    "a e", "a i", "a p", "agi", "ane", "ara", "ard", "are",
    "arl", "aro", "ati", "can", "cie", "e f", "ell", "emp",
    "erc", "ere", "gli", "i d", "iar", "ica", "igg", "imp",
    "iri", "itt", "ive", "l p", "l t", "lib", "lo ", "mpo",
    "nza", "o i", "o m", "o p", "o è", "ole", "on ", "ona",
    "pom", "ra ", "ran", "rat", "rca", "rdi", "ren", "rig",
    "rit", "rol", "ser", "si ", "so ", "sto", "te ", "tto",
    "tà ", "ver", "za ", "zio", " an", " de", " do", " er",
    " es", " fr", " fu", " i ", " ma", " mi", " no", " pu",
    " ra", " re", " sa", " su", " te", " vi", " vu", "a r",
    "a u", "ali", "alt", "amb", "amo", "ant", "ari", "ata",
    "ato", "att", "ber", "bia", "ca ", "car", "cat", "cen",
    "cer", "da ", "dal", "din", "div", "e e", "ena", "eno",
    "ent", "enz", "era", "ero", "ess", "ett", "evo", "fra",
    "gia", "ha ", "i a", "i e", "i n", "i r", "i u", "i v",
    "iam", "ibe", "ien", "ign", "ito", "l c", "llo", "lte",
    "lti", "lto", "ltr", "mbi", "me ", "men", "mo ", "mpa",
    "mpr", "n g", "n q", "n s", "n u", "nda", "nit", "non",
    "ntr", "o g", "o h", "o q", "o s", "ogn", "oi ", "ola",
    "omp", "ond", "ora", "ori", "orm", "osc", "pir", "po ",
    "pra", "pre", "qua", "rag", "rio", "rla", "ro ", "sci",
    "tem", "tor", "uan", "uni", "uoi", "uon", "ven", "vuo",
    "è s", " ab", " ac", " ag",
];
