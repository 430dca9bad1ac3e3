//! Spanish trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    "os ", " de", " la", "la ", " es", "es ", "en ", "de ",
    " qu", "as ", "que", " co", "est", "ue ", "a l", "el ",
    "ent", " el", " en", " y ", "ien", "na ", "s p", " pa",
    " un", "nte", " lo", " mu", "ado", "com", "do ", "e c",
    "e l", "gua", "n l", "s e", "te ", " le", "a d", "a e",
    "ard", "da ", "ere", "n e", "o e", "por", "r l", "ras",
    "sta", "tar", "una", " di", " pe", " ti", "a t", "ad ",
    "an ", "cho", "e d", "end", "eng", "las", "len", "los",
    "mpo", "muc", "nci", "ngu", "or ", "pre", "res", "rta",
    "ta ", "tad", "tie", "uch", "ía ", "ón ", " a ", " ha",
    " li", " po", " si", " so", " ta", "a c", "a p", "cie",
    "con", "dad", "der", "des", "dos", "e e", "emp", "ene",
    "ida", "iem", "l m", "lib", "mo ", "n d", "n m", "ndo",
    "no ", "o q", "o s", "omp", "on ", "ona", "rde", "re ",
    "ren", "s c", "s s", "son", "stá", "ua ", " al", " bu",
    " ca", " ci", " do", " fu", " ge", " ma", " no", " se",
    " su", " to", " vi", "a g", "a q", "abr", "ace", "al ",
    "ala", "ber", "bra", "bre", "ca ", "cad", "ce ", "cha",
    "cir", "dec", "e s", "ech", "eci", "ena", "er ", "ert",
    "gen", "hos", "ia ", "ica", "ier", "ir ", "ión", "lab",
    "les", "lo ", "mie", "mos", "mpr", "n c", "nta", "ntr",
    "ort", "pal", "per", "po ", "ra ", "rec", "s a", "s d",
    "s i", "s l", "se ", "ste", "to ", "tod", "tra", "ued",
    "uen", "y c", "y e", " ap", " ce", " cr", " cu", " có",
    " fr", " ho", " ig", " in", " ja", " ju", " me", " mi",
    " ot", " pr", " pu", " ra", " re", " ve", "a f", "a h",
    "a u", "a y", "abl", "ada", "ale", "and", "ant", "apr",
    "ar ", "ara", "arl", "azó", "aís", "bue", "cen", "cia",
    "cio", "cre", "cua", "cóm", "d y", "del", "den", "dic",
    "dor", "dot", "dín", "e a", "e i", "e p", "e q", "e r",
    "e u", "e v", "ead", "ede", "ega", "eli", "enc", "erc",
    "ers", "esp", "fra", "gni", "ha ", "hac", "ho ", "ibe",
    "ibr", "ign", "igu", "int", "ion", "ist", "jar", "l d",
    "l e", "l j", "l t", "lic", "n u", "n y", "nal", "nde",
    "nen", "nos", "nto", "o a", "o d", "o h", "o p", "oda",
    "omo", "onc", "ota", "otr", "par", "paí", "pue", "qui",
    "r c", "raz", "rca", "rdí", "rea", "rla", "ro ", "ros",
    "rso", "s h", "s n", "s u",
];
