//! English trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    " th", "the", "he ", "at ", "in ", " in", "nd ", "hat",
    "re ", " an", " ar", " to", "ing", "is ", "n t", "ng ",
    "and", "e a", "t t", "tha", " yo", "er ", "thi", "to ",
    "you", "are", "ay ", "it ", "ou ", " of", " wo", "e t",
    "e w", "on ", "s t", " a ", " be", " is", " sa", " wa",
    "ed ", "of ", "t s", "y a", " co", " it", " ma", " pe",
    "d t", "e m", "e s", "es ", "ght", "her", "ld ", "le ",
    "n a", "y t", " la", " wh", "age", "ang", "en ", "ge ",
    "hin", "his", "nin", "nt ", "rea", "ry ", "say", "se ",
    "t i", "t o", "wor", " ca", " ev", " ri", " sh", " so",
    " wi", "an ", "any", "ce ", "e b", "e l", "e o", "ent",
    "eop", "eve", "gua", "ht ", "igh", "lan", "ll ", "man",
    "me ", "ngu", "ome", "one", "opl", "oun", "peo", "ple",
    "r t", "rig", "ter", "uag", " bo", " do", " fr", " me",
    " mo", " on", " ti", " we", "ant", "as ", "ate", "d a",
    "d c", "ds ", "e c", "e e", "e i", "e r", "ear", "eat",
    "enc", "ese", "ey ", "f t", "hey", "ime", "ith", "nce",
    "ne ", "ny ", "om ", "orn", "oth", "oul", "rni", "s a",
    "som", "st ", "t p", "t w", "th ", "tim", "u w", "uld",
    "und", "ver", "wit", " al", " by", " ch", " di", " en",
    " ha", " li", " lo", " re", " se", " st", " tr", "a l",
    "al ", "bou", "by ", "d b", "d s", "day", "e h", "e p",
    "e y", "em ", "eth", "f y", "for", "fte", "hem", "hes",
    "ien", "ill", "ion", "mor", "nte", "ong", "ort", "out",
    "ow ", "owe", "r i", "rds", "ree", "s i", "sho", "sti",
    "t a", "ted", "ten", "til", "uit", "ut ", "wan", "was",
    "wed", "wha", "wou", "y i", " ab", " af", " br", " cr",
    " da", " eq", " fi", " gr", " ho", " i ", " if", " le",
    " no", " ot", " qu", " s ", " sp", " un", " ye", "a s",
    "abo", "act", "ad ", "aft", "ain", "all", "ard", "arn",
    "aro", "ary", "bef", "bes", "bor", "can", "cat", "cie",
    "com", "con", "cou", "cre", "ct ", "cti", "d e", "d i",
    "d r", "d w", "den", "do ", "dom", "dow", "e d", "e n",
    "ead", "ean", "eas", "eet", "efo", "end", "eni", "equ",
    "ere", "ern", "ers", "ert", "ery", "est", "et ", "fre",
    "fro", "g a", "g t", "gre", "gs ", "h m", "han", "hil",
    "hor", "hou", "hts", "ice", "ide", "if ", "ini", "ink",
    "ish", "ite", "k i", "k t",
];
