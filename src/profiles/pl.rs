//! Polish trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    "dzi", " po", "wie", "ie ", "zie", " je", "na ", " i ",
    " pr", " na", " w ", " wi", "em ", "est", "ied", "jes",
    "st ", " lu", " si", "czy", "e p", "edz", "ię ", "nie",
    " cz", "dy ", "lud", "mie", "ni ", "owi", "pow", "prz",
    "się", " dz", " ję", "ch ", "eć ", "iel", "ieć", "jęz",
    "odz", "rzy", "udz", "zy ", "zyk", "ęzy", " mi", " ni",
    " sp", " sł", " wo", "acj", "ani", "cję", "eni", "i p",
    "i s", "iu ", "ją ", "ję ", "kie", "ku ", "niu", "pra",
    "rod", "rze", "ych", "ym ", "ów ", " ch", " co", " ja",
    " ko", " kt", " ma", " mo", " og", " ro", " ty", "a c",
    "ają", "as ", "ci ", "co ", "cza", "dni", "e s", "e z",
    "ele", "esz", "god", "i m", "i w", "ia ", "iał", "iec",
    "ien", "inn", "jak", "je ", "któ", "le ", "mi ", "o d",
    "o p", "od ", "ołu", "po ", "pod", "poł", "raw", "tym",
    "tór", "udn", "umi", "wo ", "y p", "z w", "zas", "zi ",
    "zia", "zą ", "ą s", "ć w", "ę w", "łow", "łud", "ści",
    "że ", " ba", " br", " do", " gd", " in", " ki", " kr",
    " od", " ra", " ró", " su", " sw", " uc", " uż", " z ",
    " za", " ła", " że", "a i", "a p", "a s", "a t", "ak ",
    "ana", "ać ", "ał ", "ała", "bra", "ce ", "chc", "cie",
    "cią", "da ", "dcz", "dzą", "e m", "e n", "e w", "eci",
    "ecz", "edy", "ego", "ej ", "gdy", "go ", "gro", "hce",
    "i i", "i j", "i r", "iem", "ies", "ieś", "ili", "ist",
    "iąż", "ić ", "iśm", "ki ", "kol", "lac", "li ", "liś",
    "m i", "m m", "m s", "ma ", "moż", "my ", "nia", "nny",
    "noś", "nyc", "o j", "o s", "oda", "odc", "ogo", "ogr",
    "ola", "oln", "owa", "ozu", "ośc", "oże", "poc", "pog",
    "pos", "roz", "s g", "spr", "sum", "sz ", "sło", "słó",
    "t d", "u j", "ucz", "uży", "w o", "w t", "wan", "wni",
    "wol", "wsz", "y c", "y j", "yk ", "yku", "ywa", "zmi",
    "zna", "zum", "zyj", "zys", "óre", "ą r", "ę c", "łem",
    "łów", "śli", "śmy", "żyw", " a ", " ab", " by", " du",
    " dł", " go", " hi", " ka", " ks", " ku", " my", " mó",
    " mł", " o ", " ob", " on", " pi", " pó", " rz", " se",
    " sk", " st", " są", " ta", " te", " to", " wa", " wc",
    " ws", " wy", " wz", " zd", " zm", " zn", " zr", " św",
    "a j", "a k", "a n", "a r", "a ś", "aby", "acz", "ad ",
    "adk", "adn", "aj ", "aju",
];
